//! # Workflows Module
//!
//! End-to-end procedures built from the engine stages.
//!
//! - **Detection Workflow** ([`detect`]) - Cysteine selection, quality filtering,
//!   pairwise classification and per-tier deduplication for one structure.

pub mod detect;
