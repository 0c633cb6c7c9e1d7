//! # Engine Module
//!
//! The detection logic: thresholds, bond types and the pipeline stages that
//! turn a structure into tiered sets of disulfide candidates.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Distance and angle bands, confidence-interval
//!   half-widths, quality cutoffs and the pair enumeration strategy
//! - **Bonds** ([`bond`]) - Candidates, tiers and duplicate-free bond sets
//! - **Geometry** ([`geometry`]) - C_β/S_γ lookup and pair measurement
//! - **Stages** ([`tasks`]) - Selection, quality filtering, classification, deduplication
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Structural and configuration failures
//!
//! Stages are pure functions over an immutable [`crate::core::models::system::MolecularSystem`];
//! the only shared state is the read-only [`config::DetectionConfig`].

pub mod bond;
pub mod config;
pub mod error;
pub mod geometry;
pub mod progress;
pub mod tasks;
