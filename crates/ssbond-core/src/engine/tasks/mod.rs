//! Stages of the disulfide detection pipeline.
//!
//! Each submodule is one step of the data flow, in order: pick out the
//! cysteines ([`selection`]), drop the poorly resolved ones ([`quality`]),
//! measure and tier every pair ([`classification`]) and collapse repeated
//! pairs ([`deduplication`]).

pub mod classification;
pub mod deduplication;
pub mod quality;
pub mod selection;
