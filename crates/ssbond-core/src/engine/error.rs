use super::config::ConfigError;
use crate::core::models::residue::ResidueKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Residue CYS {residue} is structurally incomplete: {reason}")]
    StructureIntegrity { residue: ResidueKey, reason: String },

    #[error("Residue {residue} has no atoms; its mean quality is undefined")]
    EmptyResidue { residue: ResidueKey },

    #[error("Invalid detection configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal logic error: {0}")]
    Internal(String),
}
