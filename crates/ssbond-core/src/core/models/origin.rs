use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker searched for in header text when no other markers are configured.
pub const DEFAULT_PREDICTION_MARKERS: &[&str] = &["alphafold"];

/// Whether a structure was determined experimentally or predicted by a model.
///
/// The origin decides how the per-atom quality column is read: a B-factor
/// (lower is better) or a predicted confidence such as pLDDT (higher is
/// better).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureOrigin {
    Experimental,
    Predicted,
}

impl StructureOrigin {
    /// Classifies a structure from its descriptive header text.
    ///
    /// The structure is considered predicted if any of `markers` occurs in
    /// `text`, compared case-insensitively. Empty markers are ignored.
    pub fn from_header_text<S: AsRef<str>>(text: &str, markers: &[S]) -> Self {
        let haystack = text.to_lowercase();
        let predicted = markers.iter().any(|marker| {
            let marker = marker.as_ref().trim().to_lowercase();
            !marker.is_empty() && haystack.contains(&marker)
        });
        if predicted {
            StructureOrigin::Predicted
        } else {
            StructureOrigin::Experimental
        }
    }

}

impl fmt::Display for StructureOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureOrigin::Experimental => write!(f, "experimental"),
            StructureOrigin::Predicted => write!(f, "predicted"),
        }
    }
}
