use ssbond::core::models::origin::StructureOrigin;
use ssbond::engine::config::{Band, PairScan};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid band '{0}'. Expected two numbers enclosed in parentheses, e.g. '(1.5,2.5)'.")]
    InvalidBandFormat(String),

    #[error("Invalid {component} bound '{value}' in band '{band}'.")]
    InvalidBound {
        component: &'static str,
        value: String,
        band: String,
    },

    #[error("Invalid boolean '{0}'. Expected 'true' or 'false'.")]
    InvalidBool(String),

    #[error("Unknown pair scan '{0}'. Expected 'canonical' or 'full-matrix'.")]
    UnknownPairScan(String),

    #[error("Unknown origin '{0}'. Expected 'auto', 'experimental' or 'predicted'.")]
    UnknownOrigin(String),
}

/// Parses a `(lo,hi)` band. Square brackets or no brackets are accepted too.
///
/// Only the format is checked here; inverted bounds are reported when the
/// detection configuration is validated.
pub fn parse_band(s: &str) -> Result<Band, ParseError> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .or_else(|| {
            trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
        })
        .unwrap_or(trimmed);

    let mut parts = inner.split(',');
    let (Some(lo), Some(hi), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::InvalidBandFormat(s.to_string()));
    };

    let bound = |component: &'static str, value: &str| -> Result<f64, ParseError> {
        value.trim().parse().map_err(|_| ParseError::InvalidBound {
            component,
            value: value.trim().to_string(),
            band: s.to_string(),
        })
    };

    Ok(Band::new(bound("lower", lo)?, bound("upper", hi)?))
}

pub fn parse_bool(s: &str) -> Result<bool, ParseError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidBool(s.to_string())),
    }
}

pub fn parse_pair_scan(s: &str) -> Result<PairScan, ParseError> {
    match s.trim() {
        "canonical" => Ok(PairScan::Canonical),
        "full-matrix" => Ok(PairScan::FullMatrix),
        _ => Err(ParseError::UnknownPairScan(s.to_string())),
    }
}

/// Parses an origin setting; `auto` maps to `None`.
pub fn parse_origin(s: &str) -> Result<Option<StructureOrigin>, ParseError> {
    match s.trim() {
        "auto" => Ok(None),
        "experimental" => Ok(Some(StructureOrigin::Experimental)),
        "predicted" => Ok(Some(StructureOrigin::Predicted)),
        _ => Err(ParseError::UnknownOrigin(s.to_string())),
    }
}
