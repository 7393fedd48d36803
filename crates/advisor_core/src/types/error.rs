//! Parse errors for the closed type enumerations.

use thiserror::Error;

/// Asset-class parse errors.
///
/// # Examples
///
/// ```
/// use advisor_core::types::AssetClassError;
///
/// let err = AssetClassError::Unknown("commodities".to_string());
/// assert_eq!(format!("{}", err), "unknown asset class: commodities");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetClassError {
    /// Code outside the closed asset-class set.
    #[error("unknown asset class: {0}")]
    Unknown(String),
}

/// Region parse errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Code outside the closed region set.
    #[error("unknown region: {0}")]
    Unknown(String),
}
