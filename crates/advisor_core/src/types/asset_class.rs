//! Asset-class enumeration.
//!
//! A closed set of asset classes with stable snake_case string codes.
//! The codes are the wire contract: allocation maps keyed by [`AssetClass`]
//! serialise with these codes as keys.

use std::fmt;
use std::str::FromStr;

use super::error::AssetClassError;

/// Closed asset-class enumeration.
///
/// Designed for static dispatch (enum-based) so that allocation maps are
/// typed: an unknown asset-class key is unrepresentable rather than a
/// runtime string-matching hazard.
///
/// Derives `Ord` so the class can key a `BTreeMap` with deterministic
/// iteration and serialisation order.
///
/// # Examples
///
/// ```
/// use advisor_core::types::AssetClass;
///
/// assert_eq!(AssetClass::FixedIncome.code(), "fixed_income");
///
/// // Parse from string (case-insensitive)
/// let crypto: AssetClass = "Crypto".parse().unwrap();
/// assert_eq!(crypto, AssetClass::Crypto);
///
/// // Iterate the full set
/// assert_eq!(AssetClass::ALL.len(), 4);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    /// Listed equities and equity funds.
    Equity,

    /// Bonds and bond funds.
    FixedIncome,

    /// Crypto assets.
    Crypto,

    /// Cash and cash equivalents.
    Cash,
}

impl AssetClass {
    /// All asset classes, in canonical order.
    ///
    /// Allocation breakdowns iterate this constant so every class key is
    /// present even when the portfolio holds nothing in it.
    pub const ALL: [AssetClass; 4] = [
        AssetClass::Equity,
        AssetClass::FixedIncome,
        AssetClass::Crypto,
        AssetClass::Cash,
    ];

    /// Returns the stable snake_case code.
    ///
    /// # Examples
    ///
    /// ```
    /// use advisor_core::types::AssetClass;
    ///
    /// assert_eq!(AssetClass::Equity.code(), "equity");
    /// assert_eq!(AssetClass::FixedIncome.code(), "fixed_income");
    /// assert_eq!(AssetClass::Crypto.code(), "crypto");
    /// assert_eq!(AssetClass::Cash.code(), "cash");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            AssetClass::Equity => "equity",
            AssetClass::FixedIncome => "fixed_income",
            AssetClass::Crypto => "crypto",
            AssetClass::Cash => "cash",
        }
    }

    /// Returns a human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AssetClass::Equity => "Equities",
            AssetClass::FixedIncome => "Fixed Income",
            AssetClass::Crypto => "Crypto",
            AssetClass::Cash => "Cash",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AssetClass {
    type Err = AssetClassError;

    /// Parses an asset-class code (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AssetClassError::Unknown`] for codes outside the closed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "equity" => Ok(AssetClass::Equity),
            "fixed_income" => Ok(AssetClass::FixedIncome),
            "crypto" => Ok(AssetClass::Crypto),
            "cash" => Ok(AssetClass::Cash),
            _ => Err(AssetClassError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for class in AssetClass::ALL {
            let parsed: AssetClass = class.code().parse().unwrap();
            assert_eq!(parsed, class);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        let parsed: AssetClass = "FIXED_INCOME".parse().unwrap();
        assert_eq!(parsed, AssetClass::FixedIncome);
    }

    #[test]
    fn test_parse_unknown() {
        let result: Result<AssetClass, _> = "commodities".parse();
        assert!(matches!(result, Err(AssetClassError::Unknown(_))));
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&AssetClass::FixedIncome).unwrap();
        assert_eq!(json, "\"fixed_income\"");

        let back: AssetClass = serde_json::from_str("\"cash\"").unwrap();
        assert_eq!(back, AssetClass::Cash);
    }

    #[test]
    fn test_ordering_is_canonical() {
        let mut shuffled = [AssetClass::Cash, AssetClass::Equity, AssetClass::Crypto];
        shuffled.sort();
        assert_eq!(
            shuffled,
            [AssetClass::Equity, AssetClass::Crypto, AssetClass::Cash]
        );
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(format!("{}", AssetClass::Crypto), "crypto");
    }
}
