//! Geographic-region enumeration.

use std::fmt;
use std::str::FromStr;

use super::error::RegionError;

/// Closed geographic-region enumeration.
///
/// Every allocation breakdown by region reports all four keys, so the set
/// is deliberately small and closed. Derives `Ord` for deterministic
/// `BTreeMap` keying.
///
/// # Examples
///
/// ```
/// use advisor_core::types::Region;
///
/// assert_eq!(Region::DevelopedExUs.code(), "developed_ex_us");
/// let us: Region = "us".parse().unwrap();
/// assert_eq!(us, Region::Us);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// United States.
    Us,

    /// Developed markets outside the United States.
    DevelopedExUs,

    /// Emerging markets.
    Emerging,

    /// Globally diversified (no single home region).
    Global,
}

impl Region {
    /// All regions, in canonical order.
    pub const ALL: [Region; 4] = [
        Region::Us,
        Region::DevelopedExUs,
        Region::Emerging,
        Region::Global,
    ];

    /// Returns the stable snake_case code.
    pub fn code(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::DevelopedExUs => "developed_ex_us",
            Region::Emerging => "emerging",
            Region::Global => "global",
        }
    }

    /// Returns a human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Us => "United States",
            Region::DevelopedExUs => "Developed ex-US",
            Region::Emerging => "Emerging Markets",
            Region::Global => "Global",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = RegionError;

    /// Parses a region code (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Unknown`] for codes outside the closed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Region::Us),
            "developed_ex_us" => Ok(Region::DevelopedExUs),
            "emerging" => Ok(Region::Emerging),
            "global" => Ok(Region::Global),
            _ => Err(RegionError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for region in Region::ALL {
            let parsed: Region = region.code().parse().unwrap();
            assert_eq!(parsed, region);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let result: Result<Region, _> = "frontier".parse();
        assert!(matches!(result, Err(RegionError::Unknown(_))));
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&Region::DevelopedExUs).unwrap();
        assert_eq!(json, "\"developed_ex_us\"");
    }
}
