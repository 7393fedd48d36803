//! Market model assumption tables.
//!
//! The engine never derives its model parameters from live data: the
//! per-class expected returns, volatilities and rate sensitivities are
//! externally supplied configuration, validated at load. Defaults ship
//! for convenience and testing.

use std::collections::BTreeMap;

use advisor_core::types::AssetClass;

use crate::error::AssumptionsError;

/// Annualised return and volatility assumption for one asset class,
/// both expressed as decimals (0.10 = 10% a year).
#[derive(Copy, Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ClassAssumption {
    /// Expected annual return.
    pub expected_return: f64,
    /// Annualised volatility.
    pub volatility: f64,
}

impl ClassAssumption {
    /// Creates an assumption pair.
    pub fn new(expected_return: f64, volatility: f64) -> Self {
        Self {
            expected_return,
            volatility,
        }
    }
}

/// Per-class return and volatility table covering every asset class.
///
/// # Examples
///
/// ```
/// use advisor_core::types::AssetClass;
/// use advisor_simulation::MarketAssumptions;
///
/// let assumptions = MarketAssumptions::default();
/// assert_eq!(assumptions.get(AssetClass::Crypto).volatility, 0.60);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(
    try_from = "BTreeMap<AssetClass, ClassAssumption>",
    into = "BTreeMap<AssetClass, ClassAssumption>"
)]
pub struct MarketAssumptions {
    table: BTreeMap<AssetClass, ClassAssumption>,
}

impl MarketAssumptions {
    /// Builds a table, validating coverage and sign.
    ///
    /// # Errors
    ///
    /// - [`AssumptionsError::MissingClass`] when a class has no entry
    /// - [`AssumptionsError::NegativeVolatility`] for a negative
    ///   volatility
    pub fn new(
        table: BTreeMap<AssetClass, ClassAssumption>,
    ) -> Result<Self, AssumptionsError> {
        for class in AssetClass::ALL {
            match table.get(&class) {
                None => return Err(AssumptionsError::MissingClass { class }),
                Some(assumption) if assumption.volatility < 0.0 => {
                    return Err(AssumptionsError::NegativeVolatility {
                        class,
                        value: assumption.volatility,
                    })
                }
                Some(_) => {}
            }
        }
        Ok(Self { table })
    }

    /// Returns the assumption for a class.
    ///
    /// Coverage is guaranteed by construction, so this is total.
    #[inline]
    pub fn get(&self, class: AssetClass) -> ClassAssumption {
        self.table[&class]
    }
}

impl Default for MarketAssumptions {
    /// The default table: equities 10%/16%, fixed income 4%/5%,
    /// crypto 15%/60%, cash 2%/1% (annualised return / volatility).
    fn default() -> Self {
        Self {
            table: [
                (AssetClass::Equity, ClassAssumption::new(0.10, 0.16)),
                (AssetClass::FixedIncome, ClassAssumption::new(0.04, 0.05)),
                (AssetClass::Crypto, ClassAssumption::new(0.15, 0.60)),
                (AssetClass::Cash, ClassAssumption::new(0.02, 0.01)),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl TryFrom<BTreeMap<AssetClass, ClassAssumption>> for MarketAssumptions {
    type Error = AssumptionsError;

    fn try_from(table: BTreeMap<AssetClass, ClassAssumption>) -> Result<Self, Self::Error> {
        Self::new(table)
    }
}

impl From<MarketAssumptions> for BTreeMap<AssetClass, ClassAssumption> {
    fn from(assumptions: MarketAssumptions) -> Self {
        assumptions.table
    }
}

/// Per-class rate-sensitivity coefficients.
///
/// A scenario's portfolio impact is `rate_change × coefficient × weight`
/// summed over classes. Negative coefficients mean higher rates hurt the
/// class; cash carries a positive coefficient because higher rates help
/// it.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "BTreeMap<AssetClass, f64>", into = "BTreeMap<AssetClass, f64>")]
pub struct RateSensitivity {
    table: BTreeMap<AssetClass, f64>,
}

impl RateSensitivity {
    /// Builds a sensitivity table, validating coverage.
    ///
    /// # Errors
    ///
    /// Returns [`AssumptionsError::MissingClass`] when a class has no
    /// coefficient.
    pub fn new(table: BTreeMap<AssetClass, f64>) -> Result<Self, AssumptionsError> {
        for class in AssetClass::ALL {
            if !table.contains_key(&class) {
                return Err(AssumptionsError::MissingClass { class });
            }
        }
        Ok(Self { table })
    }

    /// Returns the coefficient for a class.
    #[inline]
    pub fn get(&self, class: AssetClass) -> f64 {
        self.table[&class]
    }
}

impl Default for RateSensitivity {
    /// The default coefficients: equities −0.5, fixed income −2.0,
    /// crypto −1.0, cash +1.0.
    fn default() -> Self {
        Self {
            table: [
                (AssetClass::Equity, -0.5),
                (AssetClass::FixedIncome, -2.0),
                (AssetClass::Crypto, -1.0),
                (AssetClass::Cash, 1.0),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl TryFrom<BTreeMap<AssetClass, f64>> for RateSensitivity {
    type Error = AssumptionsError;

    fn try_from(table: BTreeMap<AssetClass, f64>) -> Result<Self, Self::Error> {
        Self::new(table)
    }
}

impl From<RateSensitivity> for BTreeMap<AssetClass, f64> {
    fn from(sensitivity: RateSensitivity) -> Self {
        sensitivity.table
    }
}
