use crate::quantity::error::QuantityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of splitting an ingredient line into quantity, unit and item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Leading numeric amount, `None` when the line has no leading number
    pub quantity: Option<f64>,
    /// Lower-cased unit token (e.g., "cups", "g", "fl oz"), empty if absent
    pub unit: String,
    /// Everything after the unit, trimmed
    pub item: String,
}

impl ParsedIngredient {
    /// A line with no recognizable quantity; the whole text is the item
    pub fn unquantified(text: &str) -> Self {
        Self {
            quantity: None,
            unit: String::new(),
            item: text.trim().to_string(),
        }
    }

    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }
}

impl fmt::Display for ParsedIngredient {
    /// Reassembles as "{quantity} {unit} {item}", skipping empty parts
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quantity = match self.quantity {
            Some(q) => crate::quantity::formatter::format_quantity(q),
            None => return write!(f, "{}", self.item),
        };

        write!(f, "{}", quantity)?;
        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }
        if !self.item.is_empty() {
            write!(f, " {}", self.item)?;
        }
        Ok(())
    }
}

/// Measurement system a converted quantity is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    #[serde(alias = "si")]
    Metric,
    #[serde(alias = "us", alias = "customary")]
    Imperial,
}

impl MeasurementSystem {
    pub fn other(self) -> Self {
        match self {
            MeasurementSystem::Metric => MeasurementSystem::Imperial,
            MeasurementSystem::Imperial => MeasurementSystem::Metric,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementSystem {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Ok(MeasurementSystem::Metric),
            "imperial" | "us" | "customary" => Ok(MeasurementSystem::Imperial),
            other => Err(QuantityError::UnknownSystem(other.to_string())),
        }
    }
}

/// Multiplier applied to every ingredient quantity.
///
/// Always positive and finite. Build one with [`ScaleFactor::new`] or
/// [`ScaleFactor::from_servings`] before calling the scaler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub fn new(factor: f64) -> Result<Self, QuantityError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(QuantityError::InvalidScaleFactor(factor));
        }
        Ok(Self(factor))
    }

    /// Ratio of desired to original servings
    pub fn from_servings(desired: f64, original: f64) -> Result<Self, QuantityError> {
        if !desired.is_finite() || !original.is_finite() || desired <= 0.0 || original <= 0.0 {
            return Err(QuantityError::InvalidServings { desired, original });
        }
        Self::new(desired / original)
    }

    pub fn identity() -> Self {
        Self(1.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_skips_empty_parts() {
        let parsed = ParsedIngredient {
            quantity: Some(3.0),
            unit: String::new(),
            item: "eggs".to_string(),
        };
        assert_eq!(parsed.to_string(), "3 eggs");

        let parsed = ParsedIngredient {
            quantity: Some(0.5),
            unit: "cup".to_string(),
            item: String::new(),
        };
        assert_eq!(parsed.to_string(), "½ cup");

        assert_eq!(ParsedIngredient::unquantified("  salt  ").to_string(), "salt");
    }

    #[test]
    fn test_measurement_system_from_str() {
        assert_eq!(
            "Metric".parse::<MeasurementSystem>().unwrap(),
            MeasurementSystem::Metric
        );
        assert_eq!(
            "us".parse::<MeasurementSystem>().unwrap(),
            MeasurementSystem::Imperial
        );
        assert!("nautical".parse::<MeasurementSystem>().is_err());
        assert_eq!(MeasurementSystem::Metric.other(), MeasurementSystem::Imperial);
    }

    #[test]
    fn test_scale_factor_rejects_non_positive() {
        assert!(ScaleFactor::new(0.0).is_err());
        assert!(ScaleFactor::new(-2.0).is_err());
        assert!(ScaleFactor::new(f64::NAN).is_err());
        assert!(ScaleFactor::new(f64::INFINITY).is_err());
        assert_eq!(ScaleFactor::new(1.5).unwrap().value(), 1.5);
    }

    #[test]
    fn test_scale_factor_from_servings() {
        assert_eq!(ScaleFactor::from_servings(6.0, 4.0).unwrap().value(), 1.5);
        assert!(matches!(
            ScaleFactor::from_servings(0.0, 4.0),
            Err(QuantityError::InvalidServings { .. })
        ));
        assert!(ScaleFactor::from_servings(4.0, 0.0).is_err());
    }
}
