use crate::config::Config;
use crate::quantity::error::QuantityError;
use crate::quantity::pipeline::scale_and_convert;
use crate::quantity::scaler::scale;
use crate::quantity::types::{MeasurementSystem, ScaleFactor};
use tracing::debug;

/// Applies one scale factor (and optionally one target system) to ingredient lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientProcessor {
    factor: ScaleFactor,
    system: Option<MeasurementSystem>,
}

impl IngredientProcessor {
    /// Create a processor; `system: None` scales without converting
    pub fn new(factor: ScaleFactor, system: Option<MeasurementSystem>) -> Self {
        Self { factor, system }
    }

    /// Scale from `original` to `desired` servings
    pub fn for_servings(
        desired: f64,
        original: f64,
        system: Option<MeasurementSystem>,
    ) -> Result<Self, QuantityError> {
        Ok(Self::new(ScaleFactor::from_servings(desired, original)?, system))
    }

    pub fn from_config(config: &Config) -> Result<Self, QuantityError> {
        Ok(Self::new(config.scale_factor()?, config.measurement_system))
    }

    pub fn factor(&self) -> ScaleFactor {
        self.factor
    }

    pub fn system(&self) -> Option<MeasurementSystem> {
        self.system
    }

    /// Process a single ingredient line
    pub fn process(&self, line: &str) -> String {
        match self.system {
            Some(system) => scale_and_convert(line, self.factor.value(), system),
            None => scale(line, self.factor.value()),
        }
    }

    /// Process every line, keeping order and count
    pub fn render<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        debug!(
            lines = lines.len(),
            factor = self.factor.value(),
            system = ?self.system,
            "rendering ingredients"
        );
        lines.iter().map(|line| self.process(line.as_ref())).collect()
    }
}

impl Default for IngredientProcessor {
    fn default() -> Self {
        Self::new(ScaleFactor::identity(), None)
    }
}
