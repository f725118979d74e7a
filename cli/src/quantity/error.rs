use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityError {
    #[error("Invalid scale factor: {0} (must be a positive, finite number)")]
    InvalidScaleFactor(f64),
    #[error("Invalid servings: desired {desired}, original {original} (both must be positive)")]
    InvalidServings { desired: f64, original: f64 },
    #[error("Unknown measurement system: {0}")]
    UnknownSystem(String),
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
    #[error("Conversion error: cannot convert {from} to {to}")]
    IncompatibleUnits { from: String, to: String },
}
