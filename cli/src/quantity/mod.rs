// Ingredient quantity engine: parse, format, scale and convert ingredient lines.
// Everything here is a pure function over its inputs; tables are immutable statics.

pub mod converter;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod pipeline;
pub mod scaler;
pub mod types;
pub mod units;


pub use converter::{convert, convert_ingredient, convert_to_unit};
pub use detector::{looks_like_measurement, looks_like_quantity};
pub use error::QuantityError;
pub use formatter::format_quantity;
pub use parser::{parse, parse_quantity};
pub use pipeline::scale_and_convert;
pub use scaler::scale;
pub use types::{MeasurementSystem, ParsedIngredient, ScaleFactor};
pub use units::{classify_unit, unit_family, ConversionEntry, UnitFamily};
