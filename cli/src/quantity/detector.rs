use crate::quantity::parser::{parse, parse_quantity};
use crate::quantity::units::classify_unit;

/// Check if a string starts with something the parser reads as a quantity
pub fn looks_like_quantity(s: &str) -> bool {
    parse_quantity(s).is_some()
}

/// Check if a string starts with a quantity followed by a convertible unit
pub fn looks_like_measurement(s: &str) -> bool {
    let parsed = parse(s);
    parsed.has_quantity() && classify_unit(&parsed.unit).is_some()
}
