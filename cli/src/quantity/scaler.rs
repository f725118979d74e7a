use crate::quantity::parser::parse;
use crate::quantity::types::ParsedIngredient;
use tracing::debug;

/// Multiply an ingredient line's quantity and re-render it.
///
/// `factor` must be positive; validate it with
/// [`ScaleFactor`](crate::quantity::types::ScaleFactor) before calling.
/// Lines without a leading quantity, and a factor of exactly 1, return the
/// input unchanged.
pub fn scale(ingredient: &str, factor: f64) -> String {
    debug_assert!(factor > 0.0, "scale factor must be positive, got {}", factor);

    if factor == 1.0 {
        return ingredient.to_string();
    }

    let parsed = parse(ingredient);
    match parsed.quantity {
        Some(quantity) => ParsedIngredient {
            quantity: Some(quantity * factor),
            ..parsed
        }
        .to_string(),
        None => {
            debug!(ingredient, "no quantity to scale");
            ingredient.to_string()
        }
    }
}
