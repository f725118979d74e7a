use crate::quantity::converter::convert_ingredient;
use crate::quantity::parser::parse;
use crate::quantity::scaler::scale;
use crate::quantity::types::MeasurementSystem;
use tracing::debug;

/// Scale an ingredient line, then express it in `target` if possible.
///
/// Scaling runs on the original text and unit; conversion runs on the
/// re-parsed scaled text. Anything that cannot be converted comes back
/// scaled but otherwise untouched.
pub fn scale_and_convert(ingredient: &str, factor: f64, target: MeasurementSystem) -> String {
    let scaled = scale(ingredient, factor);
    let parsed = parse(&scaled);

    match convert_ingredient(&parsed, target) {
        Some(converted) => converted.to_string(),
        None => {
            debug!(ingredient = %scaled, system = %target, "left unconverted");
            scaled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cup_of_milk_to_metric() {
        assert_eq!(
            scale_and_convert("1 cup milk", 1.0, MeasurementSystem::Metric),
            "236.59 ml milk"
        );
    }

    #[test]
    fn test_sugar_scaled_then_converted() {
        assert_eq!(
            scale_and_convert("200 g sugar", 2.0, MeasurementSystem::Imperial),
            "14.11 oz sugar"
        );
    }

    #[test]
    fn test_bare_decimal_point_is_not_left_in_item() {
        assert_eq!(
            scale_and_convert("2. cups flour", 2.0, MeasurementSystem::Metric),
            "946.35 ml flour"
        );
    }

    #[test]
    fn test_pluralized_letter_is_not_a_unit() {
        assert_eq!(
            scale_and_convert("2 Cs flour", 1.0, MeasurementSystem::Metric),
            "2 Cs flour"
        );
    }

    #[test]
    fn test_non_numeric_passes_through() {
        assert_eq!(
            scale_and_convert("salt to taste", 2.0, MeasurementSystem::Imperial),
            "salt to taste"
        );
        assert_eq!(
            scale_and_convert("salt", 3.0, MeasurementSystem::Metric),
            "salt"
        );
    }

    #[test]
    fn test_unknown_unit_is_scaled_only() {
        assert_eq!(
            scale_and_convert("2 cloves garlic", 2.0, MeasurementSystem::Metric),
            "4 cloves garlic"
        );
    }

    #[test]
    fn test_same_system_is_scaled_only() {
        assert_eq!(
            scale_and_convert("2 cups flour", 1.5, MeasurementSystem::Imperial),
            "3 cups flour"
        );
        assert_eq!(
            scale_and_convert("250 g butter", 0.5, MeasurementSystem::Metric),
            "125 g butter"
        );
    }

    #[test]
    fn test_scaled_fraction_is_reparsed_before_converting() {
        // 1 cup * 0.5 renders as "½ cup", which must convert as 0.5 cup
        assert_eq!(
            scale_and_convert("1 cup cream", 0.5, MeasurementSystem::Metric),
            "118.29 ml cream"
        );
    }

    #[test]
    fn test_metric_volume_to_cups() {
        assert_eq!(
            scale_and_convert("500 ml stock", 1.0, MeasurementSystem::Imperial),
            "2.11 cup stock"
        );
    }
}
