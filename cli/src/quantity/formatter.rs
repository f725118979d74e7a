/// Culinary fractions preferred over decimals, checked in this order
const COMMON_FRACTIONS: &[(f64, &str)] = &[
    (1.0 / 8.0, "⅛"),
    (1.0 / 4.0, "¼"),
    (1.0 / 3.0, "⅓"),
    (1.0 / 2.0, "½"),
    (2.0 / 3.0, "⅔"),
    (3.0 / 4.0, "¾"),
];

/// Distance within which a value snaps to a fraction glyph
const FRACTION_TOLERANCE: f64 = 0.05;

/// Above this magnitude an f64 has no hundredths left to round
const ROUNDING_LIMIT: f64 = 1e15;

fn round_to_hundredths(value: f64) -> f64 {
    if value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Render a quantity for display.
///
/// Values near a common fraction become a glyph ("½"), whole numbers drop
/// the decimal point, anything else keeps at most two decimals.
pub fn format_quantity(quantity: f64) -> String {
    let rounded = round_to_hundredths(quantity);

    if let Some((_, glyph)) = COMMON_FRACTIONS
        .iter()
        .find(|(value, _)| (rounded - value).abs() < FRACTION_TOLERANCE)
    {
        return glyph.to_string();
    }

    if !rounded.is_finite() {
        return rounded.to_string();
    }

    if rounded.fract() == 0.0 {
        return format!("{:.0}", rounded);
    }

    let fixed = format!("{:.2}", rounded);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
