use crate::quantity::error::QuantityError;
use crate::quantity::types::{MeasurementSystem, ParsedIngredient};
use crate::quantity::units::{classify_unit, representative_entry};
use tracing::debug;

/// Convert a quantity into the other measurement system.
///
/// Goes through the family's base unit (ml or g) and lands on the target
/// system's representative unit (ml/cup, g/oz). Returns `None` when the unit
/// is unknown or already belongs to `target`; callers leave the text as is.
pub fn convert(
    quantity: f64,
    unit: &str,
    target: MeasurementSystem,
) -> Option<(f64, &'static str)> {
    let entry = match classify_unit(unit) {
        Some(entry) => entry,
        None => {
            debug!(unit, "unit not convertible");
            return None;
        }
    };

    if entry.system == target {
        debug!(unit, system = %target, "unit already in target system");
        return None;
    }

    let representative = representative_entry(entry.family, target);
    let converted = representative.unit_amount(entry.base_amount(quantity));
    Some((converted, representative.unit))
}

/// Convert a parsed ingredient, keeping its item untouched
pub fn convert_ingredient(
    ingredient: &ParsedIngredient,
    target: MeasurementSystem,
) -> Option<ParsedIngredient> {
    let quantity = ingredient.quantity?;
    let (converted, unit) = convert(quantity, &ingredient.unit, target)?;
    Some(ParsedIngredient {
        quantity: Some(converted),
        unit: unit.to_string(),
        item: ingredient.item.clone(),
    })
}

/// Convert to an explicit unit of the same family (e.g., tbsp to tsp, lb to kg)
pub fn convert_to_unit(
    quantity: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, QuantityError> {
    let from = classify_unit(from_unit)
        .ok_or_else(|| QuantityError::InvalidUnit(from_unit.to_string()))?;
    let to =
        classify_unit(to_unit).ok_or_else(|| QuantityError::InvalidUnit(to_unit.to_string()))?;

    if from.family != to.family {
        return Err(QuantityError::IncompatibleUnits {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        });
    }

    Ok(to.unit_amount(from.base_amount(quantity)))
}
