use crate::quantity::types::MeasurementSystem;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Physical quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitFamily {
    /// Canonical base: millilitres
    Volume,
    /// Canonical base: grams
    Mass,
}

/// One row of the conversion table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionEntry {
    /// Canonical spelling (e.g., "tbsp", "fl oz")
    pub unit: &'static str,
    pub system: MeasurementSystem,
    pub family: UnitFamily,
    /// Multiply by this to get the family's base unit
    pub base_factor: f64,
}

impl ConversionEntry {
    pub fn base_amount(&self, quantity: f64) -> f64 {
        quantity * self.base_factor
    }

    pub fn unit_amount(&self, base_quantity: f64) -> f64 {
        base_quantity / self.base_factor
    }
}

const fn entry(
    unit: &'static str,
    system: MeasurementSystem,
    family: UnitFamily,
    base_factor: f64,
) -> ConversionEntry {
    ConversionEntry {
        unit,
        system,
        family,
        base_factor,
    }
}

// US customary definitions, NIST Handbook 44 Appendix C.
pub const TEASPOON: ConversionEntry = entry(
    "tsp",
    MeasurementSystem::Imperial,
    UnitFamily::Volume,
    4.928_921_593_75,
);
pub const TABLESPOON: ConversionEntry = entry(
    "tbsp",
    MeasurementSystem::Imperial,
    UnitFamily::Volume,
    14.786_764_781_25,
);
pub const FLUID_OUNCE: ConversionEntry = entry(
    "fl oz",
    MeasurementSystem::Imperial,
    UnitFamily::Volume,
    29.573_529_562_5,
);
pub const CUP: ConversionEntry = entry(
    "cup",
    MeasurementSystem::Imperial,
    UnitFamily::Volume,
    236.588_236_5,
);
pub const PINT: ConversionEntry = entry(
    "pint",
    MeasurementSystem::Imperial,
    UnitFamily::Volume,
    473.176_473,
);
pub const QUART: ConversionEntry = entry(
    "quart",
    MeasurementSystem::Imperial,
    UnitFamily::Volume,
    946.352_946,
);
pub const MILLILITER: ConversionEntry =
    entry("ml", MeasurementSystem::Metric, UnitFamily::Volume, 1.0);
pub const LITER: ConversionEntry =
    entry("l", MeasurementSystem::Metric, UnitFamily::Volume, 1000.0);
pub const OUNCE: ConversionEntry = entry(
    "oz",
    MeasurementSystem::Imperial,
    UnitFamily::Mass,
    28.349_523_125,
);
pub const POUND: ConversionEntry = entry(
    "lb",
    MeasurementSystem::Imperial,
    UnitFamily::Mass,
    453.592_37,
);
pub const GRAM: ConversionEntry = entry("g", MeasurementSystem::Metric, UnitFamily::Mass, 1.0);
pub const KILOGRAM: ConversionEntry =
    entry("kg", MeasurementSystem::Metric, UnitFamily::Mass, 1000.0);

/// Every unit the converter knows, volume first
pub const CONVERSION_TABLE: &[ConversionEntry] = &[
    TEASPOON,
    TABLESPOON,
    FLUID_OUNCE,
    CUP,
    PINT,
    QUART,
    MILLILITER,
    LITER,
    OUNCE,
    POUND,
    GRAM,
    KILOGRAM,
];

/// Accepted spellings (singular, lower-case) for each table entry
const UNIT_SPELLINGS: &[(&str, &ConversionEntry)] = &[
    ("tsp", &TEASPOON),
    ("teaspoon", &TEASPOON),
    ("tbsp", &TABLESPOON),
    ("tbs", &TABLESPOON),
    ("tbl", &TABLESPOON),
    ("tblsp", &TABLESPOON),
    ("tablespoon", &TABLESPOON),
    ("fl oz", &FLUID_OUNCE),
    ("floz", &FLUID_OUNCE),
    ("fluid ounce", &FLUID_OUNCE),
    ("cup", &CUP),
    ("c", &CUP),
    ("pint", &PINT),
    ("pt", &PINT),
    ("quart", &QUART),
    ("qt", &QUART),
    ("ml", &MILLILITER),
    ("milliliter", &MILLILITER),
    ("millilitre", &MILLILITER),
    ("l", &LITER),
    ("liter", &LITER),
    ("litre", &LITER),
    ("oz", &OUNCE),
    ("ounce", &OUNCE),
    ("lb", &POUND),
    ("pound", &POUND),
    ("g", &GRAM),
    ("gram", &GRAM),
    ("gramme", &GRAM),
    ("kg", &KILOGRAM),
    ("kilogram", &KILOGRAM),
    ("kilogramme", &KILOGRAM),
    ("kilo", &KILOGRAM),
];

lazy_static! {
    static ref UNIT_ALIASES: HashMap<&'static str, &'static ConversionEntry> =
        UNIT_SPELLINGS.iter().copied().collect();
}

/// Look up a unit, case-insensitive and tolerant of plurals ("Cups", "lbs")
pub fn classify_unit(unit: &str) -> Option<&'static ConversionEntry> {
    let normalized = unit.trim().trim_end_matches('.').to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    if let Some(entry) = UNIT_ALIASES.get(normalized.as_str()) {
        return Some(*entry);
    }
    // Plural forms: "cups", "ounces", "lbs"; one-letter abbreviations take no plural
    let singular = normalized.strip_suffix('s')?;
    if singular.chars().count() < 2 {
        return None;
    }
    UNIT_ALIASES.get(singular).copied()
}

pub fn unit_family(unit: &str) -> Option<UnitFamily> {
    classify_unit(unit).map(|entry| entry.family)
}

/// Table entry for a family's representative unit in a system
pub fn representative_entry(
    family: UnitFamily,
    system: MeasurementSystem,
) -> &'static ConversionEntry {
    match (family, system) {
        (UnitFamily::Volume, MeasurementSystem::Metric) => &MILLILITER,
        (UnitFamily::Volume, MeasurementSystem::Imperial) => &CUP,
        (UnitFamily::Mass, MeasurementSystem::Metric) => &GRAM,
        (UnitFamily::Mass, MeasurementSystem::Imperial) => &OUNCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_canonical_units() {
        for entry in CONVERSION_TABLE {
            let found = classify_unit(entry.unit)
                .unwrap_or_else(|| panic!("{} not classified", entry.unit));
            assert_eq!(found.unit, entry.unit);
        }
    }

    #[test]
    fn test_classify_plurals_and_case() {
        assert_eq!(classify_unit("cups").map(|e| e.unit), Some("cup"));
        assert_eq!(classify_unit("Cup").map(|e| e.unit), Some("cup"));
        assert_eq!(classify_unit("TBSP").map(|e| e.unit), Some("tbsp"));
        assert_eq!(classify_unit("tablespoons").map(|e| e.unit), Some("tbsp"));
        assert_eq!(classify_unit("lbs").map(|e| e.unit), Some("lb"));
        assert_eq!(classify_unit("ounces").map(|e| e.unit), Some("oz"));
        assert_eq!(classify_unit("grams").map(|e| e.unit), Some("g"));
        assert_eq!(classify_unit("litres").map(|e| e.unit), Some("l"));
        assert_eq!(classify_unit("fl oz").map(|e| e.unit), Some("fl oz"));
        assert_eq!(classify_unit("tsp.").map(|e| e.unit), Some("tsp"));
    }

    #[test]
    fn test_unknown_units() {
        assert!(classify_unit("").is_none());
        assert!(classify_unit("s").is_none());
        assert!(classify_unit("pinch").is_none());
        assert!(classify_unit("large").is_none());
        assert!(classify_unit("cloves").is_none());
    }

    #[test]
    fn test_families_are_disjoint() {
        assert_eq!(unit_family("oz"), Some(UnitFamily::Mass));
        assert_eq!(unit_family("fl oz"), Some(UnitFamily::Volume));
        assert_eq!(unit_family("kg"), Some(UnitFamily::Mass));
        assert_eq!(unit_family("quarts"), Some(UnitFamily::Volume));
    }

    #[test]
    fn test_representative_units_match_table() {
        for family in [UnitFamily::Volume, UnitFamily::Mass] {
            for system in [MeasurementSystem::Metric, MeasurementSystem::Imperial] {
                let entry = representative_entry(family, system);
                assert_eq!(entry.family, family);
                assert_eq!(entry.system, system);
            }
        }
        assert_eq!(
            representative_entry(UnitFamily::Volume, MeasurementSystem::Imperial).unit,
            "cup"
        );
        assert_eq!(
            representative_entry(UnitFamily::Mass, MeasurementSystem::Imperial).unit,
            "oz"
        );
    }

    #[test]
    fn test_single_letter_units_have_no_plural() {
        assert!(classify_unit("cs").is_none());
        assert!(classify_unit("Gs").is_none());
        assert!(classify_unit("ls").is_none());
        assert_eq!(classify_unit("c").map(|e| e.unit), Some("cup"));
        assert_eq!(classify_unit("kgs").map(|e| e.unit), Some("kg"));
        assert_eq!(classify_unit("mls").map(|e| e.unit), Some("ml"));
    }
}
