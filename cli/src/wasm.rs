// WebAssembly bindings for the recipe UI
use crate::config::Config;
use crate::ingredients::{self, GroceryItem, IngredientProcessor};
use crate::quantity::{self, MeasurementSystem, ScaleFactor};
use js_sys::Array;
use wasm_bindgen::prelude::*;

fn parse_system(system: Option<String>) -> Result<Option<MeasurementSystem>, JsValue> {
    system
        .map(|s| s.parse::<MeasurementSystem>())
        .transpose()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn strings_from_array(lines: &Array) -> Vec<String> {
    // Non-string entries become empty lines so indices still line up
    lines
        .iter()
        .map(|value| value.as_string().unwrap_or_default())
        .collect()
}

#[wasm_bindgen]
pub struct PortionWasm {
    processor: IngredientProcessor,
}

impl Default for PortionWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PortionWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            processor: IngredientProcessor::default(),
        }
    }

    /// Build from a TOML config string (measurement_system, servings)
    #[wasm_bindgen]
    pub fn from_config(config_content: &str) -> Result<PortionWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        let processor = IngredientProcessor::from_config(&config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { processor })
    }

    /// Set desired/original servings and target system ("metric", "imperial", or none)
    #[wasm_bindgen]
    pub fn configure(
        &mut self,
        desired_servings: f64,
        original_servings: f64,
        system: Option<String>,
    ) -> Result<(), JsValue> {
        let system = parse_system(system)?;
        self.processor =
            IngredientProcessor::for_servings(desired_servings, original_servings, system)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Parse an ingredient line
    /// Returns JSON string: {"quantity": number|null, "unit": string, "item": string}
    #[wasm_bindgen]
    pub fn parse(&self, ingredient: &str) -> Result<String, JsValue> {
        serde_json::to_string(&quantity::parse(ingredient))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize ingredient: {}", e)))
    }

    #[wasm_bindgen]
    pub fn format_quantity(&self, value: f64) -> String {
        quantity::format_quantity(value)
    }

    /// Scale one line by an explicit factor
    #[wasm_bindgen]
    pub fn scale(&self, ingredient: &str, factor: f64) -> Result<String, JsValue> {
        let factor = ScaleFactor::new(factor).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(quantity::scale(ingredient, factor.value()))
    }

    /// Scale one line by an explicit factor, then convert to `system`
    #[wasm_bindgen]
    pub fn scale_and_convert(
        &self,
        ingredient: &str,
        factor: f64,
        system: &str,
    ) -> Result<String, JsValue> {
        let factor = ScaleFactor::new(factor).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let system = system
            .parse::<MeasurementSystem>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(quantity::scale_and_convert(
            ingredient,
            factor.value(),
            system,
        ))
    }

    /// Render recipe lines with the configured servings and system.
    /// Returns an array of the same length and order.
    #[wasm_bindgen]
    pub fn render_ingredients(&self, lines: &Array) -> Array {
        let lines = strings_from_array(lines);
        self.processor
            .render(&lines)
            .into_iter()
            .map(|line| JsValue::from_str(&line))
            .collect()
    }

    /// Process a grocery list
    /// items_json: JSON array of strings or {name, checked, category}
    /// Returns JSON array of {name, checked, category}
    #[wasm_bindgen]
    pub fn process_grocery_items(&self, items_json: &str) -> Result<String, JsValue> {
        let items: Vec<GroceryItem> = serde_json::from_str(items_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse items JSON: {}", e)))?;

        let lines = ingredients::process_grocery_items(items, &self.processor);

        serde_json::to_string(&lines)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize grocery list: {}", e)))
    }
}
