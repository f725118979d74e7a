use crate::ingredients::processor::IngredientProcessor;
use serde::{Deserialize, Serialize};

/// A grocery list entry as stored by the app: either a bare string or a record
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum GroceryItem {
    // Simple: just the ingredient text
    Name(String),
    // Complex: text plus list state
    Entry {
        name: String,
        #[serde(default)]
        checked: bool,
        #[serde(default)]
        category: Option<String>,
    },
}

/// Grocery entry with both shapes resolved into one
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GroceryLine {
    pub name: String,
    pub checked: bool,
    pub category: Option<String>,
}

impl GroceryLine {
    pub fn unchecked(name: String) -> Self {
        Self {
            name,
            checked: false,
            category: None,
        }
    }
}

impl From<GroceryItem> for GroceryLine {
    fn from(item: GroceryItem) -> Self {
        match item {
            GroceryItem::Name(name) => GroceryLine::unchecked(name),
            GroceryItem::Entry {
                name,
                checked,
                category,
            } => GroceryLine {
                name,
                checked,
                category,
            },
        }
    }
}

/// Turn recipe ingredients into unchecked, uncategorized grocery lines
pub fn build_grocery_list<S: AsRef<str>>(
    ingredients: &[S],
    processor: &IngredientProcessor,
) -> Vec<GroceryLine> {
    processor
        .render(ingredients)
        .into_iter()
        .map(GroceryLine::unchecked)
        .collect()
}

/// Run stored grocery items through the processor, keeping checked state and category
pub fn process_grocery_items(
    items: Vec<GroceryItem>,
    processor: &IngredientProcessor,
) -> Vec<GroceryLine> {
    items
        .into_iter()
        .map(GroceryLine::from)
        .map(|line| GroceryLine {
            name: processor.process(&line.name),
            ..line
        })
        .collect()
}
