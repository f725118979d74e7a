// Collaborator-facing helpers: recipe display rendering and grocery-list building.

pub mod grocery;
pub mod processor;

pub use grocery::{build_grocery_list, process_grocery_items, GroceryItem, GroceryLine};
pub use processor::IngredientProcessor;
