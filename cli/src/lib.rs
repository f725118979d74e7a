pub mod config;
pub mod ingredients;
pub mod quantity;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
