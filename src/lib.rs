// Reusable library API: visible to both CLI and WASM builds
pub mod combinations;
pub mod dictionary;
pub mod errors;
mod letter;
pub mod log;
pub mod occurrence;
pub mod solver;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
