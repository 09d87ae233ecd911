pub mod calc;
pub mod config;
pub mod convert;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
