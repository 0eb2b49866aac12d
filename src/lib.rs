pub mod display;
pub mod math;
pub mod query;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use query::{evaluate, Category, Evaluation};
