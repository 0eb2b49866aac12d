pub mod dispatcher;
pub mod error;
pub mod percentage;
pub mod types;

#[cfg(test)]
mod tests;

pub use dispatcher::evaluate;
pub use error::QueryError;
pub use percentage::evaluate_percentage;
pub use types::{Category, Evaluation};
