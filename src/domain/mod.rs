pub mod models;
pub mod evaluator;
pub mod services;
pub mod errors;

pub use models::*;
pub use evaluator::*;
pub use services::*;
pub use errors::*;
