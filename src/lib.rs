pub mod command;
pub mod error;
pub mod geometry;
mod log;
pub mod math;
pub mod operations;

pub use error::{PlanmarkError, Result};
