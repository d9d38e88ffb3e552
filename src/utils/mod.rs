pub mod error;
pub mod ids;
pub mod path;

pub use error::{AppError, AppResult};
