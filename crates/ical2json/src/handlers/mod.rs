pub mod convert;
pub mod error;
pub mod health;
pub mod index;

pub use error::AppError;
