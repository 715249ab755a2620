pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::client::{HabitApi, API_URL_ENV, DEFAULT_API_URL};
pub use crate::utils::error::{ApiError, Result};
