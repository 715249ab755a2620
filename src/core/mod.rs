pub mod client;

pub use crate::utils::error::Result;
pub use client::{HabitApi, API_URL_ENV, DEFAULT_API_URL};
