// src/core/prelude.rs

pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
