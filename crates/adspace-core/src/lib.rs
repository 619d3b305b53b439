//! # Adspace Core
//!
//! Core types, errors, and utilities for the Adspace API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`money`]: Currency rounding for presentation
//! - [`serde`]: Serde helpers for loosely-typed form input
//!
//! # Example
//!
//! ```ignore
//! use adspace_core::AppError;
//! use adspace_core::money::round_currency;
//!
//! let error = AppError::unprocessable(anyhow::anyhow!("monthly_rate must not be negative"));
//! assert_eq!(round_currency(1234.5678), 1234.57);
//! ```

pub mod errors;
pub mod money;
pub mod serde;

pub use errors::AppError;
pub use money::{format_currency, round_currency, serialize_currency};
