//! Middleware for cross-cutting request concerns.
//!
//! - [`rate_limit`]: Per-client token-bucket limiting on `/api/*`
//!
//! Request logging and metrics middleware live in `adspace-observability`.

pub mod rate_limit;
