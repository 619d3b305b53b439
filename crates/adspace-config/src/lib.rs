//! # Adspace Config
//!
//! Configuration types for the Adspace API, loaded from environment variables:
//!
//! - [`server`]: Bind address for the API and metrics listeners
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`rate_limit`]: Per-client API rate limiting
//!
//! # Example
//!
//! ```ignore
//! use adspace_config::{CorsConfig, RateLimitConfig, ServerConfig};
//!
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let rate_limit_config = RateLimitConfig::from_env();
//! ```

pub mod cors;
pub mod rate_limit;
pub mod server;

pub use cors::CorsConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
