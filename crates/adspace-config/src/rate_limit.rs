//! Rate limiting configuration for API endpoints.
//!
//! Schedule and pricing endpoints are called on every keystroke of the
//! inventory and quotation forms, so each client IP gets its own token bucket.
//!
//! # Configuration
//!
//! - `RATE_LIMIT_ENABLED`: Set to `false` or `0` to disable limiting (default: enabled)
//! - `RATE_LIMIT_PER_SECOND`: Tokens replenished per second (default: 20)
//! - `RATE_LIMIT_BURST_SIZE`: Maximum tokens a client can accumulate (default: 60)
//! - `RATE_LIMIT_TRUST_PROXY`: Key clients on `X-Forwarded-For` / `X-Real-IP`
//!   instead of the socket peer (default: disabled). Only enable behind a
//!   reverse proxy that overwrites these headers.
//!
//! # Rate Limiting Strategy
//!
//! The limiter uses a token bucket algorithm:
//!
//! - Tokens are added at the configured rate (per second)
//! - Each request consumes one token
//! - Burst size defines the maximum tokens that can accumulate
//! - Requests are rejected with `429 Too Many Requests` when no tokens are available
//!
//! # Example
//!
//! ```ignore
//! use adspace_config::rate_limit::RateLimitConfig;
//! use tower_governor::GovernorLayer;
//!
//! let config = RateLimitConfig::from_env();
//! if let Some(governor) = config.peer_governor_config() {
//!     let router = Router::new().layer(GovernorLayer::new(Arc::new(governor)));
//! }
//! ```

use std::time::Duration;

use governor::middleware::NoOpMiddleware;
use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor};

use crate::env_or;

/// Limiter keyed on the TCP peer address.
pub type PeerGovernorConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Limiter keyed on proxy headers, falling back to the peer address.
pub type ProxyGovernorConfig = GovernorConfig<SmartIpKeyExtractor, NoOpMiddleware>;

/// Rate limit configuration for the API
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub enabled: bool,
    /// Requests per second replenished for each client
    pub per_second: u32,
    /// Burst size for each client
    pub burst_size: u32,
    /// Trust forwarding headers when identifying the client
    pub trust_proxy: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            per_second: 20,
            burst_size: 60,
            trust_proxy: false,
        }
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| {
            let v = v.trim().to_lowercase();
            v != "false" && v != "0"
        })
        .unwrap_or(default)
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_flag("RATE_LIMIT_ENABLED", defaults.enabled),
            per_second: env_or("RATE_LIMIT_PER_SECOND", defaults.per_second),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", defaults.burst_size),
            trust_proxy: env_flag("RATE_LIMIT_TRUST_PROXY", defaults.trust_proxy),
        }
    }

    /// Time to replenish one token. Zero rates are raised to one per second.
    pub fn replenish_interval(&self) -> Duration {
        Duration::from_secs(1) / self.per_second.max(1)
    }

    /// Governor config keyed on the socket peer.
    pub fn peer_governor_config(&self) -> Option<PeerGovernorConfig> {
        self.governor_config(PeerIpKeyExtractor)
    }

    /// Governor config keyed on forwarding headers.
    pub fn proxy_governor_config(&self) -> Option<ProxyGovernorConfig> {
        self.governor_config(SmartIpKeyExtractor)
    }

    fn governor_config<K: KeyExtractor>(
        &self,
        key_extractor: K,
    ) -> Option<GovernorConfig<K, NoOpMiddleware>> {
        GovernorConfigBuilder::default()
            .period(self.replenish_interval())
            .burst_size(self.burst_size.max(1))
            .key_extractor(key_extractor)
            .finish()
    }
}
