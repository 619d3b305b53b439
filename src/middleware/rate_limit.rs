use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::task::JoinHandle;
use tower_governor::GovernorLayer;
use tracing::{debug, info, warn};

use adspace_config::rate_limit::{PeerGovernorConfig, ProxyGovernorConfig, RateLimitConfig};

use crate::state::AppState;

/// How often idle client buckets are dropped from the limiter.
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Per-client token bucket applied to `/api/*`.
///
/// Keyed on the socket peer unless `RATE_LIMIT_TRUST_PROXY` is set, in which
/// case `X-Forwarded-For` / `X-Real-IP` identify the client.
#[derive(Clone)]
pub enum ApiRateLimiter {
    Peer(Arc<PeerGovernorConfig>),
    Proxy(Arc<ProxyGovernorConfig>),
}

impl ApiRateLimiter {
    /// `None` when limiting is disabled.
    pub fn from_config(config: &RateLimitConfig) -> Option<Self> {
        if !config.enabled {
            info!("Rate limiting disabled");
            return None;
        }

        let limiter = if config.trust_proxy {
            config
                .proxy_governor_config()
                .map(|governor| Self::Proxy(Arc::new(governor)))
        } else {
            config
                .peer_governor_config()
                .map(|governor| Self::Peer(Arc::new(governor)))
        };

        if limiter.is_none() {
            warn!(?config, "Invalid rate limit settings, rate limiting disabled");
        }
        limiter
    }

    pub fn apply(&self, router: Router<AppState>) -> Router<AppState> {
        match self {
            Self::Peer(governor) => router.route_layer(GovernorLayer::new(governor.clone())),
            Self::Proxy(governor) => router.route_layer(GovernorLayer::new(governor.clone())),
        }
    }

    /// Number of client keys currently held in memory.
    pub fn tracked_clients(&self) -> usize {
        match self {
            Self::Peer(governor) => governor.limiter().len(),
            Self::Proxy(governor) => governor.limiter().len(),
        }
    }

    /// Drop buckets that have refilled completely.
    pub fn retain_recent(&self) {
        match self {
            Self::Peer(governor) => governor.limiter().retain_recent(),
            Self::Proxy(governor) => governor.limiter().retain_recent(),
        }
    }
}

/// Periodically prune idle client buckets so the key map stays bounded.
pub fn spawn_cleanup(limiter: ApiRateLimiter, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // the first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            let before = limiter.tracked_clients();
            limiter.retain_recent();
            debug!(before, after = limiter.tracked_clients(), "Rate limiter pruned");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_config_builds_no_limiter() {
        let config = RateLimitConfig {
            enabled: false,
            ..RateLimitConfig::default()
        };
        assert!(ApiRateLimiter::from_config(&config).is_none());
    }

    #[test]
    fn test_proxy_trust_selects_header_keyed_limiter() {
        let peer = ApiRateLimiter::from_config(&RateLimitConfig::default());
        assert!(matches!(peer, Some(ApiRateLimiter::Peer(_))));

        let proxy = ApiRateLimiter::from_config(&RateLimitConfig {
            trust_proxy: true,
            ..RateLimitConfig::default()
        });
        assert!(matches!(proxy, Some(ApiRateLimiter::Proxy(_))));
    }

    #[test]
    fn test_new_limiter_tracks_no_clients() {
        let limiter = ApiRateLimiter::from_config(&RateLimitConfig::default()).unwrap();
        assert_eq!(limiter.tracked_clients(), 0);
    }
}
