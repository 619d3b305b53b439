use crate::config::cors::CorsConfig;
use crate::config::rate_limit::RateLimitConfig;
use crate::middleware::rate_limit::ApiRateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
    /// `None` when rate limiting is disabled.
    pub rate_limiter: Option<ApiRateLimiter>,
}

impl AppState {
    pub fn new(cors_config: CorsConfig, rate_limit_config: RateLimitConfig) -> Self {
        let rate_limiter = ApiRateLimiter::from_config(&rate_limit_config);

        Self {
            cors_config,
            rate_limit_config,
            rate_limiter,
        }
    }
}

pub fn init_app_state() -> AppState {
    AppState::new(CorsConfig::from_env(), RateLimitConfig::from_env())
}
