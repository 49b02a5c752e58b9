use crate::config::ServerConfig;
use crate::error::ServerResult;
use dashmap::DashMap;
use matcher::{MatchConfig, RoleMatcher};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<ServerConfig>,

    /// Rate limit tracking: API key -> (count, window_start)
    pub rate_limiter: Arc<DashMap<String, (u32, Instant)>>,

    /// Matcher built from the configured default threshold.
    pub matcher: Arc<RoleMatcher>,
}

impl ServerState {
    /// Create new server state, rejecting an invalid default threshold.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let matcher = RoleMatcher::new(MatchConfig::with_threshold(config.fuzzy_threshold))?;

        Ok(Self {
            config: Arc::new(config),
            rate_limiter: Arc::new(DashMap::new()),
            matcher: Arc::new(matcher),
        })
    }

    /// Matcher for a request: the shared one, or a fresh one when the request
    /// overrides the threshold.
    pub fn matcher_for(&self, fuzzy_threshold: Option<u8>) -> ServerResult<Arc<RoleMatcher>> {
        match fuzzy_threshold {
            Some(threshold) if threshold != self.matcher.config().fuzzy_threshold => Ok(Arc::new(
                RoleMatcher::new(MatchConfig::with_threshold(threshold))?,
            )),
            _ => Ok(self.matcher.clone()),
        }
    }

    pub fn is_valid_api_key(&self, key: &str) -> bool {
        self.config.api_keys.contains(key)
    }

    /// Fixed one-minute window per API key. Returns false once the key has
    /// used up its allowance for the current window.
    pub fn check_rate_limit(&self, key: &str) -> bool {
        let now = Instant::now();
        let window = Duration::from_secs(60);
        let limit = self.config.rate_limit_per_minute;

        let mut entry = self.rate_limiter.entry(key.to_string()).or_insert((0, now));
        let (count, window_start) = entry.value_mut();

        if now.duration_since(*window_start) > window {
            *count = 0;
            *window_start = now;
        }

        if *count >= limit {
            return false;
        }

        *count += 1;
        true
    }
}
