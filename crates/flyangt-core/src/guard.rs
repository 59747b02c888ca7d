//! Sliding-window rate limiter
//!
//! For hosts that embed the tooling behind a request path, such as the lead
//! form handler. The CLI has no such path and never builds one. Settings
//! come from the `[rate_limit]` section of [`crate::ToolingConfig`].
//!
//! The limiter is a value owned by its caller; nothing is kept in
//! module-level state. Time comes from the injected [`Clock`].

use crate::clock::Clock;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RateLimitConfig {
    pub window_secs: u64,
    pub max_hits: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 60,
            max_hits: 5,
        }
    }
}

/// Outcome of one `check`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    /// Hits left in the current window after this one
    pub remaining: usize,
    /// Seconds until the oldest hit leaves the window; 0 when allowed
    pub retry_after_secs: u64,
}

pub struct SlidingWindowLimiter<C: Clock> {
    config: RateLimitConfig,
    clock: C,
    hits: HashMap<String, VecDeque<DateTime<Utc>>>,
}

impl<C: Clock> SlidingWindowLimiter<C> {
    pub fn new(config: RateLimitConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            hits: HashMap::new(),
        }
    }

    fn window(&self) -> Duration {
        Duration::seconds(i64::from(u32::try_from(self.config.window_secs).unwrap_or(u32::MAX)))
    }

    /// Record a hit for `key` if the window has room
    ///
    /// Rejected hits are not recorded.
    pub fn check(&mut self, key: &str) -> RateDecision {
        let now = self.clock.now();
        let window = self.window();
        let max_hits = self.config.max_hits;
        let hits = self.hits.entry(key.to_string()).or_default();
        while hits.front().is_some_and(|t| *t + window <= now) {
            hits.pop_front();
        }

        if hits.len() < max_hits {
            hits.push_back(now);
            return RateDecision {
                allowed: true,
                remaining: max_hits - hits.len(),
                retry_after_secs: 0,
            };
        }

        let retry_after_secs = hits
            .front()
            .map(|oldest| (*oldest + window - now).num_seconds().max(1))
            .and_then(|s| u64::try_from(s).ok())
            .unwrap_or(self.config.window_secs);
        tracing::debug!(
            component = module_path!(),
            op = "rate_limit_check",
            retry_after_secs = retry_after_secs,
            "rate limited"
        );
        RateDecision {
            allowed: false,
            remaining: 0,
            retry_after_secs,
        }
    }

    /// Drop expired hits and keys left without any
    pub fn sweep(&mut self) {
        let now = self.clock.now();
        let window = self.window();
        self.hits.retain(|_, hits| {
            hits.retain(|t| *t + window > now);
            !hits.is_empty()
        });
    }

    /// Number of tracked keys
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
