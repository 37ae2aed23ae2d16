// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-user sliding-window rate limiting for quote fetches.
//!
//! The window boundary is evaluated relative to "now" on every call, so
//! bursts cannot exploit bucket-alignment edges. State is in-memory only; a
//! restart grants every user a fresh allowance.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use quotly_config::model::RateLimitConfig;
use quotly_core::UserId;

/// Sliding-window admission control, keyed by user.
///
/// Same-user concurrent calls serialize on the map entry, so two racing
/// fetches cannot both read an under-limit count and both be admitted.
/// Different users' entries live on independent shards and do not contend.
pub struct RateLimiter {
    windows: DashMap<UserId, Vec<Instant>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests: config.max_requests,
            window: Duration::from_secs(config.window_secs),
        }
    }

    /// Admits or rejects a fetch for `user_id` at the current instant.
    pub fn admit(&self, user_id: UserId) -> bool {
        self.admit_at(user_id, Instant::now())
    }

    /// Admits or rejects a fetch evaluated at `now`.
    ///
    /// Prunes entries older than the window, then admits and records `now`
    /// only if fewer than `max_requests` remain. A rejection records
    /// nothing, so it does not extend the user's lockout.
    pub fn admit_at(&self, user_id: UserId, now: Instant) -> bool {
        let mut entry = self.windows.entry(user_id).or_default();
        entry.retain(|&t| now.duration_since(t) < self.window);
        if entry.len() >= self.max_requests {
            false
        } else {
            entry.push(now);
            true
        }
    }

    /// Drops users whose entire window has expired, bounding map growth for
    /// users who stopped interacting.
    pub fn sweep(&self) {
        let window = self.window;
        self.windows
            .retain(|_, times| times.iter().any(|t| t.elapsed() < window));
    }

    /// Number of users currently tracked.
    pub fn tracked_users(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: usize, window_secs: u64) -> RateLimiter {
        RateLimiter::new(&RateLimitConfig {
            max_requests,
            window_secs,
        })
    }

    #[test]
    fn admits_up_to_limit_within_window() {
        let limiter = limiter(5, 60);
        let t0 = Instant::now();
        for i in 0..5 {
            assert!(
                limiter.admit_at(UserId(1), t0 + Duration::from_secs(i)),
                "call {i} should be admitted"
            );
        }
    }

    #[test]
    fn sixth_call_inside_window_is_rejected() {
        let limiter = limiter(5, 60);
        let t0 = Instant::now();
        for i in 0..5 {
            assert!(limiter.admit_at(UserId(1), t0 + Duration::from_secs(i)));
        }
        assert!(!limiter.admit_at(UserId(1), t0 + Duration::from_secs(5)));
    }

    #[test]
    fn admission_resumes_after_oldest_entry_ages_out() {
        let limiter = limiter(5, 60);
        let t0 = Instant::now();
        for i in 0..5 {
            assert!(limiter.admit_at(UserId(1), t0 + Duration::from_secs(i)));
        }
        assert!(!limiter.admit_at(UserId(1), t0 + Duration::from_secs(5)));
        assert!(limiter.admit_at(UserId(1), t0 + Duration::from_secs(61)));
    }

    #[test]
    fn rejection_does_not_consume_an_admission_slot() {
        let limiter = limiter(1, 60);
        let t0 = Instant::now();
        assert!(limiter.admit_at(UserId(1), t0));
        // Repeated rejected calls must not push the lockout forward.
        for i in 1..10 {
            assert!(!limiter.admit_at(UserId(1), t0 + Duration::from_secs(i)));
        }
        assert!(limiter.admit_at(UserId(1), t0 + Duration::from_secs(60)));
    }

    #[test]
    fn users_are_isolated() {
        let limiter = limiter(1, 60);
        let t0 = Instant::now();
        assert!(limiter.admit_at(UserId(1), t0));
        assert!(!limiter.admit_at(UserId(1), t0));
        assert!(limiter.admit_at(UserId(2), t0));
    }

    #[test]
    fn sweep_drops_only_fully_expired_users() {
        let limiter = limiter(5, 1);
        assert!(limiter.admit(UserId(1)));
        assert_eq!(limiter.tracked_users(), 1);

        // Still within the window: sweep keeps the user.
        limiter.sweep();
        assert_eq!(limiter.tracked_users(), 1);

        std::thread::sleep(Duration::from_millis(1100));
        limiter.sweep();
        assert_eq!(limiter.tracked_users(), 0);
    }
}
