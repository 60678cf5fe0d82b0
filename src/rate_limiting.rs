// ABOUTME: Fixed-window rate limiting for notification dispatch
// ABOUTME: Per-recipient dispatch counters with configurable window and limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 IronMatch

//! Notification dispatch rate limiting.
//!
//! The marketplace fans out notifications (new message, new testimonial,
//! subscription events) to coaches and athletes. To avoid flooding a
//! recipient, dispatch is throttled with a fixed-window counter per
//! recipient: the first dispatch after a window expires starts a new
//! window, and further dispatches are refused once the window's limit is
//! reached. Counters are in-process; no distributed coordination is
//! attempted or guaranteed.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Default dispatches allowed per recipient per window
pub const DEFAULT_MAX_PER_WINDOW: u32 = 10;

/// Default window length in seconds (one hour)
pub const DEFAULT_WINDOW_SECS: i64 = 3600;

/// Fixed-window throttling policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixedWindowPolicy {
    /// Dispatches allowed per recipient within one window
    pub max_per_window: u32,

    /// Window length in seconds
    pub window_secs: i64,
}

impl Default for FixedWindowPolicy {
    fn default() -> Self {
        Self {
            max_per_window: DEFAULT_MAX_PER_WINDOW,
            window_secs: DEFAULT_WINDOW_SECS,
        }
    }
}

/// Rate limit status returned for a dispatch attempt
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NotificationRateLimitInfo {
    /// Whether the dispatch was refused
    pub is_rate_limited: bool,

    /// Maximum dispatches allowed in the current window
    pub limit: u32,

    /// Dispatches remaining in the current window
    pub remaining: u32,

    /// When the current window resets
    pub reset_at: DateTime<Utc>,
}

/// Per-recipient dispatch counter for the current window
#[derive(Debug, Clone, Copy)]
struct WindowCounter {
    window_start: DateTime<Utc>,
    count: u32,
}

/// Fixed-window notification dispatch limiter.
///
/// Counters live in a concurrent map keyed by recipient, so dispatch
/// workers on any thread can consult the limiter without coordination.
#[derive(Debug)]
pub struct NotificationRateLimiter {
    policy: FixedWindowPolicy,
    counters: DashMap<Uuid, WindowCounter>,
}

impl NotificationRateLimiter {
    /// Create a limiter with the default policy
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(FixedWindowPolicy::default())
    }

    /// Create a limiter with a custom policy
    #[must_use]
    pub fn with_policy(policy: FixedWindowPolicy) -> Self {
        Self {
            policy,
            counters: DashMap::new(),
        }
    }

    /// Attempt to consume one dispatch slot for a recipient.
    ///
    /// Increments the recipient's counter unless the window limit is
    /// already reached.
    #[must_use = "dropping the status discards whether dispatch was allowed"]
    pub fn try_acquire(&self, recipient: Uuid) -> NotificationRateLimitInfo {
        self.try_acquire_at(recipient, Utc::now())
    }

    /// Inspect a recipient's current status without consuming a slot
    #[must_use]
    pub fn check(&self, recipient: Uuid) -> NotificationRateLimitInfo {
        self.check_at(recipient, Utc::now())
    }

    /// Clock-injected variant of [`Self::try_acquire`] used by tests
    #[must_use = "dropping the status discards whether dispatch was allowed"]
    pub fn try_acquire_at(
        &self,
        recipient: Uuid,
        now: DateTime<Utc>,
    ) -> NotificationRateLimitInfo {
        let mut entry = self
            .counters
            .entry(recipient)
            .or_insert_with(|| WindowCounter {
                window_start: now,
                count: 0,
            });

        if self.window_expired(entry.window_start, now) {
            entry.window_start = now;
            entry.count = 0;
        }

        let limit = self.policy.max_per_window;
        let is_rate_limited = entry.count >= limit;
        if is_rate_limited {
            warn!(
                %recipient,
                limit,
                reset_at = %self.reset_at(entry.window_start),
                "notification dispatch rate limited"
            );
        } else {
            entry.count += 1;
        }

        NotificationRateLimitInfo {
            is_rate_limited,
            limit,
            remaining: limit.saturating_sub(entry.count),
            reset_at: self.reset_at(entry.window_start),
        }
    }

    /// Clock-injected variant of [`Self::check`] used by tests
    #[must_use]
    pub fn check_at(&self, recipient: Uuid, now: DateTime<Utc>) -> NotificationRateLimitInfo {
        let limit = self.policy.max_per_window;

        let current = self.counters.get(&recipient).map_or(
            WindowCounter {
                window_start: now,
                count: 0,
            },
            |entry| *entry,
        );

        let count = if self.window_expired(current.window_start, now) {
            0
        } else {
            current.count
        };
        let window_start = if self.window_expired(current.window_start, now) {
            now
        } else {
            current.window_start
        };

        NotificationRateLimitInfo {
            is_rate_limited: count >= limit,
            limit,
            remaining: limit.saturating_sub(count),
            reset_at: self.reset_at(window_start),
        }
    }

    /// Drop expired windows to keep the counter map bounded
    pub fn prune_expired(&self) {
        let now = Utc::now();
        self.counters
            .retain(|_, counter| !self.window_expired(counter.window_start, now));
    }

    fn window_expired(&self, window_start: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now >= window_start + Duration::seconds(self.policy.window_secs)
    }

    fn reset_at(&self, window_start: DateTime<Utc>) -> DateTime<Utc> {
        window_start + Duration::seconds(self.policy.window_secs)
    }
}

impl Default for NotificationRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
