//! Per-tenant request throttling.
//!
//! Fixed-window counters keyed by workspace, user, and operation. One
//! tenant exhausting its quota never affects another tenant's counters.

use std::{
    collections::VecDeque,
    sync::Mutex,
    time::{Duration, Instant},
};

use rustc_hash::FxHashMap;

use crate::domain::{users::records::UserUuid, workspaces::records::WorkspaceUuid};

/// Counter scope: one window per workspace, user, and operation tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThrottleKey {
    pub workspace: WorkspaceUuid,
    pub user: UserUuid,
    pub operation: String,
}

/// Outcome of a quota check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    Allowed,

    /// Quota exhausted; retry once the oldest counted request leaves the
    /// window.
    Limited { retry_after: Duration },
}

#[derive(Debug)]
pub struct ThrottleGate {
    limit: u32,
    window: Duration,
    max_keys: usize,
    inner: Mutex<FxHashMap<ThrottleKey, VecDeque<Instant>>>,
}

impl ThrottleGate {
    #[must_use]
    pub fn new(limit: u32, window: Duration) -> Self {
        Self::with_max_keys(limit, window, 4096)
    }

    #[must_use]
    pub fn with_max_keys(limit: u32, window: Duration, max_keys: usize) -> Self {
        Self {
            limit,
            window,
            max_keys,
            inner: Mutex::new(FxHashMap::default()),
        }
    }

    /// Counts one request against the key's window and decides whether it
    /// may proceed. A zero limit disables throttling.
    pub fn check(&self, key: ThrottleKey) -> ThrottleDecision {
        if self.limit == 0 {
            return ThrottleDecision::Allowed;
        }

        let now = Instant::now();
        let mut inner = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let counted = inner.entry(key).or_default();
        prune_window(counted, now, self.window);

        if counted.len() >= self.limit as usize {
            let retry_after = counted
                .front()
                .map_or(self.window, |oldest| {
                    self.window.saturating_sub(now.duration_since(*oldest))
                });

            return ThrottleDecision::Limited { retry_after };
        }

        counted.push_back(now);

        if inner.len() > self.max_keys {
            inner.retain(|_, requests| {
                prune_window(requests, now, self.window);
                !requests.is_empty()
            });
        }

        ThrottleDecision::Allowed
    }
}

fn prune_window(requests: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(oldest) = requests.front() {
        if now.duration_since(*oldest) > window {
            requests.pop_front();
        } else {
            break;
        }
    }
}
