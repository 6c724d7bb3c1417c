// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading-edge debounce for repeated key actions.

/// Lets an action through at most once per interval.
///
/// The first action always fires. Later actions fire only when strictly more
/// than `interval_ms` has passed since the last one that fired; suppressed
/// actions do not extend the window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Debounce {
    /// Minimum spacing between fired actions.
    pub interval_ms: u64,
    last_fired_ms: Option<u64>,
}

impl Debounce {
    /// Default spacing for keyboard zoom.
    pub const DEFAULT_INTERVAL_MS: u64 = 300;

    /// Create with an explicit interval.
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fired_ms: None,
        }
    }

    /// Try to fire at `now_ms`; returns whether the action should run.
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        let ready = match self.last_fired_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.interval_ms,
        };
        if ready {
            self.last_fired_ms = Some(now_ms);
        }
        ready
    }

    /// Forget the last fired time.
    pub fn reset(&mut self) {
        self.last_fired_ms = None;
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL_MS)
    }
}
