// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition from contact-start timestamps.
//!
//! A window opens on a single-contact start. Another single-contact start
//! before the window closes is a double tap and closes the window.
//!
//! ```
//! use loupe_gesture::tap::TapState;
//!
//! let mut tap = TapState::new(300);
//! assert!(!tap.register(1_000));
//! assert!(tap.register(1_250));
//! // The window closed with the double tap.
//! assert!(!tap.register(1_400));
//! ```

/// Pending double-tap window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapState {
    window_ms: u64,
    opened_at: Option<u64>,
}

impl TapState {
    /// Creates a tap tracker with a window of `window_ms` milliseconds.
    #[must_use]
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            opened_at: None,
        }
    }

    /// Returns the window length in milliseconds.
    #[must_use]
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Registers a single-contact start at `time_ms`.
    ///
    /// Returns `true` when it completes a double tap.
    pub fn register(&mut self, time_ms: u64) -> bool {
        match self.opened_at {
            Some(opened) if time_ms >= opened && time_ms - opened < self.window_ms => {
                self.opened_at = None;
                true
            }
            _ => {
                self.opened_at = Some(time_ms);
                false
            }
        }
    }

    /// Returns `true` if a window is open at `time_ms`.
    #[must_use]
    pub fn is_pending(&self, time_ms: u64) -> bool {
        self.opened_at
            .is_some_and(|opened| time_ms >= opened && time_ms - opened < self.window_ms)
    }

    /// Closes any open window.
    pub fn clear(&mut self) {
        self.opened_at = None;
    }
}

impl Default for TapState {
    fn default() -> Self {
        Self::new(300)
    }
}
