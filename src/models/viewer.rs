// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewer navigation state.
//!
//! A cyclic state machine over the catalog indices: `next` and
//! `previous` step through the list with circular wraparound, so every
//! transition is total and the index is always valid.

use anyhow::{ensure, Result};

/// Current position within the catalog.
///
/// Invariant: `current` is in `[0, len - 1]` at all times. Both
/// transitions preserve it, so the catalog lookup it feeds can never go
/// out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    current: usize,
    len: usize,
}

impl ViewerState {
    /// Create a state machine over `len` positions, starting at 0.
    ///
    /// `len` = 0 is rejected: an empty catalog is a construction-time
    /// precondition violation, not a runtime condition.
    pub fn new(len: usize) -> Result<Self> {
        ensure!(len >= 1, "viewer state requires a non-empty catalog");
        Ok(Self { current: 0, len })
    }

    /// Index of the artwork currently displayed.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance to the next artwork, wrapping past the end.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Step back to the previous artwork, wrapping past the start.
    pub fn previous(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(ViewerState::new(0).is_err());
    }

    #[test]
    fn test_starts_at_zero() {
        let state = ViewerState::new(5).unwrap();
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn test_forward_walk_wraps() {
        // N = 4: 0 -> 1 -> 2 -> 3 -> 0
        let mut state = ViewerState::new(4).unwrap();
        let expected = [1, 2, 3, 0];
        for want in expected {
            state.next();
            assert_eq!(state.current(), want);
        }
    }

    #[test]
    fn test_backward_wraps_from_start() {
        let mut state = ViewerState::new(4).unwrap();
        state.previous();
        assert_eq!(state.current(), 3);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..=8 {
            for start in 0..len {
                let mut state = ViewerState::new(len).unwrap();
                for _ in 0..start {
                    state.next();
                }
                assert_eq!(state.current(), start);

                for _ in 0..len {
                    state.next();
                }
                assert_eq!(state.current(), start, "N next() calls, N = {}", len);

                for _ in 0..len {
                    state.previous();
                }
                assert_eq!(state.current(), start, "N previous() calls, N = {}", len);
            }
        }
    }

    #[test]
    fn test_next_previous_are_inverses() {
        for len in 1..=6 {
            for start in 0..len {
                let mut state = ViewerState::new(len).unwrap();
                for _ in 0..start {
                    state.next();
                }

                state.next();
                state.previous();
                assert_eq!(state.current(), start);

                state.previous();
                state.next();
                assert_eq!(state.current(), start);
            }
        }
    }

    #[test]
    fn test_index_stays_in_range() {
        let mut state = ViewerState::new(3).unwrap();
        // Arbitrary mixed sequence; the invariant must hold throughout.
        let steps = [true, true, false, true, false, false, false, true, true];
        for forward in steps {
            if forward {
                state.next();
            } else {
                state.previous();
            }
            assert!(state.current() < 3);
        }
    }

    #[test]
    fn test_single_item_catalog_is_a_fixed_point() {
        let mut state = ViewerState::new(1).unwrap();
        state.next();
        assert_eq!(state.current(), 0);
        state.previous();
        assert_eq!(state.current(), 0);
    }
}
