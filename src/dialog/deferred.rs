//! Single-shot, cancellable deferred action
//!
//! The dialog must be attached to the host surface before it is shown, so
//! showing is deferred to the next scheduler tick after `open`. Each schedule
//! hands out a `DeferredToken`; a token fires at most once, and only if it is
//! still the current one and has not been cancelled.

/// Identifies one scheduled run of a `DeferredAction`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeferredToken(u64);

/// A deferred action that can be scheduled, cancelled and fired once
#[derive(Debug, Default)]
pub struct DeferredAction {
    generation: u64,
    armed: bool,
}

impl DeferredAction {
    /// Create an idle action
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            armed: false,
        }
    }

    /// Schedule a run, superseding any earlier token
    pub fn schedule(&mut self) -> DeferredToken {
        self.generation += 1;
        self.armed = true;
        DeferredToken(self.generation)
    }

    /// Cancel the pending run, if any
    ///
    /// Returns `true` if something was pending.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.armed, false)
    }

    /// Fire the run identified by `token`
    ///
    /// Returns `false` (a no-op) for stale, cancelled or already fired tokens.
    pub fn fire(&mut self, token: DeferredToken) -> bool {
        if self.armed && token.0 == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }

    /// Token of the pending run, if any
    #[must_use]
    pub const fn pending(&self) -> Option<DeferredToken> {
        if self.armed {
            Some(DeferredToken(self.generation))
        } else {
            None
        }
    }
}
