//! Single-slot tick scheduling.
//!
//! The renderer never owns a timer. It hands out a [`TickToken`] for the one
//! tick it expects next and the host delivers it back after waiting the tick
//! interval. Cancelling bumps a generation counter so a token issued before a
//! stop can never advance the animation after a later start.

use std::time::Duration;

/// Default delay between a redraw and the following tick.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(5);

/// Handle for one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken {
    generation: u64,
    sequence: u64,
}

#[derive(Debug, Default)]
pub(crate) struct TickScheduler {
    generation: u64,
    sequence: u64,
    pending: Option<TickToken>,
}

impl TickScheduler {
    /// Schedule the next tick. At most one tick is ever pending; asking again
    /// returns the existing token.
    pub(crate) fn schedule(&mut self) -> TickToken {
        if let Some(token) = self.pending {
            return token;
        }
        self.sequence += 1;
        let token = TickToken {
            generation: self.generation,
            sequence: self.sequence,
        };
        self.pending = Some(token);
        token
    }

    /// Drop the pending tick and invalidate every token issued so far.
    pub(crate) fn cancel(&mut self) {
        self.pending = None;
        self.generation += 1;
    }

    /// Consume `token` if it is the pending one.
    pub(crate) fn take(&mut self, token: TickToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn pending(&self) -> Option<TickToken> {
        self.pending
    }
}
