//! Cooperative cancellation for long-running solves.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A shared flag checked by the solver at the top of every round.
///
/// Clones share the flag: hand one clone to the solver (via
/// [`SolverBuilder::cancel_token`][crate::SolverBuilder::cancel_token]) and
/// keep another to call [`cancel`][Self::cancel] from a signal handler or UI
/// thread.  A cancelled solve returns its most recent candidate set as a
/// partial result; the in-flight oracle call, if any, is allowed to finish.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
