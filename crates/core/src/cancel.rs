//! Cooperative cancellation for blocking prompts.
//!
//! A [`Cancellation`] carries an optional deadline and an explicit cancel flag.
//! Clones share the same state, so a token handed to a prompt can be cancelled
//! from another thread.

use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};

use crate::error::{Error, Result};

struct Inner {
    deadline: Option<Instant>,
    /// Dropped on cancel, which disconnects `fired`.
    trigger: Mutex<Option<Sender<()>>>,
    fired: Receiver<()>,
}

#[derive(Clone)]
pub struct Cancellation {
    inner: Arc<Inner>,
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Cancellation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cancellation")
            .field("deadline", &self.inner.deadline)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl Cancellation {
    /// A token with no deadline that only fires on [`Cancellation::cancel`].
    #[must_use]
    pub fn new() -> Self {
        Self::build(None)
    }

    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::build(Some(deadline))
    }

    /// A token whose deadline is `timeout` from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        // An unrepresentable deadline is as good as none.
        Self::build(Instant::now().checked_add(timeout))
    }

    fn build(deadline: Option<Instant>) -> Self {
        let (trigger, fired) = crossbeam_channel::bounded(0);
        Self {
            inner: Arc::new(Inner {
                deadline,
                trigger: Mutex::new(Some(trigger)),
                fired,
            }),
        }
    }

    fn trigger(&self) -> MutexGuard<'_, Option<Sender<()>>> {
        self.inner
            .trigger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.inner.deadline
    }

    /// Fires the token, waking everything currently waiting on it.
    pub fn cancel(&self) {
        if self.trigger().take().is_some() {
            log::debug!("Cancellation fired");
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.trigger().is_none()
    }

    /// A channel that never delivers a message and disconnects once the token
    /// is cancelled, for use in `crossbeam_channel::select!`. Deadlines are
    /// not reported here; see [`Cancellation::deadline`].
    #[must_use]
    pub fn fired(&self) -> &Receiver<()> {
        &self.inner.fired
    }

    /// Fails with the matching error once the token was cancelled or its
    /// deadline has passed. Explicit cancellation takes precedence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] or [`Error::DeadlineExceeded`].
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }

        match self.inner.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(Error::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}
