//! Reentrancy guard for hosts that share one engine between event handlers.
//!
//! An operation that is suspended at a step still owns the engine. A second
//! request arriving meanwhile is rejected with [`Error::Busy`] instead of
//! being interleaved with the first. Dropping an operation future halfway
//! leaves whatever relinking it already did in place; there is no rollback.

use tokio::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct Session<E> {
    engine: Mutex<E>,
}

impl<E> Session<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }

    /// Exclusive access to the engine for one operation. The guard may be
    /// held across the operation's await points.
    pub fn try_begin(&self) -> Result<MutexGuard<'_, E>> {
        self.engine.try_lock().map_err(|_| {
            tracing::warn!("operation rejected: another one is in flight");
            Error::Busy
        })
    }

    pub fn is_busy(&self) -> bool {
        self.engine.try_lock().is_err()
    }

    pub fn into_inner(self) -> E {
        self.engine.into_inner()
    }
}
