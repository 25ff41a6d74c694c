//! Non-virtual bridge.
//!
//! `WorkBridge` is a single concrete type with inherent methods only. The
//! boxed [`Work`] it owns is private; nothing hands it back out, so callers
//! depend on the bridge's shape alone.

use std::fmt;

use tracing::{debug, trace};

use crate::{Result, Work, WorkHandle};

pub struct WorkBridge {
    inner: Box<dyn Work>,
}

impl WorkBridge {
    /// Takes sole ownership of the instance behind `handle`.
    ///
    /// Fails with [`Error::EmptyHandle`](crate::Error::EmptyHandle) when the
    /// handle was already moved out of.
    pub fn new(handle: WorkHandle) -> Result<Self> {
        let inner = handle.into_inner()?;
        debug!("work bridge constructed");
        Ok(Self { inner })
    }

    pub fn do_work(&mut self) -> Result<()> {
        trace!("forwarding do_work");
        self.inner.do_work()
    }
}

impl From<Box<dyn Work>> for WorkBridge {
    fn from(inner: Box<dyn Work>) -> Self {
        Self { inner }
    }
}

impl Drop for WorkBridge {
    fn drop(&mut self) {
        debug!("work bridge dropped");
    }
}

impl fmt::Debug for WorkBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkBridge").finish_non_exhaustive()
    }
}
