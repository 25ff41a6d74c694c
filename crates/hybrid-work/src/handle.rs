//! Move-only owned handle to a boxed [`Work`].
//!
//! A handle is either full or empty. [`WorkHandle::take`] moves the instance
//! out and leaves the source empty, and every accessor on an empty handle
//! fails with [`Error::EmptyHandle`] instead of silently doing nothing.

use std::fmt;

use crate::{Error, Result, Work};

#[derive(Default)]
pub struct WorkHandle {
    inner: Option<Box<dyn Work>>,
}

impl WorkHandle {
    pub fn new<W: Work + 'static>(work: W) -> Self {
        Self::from_box(Box::new(work))
    }

    pub fn from_box(work: Box<dyn Work>) -> Self {
        Self { inner: Some(work) }
    }

    pub fn empty() -> Self {
        Self { inner: None }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Moves the instance into a new handle, leaving `self` empty.
    pub fn take(&mut self) -> WorkHandle {
        Self {
            inner: self.inner.take(),
        }
    }

    pub fn get_mut(&mut self) -> Result<&mut (dyn Work + 'static)> {
        self.inner.as_deref_mut().ok_or(Error::EmptyHandle)
    }

    pub fn into_inner(self) -> Result<Box<dyn Work>> {
        self.inner.ok_or(Error::EmptyHandle)
    }
}

impl fmt::Debug for WorkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkHandle")
            .field("empty", &self.is_empty())
            .finish()
    }
}
