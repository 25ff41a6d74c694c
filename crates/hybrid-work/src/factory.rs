//! Variant selection.
//!
//! Adding a behavior means adding a [`WorkKind`] and an arm in
//! [`create_work_of`]; neither the bridge nor its callers change.

use tracing::debug;

use crate::{DefaultWork, WorkHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkKind {
    #[default]
    Default,
}

/// Returns a full handle to the default variant.
pub fn create_work() -> WorkHandle {
    create_work_of(WorkKind::default())
}

pub fn create_work_of(kind: WorkKind) -> WorkHandle {
    debug!(?kind, "creating work");
    match kind {
        WorkKind::Default => WorkHandle::new(DefaultWork::new()),
    }
}
