//! Non-virtual bridge over a polymorphic work interface.
//!
//! # Architecture
//!
//! [`Work`] is the extension point: every behavior is a type implementing it.
//! [`WorkBridge`] is the surface callers hold. It owns exactly one boxed
//! [`Work`] and exposes a plain method that forwards to it, so the trait
//! object never appears in the bridge's public API.
//!
//! [`create_work`] is the only place a concrete variant is chosen.
//!
//! # Example
//!
//! ```
//! use hybrid_work::{Work, WorkBridge, WorkHandle};
//!
//! struct Count(u32);
//!
//! impl Work for Count {
//!     fn do_work(&mut self) -> hybrid_work::Result<()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let mut handle = WorkHandle::new(Count(0));
//! let mut bridge = WorkBridge::new(handle.take()).unwrap();
//! bridge.do_work().unwrap();
//!
//! // the source handle was emptied by the transfer
//! assert!(handle.is_empty());
//! assert!(WorkBridge::new(handle).is_err());
//! ```

pub use bridge::WorkBridge;
pub use error::{Error, Result};
pub use factory::{WorkKind, create_work, create_work_of};
pub use handle::WorkHandle;
pub use work::{DefaultWork, WORK_LINE, Work};

mod bridge;
mod error;
mod factory;
mod handle;
mod work;
