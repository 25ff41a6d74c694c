//! C++ bridge generator.
//!
//! Reads a header declaring an abstract interface (a class or struct with
//! pure virtual methods) and writes a non-virtual bridge class that owns the
//! interface through `std::unique_ptr` and forwards every method to it.
//!
//! # Example
//!
//! ```
//! use bridgegen::{RenderOptions, parse_interface, render};
//!
//! let iface = parse_interface("struct IWork { virtual void DoWork() = 0; };").unwrap();
//! let bridge = render(&iface, &RenderOptions::new("IWork.h")).unwrap();
//!
//! assert_eq!(bridge.name, "IWorkBridge");
//! assert!(bridge.source.contains("impl_->DoWork();"));
//! ```

pub use config::{BridgeGenConfig, CONFIG_FILE, ENV_PREFIX};
pub use error::{Error, Result};
pub use generate::{GeneratedFiles, generate_files};
pub use interface::{Interface, Method, Param, extract_braced_block, parse_interface};
pub use render::{Bridge, RenderOptions, render};

mod config;
mod error;
mod generate;
mod interface;
mod render;
