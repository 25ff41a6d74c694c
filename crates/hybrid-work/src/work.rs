//! The work capability and its default variant.
//!
//! `Work` is the only contract between a [`WorkBridge`](crate::WorkBridge)
//! and the behavior it drives. Variants own whatever state they need and
//! release it in their own `Drop`, which runs correctly when dropped through
//! `Box<dyn Work>`.

use std::io::{self, Write};

use crate::Result;

/// Line emitted by [`DefaultWork`] on every call.
pub const WORK_LINE: &str = "Do something";

pub trait Work {
    fn do_work(&mut self) -> Result<()>;
}

/// Stateless variant writing [`WORK_LINE`] to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultWork;

impl DefaultWork {
    pub fn new() -> Self { Self }

    /// Writes [`WORK_LINE`] and a newline to `out`, then flushes it.
    pub fn write_line<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{WORK_LINE}")?;
        out.flush()?;
        Ok(())
    }
}

impl Work for DefaultWork {
    fn do_work(&mut self) -> Result<()> {
        self.write_line(&mut io::stdout().lock())
    }
}
