//! Output emitter
//!
//! Writes the init string, then one command per line. Each command is
//! flushed before the pacing wait so the device sees it while the host
//! sleeps.

use super::timing::Pacer;
use hpgl_distiller_core::{Mnemonic, Result};
use std::io::Write;
use std::time::Duration;

pub struct Emitter<W: Write, P: Pacer> {
    writer: W,
    pacer: P,
    commands_written: usize,
    bytes_written: usize,
    time_paced: Duration,
}

impl<W: Write, P: Pacer> Emitter<W, P> {
    pub fn new(writer: W, pacer: P) -> Self {
        Self {
            writer,
            pacer,
            commands_written: 0,
            bytes_written: 0,
            time_paced: Duration::ZERO,
        }
    }

    /// Write the initialization string and its line terminator.
    pub fn write_init(&mut self, init: &str) -> Result<()> {
        self.writer.write_all(init.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.bytes_written += init.len() + 1;
        Ok(())
    }

    /// Write `<mnemonic><args>;\n`, flush, then wait for `delay`.
    pub fn emit(&mut self, mnemonic: Mnemonic, args: &[u8], delay: Duration) -> Result<()> {
        self.writer.write_all(mnemonic.as_bytes())?;
        self.writer.write_all(args)?;
        self.writer.write_all(b";\n")?;
        self.writer.flush()?;

        self.commands_written += 1;
        self.bytes_written += mnemonic.byte_len() + args.len() + 2;

        if !delay.is_zero() {
            self.pacer.pause(delay);
            self.time_paced += delay;
        }
        Ok(())
    }

    pub fn commands_written(&self) -> usize {
        self.commands_written
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    pub fn time_paced(&self) -> Duration {
        self.time_paced
    }

    /// Flush and hand the writer back.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
