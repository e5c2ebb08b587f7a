//! Run configuration for a distillation pass
//!
//! A [`DistillerConfig`] is assembled once by the caller (CLI, settings file)
//! and then handed to the engine by reference. Nothing in the engine mutates it.

use crate::mnemonic::AcceptSet;
use std::time::Duration;

/// Initialize and pen-up.
pub const DEFAULT_INIT_STRING: &str = "IN;PU;";

/// Distance units charged when a coordinate argument cannot be parsed.
pub const FALLBACK_SLEW_UNITS: u64 = 10;

/// Immutable configuration for one distillation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistillerConfig {
    accept_set: AcceptSet,
    /// Written verbatim, followed by a newline, before any command.
    pub init_string: String,
    /// Pacing delay per unit of head travel, in microseconds. Zero disables pacing.
    pub slew_us: u64,
    /// Shift the plot so its extents start at the origin.
    pub normalize: bool,
    /// Added to every X coordinate.
    pub x_offset: i64,
    /// Added to every Y coordinate.
    pub y_offset: i64,
}

impl DistillerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_init_string(mut self, init: impl Into<String>) -> Self {
        self.init_string = init.into();
        self
    }

    pub fn with_slew_us(mut self, slew_us: u64) -> Self {
        self.slew_us = slew_us;
        self
    }

    /// Slew given in milliseconds per unit, as accepted on the command line.
    pub fn with_slew_ms(mut self, slew_ms: u64) -> Self {
        self.slew_us = slew_ms.saturating_mul(1000);
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_offsets(mut self, x_offset: i64, y_offset: i64) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    pub fn accept_set(&self) -> &AcceptSet {
        &self.accept_set
    }

    pub fn pacing_enabled(&self) -> bool {
        self.slew_us > 0
    }

    /// Delay for `units` of head travel.
    pub fn slew_for(&self, units: u64) -> Duration {
        Duration::from_micros(units.saturating_mul(self.slew_us))
    }

    /// Delay used when a coordinate argument is present but unreadable.
    pub fn fallback_delay(&self) -> Duration {
        self.slew_for(FALLBACK_SLEW_UNITS)
    }
}

impl Default for DistillerConfig {
    fn default() -> Self {
        Self {
            accept_set: AcceptSet::standard(),
            init_string: DEFAULT_INIT_STRING.to_string(),
            slew_us: 0,
            normalize: false,
            x_offset: 0,
            y_offset: 0,
        }
    }
}
