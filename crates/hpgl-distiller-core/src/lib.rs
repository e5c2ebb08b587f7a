//! # HPGL Distiller Core
//!
//! Core types shared by the distiller crates:
//! the accepted mnemonic set, run configuration, coordinate types
//! and the error hierarchy.

pub mod config;
pub mod error;
pub mod mnemonic;
pub mod types;

pub use config::{DistillerConfig, DEFAULT_INIT_STRING, FALLBACK_SLEW_UNITS};
pub use error::{DistillerError, Result};
pub use mnemonic::{AcceptSet, Mnemonic};
pub use types::{BoundingBox, Point};
