//! HPGL distillation
//!
//! This module provides:
//! - A non-destructive tokenizer over the command stream
//! - Classification against the accepted mnemonic set
//! - Motion timing estimation and pacing
//! - Bounding box normalization
//! - The output emitter and the pipeline that drives them

pub mod command;
pub mod emitter;
pub mod normalize;
pub mod pipeline;
pub mod timing;
pub mod tokenizer;

pub use command::*;
pub use emitter::*;
pub use normalize::*;
pub use pipeline::*;
pub use timing::*;
pub use tokenizer::*;
