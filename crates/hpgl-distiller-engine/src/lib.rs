//! # HPGL Distiller Engine
//!
//! Strips an HPGL document down to the commands a two-axis cutter
//! understands, optionally shifting the plot to the origin and pacing
//! output to the speed of the cutting head.

pub mod hpgl;

pub use hpgl::{
    classify, scan_extents, tokenize, BoundingBoxNormalizer, Command, CommandStream,
    CoordinateShift, DistillStats, Distiller, Emitter, MotionTimer, Pacer, Pacing, ThreadPacer,
    Tokenizer, DELIMITERS,
};
