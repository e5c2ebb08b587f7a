//! # HPGL Distiller
//!
//! Strips out HPGL commands that are not applicable to simple cutters.
//! Converters such as pstoedit emit pen widths, line types and character
//! sets that confuse vinyl cutters; only the motion commands survive.
//!
//! Typical use:
//!
//! 1. `pstoedit -f plot-hpgl drawing.eps full.hpgl`
//! 2. `hpgl-distiller -i full.hpgl -o distilled.hpgl`
//! 3. `cat distilled.hpgl > /dev/ttyS1`
//!
//! ## Architecture
//!
//! 1. **hpgl-distiller-core** - Mnemonics, configuration, coordinates, errors
//! 2. **hpgl-distiller-engine** - Tokenizer, filter, pacing, normalization, emitter
//! 3. **hpgl-distiller-settings** - Settings file handling
//! 4. **hpgl-distiller** - Command line binary

pub mod cli;
pub mod input;

pub use cli::CliArgs;
pub use hpgl_distiller_core::{DistillerConfig, DistillerError, Result};
pub use hpgl_distiller_engine::{CommandStream, DistillStats, Distiller, ThreadPacer};
pub use hpgl_distiller_settings::Settings;

use std::fs::File;
use std::io::BufWriter;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time).
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging.
///
/// Logs go to stderr so they never mix with distilled output.
/// `RUST_LOG` is honored; otherwise only warnings are shown unless
/// `verbose` raises the level to debug.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Version line shown by `-v`.
pub fn version_string() -> String {
    format!("{} (built {})", VERSION, BUILD_DATE)
}

/// The single stderr line reported for a fatal error.
pub fn failure_message(err: &DistillerError) -> String {
    format!("Error: {}", err)
}

/// Resolve the effective configuration from the settings file and `args`.
pub fn resolve_config(args: &CliArgs) -> Result<DistillerConfig> {
    let settings = match &args.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };
    let settings = args.apply_to(settings);
    settings.validate()?;
    Ok(settings.to_distiller_config())
}

/// Run a full distillation as described by `args`.
pub fn run(args: &CliArgs) -> Result<DistillStats> {
    let input_path = args.input.as_deref().ok_or(DistillerError::MissingInput)?;
    let output_path = args.output.as_deref().ok_or(DistillerError::MissingOutput)?;
    let config = resolve_config(args)?;

    tracing::debug!(
        "init {:?}, slew {}us, bounding box {}, offset ({}, {})",
        config.init_string,
        config.slew_us,
        config.normalize,
        config.x_offset,
        config.y_offset
    );

    let stream = input::read_document(input_path)?;

    let output = File::create(output_path).map_err(|source| DistillerError::OpenOutput {
        path: output_path.to_path_buf(),
        source,
    })?;

    let stats = Distiller::new(&config).distill(&stream, BufWriter::new(output), ThreadPacer)?;
    Ok(stats)
}
