//! Command line interface
//!
//! Flags follow the classic `hpgl-distiller` usage so existing scripts keep
//! working. Values given here override the settings file.

use clap::Parser;
use hpgl_distiller_settings::Settings;
use std::path::PathBuf;

/// CLI arguments for HPGL Distiller.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "hpgl-distiller")]
#[command(author = "Paul L Daniels")]
#[command(disable_version_flag = true)]
#[command(
    about = "HPGL Distiller (for vinyl cutters)",
    long_about = "Strips out HPGL commands that confuse simple plotters and cutters, \
                  keeping only IN, PA, PD, PU, PG, PR and !PG."
)]
pub struct CliArgs {
    /// File containing the full HPGL to distill.
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// File or device the distilled HPGL is written to (overwritten).
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// HPGL sequence prepended to the output.
    #[arg(short = 'I', long = "init", value_name = "STRING")]
    pub init_string: Option<String>,

    /// Wait between commands, in milliseconds per unit of head travel.
    #[arg(short = 's', long, value_name = "MS")]
    pub slew: Option<u64>,

    /// Determine the bounding box and normalise to origin (combine with -x/-y).
    #[arg(short = 'b', long)]
    pub bounding_box: bool,

    /// Offset added to all X values.
    #[arg(short = 'x', long, value_name = "OFFSET", allow_negative_numbers = true)]
    pub x_offset: Option<i64>,

    /// Offset added to all Y values.
    #[arg(short = 'y', long, value_name = "OFFSET", allow_negative_numbers = true)]
    pub y_offset: Option<i64>,

    /// Settings file (.toml or .json); defaults to the user config dir.
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debugging output (verbose).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Display current software version.
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl CliArgs {
    /// Overlay command line values on top of `settings`.
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(init) = &self.init_string {
            settings.init_string = init.clone();
        }
        if let Some(slew) = self.slew {
            settings.slew_ms = slew;
        }
        if self.bounding_box {
            settings.bounding_box = true;
        }
        if let Some(x) = self.x_offset {
            settings.x_offset = x;
        }
        if let Some(y) = self.y_offset {
            settings.y_offset = y;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_flags() {
        let args = CliArgs::try_parse_from([
            "hpgl-distiller",
            "-i",
            "in.hpgl",
            "-o",
            "/dev/ttyS1",
            "-I",
            "IN;SP1;",
            "-s",
            "2",
            "-b",
            "-x",
            "-40",
            "-y",
            "25",
            "-d",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("in.hpgl")));
        assert_eq!(args.output, Some(PathBuf::from("/dev/ttyS1")));
        assert_eq!(args.init_string.as_deref(), Some("IN;SP1;"));
        assert_eq!(args.slew, Some(2));
        assert!(args.bounding_box);
        assert_eq!(args.x_offset, Some(-40));
        assert_eq!(args.y_offset, Some(25));
        assert!(args.debug);
    }

    #[test]
    fn test_version_flag() {
        let args = CliArgs::try_parse_from(["hpgl-distiller", "-v"]).unwrap();
        assert!(args.version);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_cli_overrides_settings() {
        let settings = Settings {
            slew_ms: 5,
            x_offset: 7,
            ..Default::default()
        };
        let args = CliArgs::try_parse_from(["hpgl-distiller", "-s", "1", "-y", "3"]).unwrap();
        let merged = args.apply_to(settings);
        assert_eq!(merged.slew_ms, 1);
        assert_eq!(merged.x_offset, 7);
        assert_eq!(merged.y_offset, 3);
        assert_eq!(merged.init_string, "IN;PU;");
        assert!(!merged.bounding_box);
    }

    #[test]
    fn test_bounding_box_flag_cannot_clear_settings() {
        let settings = Settings {
            bounding_box: true,
            ..Default::default()
        };
        let args = CliArgs::try_parse_from(["hpgl-distiller"]).unwrap();
        assert!(args.apply_to(settings).bounding_box);
    }
}
