use clap::Parser;
use hpgl_distiller::{failure_message, init_logging, run, version_string, CliArgs};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.version {
        eprintln!("{}", version_string());
        return ExitCode::SUCCESS;
    }

    if let Err(e) = init_logging(args.debug) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::from(e.exit_code())
        }
    }
}
