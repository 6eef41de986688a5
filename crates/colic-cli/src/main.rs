//! Equine colic outcome encoder CLI.

use clap::Parser;
use tracing::error;

use colic_cli::cli::{Cli, Command};
use colic_cli::commands::{run_decode, run_encode, run_features, run_predict};
use colic_cli::failure::Failure;
use colic_cli::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Features(args) => run_features(args),
        Command::Decode(args) => run_decode(args),
        Command::Encode(args) => run_encode(args),
        Command::Predict(args) => run_predict(args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            let failure = Failure::classify(&error);
            error!("command failed: {error:#}");
            eprintln!("error: {failure}");
            match failure {
                Failure::Parameters => 2,
                Failure::Internal => 1,
            }
        }
    };
    std::process::exit(exit_code);
}
