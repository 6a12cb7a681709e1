mod cli;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    if let Err(why) = cli::logging::init(args.log_level()) {
        eprintln!("failed to initialize logging: {why}");
        return ExitCode::FAILURE;
    }

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            log::error!("{why}");
            log::logger().flush();
            ExitCode::FAILURE
        }
    }
}
