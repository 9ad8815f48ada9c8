use std::process::ExitCode;

use log::error;
use sir::Parameters;
use sir_runner::{Environment, logging, run::run};

fn main() -> ExitCode {
    if let Err(e) = logging::init_logging() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let result = Environment::<Parameters>::load().and_then(|env| run(&env));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
