use std::io::{self, ErrorKind};
use std::process::ExitCode;

use clap::Parser;

use stockroom_cli::source::load_manager;
use stockroom_cli::{CliArgs, Console, Controller};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    stockroom_observability::init(args.log_format);

    let manager = match load_manager(&args) {
        Ok(manager) => manager,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "startup failed");
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut controller = Controller::new(manager, console);

    match controller.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
            tracing::info!("input closed; ending session");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
