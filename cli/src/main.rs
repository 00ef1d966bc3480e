mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, plan, status, toggle};
use terminal::{logging, print};
use tracing::error;

/// Exit status 1 reports a failed toggle. Usage errors never get here:
/// clap rejects them while parsing and exits with 2.
fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = commands.config();
    let dry_run = commands.dry_run;

    let result = match &commands.command {
        Commands::Start { model, address, node, .. } => {
            print::header("starting ad-hoc network", cfg.quiet);
            toggle::start(model, address.as_deref(), *node, &cfg, dry_run)
        }
        Commands::Stop { model, .. } => {
            print::header("stopping ad-hoc network", cfg.quiet);
            toggle::stop(model, &cfg, dry_run)
        }
        Commands::Status { model } => {
            print::header("interface status", cfg.quiet);
            status::status(model, &cfg)
        }
        Commands::Plan { action, model, address } => {
            print::header(&format!("{action} plan"), cfg.quiet);
            plan::plan(*action, model, address.as_deref(), &cfg)
        }
    };

    finish(result, cfg.quiet)
}

/// Reports the failure, if any, above the closing separator.
fn finish(result: anyhow::Result<()>, q_level: u8) -> ExitCode {
    let code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    };

    print::end_of_program(q_level);
    code
}
