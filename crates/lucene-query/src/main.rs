mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_tracing(&cli);

    let Some(command) = cli.cmd.take() else {
        Cli::print_usage();
        return ExitCode::from(CommandResult::USAGE_EXIT_CODE);
    };

    command.run(cli).await.emit()
}

/// Installs the stderr tracing subscriber.
///
/// `--verbose` wins over `LOG_LEVEL`. `LOG_LEVEL` takes any level name
/// `tracing` understands (case-insensitive), plus `VERBOSE` as an alias for
/// `DEBUG`.
fn init_tracing(cli: &Cli) {
    let mut rejected_level: Option<String> = None;
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        match std::env::var("LOG_LEVEL") {
            Ok(raw) => {
                let raw = raw.trim();
                if raw.eq_ignore_ascii_case("verbose") {
                    tracing::Level::DEBUG
                } else {
                    raw.parse::<tracing::Level>().unwrap_or_else(|_| {
                        rejected_level = Some(raw.to_string());
                        DEFAULT_LOG_LEVEL
                    })
                }
            },
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    log::trace!("Query tooling logging at `{level}`.");

    if let Some(raw) = rejected_level {
        log::warn!("Ignoring unrecognized `LOG_LEVEL` value `{raw}`; using `{DEFAULT_LOG_LEVEL}`.");
    }
}
