use clap::CommandFactory;
use crate::commands;

/// Parse and check queries written in the standard Lucene query syntax.
#[derive(clap::Parser, Debug)]
#[command(name = "lucene-query", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log parser decisions (at DEBUG level) to stderr.",
        long,
        short='v',
        global=true,
    )]
    pub verbose: bool,
}
impl Cli {
    /// Prints the long help to stderr when no subcommand was given.
    pub(crate) fn print_usage() {
        eprintln!("{}", Self::command().render_long_help());
    }
}
