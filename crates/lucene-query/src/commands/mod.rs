mod check;
mod parse;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use parse::ParseCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "lucene-query")]
pub(crate) enum CommandEnum {
    /// Parse a single query and print its syntax tree.
    Parse(Box<ParseCmd>),

    /// Parse every query in one or more files.
    Check(Box<CheckCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Check(cmd) => cmd.run(cli).await,
        }
    }
}
