use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use lucene_query_parser::LuceneParser;
use lucene_query_parser::ast::AstNode;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// The syntax tree, pretty-printed with `{:#?}`.
    Debug,
    /// Normalized query syntax that parses back to the same tree.
    Canonical,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        default_value="body",
        help="Field that clauses without an explicit `field:` prefix are \
             scoped to.",
        long,
    )]
    default_field: String,

    #[arg(
        default_value="debug",
        help="How to print the parsed query.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        help="The query to parse.",
        name="QUERY",
        required=true,
    )]
    query: String,
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        log::debug!(
            "Parsing {} byte query with default field `{}`.",
            self.query.len(),
            self.default_field,
        );

        match LuceneParser::new(&self.query).parse(&self.default_field) {
            Ok(root) => match self.format {
                OutputFormat::Debug => CommandResult::success(format_args!("{root:#?}")),
                OutputFormat::Canonical => {
                    CommandResult::success(format_args!("{}", root.to_source(None)))
                },
            },

            Err(err) => CommandResult::syntax_errors(format_args!(
                "{} {}",
                output_utils::RED_X,
                err.format_detailed(None),
            )),
        }
    }
}
