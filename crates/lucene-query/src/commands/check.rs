use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use anyhow::Context;
use lucene_query_parser::LuceneParser;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_value="body",
        help="Field that clauses without an explicit `field:` prefix are \
             scoped to.",
        long,
    )]
    default_field: String,

    #[arg(
        default_values_t=[
            "lucene".to_string(),
            "lq".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    query_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more query files, or directories containing \
             query files, to check. Each non-empty line not starting with \
             `#` is parsed as one query.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// Outcome of checking the queries in one file.
#[derive(Debug, Default)]
struct FileReport {
    num_queries: usize,
    failures: Vec<String>,
}

impl CheckCmd {
    /// Collects the files to check at or under each path argument.
    fn collect_file_paths(
        &self,
        errors: &mut Vec<anyhow::Error>,
    ) -> (Vec<PathBuf>, usize) {
        // Normalize the set of file extensions to filter with
        let query_file_exts: HashSet<String> =
            self.query_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        let matches_ext = path
                            .extension()
                            .is_some_and(|ext| query_file_exts.contains(&*ext.to_string_lossy()));
                        if matches_ext {
                            log::trace!("Found query file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            num_skipped += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(anyhow::Error::new(e).context(format!(
                            "failed to scan {}",
                            path.display(),
                        )));
                    },
                }
            }
        }

        // A single explicit file argument is checked whatever its extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --query-file-exts ({}).",
                query_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.clone());
            num_skipped = num_skipped.saturating_sub(1);
        }

        (file_paths, num_skipped)
    }

    /// Parses every query line of the file at `path`.
    fn check_file(&self, path: &Path) -> anyhow::Result<FileReport> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let mut report = FileReport::default();
        for (line_idx, line) in contents.lines().enumerate() {
            let query = line.trim();
            if query.is_empty() || query.starts_with('#') {
                continue;
            }
            report.num_queries += 1;

            let parser = LuceneParser::with_file_path(line, path);
            if let Err(err) = parser.parse(&self.default_field) {
                log::debug!("{}", err.format_detailed(None));
                report.failures.push(format!(
                    "{}:{}:{}: error: {}",
                    path.display(),
                    line_idx + 1,
                    err.span().start_inclusive.col_utf8() + 1,
                    err.message(),
                ));
            }
        }
        Ok(report)
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];
        let (file_paths, num_skipped) = self.collect_file_paths(&mut errors);
        log::debug!("Found {} query files to check.", file_paths.len());

        let mut num_queries = 0;
        let mut failures: Vec<String> = vec![];
        for path in &file_paths {
            match self.check_file(path) {
                Ok(report) => {
                    num_queries += report.num_queries;
                    failures.extend(report.failures);
                },
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            let mut lines: Vec<String> = errors
                .iter()
                .map(|e| format!("error: {e:#}"))
                .collect();
            lines.extend(failures.iter().cloned());
            return CommandResult::unusable_input(format_args!(
                "{} {} paths could not be checked:\n{}",
                output_utils::RED_X,
                errors.len(),
                lines.join("\n"),
            ));
        }

        if !failures.is_empty() {
            return CommandResult::syntax_errors(format_args!(
                "{} {} of {num_queries} queries failed to parse:\n{}",
                output_utils::RED_X,
                failures.len(),
                failures.join("\n"),
            ));
        }

        CommandResult::success(format_args!(
            concat!(
                "{} All queries parsed successfully:\n",
                "  * Checked {} files.\n",
                "  * Skipped {} non-query files.\n",
                "  * Parsed {} queries.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped,
            num_queries,
        ))
    }
}
