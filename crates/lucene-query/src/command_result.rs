use std::process::ExitCode;

/// Output and exit status of one CLI command.
///
/// Exit codes:
/// - `0`: every query parsed.
/// - `1`: at least one query has a syntax error.
/// - `2`: the command could not run (bad arguments, unreadable files).
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: u8,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub const SYNTAX_ERROR_EXIT_CODE: u8 = 1;
    pub const USAGE_EXIT_CODE: u8 = 2;

    pub fn success(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: 0,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// One or more queries were rejected by the parser.
    pub fn syntax_errors(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: Self::SYNTAX_ERROR_EXIT_CODE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    /// The command could not inspect its inputs.
    pub fn unusable_input(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: Self::USAGE_EXIT_CODE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    /// Writes the captured output and returns the process exit code.
    pub fn emit(self) -> ExitCode {
        if let Some(stdout) = self.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = self.stderr {
            eprintln!("{stderr}");
        }
        ExitCode::from(self.exit_code)
    }
}
