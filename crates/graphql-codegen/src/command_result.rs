use std::fmt::Display;
use std::process::ExitCode;

const GREEN_CHECK: &str = "\u{2705}";
const RED_X: &str = "\u{274c}";

/// What a subcommand reports back to the terminal once it finishes.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn failure(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{RED_X} {fmt_args}")),
            stdout: None,
        }
    }

    /// A failure headed by `fmt_args` and followed by one bulleted line per
    /// item.
    pub fn failure_list<I>(fmt_args: std::fmt::Arguments<'_>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let bullets = items.into_iter()
            .map(|item| format!("\n  * {item}"))
            .collect::<String>();
        Self::failure(format_args!("{fmt_args}{bullets}"))
    }

    /// Plain output with no status marker, for text meant to be piped.
    pub fn raw(text: String) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(text),
        }
    }

    pub fn success(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{GREEN_CHECK} {fmt_args}")),
        }
    }

    pub fn emit(self) -> ExitCode {
        if let Some(stdout) = self.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = self.stderr {
            eprintln!("{stderr}");
        }
        self.exit_code
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == ExitCode::SUCCESS
    }
}
