use crate::Cli;
use crate::CommandResult;
use super::RunnableCommand;
use libgraphql_codegen::render::CodegenConfig;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
#[group(required = true, multiple = true)]
pub(crate) struct ValidateCmd {
    #[arg(
        help="Path to a configuration file to validate.",
        long,
        short='p',
    )]
    path: Option<PathBuf>,

    #[arg(
        help="A configuration, as a JSON string, to validate.",
        long,
        short='j',
    )]
    json: Option<String>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    /// With both `--path` and `--json`, the file is checked first and the
    /// string is only checked if the file is valid.
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut valid_messages = vec![];

        if let Some(path) = self.path {
            log::debug!("Validating the configuration file at {path:#?}...");
            if let Err(failure) = check(super::read_config_file(path.as_path())) {
                return failure;
            }
            valid_messages.push("The configuration file is valid.");
        }

        if let Some(json) = self.json {
            let decoded = CodegenConfig::from_json(json.as_str()).map_err(anyhow::Error::from);
            if let Err(failure) = check(decoded) {
                return failure;
            }
            valid_messages.push("The configuration string is valid.");
        }

        if valid_messages.is_empty() {
            return CommandResult::failure(format_args!("Pass --path, --json, or both."));
        }
        CommandResult::success(format_args!("{}", valid_messages.join("\n")))
    }
}

fn check(decoded: anyhow::Result<CodegenConfig>) -> Result<(), CommandResult> {
    let config = decoded
        .map_err(|err| CommandResult::failure(format_args!("{err:#}")))?;
    config.validate().map_err(|errors| CommandResult::failure_list(
        format_args!("The configuration is invalid:"),
        errors,
    ))
}
