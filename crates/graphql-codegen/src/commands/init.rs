use crate::Cli;
use crate::CommandResult;
use super::RunnableCommand;
use libgraphql_codegen::render::CodegenConfig;
use libgraphql_codegen::render::DEFAULT_CONFIG_FILE_PATH;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum InitOutput {
    File,
    Print,
}

#[derive(Debug, clap::Args)]
pub(crate) struct InitCmd {
    #[arg(
        default_value_t=InitOutput::File,
        help="Whether to write the configuration to a file or print it.",
        long,
        short='o',
        value_enum,
    )]
    output: InitOutput,

    #[arg(
        default_value=DEFAULT_CONFIG_FILE_PATH,
        help="Where to write the configuration file.",
        long,
        short='p',
    )]
    path: PathBuf,

    #[arg(
        help="Replace an existing file at --path.",
        long,
        short='w',
    )]
    overwrite: bool,
}

#[inherent::inherent]
impl RunnableCommand for InitCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let json = match CodegenConfig::default_for_init().to_json_pretty() {
            Ok(json) => json,
            Err(err) => return CommandResult::failure(format_args!(
                "Failed to encode the default configuration: {err}",
            )),
        };

        if self.output == InitOutput::Print {
            return CommandResult::raw(json);
        }

        let path = self.path.as_path();
        if path.exists() && !self.overwrite {
            return CommandResult::failure(format_args!(
                "A file already exists at {path:#?}. Pass --overwrite to \
                replace it.",
            ));
        }

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            if let Err(err) = std::fs::create_dir_all(parent) {
                return CommandResult::failure(format_args!(
                    "Failed to create {parent:#?}: {err}",
                ));
            }
        }

        log::debug!("Writing the default configuration to {path:#?}...");
        match std::fs::write(path, format!("{json}\n")) {
            Ok(()) => CommandResult::success(format_args!(
                "New configuration output to {path:#?}.",
            )),
            Err(err) => CommandResult::failure(format_args!(
                "Failed to write {path:#?}: {err}",
            )),
        }
    }
}
