mod generate;
mod init;
mod validate;

use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;
use init::InitCmd;
use libgraphql_codegen::render::CodegenConfig;
use std::path::Path;
use validate::ValidateCmd;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-codegen")]
pub(crate) enum CommandEnum {
    /// Generate Swift files from the configured schema and documents.
    Generate(Box<GenerateCmd>),

    /// Write a default configuration file.
    Init(Box<InitCmd>),

    /// Check that a configuration can be decoded and is valid.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Init(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

fn read_config_file(path: &Path) -> anyhow::Result<CodegenConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read the configuration file at {path:#?}"))?;
    CodegenConfig::from_json(json.as_str())
        .with_context(|| format!("Failed to decode the configuration file at {path:#?}"))
}
