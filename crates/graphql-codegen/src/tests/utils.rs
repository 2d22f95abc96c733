use clap::Parser;
use crate::Cli;
use crate::CommandResult;
use std::path::Path;

pub fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("graphql-codegen").chain(args.iter().copied()))
}

pub async fn run(args: &[&str]) -> CommandResult {
    let mut cli = parse(args).unwrap();
    let command = cli.cmd.take().unwrap();
    command.run(cli).await
}

pub fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}
