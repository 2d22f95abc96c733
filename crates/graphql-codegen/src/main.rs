mod cli;
mod command_result;
mod commands;
mod logging;

#[cfg(test)]
mod tests;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command_result::CommandResult;
pub(crate) use commands::RunnableCommand;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.cmd.take() {
        Some(command) => command.run(cli).await.emit(),
        None => match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => CommandResult::failure(format_args!("{err:#}")).emit(),
        },
    }
}
