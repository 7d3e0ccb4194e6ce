use clap::Parser;
use waha_dashboard::errors::ErrorHandler;
use waha_dashboard::structs::cli::Cli;
use waha_dashboard::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        return Err(e.into());
    }

    Ok(())
}
