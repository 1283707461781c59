use std::process::ExitCode;

use bankrank_scheduler::{build_scheduler, init_tracing, Config, TriggerOutcome};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bankrank", version, about = "Scheduled large bank ranking scraper")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run on the cron schedule until interrupted (default)
    Start,
    /// Run the pipeline once, now
    RunNow,
    /// Print the schedule and the next firing time
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing();
    let scheduler = build_scheduler(&config)?;

    match cli.command.unwrap_or(Command::Start) {
        Command::Start => {
            let task = scheduler.clone().start();
            tokio::signal::ctrl_c().await?;
            tracing::info!("Shutting down scheduler");
            task.abort();
            Ok(ExitCode::SUCCESS)
        }
        Command::RunNow => match scheduler.run_now().await {
            TriggerOutcome::Completed(outcome) => {
                println!(
                    "Scrape completed: {} banks, {} changes",
                    outcome.bank_count(),
                    outcome.changes.len()
                );
                Ok(ExitCode::SUCCESS)
            }
            TriggerOutcome::Failed(e) => {
                eprintln!("Scrape failed: {}", e);
                Ok(ExitCode::FAILURE)
            }
            TriggerOutcome::Skipped => {
                eprintln!("A scrape is already running");
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Status => {
            let status = scheduler.status();
            println!("{}", serde_json::to_string_pretty(&status)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
