//! Out-of-band schema management: `migrate [up|down|status|fresh]`.
//!
//! Reads the same configuration as `server` (config.toml, DATABASE_URL or the
//! POSTGRES_* variables). `up` is the default.

use configs::AppConfig;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Up,
    Down,
    Status,
    Fresh,
}

fn parse_command(arg: Option<&str>) -> anyhow::Result<Command> {
    match arg.unwrap_or("up") {
        "up" => Ok(Command::Up),
        "down" => Ok(Command::Down),
        "status" => Ok(Command::Status),
        "fresh" => Ok(Command::Fresh),
        other => Err(anyhow::anyhow!("unknown command `{other}`; expected up, down, status or fresh")),
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate()?;
    let db = models::db::connect(&cfg.database).await?;
    match command {
        Command::Up => Migrator::up(&db, None).await?,
        // one step at a time
        Command::Down => Migrator::down(&db, Some(1)).await?,
        Command::Status => Migrator::status(&db).await?,
        Command::Fresh => Migrator::fresh(&db).await?,
    }
    info!(service = "migrate", event = "done", ?command, "migration command finished");
    Ok(())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let arg = std::env::args().nth(1);
    let command = match parse_command(arg.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!(service = "migrate", event = "bad_usage", error = %e, "invalid arguments");
            return std::process::ExitCode::from(2);
        }
    };

    match run(command).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "migrate", event = "failed", ?command, error = %e, "migration command failed");
            std::process::ExitCode::FAILURE
        }
    }
}
