use std::{path::PathBuf, process::ExitCode};

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use colored::Colorize;
use domain_maintenance::{
    model::entity::{EquipmentId, RequestId, StageId, User},
    repository::{RequestRepo, StageRepo},
};
use tracing::{info, warn};

use crate::{
    infrastructure::{build_config, initialize_telemetry, ConsoleConfig, OutputFormat, ServiceProvider},
    render,
};

#[derive(Parser, Debug)]
#[command(name = "gearguard-console", version)]
#[command(about = "GearGuard maintenance board in the terminal")]
#[command(
    after_help = "Environment:\n  GEARGUARD__<SECTION>__<KEY>   Overrides a configuration value"
)]
pub struct Cli {
    /// Yaml file layered over ./config.yaml
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Board)
    }
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Kanban board of every stage, the default view
    Board,
    Analytics,
    /// Scheduled preventive maintenance
    Calendar,
    Stats,
    /// Machines with their open request counts
    Equipment {
        /// Include scrapped equipment
        #[arg(long)]
        all: bool,
    },
    /// Moves a request onto a stage column
    Move { request_id: RequestId, stage_id: StageId },
    Start { request_id: RequestId },
    Complete { request_id: RequestId },
    Scrap { request_id: RequestId },
    ScrapEquipment { equipment_id: EquipmentId },
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.selected_command();
    let config = build_config(cli.config.as_deref())
        .and_then(|c| Ok(c.try_deserialize::<ConsoleConfig>()?));
    let config = match config {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Cannot build config".red());
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = initialize_telemetry(config.telemetry()) {
        eprintln!("{}: {e}", "Cannot build logger".red());
        return ExitCode::FAILURE;
    }
    let provider = match ServiceProvider::build(config) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Cannot build Service Provider".red());
            return ExitCode::FAILURE;
        }
    };

    let user = match sign_in(&provider).await {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Cannot sign in".red());
            return ExitCode::FAILURE;
        }
    };
    info!("Running {command:?} as {}.", user.email);

    let result = execute(&provider, command).await;
    provider.session_service().logout().await;
    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e:#}", "Failed".red());
            ExitCode::FAILURE
        }
    }
}

/// Stored token first, configured credentials otherwise.
async fn sign_in(provider: &ServiceProvider) -> anyhow::Result<User> {
    match provider.session_service().restore().await {
        Ok(Some(user)) => return Ok(user),
        Ok(None) => {}
        Err(e) => warn!("Configured token is no longer accepted: {e}"),
    }
    let (email, password) = provider
        .config()
        .auth()
        .credentials()
        .ok_or_else(|| anyhow!("no token or credentials configured, set auth.email and auth.password"))?;
    Ok(provider.session_service().login(email, password).await?)
}

async fn execute(provider: &ServiceProvider, command: Command) -> anyhow::Result<String> {
    let format = *provider.config().output();
    match command {
        Command::Board => {
            let board = provider.board_service().refresh().await?;
            output(format, &board, render::board)
        }
        Command::Analytics => {
            let analytics = provider.analytics_service().analytics().await?;
            output(format, &analytics, render::analytics)
        }
        Command::Calendar => {
            let events = provider.calendar_service().events().await?;
            output(format, &events, |events: &Vec<_>| render::calendar(events))
        }
        Command::Stats => {
            let stats = provider.analytics_service().dashboard_stats().await?;
            output(format, &stats, render::stats)
        }
        Command::Equipment { all } => {
            let overview = provider.equipment_service().overview(!all).await?;
            output(format, &overview, |overview: &Vec<_>| render::equipment(overview))
        }
        Command::Move {
            request_id,
            stage_id,
        } => {
            let board = provider.board_service().move_request(request_id, stage_id).await?;
            output(format, &board, render::board)
        }
        Command::Start { request_id }
        | Command::Complete { request_id }
        | Command::Scrap { request_id } => {
            let client = provider.client();
            let (request, stages) =
                tokio::try_join!(client.get_request(request_id), client.list_stages())?;
            let workflow = provider.workflow_service();
            let request = match command {
                Command::Start { .. } => workflow.start(&request, &stages).await?,
                Command::Complete { .. } => workflow.complete(&request, &stages).await?,
                _ => workflow.scrap(&request, &stages).await?,
            };
            output(format, &request, |request| render::moved(request, &stages))
        }
        Command::ScrapEquipment { equipment_id } => {
            let equipment = provider.equipment_service().scrap(equipment_id).await?;
            output(format, &equipment, render::scrapped)
        }
    }
}

fn output<T, F>(format: OutputFormat, value: &T, text: F) -> anyhow::Result<String>
where
    T: serde::Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => render::json(value).map(|json| json + "\n"),
    }
}
