//! SFAS engine entrypoint: scores one observation and prints the dashboard report as a JSON line.

use clap::Parser;
use sfas_engine::{
    cli::{read_observation, Cli, Commands},
    config::EngineConfig,
    dashboard::Dashboard,
    logging::StructuredLogger,
    reference::{FloodRepository, ReferenceCatalog},
    risk::RiskEngine,
    session::Session,
};
use std::path::Path;
use tracing::info;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn run<R: FloodRepository>(config: &EngineConfig, repository: R, observation: Option<&Path>) -> Result<(), BoxError> {
    let session = Session::sign_in(&config.operator.username, &config.operator.passcode)?;
    let dashboard = Dashboard::new(session, RiskEngine::new(repository));

    let input = read_observation(observation)?;
    let report = dashboard.submit(&input)?;

    let stdout = std::io::stdout();
    StructuredLogger::emit_json(&report, &mut stdout.lock())?;
    Ok(())
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let config = EngineConfig::load(&cli.config);

    StructuredLogger::init(config.log.json, &config.log.level);
    info!(config = %cli.config.display(), "SFAS engine starting");

    let catalog = match &config.catalog.path {
        Some(path) => ReferenceCatalog::from_json_file(path)?,
        None => ReferenceCatalog::builtin(),
    };

    match cli.command {
        Some(Commands::Locations) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for location in catalog.locations() {
                StructuredLogger::emit_json(location, &mut out)?;
            }
            Ok(())
        }
        None => run(&config, &catalog, cli.observation.as_deref()),
    }
}
