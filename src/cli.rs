//! Command line for the engine binary and observation input reading.

use crate::validation::ObservationInput;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "sfas-engine")]
#[command(about = "Flood risk scoring for operator-entered observations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Engine configuration file
    #[arg(long, env = "SFAS_CONFIG_PATH", default_value = "config.json", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Observation JSON file (reads stdin when omitted; use `./locations` for a file of that name)
    pub observation: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List the monitored locations, one JSON line each
    Locations,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read observation {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid observation in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read an observation from `path`, or stdin when `None`.
pub fn read_observation(path: Option<&Path>) -> Result<ObservationInput, InputError> {
    let (origin, data) = match path {
        Some(path) => {
            let origin = path.display().to_string();
            let data = std::fs::read_to_string(path).map_err(|source| InputError::Read {
                path: origin.clone(),
                source,
            })?;
            (origin, data)
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| InputError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            ("<stdin>".to_string(), buf)
        }
    };
    serde_json::from_str(&data).map_err(|source| InputError::Parse { origin, source })
}
