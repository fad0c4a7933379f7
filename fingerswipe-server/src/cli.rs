//! Command-Line Interface

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use fingerswipe_core::{EngineConfig, EntityId, ReapPolicy};

use crate::error::DriverError;

/// Classify swipe gestures from a stream of landmark observations
#[derive(Parser, Debug)]
#[command(name = "fingerswipe-server")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded stream of JSON-line frames ("-" for stdin)
    Replay {
        input: PathBuf,
    },

    /// Receive frames as UDP datagrams
    Listen {
        #[arg(short, long, default_value = "127.0.0.1:5005")]
        bind: SocketAddr,
    },
}

/// Engine configuration; flags override the config file
#[derive(Args, Debug, Default)]
pub struct EngineArgs {
    /// JSON file with engine thresholds (camelCase keys)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Entity ids to detect swipes for (default: every id seen)
    #[arg(short, long, global = true, value_delimiter = ',')]
    pub track: Vec<u32>,

    #[arg(long, global = true)]
    pub max_points: Option<usize>,

    /// Minimum displacement in pixels
    #[arg(long, global = true)]
    pub min_distance: Option<f64>,

    /// Minimum average speed in pixels per second
    #[arg(long, global = true)]
    pub min_velocity: Option<f64>,

    /// Seconds without updates before a trail is reaped
    #[arg(long, global = true)]
    pub trail_timeout: Option<f64>,

    /// Seconds between two swipes of the same entity
    #[arg(long, global = true)]
    pub swipe_cooldown: Option<f64>,

    #[arg(long, global = true)]
    pub min_smoothness: Option<f64>,

    /// Forget stale entities entirely, resetting their cooldown
    #[arg(long, global = true)]
    pub forget_stale: bool,
}

impl EngineArgs {
    /// Defaults, then the config file, then individual flags
    pub fn engine_config(&self) -> Result<EngineConfig, DriverError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => EngineConfig::default(),
        };

        if let Some(v) = self.max_points {
            config.max_points = v;
        }
        if let Some(v) = self.min_distance {
            config.min_distance = v;
        }
        if let Some(v) = self.min_velocity {
            config.min_velocity = v;
        }
        if let Some(v) = self.trail_timeout {
            config.trail_timeout = v;
        }
        if let Some(v) = self.swipe_cooldown {
            config.swipe_cooldown = v;
        }
        if let Some(v) = self.min_smoothness {
            config.min_smoothness = v;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn reap_policy(&self) -> ReapPolicy {
        if self.forget_stale {
            ReapPolicy::Forget
        } else {
            ReapPolicy::ClearSamples
        }
    }

    pub fn tracked(&self) -> Vec<EntityId> {
        self.track.iter().copied().map(EntityId::from).collect()
    }
}

pub fn load_config(path: &Path) -> Result<EngineConfig, DriverError> {
    let text = fs::read_to_string(path).map_err(|source| DriverError::ConfigFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DriverError::ConfigSyntax {
        path: path.to_path_buf(),
        source,
    })
}
