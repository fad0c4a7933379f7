use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use fingerswipe_core::SwipeEngine;
use miette::Result;

use fingerswipe_server::cli::{Cli, Commands};
use fingerswipe_server::{replay, udp, ActionMap, DriverError, FrameDriver, JsonLineSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let config = cli.engine.engine_config()?;
    let engine = SwipeEngine::new(config)
        .map_err(DriverError::from)?
        .with_reap_policy(cli.engine.reap_policy());
    let mut driver = FrameDriver::new(engine, ActionMap::default(), cli.engine.tracked());
    let mut sink = JsonLineSink::new(io::stdout().lock());

    match cli.command {
        Commands::Replay { input } => {
            if input.as_os_str() == "-" {
                replay(io::stdin().lock(), &mut driver, &mut sink)?;
            } else {
                let file = File::open(&input).map_err(DriverError::from)?;
                replay(BufReader::new(file), &mut driver, &mut sink)?;
            }
        }
        Commands::Listen { bind } => {
            let socket = udp::bind(bind).await?;
            udp::listen(socket, &mut driver, &mut sink).await?;
        }
    }

    Ok(())
}
