use std::path::Path;

use clap::Parser;
use khabar_config::AppConfig;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod cli;
mod runner;

use self::cli::{Cli, Mode};
use self::runner::Runner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if cli.mode() == Mode::CreateConfig {
        AppConfig::write_sample(&cli.config)?;
        println!("Sample {} created. Update it with your server details.", cli.config);
        return Ok(());
    }

    let mut config = AppConfig::load(&cli.config)?;
    cli.apply_overrides(&mut config);

    // batch mode works offline and does not need a reachable server
    if cli.mode() != Mode::Batch {
        config.validate()?;
    }

    let runner = Runner::new(config)?;

    match cli.mode() {
        Mode::Single => runner.run_single().await?,
        Mode::Tokenize => runner.run_tokenize().await?,
        Mode::Batch => runner.run_batch(Path::new(&cli.input_dir))?,
        Mode::Monitor => {
            let shutdown = async {
                signal::ctrl_c().await.expect("failed to listen for ctrl+c");
            };

            tokio::select! {
                result = runner.run_monitor() => result?,
                _ = shutdown => {
                    tracing::info!("Shutdown requested");
                }
            }
        }
        Mode::CreateConfig => unreachable!("handled above"),
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();
}
