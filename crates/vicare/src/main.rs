use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vicare::integrations::vicare as integration;
use vicare::integrations::vicare::SnapshotDevice;
use vicare::integrations::vicare::ViCareSetup;
use vicare::Config;
use vicare::Engine;

/// Poll a ViCare heating system and expose its readings as sensors.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "vicare.toml")]
    config: PathBuf,

    /// Poll once, print the state as JSON and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(config.logging.filter())
        .init();

    tracing::info!("vicare starting");
    tracing::info!("Loaded config from: {}", args.config.display());

    let device = SnapshotDevice::open(&config.vicare.snapshot).context("Failed to open device")?;
    let setup = ViCareSetup::new(
        config.vicare.name.clone(),
        config.vicare.heating_type,
        Arc::new(device),
    );

    let mut engine = Engine::new();
    integration::setup(&setup, &mut engine);

    if args.once {
        engine.poll().await;
        let state = serde_json::to_string_pretty(&engine.state_snapshot())?;
        println!("{}", state);
        return Ok(());
    }

    tracing::info!("Press Ctrl+C to exit");
    engine.run(config.vicare.scan_interval()).await;

    tracing::info!("vicare shutdown complete");
    Ok(())
}
