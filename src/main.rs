use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use trailcart::application::engine::CartEngine;
use trailcart::domain::cart::Cart;
use trailcart::domain::ports::PresenterBox;
use trailcart::infrastructure::terminal::TerminalPresenter;
use trailcart::interfaces::csv::event_reader::EventReader;
use trailcart::interfaces::json::seed_reader::SeedReader;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed cart JSON file
    seed: PathBuf,

    /// Optional CSV stream of cart events to apply after the initial render
    #[arg(long)]
    events: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let seed = File::open(&cli.seed).into_diagnostic()?;
    let items = SeedReader::new(seed).items().into_diagnostic()?;
    let cart = Cart::from_items(items).into_diagnostic()?;

    let presenter: PresenterBox = Box::new(TerminalPresenter::stdout());
    let mut engine = CartEngine::new(cart, presenter);

    // Initial render, before any events arrive
    engine.refresh().await.into_diagnostic()?;

    if let Some(events) = cli.events {
        let file = File::open(events).into_diagnostic()?;
        let reader = EventReader::new(file);
        for event_result in reader.events() {
            match event_result {
                Ok(event) => {
                    if let Err(e) = engine.apply(event).await {
                        eprintln!("Error applying event: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("Error reading event: {}", e);
                }
            }
        }
    }

    Ok(())
}
