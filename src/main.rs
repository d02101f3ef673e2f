// Standard library imports
use std::path::Path;

// External crate imports
use anyhow::Result;
use dotenv::dotenv;
use log::{error, info, warn};
use tokio::select;
use tokio::time::{interval, Duration};

// Internal crate imports
use mqp_simulator::config_loader::AppConfig;
use mqp_simulator::domain::errors::SimulationError;
use mqp_simulator::domain::model::layer::LayerBook;
use mqp_simulator::domain::model::level::PriceLevel;
use mqp_simulator::infrastructure::exchange::thalex::{LadderParser, ThalexRestClient};
use mqp_simulator::infrastructure::persistence;
use mqp_simulator::presentation::render_ladder;
use mqp_simulator::simulation::{apply_layers, EngineParams, RewardParams};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();
    info!("Logger initialized");

    // Load configuration, falling back to defaults when no file is present
    let config_path = Path::new("./config.toml");
    let config = match AppConfig::from_file(config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!(
                "Failed to load config from {}: {}. Using defaults",
                config_path.display(),
                e
            );
            AppConfig::default()
        }
    };

    run_simulation(config).await
}

/// Main refresh loop: fetch a book snapshot, apply the persisted layers and
/// render both the raw and the layered ladder until Ctrl+C.
async fn run_simulation(config: AppConfig) -> Result<()> {
    let client = ThalexRestClient::new(&config.thalex.base_url, &config.thalex.instrument)?;

    let layers = match persistence::load_layers(&config.simulation.layers_path) {
        Ok(layers) => layers,
        Err(e) => {
            warn!("{}. Continuing with an empty layer configuration", e);
            LayerBook::default()
        }
    };
    if layers.is_empty() {
        info!("No layers configured; the updated book will match the feed");
    }

    let params = EngineParams {
        tick_size: config.simulation.tick_size,
        ..EngineParams::default()
    };
    let rewards = RewardParams::default();

    let mut last_snapshot: Option<Vec<PriceLevel>> = None;
    let mut refresh = interval(Duration::from_secs(config.simulation.refresh_secs.max(1)));

    loop {
        select! {
            _ = refresh.tick() => {
                let base = match fetch_snapshot(&client, config.thalex.depth).await {
                    Ok(ladder) => ladder,
                    Err(e) => {
                        error!("Failed to fetch orderbook: {}", e);
                        match &last_snapshot {
                            Some(previous) => previous.clone(),
                            None => {
                                warn!("No previous snapshot available, using mock data");
                                LadderParser::mock_ladder()
                            }
                        }
                    }
                };

                match simulate(&base, &layers, &params) {
                    Ok((scored_base, layered)) => {
                        println!("Last updated: {}\n", chrono::Local::now().format("%H:%M:%S"));
                        println!(
                            "{}",
                            render_ladder(
                                &format!("Thalex {} orderbook", config.thalex.instrument),
                                &scored_base,
                                &rewards,
                            )
                        );
                        println!(
                            "{}",
                            render_ladder("Updated orderbook with additional quotes", &layered, &rewards)
                        );
                    }
                    Err(e) => error!("Simulation failed: {}", e),
                }

                last_snapshot = Some(base);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("SIGINT (Ctrl+C) received. Exiting");
                break;
            }
        }
    }

    Ok(())
}

async fn fetch_snapshot(client: &ThalexRestClient, depth: usize) -> Result<Vec<PriceLevel>> {
    let book = client.fetch_book().await?;
    Ok(LadderParser::ladder_from_book(&book, depth)?)
}

/// Score the raw snapshot (a no-op layering pass) and the layered book.
fn simulate(
    base: &[PriceLevel],
    layers: &LayerBook,
    params: &EngineParams,
) -> Result<(Vec<PriceLevel>, Vec<PriceLevel>), SimulationError> {
    let scored_base = apply_layers(base, &[], &[], params)?;
    let layered = apply_layers(base, &layers.bid_layers, &layers.ask_layers, params)?;
    Ok((scored_base, layered))
}
