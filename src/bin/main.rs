use dotenvy::dotenv;
use ethers::providers::Middleware;
use tracing::{error, info, warn};

use campaign_factory::{init, FactoryConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = FactoryConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    // Abort startup if the handle cannot be bound
    let factory = init(&config).map_err(|e| {
        error!("Failed to initialize CampaignFactory: {}", e);
        e
    })?;

    println!("CampaignFactory at {:?}", factory.address());
    println!("   Functions: {}", factory.function_names().join(", "));
    if !factory.event_names().is_empty() {
        println!("   Events: {}", factory.event_names().join(", "));
    }

    // First network round trip, only after the handle is bound
    match factory.client().get_code(factory.address(), None).await {
        Ok(code) if code.is_empty() => {
            warn!("No contract code at {:?} on {}", factory.address(), config.rpc_url)
        }
        Ok(code) => info!("Contract deployed ({} bytes of code)", code.len()),
        Err(e) => warn!("Could not reach {}: {}", config.rpc_url, e),
    }

    Ok(())
}
