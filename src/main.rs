use anyhow::Result;
use landns::{config::Config, sync::RecordSync};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());
    let config = Config::load(&path)?;
    info!(
        "Loaded {} records from {}, pushing to {}",
        config.records.len(),
        path,
        config.endpoint
    );

    RecordSync::from_config(config).run().await
}
