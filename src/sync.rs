use crate::api::{LandnsClient, RecordStore};
use crate::config::Config;
use crate::record::Record;
use anyhow::{Context, Result};
use log::{error, info};
use tokio::time::{sleep, Duration};

/// Keeps a fixed set of records present on a record store.
pub struct RecordSync<S> {
    store: S,
    records: Vec<Record>,
    update_interval: Duration,
}

impl RecordSync<LandnsClient> {
    pub fn from_config(config: Config) -> Self {
        let store = LandnsClient::new(&config.endpoint);
        Self::new(
            store,
            config.records,
            Duration::from_secs(config.update_interval.saturating_mul(60)),
        )
    }
}

impl<S: RecordStore + Sync> RecordSync<S> {
    pub fn new(store: S, records: Vec<Record>, update_interval: Duration) -> Self {
        Self {
            store,
            records,
            update_interval,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    /// Pushes the configured records unless the store already holds all of
    /// them. Returns whether anything was sent.
    pub async fn sync_once(&self) -> Result<bool> {
        let current = self
            .store
            .get()
            .await
            .context("Failed to fetch current records")?;

        let missing = self
            .records
            .iter()
            .filter(|record| !current.contains(record))
            .count();
        if missing == 0 {
            info!("Records already up to date");
            return Ok(false);
        }

        info!("{} of {} records missing, updating", missing, self.records.len());
        self.store
            .set(&self.records)
            .await
            .context("Failed to update records")?;

        info!("Records updated successfully");
        Ok(true)
    }

    pub async fn run(&self) -> Result<()> {
        loop {
            if let Err(e) = self.sync_once().await {
                error!("Error updating records: {:#}", e);
            }
            sleep(self.update_interval).await;
        }
    }
}
