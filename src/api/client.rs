use crate::record::Record;
use anyhow::Result;
use async_trait::async_trait;

/// A remote store holding a set of records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore {
    /// Replaces the stored set with `records`.
    async fn set(&self, records: &[Record]) -> Result<()>;
    async fn remove(&self, id: u64) -> Result<()>;
    async fn get(&self) -> Result<Vec<Record>>;
    /// Records whose name matches a glob pattern such as `*.example.com.`.
    async fn glob(&self, query: &str) -> Result<Vec<Record>>;
    async fn suffix(&self, query: &str) -> Result<Vec<Record>>;
}
