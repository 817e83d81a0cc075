//! Client library for the Landns dynamic record API.
//!
//! The [`record`] module holds the record model and its text codec; [`api`]
//! moves record documents to and from a server.

pub mod api;
pub mod config;
pub mod error;
pub mod record;
pub mod sync;

pub use api::{LandnsClient, RecordStore};
pub use error::InvalidRecord;
pub use record::{format_records, parse_records, Record, RecordData, RecordType, DEFAULT_TTL};

#[cfg(test)]
mod tests;
