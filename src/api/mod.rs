pub mod client;
pub mod landns;

pub use client::RecordStore;
pub use landns::{LandnsClient, DEFAULT_ENDPOINT};
