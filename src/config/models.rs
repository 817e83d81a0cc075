use crate::api::DEFAULT_ENDPOINT;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

fn default_endpoint() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_ENDPOINT)
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    #[validate(length(min = 1, message = "Endpoint cannot be empty"))]
    pub endpoint: Cow<'static, str>,

    // minutes, at most one year
    #[validate(range(
        min = 1,
        max = 525_600,
        message = "Update interval must be between 1 and 525600 minutes"
    ))]
    pub update_interval: u64,

    /// Each entry is one record line, e.g. `router.lan. 600 IN A 192.168.1.1`.
    #[validate(length(min = 1, message = "At least one record is required"))]
    pub records: Vec<Record>,
}
