use chrono::NaiveDate;
use std::collections::BTreeSet;
use thiserror::Error;

pub type HolidaySet = BTreeSet<NaiveDate>;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("holiday API key is not configured")]
    MissingApiKey,
    #[error("holiday request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("holiday API returned HTTP {0}")]
    Status(u16),
    #[error("holiday API error {code}: {message}")]
    Api { code: u16, message: String },
    #[error("malformed holiday payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("invalid holiday date: {0}")]
    InvalidDate(String),
}
