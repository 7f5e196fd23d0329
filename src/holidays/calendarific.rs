use super::{HolidayProvider, HolidaySet, ProviderError};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_HOLIDAY_API_URL: &str = "https://calendarific.com/api/v2/holidays";

/// Client Calendarific (GET `?api_key=..&country=..&year=..`).
///
/// La clé d'API est une valeur de configuration passée à la construction.
#[derive(Debug, Clone)]
pub struct CalendarificProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CalendarificProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_HOLIDAY_API_URL.to_string(),
            api_key,
        }
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl HolidayProvider for CalendarificProvider {
    fn public_holidays(&self, country_code: &str, year: i32) -> Result<HolidaySet, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ProviderError::MissingApiKey)?;

        let year = year.to_string();
        tracing::debug!(url = %self.base_url, country = country_code, %year, "fetching public holidays");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("api_key", api_key),
                ("country", country_code),
                ("year", year.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }
        let body = response.text()?;
        parse_holidays(&body)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    response: Value,
}

#[derive(Debug, Deserialize)]
struct Meta {
    code: u16,
    #[serde(default)]
    error_type: Option<String>,
    #[serde(default)]
    error_detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    holidays: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    date: EntryDate,
}

#[derive(Debug, Deserialize)]
struct EntryDate {
    iso: String,
}

/// Décode un corps de réponse Calendarific en ensemble de dates.
pub(crate) fn parse_holidays(body: &str) -> Result<HolidaySet, ProviderError> {
    let envelope: Envelope = serde_json::from_str(body)?;

    if let Some(meta) = envelope.meta {
        if meta.code != 200 {
            let message = meta
                .error_detail
                .or(meta.error_type)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(ProviderError::Api {
                code: meta.code,
                message,
            });
        }
    }

    let payload: Payload = match envelope.response {
        Value::Null => return Ok(HolidaySet::new()),
        Value::Array(items) if items.is_empty() => return Ok(HolidaySet::new()),
        other => serde_json::from_value(other)?,
    };

    payload
        .holidays
        .into_iter()
        .map(|entry| parse_iso_day(&entry.date.iso))
        .collect()
}

// "2024-03-10" ou "2024-03-10T18:00:00+03:00"
fn parse_iso_day(iso: &str) -> Result<NaiveDate, ProviderError> {
    let day = iso.split('T').next().unwrap_or(iso);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| ProviderError::InvalidDate(iso.to_string()))
}
