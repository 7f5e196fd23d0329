use crate::model::{CalculationRequest, CompanyRule, Country, CountryCode};
use chrono::NaiveDate;
use lettre::Address;
use thiserror::Error;

pub const DEFAULT_NOTICE_PERIOD_DAYS: u32 = 30;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("notice period must be at least 1 day")]
    NoticeTooShort,
    #[error("invalid country code {0:?}: expected two letters (ISO 3166-1)")]
    InvalidCountryCode(String),
    #[error("invalid email address {address:?}: {reason}")]
    InvalidEmail { address: String, reason: String },
}

/// Champs bruts du formulaire, tels que saisis.
#[derive(Debug, Clone)]
pub struct FormInput {
    pub resignation_date: NaiveDate,
    pub notice_period_days: u32,
    pub country: Country,
    /// Code ISO libre, prioritaire sur le pays sélectionné.
    pub country_code_override: Option<String>,
    /// Dates séparées par des virgules (`YYYY-MM-DD`).
    pub custom_holidays: Option<String>,
    pub rule: CompanyRule,
    pub email: Option<String>,
}

impl FormInput {
    pub fn new(resignation_date: NaiveDate, country: Country) -> Self {
        Self {
            resignation_date,
            notice_period_days: DEFAULT_NOTICE_PERIOD_DAYS,
            country,
            country_code_override: None,
            custom_holidays: None,
            rule: CompanyRule::default(),
            email: None,
        }
    }
}

/// Formulaire validé. `messages` regroupe les erreurs de saisie non bloquantes.
#[derive(Debug, Clone)]
pub struct ValidatedForm {
    pub request: CalculationRequest,
    pub country: Country,
    /// Nom affiché : le pays sélectionné, ou le code saisi s'il le remplace.
    pub country_label: String,
    pub email: Option<String>,
    pub messages: Vec<String>,
}

/// Valide la saisie.
///
/// Seul un préavis < 1 jour est bloquant. Une liste de jours fériés mal formée est
/// ignorée pour ce calcul (message), tout comme un code pays ou un email invalides.
pub fn validate(input: FormInput) -> Result<ValidatedForm, InputError> {
    if input.notice_period_days < 1 {
        return Err(InputError::NoticeTooShort);
    }
    let mut messages = Vec::new();

    let mut country_label = input.country.display_name().to_string();
    let country_code = match input
        .country_code_override
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(raw) => match parse_country_code(raw) {
            Ok(code) => {
                if code != input.country.iso_code() {
                    country_label = code.to_string();
                }
                code
            }
            Err(err) => {
                messages.push(format!("{err}; using {}", input.country.iso_code()));
                input.country.iso_code()
            }
        },
        None => input.country.iso_code(),
    };

    let custom_holidays = match input.custom_holidays.as_deref() {
        Some(raw) => parse_custom_holidays(raw).unwrap_or_else(|err| {
            messages.push(format!("Invalid custom holiday list ({err}); ignoring it"));
            Vec::new()
        }),
        None => Vec::new(),
    };

    let email = match input.email.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match parse_email(raw) {
            Ok(address) => Some(address.to_string()),
            Err(err) => {
                messages.push(err.to_string());
                None
            }
        },
        None => None,
    };

    let request = CalculationRequest::new(input.resignation_date, input.notice_period_days, country_code)
        .with_rule(input.rule)
        .with_custom_holidays(custom_holidays);

    Ok(ValidatedForm {
        request,
        country: input.country,
        country_label,
        email,
        messages,
    })
}

/// Parse `"2024-03-11, 2024-12-25"`. Les entrées vides sont ignorées.
pub fn parse_custom_holidays(raw: &str) -> Result<Vec<NaiveDate>, InputError> {
    raw.split(',')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(parse_date)
        .collect()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(raw.trim().to_string()))
}

pub fn parse_country_code(raw: &str) -> Result<CountryCode, InputError> {
    let raw = raw.trim();
    if raw.len() == 2 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(CountryCode::new(raw))
    } else {
        Err(InputError::InvalidCountryCode(raw.to_string()))
    }
}

/// Même parseur que l'envoi SMTP : ce qui passe ici passe à la livraison.
pub fn parse_email(raw: &str) -> Result<Address, InputError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|e| InputError::InvalidEmail {
            address: raw.trim().to_string(),
            reason: e.to_string(),
        })
}
