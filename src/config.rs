use crate::holidays::DEFAULT_HOLIDAY_API_URL;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const ENV_PREFIX: &str = "PREAVIS_";

fn default_holiday_api_url() -> String {
    DEFAULT_HOLIDAY_API_URL.to_string()
}

fn default_smtp_port() -> u16 {
    587
}

/// Fournisseur de jours fériés : `PREAVIS_API_KEY`, `PREAVIS_HOLIDAY_API_URL`.
///
/// Lu séparément du relais SMTP : une variable mail invalide ne touche pas la clé d'API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HolidaySettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_holiday_api_url")]
    pub holiday_api_url: String,
}

impl Default for HolidaySettings {
    fn default() -> Self {
        Self {
            api_key: None,
            holiday_api_url: default_holiday_api_url(),
        }
    }
}

/// Relais SMTP : `PREAVIS_SMTP_HOST`, `PREAVIS_SMTP_PORT` (587), `PREAVIS_SMTP_USERNAME`,
/// `PREAVIS_SMTP_PASSWORD`, `PREAVIS_MAIL_FROM`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SmtpSettings {
    #[serde(default)]
    pub smtp_host: Option<String>,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: Option<String>,
    #[serde(default)]
    pub smtp_password: Option<String>,
    #[serde(default)]
    pub mail_from: Option<String>,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            smtp_host: None,
            smtp_port: default_smtp_port(),
            smtp_username: None,
            smtp_password: None,
            mail_from: None,
        }
    }
}

/// Paramètres du relais SMTP, complets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
}

impl SmtpSettings {
    /// `None` tant que l'hôte ou l'expéditeur ne sont pas configurés.
    pub fn mail(&self) -> Option<MailSettings> {
        let host = self.smtp_host.clone().filter(|h| !h.trim().is_empty())?;
        let from = self.mail_from.clone().filter(|f| !f.trim().is_empty())?;
        Some(MailSettings {
            host,
            port: self.smtp_port,
            username: self.smtp_username.clone(),
            password: self.smtp_password.clone(),
            from,
        })
    }
}

/// Lit une section de configuration depuis l'environnement du processus.
pub fn from_env<T: DeserializeOwned>(section: &str) -> anyhow::Result<T> {
    envy::prefixed(ENV_PREFIX)
        .from_env()
        .with_context(|| format!("reading {section} configuration"))
}

/// Variante de [`from_env`] sur des paires explicites.
pub fn from_pairs<T, I>(section: &str, pairs: I) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    envy::prefixed(ENV_PREFIX)
        .from_iter(pairs)
        .with_context(|| format!("reading {section} configuration"))
}
