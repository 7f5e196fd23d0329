#![forbid(unsafe_code)]
//! Preavis — calcul du dernier jour travaillé d'un préavis (sans état).
//!
//! - Jour théorique = date de démission + préavis.
//! - Report au-delà des week-ends du pays et des jours fériés (publics + personnalisés).
//! - Jours fériés publics via un fournisseur injecté ; un échec n'est qu'un avertissement.
//! - Export du récapitulatif (texte/JSON/CSV) et envoi par mail en dehors du cœur.

pub mod calculator;
pub mod config;
pub mod export;
pub mod form;
pub mod holidays;
pub mod mail;
pub mod model;
pub mod summary;
pub mod weekend;

pub use calculator::{compute, roll_forward, tentative_last_day, Calculator};
pub use config::{HolidaySettings, MailSettings, SmtpSettings};
pub use export::{export_summary, render_document, DocumentFormat};
pub use form::{parse_custom_holidays, validate, FormInput, InputError, ValidatedForm};
pub use holidays::{
    CalendarificProvider, HolidayProvider, HolidaySet, NoHolidays, ProviderError, StaticHolidays,
};
pub use mail::{DeliveryError, Mailer, SmtpMailer};
pub use model::{Calculation, CalculationRequest, CompanyRule, Country, CountryCode};
pub use summary::{confirmation_message, Summary, SummaryRenderer, TextSummary};
pub use weekend::{weekend_days, WeekendProfile};
