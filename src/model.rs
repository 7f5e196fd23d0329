use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Code pays ISO 3166-1 alpha-2, toujours en majuscules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().to_ascii_uppercase())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pays proposés par le formulaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Country {
    India,
    Usa,
    Uk,
    Canada,
    Australia,
    Singapore,
    Uae,
    SaudiArabia,
    Qatar,
    Other,
}

impl Country {
    pub const ALL: [Country; 10] = [
        Country::India,
        Country::Usa,
        Country::Uk,
        Country::Canada,
        Country::Australia,
        Country::Singapore,
        Country::Uae,
        Country::SaudiArabia,
        Country::Qatar,
        Country::Other,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Country::India => "India",
            Country::Usa => "USA",
            Country::Uk => "UK",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
            Country::Singapore => "Singapore",
            Country::Uae => "UAE",
            Country::SaudiArabia => "Saudi Arabia",
            Country::Qatar => "Qatar",
            Country::Other => "Other",
        }
    }

    /// Code envoyé au fournisseur de jours fériés ("Other" retombe sur US).
    pub fn iso_code(self) -> CountryCode {
        let code = match self {
            Country::India => "IN",
            Country::Usa => "US",
            Country::Uk => "GB",
            Country::Canada => "CA",
            Country::Australia => "AU",
            Country::Singapore => "SG",
            Country::Uae => "AE",
            Country::SaudiArabia => "SA",
            Country::Qatar => "QA",
            Country::Other => "US",
        };
        CountryCode::new(code)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Règle d'entreprise appliquée pendant le report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum CompanyRule {
    /// Reporte tant que le jour est un week-end ou un jour férié.
    #[default]
    IncludeWeekends,
    /// Reporte seulement les week-ends ; un jour férié ouvré est rendu tel quel.
    ExcludeWeekendsOnly,
}

impl CompanyRule {
    pub fn label(self) -> &'static str {
        match self {
            CompanyRule::IncludeWeekends => "Include Weekends",
            CompanyRule::ExcludeWeekendsOnly => "Exclude Weekends Only",
        }
    }
}

impl fmt::Display for CompanyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Demande de calcul, indépendante de toute autre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub resignation_date: NaiveDate,
    pub notice_period_days: u32,
    pub country_code: CountryCode,
    #[serde(default)]
    pub rule: CompanyRule,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_holidays: Vec<NaiveDate>,
}

impl CalculationRequest {
    pub fn new(
        resignation_date: NaiveDate,
        notice_period_days: u32,
        country_code: CountryCode,
    ) -> Self {
        Self {
            resignation_date,
            notice_period_days,
            country_code,
            rule: CompanyRule::default(),
            custom_holidays: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: CompanyRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_custom_holidays(mut self, holidays: Vec<NaiveDate>) -> Self {
        self.custom_holidays = holidays;
        self
    }
}

/// Résultat d'un calcul. Les avertissements sont non bloquants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub tentative: NaiveDate,
    pub last_working_day: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Calculation {
    /// Jours ajoutés au-delà du jour théorique.
    pub fn days_rolled(&self) -> i64 {
        self.last_working_day
            .signed_duration_since(self.tentative)
            .num_days()
    }
}
