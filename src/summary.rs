use crate::model::{Calculation, CalculationRequest, CompanyRule, CountryCode};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const HUMAN_DATE: &str = "%A, %d %B %Y";

/// Phrase de confirmation affichée après le calcul.
pub fn confirmation_message(last_working_day: NaiveDate) -> String {
    format!(
        "Your Last Working Day is: {}",
        last_working_day.format(HUMAN_DATE)
    )
}

/// Récapitulatif exportable (document ou pièce jointe).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub reference: Uuid,
    pub generated_at: DateTime<Utc>,
    pub resignation_date: NaiveDate,
    pub notice_period_days: u32,
    pub country: String,
    pub country_code: CountryCode,
    pub rule: CompanyRule,
    #[serde(default)]
    pub custom_holidays: Vec<NaiveDate>,
    pub tentative_last_day: NaiveDate,
    pub last_working_day: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Summary {
    pub fn new<S: Into<String>>(
        country: S,
        request: &CalculationRequest,
        calculation: &Calculation,
    ) -> Self {
        let mut custom_holidays = request.custom_holidays.clone();
        custom_holidays.sort();
        custom_holidays.dedup();
        Self {
            reference: Uuid::new_v4(),
            generated_at: Utc::now(),
            resignation_date: request.resignation_date,
            notice_period_days: request.notice_period_days,
            country: country.into(),
            country_code: request.country_code.clone(),
            rule: request.rule,
            custom_holidays,
            tentative_last_day: calculation.tentative,
            last_working_day: calculation.last_working_day,
            warnings: calculation.warnings.clone(),
        }
    }

    pub fn confirmation(&self) -> String {
        confirmation_message(self.last_working_day)
    }

    pub fn custom_holidays_joined(&self, sep: &str) -> String {
        self.custom_holidays
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// `USA (US)`, ou le code seul quand il remplace le pays sélectionné.
    pub fn country_display(&self) -> String {
        if self.country == self.country_code.as_str() {
            self.country.clone()
        } else {
            format!("{} ({})", self.country, self.country_code)
        }
    }

    pub fn generated_at_rfc3339(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Permet de customiser le rendu du récapitulatif (texte, mail, etc.).
pub trait SummaryRenderer {
    fn render(&self, summary: &Summary) -> String;
}

/// Gabarit texte brut.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSummary;

impl SummaryRenderer for TextSummary {
    fn render(&self, s: &Summary) -> String {
        let holidays = if s.custom_holidays.is_empty() {
            "none".to_string()
        } else {
            s.custom_holidays_joined(", ")
        };
        let mut out = String::new();
        out.push_str("Last Working Day Summary\n");
        out.push_str("========================\n");
        out.push_str(&format!("Reference:          {}\n", s.reference));
        out.push_str(&format!("Generated at:       {}\n", s.generated_at_rfc3339()));
        out.push('\n');
        out.push_str(&format!(
            "Resignation date:   {}\n",
            s.resignation_date.format(HUMAN_DATE)
        ));
        out.push_str(&format!("Notice period:      {} day(s)\n", s.notice_period_days));
        out.push_str(&format!("Country:            {}\n", s.country_display()));
        out.push_str(&format!("Company rule:       {}\n", s.rule));
        out.push_str(&format!("Custom holidays:    {holidays}\n"));
        out.push_str(&format!(
            "Tentative last day: {}\n",
            s.tentative_last_day.format(HUMAN_DATE)
        ));
        out.push('\n');
        out.push_str(&format!(
            "Last working day:   {}\n",
            s.last_working_day.format(HUMAN_DATE)
        ));
        if !s.warnings.is_empty() {
            out.push_str("\nWarnings:\n");
            for w in &s.warnings {
                out.push_str(&format!("- {w}\n"));
            }
        }
        out
    }
}

/// Corps du mail accompagnant la pièce jointe.
#[derive(Debug, Default, Clone, Copy)]
pub struct MailBody;

impl SummaryRenderer for MailBody {
    fn render(&self, s: &Summary) -> String {
        format!(
            "Hello,\n\n{confirmation}.\n\nResignation date: {resignation}\nNotice period: {notice} day(s)\nCountry: {country}\n\nThe full summary is attached.\n",
            confirmation = s.confirmation(),
            resignation = s.resignation_date.format("%Y-%m-%d"),
            notice = s.notice_period_days,
            country = s.country_display(),
        )
    }
}
