use crate::holidays::{HolidayProvider, HolidaySet, NoHolidays};
use crate::model::{Calculation, CalculationRequest, CompanyRule, CountryCode};
use crate::weekend::{weekend_days, WeekendProfile};
use chrono::{Datelike, Days, NaiveDate};

/// Calculateur du dernier jour travaillé, paramétré par une source de jours fériés.
#[derive(Debug, Default, Clone)]
pub struct Calculator<P = NoHolidays> {
    provider: P,
}

impl<P: HolidayProvider> Calculator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Calcule le dernier jour travaillé.
    ///
    /// Ne renvoie jamais d'erreur : un échec du fournisseur devient un avertissement
    /// et le calcul continue avec les seuls week-ends et jours fériés personnalisés.
    /// Seule l'année du jour théorique est interrogée.
    pub fn compute(&self, request: &CalculationRequest) -> Calculation {
        let tentative = tentative_last_day(request.resignation_date, request.notice_period_days);
        let code = request.country_code.as_str();
        let mut warnings = Vec::new();

        let mut holidays = match self.provider.public_holidays(code, tentative.year()) {
            Ok(set) => set,
            Err(err) => {
                tracing::warn!(country = code, year = tentative.year(), error = %err, "public holidays unavailable, continuing without them");
                warnings.push(format!("Error fetching public holidays: {err}"));
                HolidaySet::new()
            }
        };
        holidays.extend(request.custom_holidays.iter().copied());

        let weekend = weekend_days(code);
        let last_working_day = roll_forward(tentative, &weekend, &holidays, request.rule);

        Calculation {
            tentative,
            last_working_day,
            warnings,
        }
    }
}

/// `resignation_date + notice_period_days`, saturé à la dernière date représentable.
pub fn tentative_last_day(resignation_date: NaiveDate, notice_period_days: u32) -> NaiveDate {
    resignation_date
        .checked_add_days(Days::new(u64::from(notice_period_days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Avance `tentative` jour par jour jusqu'à un jour ouvré, selon la règle.
///
/// Sous `ExcludeWeekendsOnly`, un jour férié qui n'est pas un week-end arrête le
/// report et est rendu tel quel.
pub fn roll_forward(
    mut tentative: NaiveDate,
    weekend: &WeekendProfile,
    holidays: &HolidaySet,
    rule: CompanyRule,
) -> NaiveDate {
    loop {
        let is_weekend = weekend.is_weekend(tentative);
        let is_holiday = holidays.contains(&tentative);
        if !is_weekend && !is_holiday {
            break;
        }
        if rule == CompanyRule::ExcludeWeekendsOnly && !is_weekend {
            break;
        }
        match tentative.succ_opt() {
            Some(next) => {
                tracing::debug!(from = %tentative, to = %next, is_weekend, is_holiday, "rolling forward");
                tentative = next;
            }
            None => break,
        }
    }
    tentative
}

/// Raccourci sans état : calcule directement à partir des paramètres.
pub fn compute<P: HolidayProvider>(
    resignation_date: NaiveDate,
    notice_period_days: u32,
    country_code: &str,
    custom_holidays: &[NaiveDate],
    rule: CompanyRule,
    provider: &P,
) -> NaiveDate {
    let request =
        CalculationRequest::new(resignation_date, notice_period_days, CountryCode::new(country_code))
            .with_rule(rule)
            .with_custom_holidays(custom_holidays.to_vec());
    Calculator::new(provider).compute(&request).last_working_day
}
