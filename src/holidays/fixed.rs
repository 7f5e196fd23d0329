use super::{HolidayProvider, HolidaySet, ProviderError};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Fournisseur vide (mode hors-ligne).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHolidays;

impl HolidayProvider for NoHolidays {
    fn public_holidays(&self, _country_code: &str, _year: i32) -> Result<HolidaySet, ProviderError> {
        Ok(HolidaySet::new())
    }
}

/// Table en mémoire, indexée par (code pays, année).
#[derive(Debug, Default, Clone)]
pub struct StaticHolidays {
    table: HashMap<(String, i32), HolidaySet>,
}

impl StaticHolidays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute des dates ; l'année est déduite de chaque date.
    pub fn with_dates<I>(mut self, country_code: &str, dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.insert(country_code, dates);
        self
    }

    pub fn insert<I>(&mut self, country_code: &str, dates: I)
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let code = country_code.trim().to_ascii_uppercase();
        for date in dates {
            self.table
                .entry((code.clone(), date.year()))
                .or_default()
                .insert(date);
        }
    }
}

impl HolidayProvider for StaticHolidays {
    fn public_holidays(&self, country_code: &str, year: i32) -> Result<HolidaySet, ProviderError> {
        let key = (country_code.trim().to_ascii_uppercase(), year);
        Ok(self.table.get(&key).cloned().unwrap_or_default())
    }
}
