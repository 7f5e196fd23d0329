mod calendarific;
mod fixed;
mod types;

pub use calendarific::{CalendarificProvider, DEFAULT_HOLIDAY_API_URL};
pub use fixed::{NoHolidays, StaticHolidays};
pub use types::{HolidaySet, ProviderError};

/// Source de jours fériés publics, injectée dans le calculateur.
pub trait HolidayProvider {
    /// Jours fériés d'un pays pour une année donnée.
    fn public_holidays(&self, country_code: &str, year: i32) -> Result<HolidaySet, ProviderError>;
}

impl<P: HolidayProvider + ?Sized> HolidayProvider for &P {
    fn public_holidays(&self, country_code: &str, year: i32) -> Result<HolidaySet, ProviderError> {
        (**self).public_holidays(country_code, year)
    }
}

impl<P: HolidayProvider + ?Sized> HolidayProvider for Box<P> {
    fn public_holidays(&self, country_code: &str, year: i32) -> Result<HolidaySet, ProviderError> {
        (**self).public_holidays(country_code, year)
    }
}
