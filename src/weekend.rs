use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

const SAT_SUN: [u8; 2] = [5, 6];
const FRI_SAT: [u8; 2] = [4, 5];

/// Jours de week-end d'un pays, indexés du lundi (0) au dimanche (6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekendProfile {
    days: BTreeSet<u8>,
}

impl WeekendProfile {
    pub fn from_indices<I: IntoIterator<Item = u8>>(indices: I) -> Self {
        Self {
            days: indices.into_iter().filter(|d| *d < 7).collect(),
        }
    }

    pub fn saturday_sunday() -> Self {
        Self::from_indices(SAT_SUN)
    }

    pub fn friday_saturday() -> Self {
        Self::from_indices(FRI_SAT)
    }

    pub fn indices(&self) -> &BTreeSet<u8> {
        &self.days
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.days.contains(&(weekday.num_days_from_monday() as u8))
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    pub fn weekdays(&self) -> Vec<Weekday> {
        self.days
            .iter()
            .filter_map(|d| Weekday::try_from(*d).ok())
            .collect()
    }
}

impl Default for WeekendProfile {
    fn default() -> Self {
        Self::saturday_sunday()
    }
}

/// Résout le profil de week-end d'un pays (nom ou code ISO, casse ignorée).
///
/// Un pays inconnu retombe sur samedi/dimanche.
pub fn weekend_days(country: &str) -> WeekendProfile {
    match country.trim().to_lowercase().as_str() {
        "india" | "usa" | "uk" | "canada" | "australia" | "singapore" => {
            WeekendProfile::saturday_sunday()
        }
        "in" | "us" | "gb" | "ca" | "au" | "sg" => WeekendProfile::saturday_sunday(),
        "uae" | "saudi arabia" | "qatar" => WeekendProfile::friday_saturday(),
        "ae" | "sa" | "qa" => WeekendProfile::friday_saturday(),
        _ => WeekendProfile::default(),
    }
}
