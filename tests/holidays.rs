#![forbid(unsafe_code)]
mod common;

use chrono::NaiveDate;
use common::{calendarific_body, OneShotServer};
use preavis::{
    holidays::{CalendarificProvider, HolidayProvider, ProviderError},
    model::{CalculationRequest, CountryCode},
    Calculator,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn sends_key_country_and_year_and_decodes_holidays() {
    let server = OneShotServer::start("200 OK", &calendarific_body(&["2024-01-01", "2024-07-04"]));
    let provider = CalendarificProvider::new(Some("secret".into())).with_base_url(server.url.clone());

    let set = provider.public_holidays("US", 2024).unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&d(2024, 1, 1)));
    assert!(set.contains(&d(2024, 7, 4)));

    let line = server.request_line();
    assert!(line.starts_with("GET /api/v2/holidays?"), "{line}");
    assert!(line.contains("api_key=secret"), "{line}");
    assert!(line.contains("country=US"), "{line}");
    assert!(line.contains("year=2024"), "{line}");
}

#[test]
fn server_error_is_a_status_error() {
    let server = OneShotServer::start("500 Internal Server Error", "{}");
    let provider = CalendarificProvider::new(Some("secret".into())).with_base_url(server.url.clone());

    let err = provider.public_holidays("US", 2024).unwrap_err();
    assert!(matches!(err, ProviderError::Status(500)), "{err:?}");
    server.request_line();
}

#[test]
fn fetched_holidays_drive_the_rollforward() {
    // samedi 6 -> lundi 8 férié -> mardi 9
    let server = OneShotServer::start("200 OK", &calendarific_body(&["2024-01-08"]));
    let provider = CalendarificProvider::new(Some("secret".into())).with_base_url(server.url.clone());
    let req = CalculationRequest::new(d(2024, 1, 1), 5, CountryCode::new("US"));

    let calc = Calculator::new(provider).compute(&req);
    assert_eq!(calc.last_working_day, d(2024, 1, 9));
    assert!(calc.warnings.is_empty());
    assert!(server.request_line().contains("year=2024"));
}
