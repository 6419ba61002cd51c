//! Per-scope import functions over the embedded datasets
//!
//! These functions never fail: a missing or unreadable dataset is logged
//! and yields an empty list. Label and country overrides are written into
//! the records as given. Use [`HolidayImporter`](crate::HolidayImporter) to
//! validate overrides and to observe errors and import statistics.

use crate::app::models::{HolidayRecord, Scope};
use crate::app::services::dataset_locator::EmbeddedDatasets;
use crate::app::services::holiday_importer::HolidayImporter;
use crate::config::ImportConfig;

/// Import national holidays for `year`
///
/// # Arguments
/// * `year` - Four-digit year; values below 1900 mean the current year
/// * `coverage_label` - Coverage label override (default "Nacional")
/// * `country_code` - Country code override (default "BR")
pub fn import_national_holidays(
    year: i32,
    coverage_label: Option<&str>,
    country_code: Option<&str>,
) -> Vec<HolidayRecord> {
    import_scope(Scope::National, year, coverage_label, country_code)
}

/// Import state holidays for `year`
///
/// Same arguments as [`import_national_holidays`]; the default label is "Estadual".
pub fn import_state_holidays(
    year: i32,
    coverage_label: Option<&str>,
    country_code: Option<&str>,
) -> Vec<HolidayRecord> {
    import_scope(Scope::State, year, coverage_label, country_code)
}

/// Import municipal holidays (city anniversaries) for `year`
///
/// Same arguments as [`import_national_holidays`]; the default label is "Municipal".
pub fn import_municipal_holidays(
    year: i32,
    coverage_label: Option<&str>,
    country_code: Option<&str>,
) -> Vec<HolidayRecord> {
    import_scope(Scope::Municipal, year, coverage_label, country_code)
}

/// Clear an imported list and release its memory
pub fn dispose(records: &mut Vec<HolidayRecord>) {
    records.clear();
    records.shrink_to_fit();
}

fn import_scope(
    scope: Scope,
    year: i32,
    coverage_label: Option<&str>,
    country_code: Option<&str>,
) -> Vec<HolidayRecord> {
    let mut config = ImportConfig::default();
    if let Some(label) = coverage_label {
        config = config.with_coverage_label(label);
    }
    if let Some(code) = country_code {
        config = config.with_country_code(code);
    }

    HolidayImporter::unvalidated(EmbeddedDatasets::new(), config).import_or_empty(scope, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_national_defaults() {
        let holidays = import_national_holidays(2024, None, None);
        assert_eq!(holidays.len(), 9);

        let independence = holidays
            .iter()
            .find(|h| h.title == "Independência do Brasil")
            .unwrap();
        assert_eq!(independence.date, NaiveDate::from_ymd_opt(2024, 9, 7).unwrap());
        assert_eq!(independence.coverage_scope, "Nacional");
        assert_eq!(independence.country_code, "BR");
    }

    #[test]
    fn test_overrides_applied() {
        let holidays = import_state_holidays(2024, Some("Regional"), Some("br"));
        assert!(!holidays.is_empty());
        assert!(holidays.iter().all(|h| h.coverage_scope == "Regional"));
        assert!(holidays.iter().all(|h| h.country_code == "br"));
    }

    #[test]
    fn test_unusual_overrides_passed_through() {
        let holidays = import_national_holidays(2024, None, Some("BRA"));
        assert_eq!(holidays.len(), 9);
        assert!(holidays.iter().all(|h| h.country_code == "BRA"));

        let holidays = import_national_holidays(2024, Some(""), None);
        assert_eq!(holidays.len(), 9);
        assert!(holidays.iter().all(|h| h.coverage_scope.is_empty()));
        assert!(holidays.iter().all(|h| h.country_code == "BR"));
    }

    #[test]
    fn test_municipal_titles() {
        let holidays = import_municipal_holidays(2030, None, None);
        assert!(!holidays.is_empty());
        for holiday in &holidays {
            assert_eq!(holiday.date.year(), 2030);
            assert_eq!(holiday.title, format!("Aniversário de {}", holiday.city_name));
        }
    }

    #[test]
    fn test_dispose_clears_list() {
        let mut holidays = import_national_holidays(2024, None, None);
        assert!(!holidays.is_empty());
        dispose(&mut holidays);
        assert!(holidays.is_empty());
        assert_eq!(holidays.capacity(), 0);
    }
}
