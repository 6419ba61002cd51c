//! Holiday record construction
//!
//! Turns coerced row fields into a [`HolidayRecord`] for a target year.

use super::row_validator::HolidayFields;
use crate::app::models::HolidayRecord;
use crate::constants::MIN_EXPLICIT_YEAR;
use crate::{Error, Result};
use chrono::{Datelike, Local, NaiveDate};

/// Scope-level values shared by every record of one import
#[derive(Debug, Clone, Copy)]
pub struct RecordContext<'a> {
    pub year: i32,
    pub coverage_scope: &'a str,
    pub country_code: &'a str,
}

/// Replace an unspecified year (below 1900) with the current year
pub fn normalize_year(year: i32) -> i32 {
    if year < MIN_EXPLICIT_YEAR {
        Local::now().year()
    } else {
        year
    }
}

/// Calendar date for `day`/`month` in `year`
///
/// # Errors
/// * Returns `Error::InvalidDate` if the values do not form a real date
pub fn holiday_date(year: i32, month: i32, day: i32) -> Result<NaiveDate> {
    let (Ok(m), Ok(d)) = (u32::try_from(month), u32::try_from(day)) else {
        return Err(Error::invalid_date(year, month, day));
    };
    NaiveDate::from_ymd_opt(year, m, d).ok_or_else(|| Error::invalid_date(year, month, day))
}

/// Build a record from validated fields
///
/// The reserved flags are always `false`.
pub fn build_record(fields: HolidayFields, context: &RecordContext<'_>) -> Result<HolidayRecord> {
    let date = holiday_date(context.year, fields.month, fields.day)?;

    Ok(HolidayRecord::new(
        date,
        fields.title,
        context.coverage_scope.to_string(),
        context.country_code.to_string(),
        fields.state_code,
        fields.federal_code,
        fields.ibge_code,
        fields.city_name,
        false,
        false,
    ))
}
