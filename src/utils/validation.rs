use crate::domain::model::BirthDate;
use crate::utils::error::{NumerologyError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static BIRTH_DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("birth date pattern compiles")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a `YYYY-MM-DD` birth date by shape only.
///
/// Calendar validity is deliberately not checked: month 13 or day 31 in
/// February go through and are reduced like any other integer.
pub fn parse_birth_date(field_name: &str, value: &str) -> Result<BirthDate> {
    let trimmed = value.trim();
    let caps = BIRTH_DATE_SHAPE
        .captures(trimmed)
        .ok_or_else(|| NumerologyError::InvalidDate {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        })?;

    let part = |idx: usize| -> Result<u32> {
        caps[idx].parse().map_err(|e| NumerologyError::InvalidDate {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("{}", e),
        })
    };

    Ok(BirthDate {
        year: part(1)?,
        month: part(2)?,
        day: part(3)?,
    })
}

/// Parses a real calendar date, used for the reference date of personal cycles.
pub fn parse_calendar_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| NumerologyError::InvalidDate {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| NumerologyError::MissingConfig {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NumerologyError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
