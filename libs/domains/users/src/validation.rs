//! Pure validation rules for user records.
//!
//! Each rule is a stateless function returning the matching [`UserError`]
//! kind on violation. The caller snapshots `today` once per operation and
//! threads it through both date rules so a single operation never sees two
//! different clocks.

use chrono::NaiveDate;
use validator::ValidateEmail;

use crate::error::{UserError, UserResult};

/// Checks that a birth date is present and not in the future.
///
/// Returns the unwrapped date so callers can continue with the validated
/// value.
pub fn validate_birth_date(
    birth_date: Option<NaiveDate>,
    today: NaiveDate,
) -> UserResult<NaiveDate> {
    let date = birth_date
        .ok_or_else(|| UserError::InvalidBirthDate("Birth date is missing".to_string()))?;

    if date > today {
        return Err(UserError::InvalidBirthDate(format!(
            "Birth date {} is in the future",
            date
        )));
    }

    Ok(date)
}

/// Checks that the whole-year age derived from `birth_date` meets the
/// configured minimum registration age.
pub fn validate_adult_age(
    birth_date: NaiveDate,
    minimum_age: u32,
    today: NaiveDate,
) -> UserResult<()> {
    let age = today.years_since(birth_date).unwrap_or(0);

    if age < minimum_age {
        return Err(UserError::AgeNotAllowed);
    }

    Ok(())
}

/// Checks that an email is present, non-empty, and syntactically valid:
/// non-empty local part, non-empty domain, no empty label between dots.
///
/// Returns the validated address.
pub fn validate_email_syntax(email: Option<&str>) -> UserResult<&str> {
    let email = match email {
        Some(email) if !email.is_empty() => email,
        _ => {
            return Err(UserError::EmailNotValid(
                "Email is missing or empty".to_string(),
            ))
        }
    };

    if !email.validate_email() {
        return Err(UserError::EmailNotValid(format!("Invalid email {}", email)));
    }

    Ok(email)
}

/// Checks that a date range is ordered: `from` must not be after `to`.
pub fn validate_date_range(from: NaiveDate, to: NaiveDate) -> UserResult<()> {
    if from > to {
        return Err(UserError::InvalidDateRange);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    const TODAY: (i32, u32, u32) = (2024, 6, 15);

    fn today() -> NaiveDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn test_birth_date_today_is_valid() {
        let result = validate_birth_date(Some(today()), today());
        assert_eq!(result.unwrap(), today());
    }

    #[test]
    fn test_birth_date_in_the_past_is_valid() {
        let result = validate_birth_date(Some(date(2000, 1, 1)), today());
        assert_eq!(result.unwrap(), date(2000, 1, 1));
    }

    #[test]
    fn test_birth_date_missing() {
        let result = validate_birth_date(None, today());
        assert!(matches!(result, Err(UserError::InvalidBirthDate(ref msg)) if msg.contains("missing")));
    }

    #[test]
    fn test_birth_date_tomorrow_is_invalid() {
        let result = validate_birth_date(Some(date(2024, 6, 16)), today());
        assert!(matches!(result, Err(UserError::InvalidBirthDate(ref msg)) if msg.contains("future")));
    }

    #[test]
    fn test_birth_date_next_year_is_invalid() {
        let result = validate_birth_date(Some(date(2025, 6, 15)), today());
        assert!(matches!(result, Err(UserError::InvalidBirthDate(_))));
    }

    #[test]
    fn test_age_exactly_at_minimum() {
        // 18th birthday is today
        let result = validate_adult_age(date(2006, 6, 15), 18, today());
        assert!(result.is_ok());
    }

    #[test]
    fn test_age_one_day_short_of_minimum() {
        // 18th birthday is tomorrow
        let result = validate_adult_age(date(2006, 6, 16), 18, today());
        assert!(matches!(result, Err(UserError::AgeNotAllowed)));
    }

    #[test]
    fn test_age_seventeen_is_rejected_at_minimum_eighteen() {
        let result = validate_adult_age(date(2007, 6, 15), 18, today());
        assert!(matches!(result, Err(UserError::AgeNotAllowed)));
    }

    #[test]
    fn test_age_well_above_minimum() {
        let result = validate_adult_age(date(1980, 3, 2), 18, today());
        assert!(result.is_ok());
    }

    #[test]
    fn test_minimum_age_zero_accepts_newborn() {
        let result = validate_adult_age(today(), 0, today());
        assert!(result.is_ok());
    }

    #[test]
    fn test_email_valid() {
        assert_eq!(
            validate_email_syntax(Some("bobsmith@example.com")).unwrap(),
            "bobsmith@example.com"
        );
    }

    #[test]
    fn test_email_missing() {
        let result = validate_email_syntax(None);
        assert!(matches!(result, Err(UserError::EmailNotValid(ref msg)) if msg.contains("missing or empty")));
    }

    #[test]
    fn test_email_empty() {
        let result = validate_email_syntax(Some(""));
        assert!(matches!(result, Err(UserError::EmailNotValid(ref msg)) if msg.contains("missing or empty")));
    }

    #[test]
    fn test_email_with_consecutive_dots_in_domain() {
        let result = validate_email_syntax(Some("test@test..com"));
        assert!(matches!(result, Err(UserError::EmailNotValid(ref msg)) if msg.contains("Invalid email")));
    }

    #[test]
    fn test_email_without_domain() {
        let result = validate_email_syntax(Some("test@"));
        assert!(matches!(result, Err(UserError::EmailNotValid(_))));
    }

    #[test]
    fn test_email_without_local_part() {
        let result = validate_email_syntax(Some("@example.com"));
        assert!(matches!(result, Err(UserError::EmailNotValid(_))));
    }

    #[test]
    fn test_email_without_at_sign() {
        let result = validate_email_syntax(Some("test.example.com"));
        assert!(matches!(result, Err(UserError::EmailNotValid(_))));
    }

    #[test]
    fn test_date_range_ordered() {
        assert!(validate_date_range(date(2000, 1, 1), date(2010, 1, 1)).is_ok());
    }

    #[test]
    fn test_date_range_equal_bounds() {
        assert!(validate_date_range(date(2000, 1, 1), date(2000, 1, 1)).is_ok());
    }

    #[test]
    fn test_date_range_inverted() {
        let result = validate_date_range(date(2010, 1, 1), date(2000, 1, 1));
        assert!(matches!(result, Err(UserError::InvalidDateRange)));
    }
}
