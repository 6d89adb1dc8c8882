// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Registration validation and derived display values.
//!
//! Everything here is pure. The `*_on` variants take the current calendar day
//! explicitly; the plain variants read it from the local clock.

use std::sync::LazyLock;

use chrono::{Datelike, Local, Months, NaiveDate};
use regex::Regex;

use crate::models::registration::{RegistrationInput, ValidationError, ValidationResult};

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Characters accepted as the required special character in a password.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Current local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Validate a registration record against today's date.
pub fn validate(input: &RegistrationInput) -> ValidationResult {
    validate_on(input, today())
}

/// Validate a registration record, treating `today` as the current day.
///
/// Checks run in a fixed order and the first failure is returned:
/// missing fields, untrimmed names, password mismatch, email shape,
/// password strength, then a future date of birth.
pub fn validate_on(input: &RegistrationInput, today: NaiveDate) -> ValidationResult {
    let Some(date_of_birth) = input.date_of_birth else {
        return Err(ValidationError::MissingFields);
    };
    if input.first_name.trim().is_empty()
        || input.last_name.trim().is_empty()
        || input.email.is_empty()
        || input.password.is_empty()
        || input.confirm_password.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }

    if !is_trimmed(&input.first_name) || !is_trimmed(&input.last_name) {
        return Err(ValidationError::UntrimmedName);
    }

    if input.password != input.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    if !is_valid_email(&input.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_strong_password(&input.password) {
        return Err(ValidationError::WeakPassword);
    }

    if is_future_date_on(Some(date_of_birth), today) {
        return Err(ValidationError::FutureDateOfBirth);
    }

    Ok(())
}

/// True when `value` has no leading or trailing whitespace.
pub fn is_trimmed(value: &str) -> bool {
    value.trim() == value
}

/// Loose email shape check: `local@domain.tld`, no whitespace, exactly one `@`
/// before the domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least [`MIN_PASSWORD_LEN`] characters with one ASCII digit and one
/// character from [`PASSWORD_SPECIAL_CHARS`].
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
}

/// True iff `date` is present and strictly after today.
pub fn is_future_date(date: Option<NaiveDate>) -> bool {
    is_future_date_on(date, today())
}

/// True iff `date` is present and strictly after `today`.
pub fn is_future_date_on(date: Option<NaiveDate>, today: NaiveDate) -> bool {
    date.is_some_and(|d| d > today)
}

/// Whole years between the date of birth and today; `None` when unknown.
pub fn calculate_age(date_of_birth: Option<NaiveDate>) -> Option<i32> {
    calculate_age_on(date_of_birth, today())
}

/// Whole years between the date of birth and `today`; `None` when unknown.
///
/// A birthday counts as reached once `date_of_birth + N years` is on or before
/// `today`. Adding years clamps to the end of the month, so a Feb 29 birthday
/// is reached on Feb 28 in non-leap years. A future date gives a negative count
/// truncated toward zero.
pub fn calculate_age_on(date_of_birth: Option<NaiveDate>, today: NaiveDate) -> Option<i32> {
    let dob = date_of_birth?;
    let age = if dob <= today {
        whole_years_between(dob, today)
    } else {
        -whole_years_between(today, dob)
    };
    Some(age)
}

/// Whole years from `start` to `end`, with `start <= end`.
fn whole_years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let years = end.year() - start.year();
    if years <= 0 {
        return 0;
    }
    match start.checked_add_months(Months::new(years as u32 * 12)) {
        Some(anniversary) if anniversary <= end => years,
        _ => years - 1,
    }
}
