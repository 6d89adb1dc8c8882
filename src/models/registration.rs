// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Registration record, validation failure reasons, and the accepted submission (UI-agnostic).

use chrono::NaiveDate;
use thiserror::Error;

/// Raw form input as typed by the user. Nothing here is normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    /// Absent until the user picks a date.
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationInput {
    /// True when any raw field is empty or the date of birth is unset.
    ///
    /// This is the submit-button gate; it does not trim.
    pub fn has_empty_fields(&self) -> bool {
        self.first_name.is_empty()
            || self.last_name.is_empty()
            || self.date_of_birth.is_none()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
    }
}

/// Reason a registration record was rejected. Only the first failing check is reported.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("First and Last Names should not have leading or trailing spaces.")]
    UntrimmedName,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error(
        "Password must be at least 8 characters long, include a number, and a special character."
    )]
    WeakPassword,

    #[error("Date of Birth cannot be a future date.")]
    FutureDateOfBirth,
}

/// `Ok(())` means the record is valid.
pub type ValidationResult = Result<(), ValidationError>;

/// Accepted record shown in the confirmation overlay. Never carries the password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    /// Whole years at submit time; `None` when the date of birth is unknown.
    pub age: Option<i32>,
}

impl Submission {
    /// Build the confirmation record from validated input and its derived age.
    pub fn new(input: &RegistrationInput, age: Option<i32>) -> Self {
        Self {
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            date_of_birth: input.date_of_birth,
            email: input.email.clone(),
            age,
        }
    }

    /// Date of birth rendered with `format`, or `N/A`.
    pub fn date_of_birth_display(&self, format: &str) -> String {
        self.date_of_birth
            .map(|d| d.format(format).to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Age as text, or `N/A`.
    pub fn age_display(&self) -> String {
        self.age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}
