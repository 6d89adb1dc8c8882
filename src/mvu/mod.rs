// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel for the registration form.

use chrono::NaiveDate;

use crate::logic::validation;
use crate::models::registration::{RegistrationInput, Submission};
use crate::ui::components::date_picker::{self, DateOfBirthModel, DateOfBirthMsg};
use crate::ui::components::password_field::{self, PasswordFieldModel, PasswordFieldMsg};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    pub first_name: String,
    pub last_name: String,
    /// Date-of-birth picker state.
    pub date_of_birth: DateOfBirthModel,
    pub email: String,
    /// Password input with its visibility toggle.
    pub password: PasswordFieldModel,
    /// Confirmation input with its own visibility toggle.
    pub confirm_password: PasswordFieldModel,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest validation error to display in modal.
    pub error: Option<String>,
    /// Accepted record; `Some` while the confirmation overlay is open.
    pub confirmation: Option<Submission>,
}

impl AppModel {
    /// Snapshot the form fields as a validator input.
    pub fn input(&self) -> RegistrationInput {
        RegistrationInput {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth.date,
            email: self.email.clone(),
            password: self.password.value.clone(),
            confirm_password: self.confirm_password.value.clone(),
        }
    }

    /// Submit is only offered once every field holds something.
    pub fn can_submit(&self) -> bool {
        !self.input().has_empty_fields()
    }

    /// True while the confirmation overlay is shown.
    pub fn is_confirmed(&self) -> bool {
        self.confirmation.is_some()
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    FirstNameChanged(String),
    LastNameChanged(String),
    DateOfBirth(DateOfBirthMsg),
    EmailChanged(String),
    Password(PasswordFieldMsg),
    ConfirmPassword(PasswordFieldMsg),
    SubmitRequested,
    DismissError,
    CloseConfirmation,
}

/// Update the application model against today's date.
pub fn update(model: &mut AppModel, msg: Msg) {
    update_on(model, msg, validation::today());
}

/// Update the application model, treating `today` as the current day.
pub fn update_on(model: &mut AppModel, msg: Msg, today: NaiveDate) {
    match msg {
        Msg::FirstNameChanged(text) => model.first_name = text,
        Msg::LastNameChanged(text) => model.last_name = text,
        Msg::DateOfBirth(m) => date_picker::update(&mut model.date_of_birth, m, today),
        Msg::EmailChanged(text) => model.email = text,
        Msg::Password(m) => password_field::update(&mut model.password, m),
        Msg::ConfirmPassword(m) => password_field::update(&mut model.confirm_password, m),
        Msg::DismissError => model.error = None,
        Msg::SubmitRequested => submit(model, today),
        Msg::CloseConfirmation => {
            tracing::debug!("confirmation closed");
            model.confirmation = None;
            model.status = Some("Confirmation closed.".to_string());
        }
    }
}

/// Validate the form and either surface the first failure or open the confirmation.
fn submit(model: &mut AppModel, today: NaiveDate) {
    let input = model.input();
    match validation::validate_on(&input, today) {
        Ok(()) => {
            let age = validation::calculate_age_on(input.date_of_birth, today);
            tracing::info!("registration accepted");
            model.error = None;
            model.confirmation = Some(Submission::new(&input, age));
            model.status = Some("Registration submitted.".to_string());
        }
        Err(reason) => {
            tracing::info!(?reason, "registration rejected");
            surface_error(model, reason.to_string());
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_error(model: &mut AppModel, message: String) {
    model.error = Some(message.clone());
    model.status = Some(message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn filled_model() -> AppModel {
        let mut model = AppModel::default();
        let msgs = [
            Msg::FirstNameChanged("Ada".into()),
            Msg::LastNameChanged("Lovelace".into()),
            Msg::DateOfBirth(DateOfBirthMsg::SetDate(
                NaiveDate::from_ymd_opt(2004, 6, 15).unwrap(),
            )),
            Msg::EmailChanged("ada@example.com".into()),
            Msg::Password(PasswordFieldMsg::ValueChanged("abc12345!".into())),
            Msg::ConfirmPassword(PasswordFieldMsg::ValueChanged("abc12345!".into())),
        ];
        for msg in msgs {
            update_on(&mut model, msg, today());
        }
        model
    }

    #[test]
    fn empty_form_cannot_submit() {
        let model = AppModel::default();
        assert!(!model.can_submit());
        assert!(!model.is_confirmed());
    }

    #[test]
    fn filled_form_can_submit() {
        assert!(filled_model().can_submit());
    }

    #[test]
    fn valid_submit_opens_confirmation_with_age() {
        let mut model = filled_model();

        update_on(&mut model, Msg::SubmitRequested, today());

        assert!(model.error.is_none());
        let submission = model.confirmation.as_ref().expect("confirmation expected");
        assert_eq!(submission.first_name, "Ada");
        assert_eq!(submission.last_name, "Lovelace");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.age, Some(20));
        assert_eq!(
            submission.date_of_birth_display("%m/%d/%Y"),
            "06/15/2004"
        );
    }

    #[test]
    fn invalid_submit_sets_error_and_keeps_editing() {
        let mut model = filled_model();
        update_on(
            &mut model,
            Msg::ConfirmPassword(PasswordFieldMsg::ValueChanged("xyz".into())),
            today(),
        );

        update_on(&mut model, Msg::SubmitRequested, today());

        assert!(!model.is_confirmed());
        assert_eq!(model.error.as_deref(), Some("Passwords do not match."));
        assert_eq!(model.password.value, "abc12345!");
    }

    #[test]
    fn untrimmed_name_is_reported() {
        let mut model = filled_model();
        update_on(&mut model, Msg::FirstNameChanged(" Ada".into()), today());

        update_on(&mut model, Msg::SubmitRequested, today());

        assert_eq!(
            model.error.as_deref(),
            Some("First and Last Names should not have leading or trailing spaces.")
        );
    }

    #[test]
    fn future_birth_date_is_reported() {
        let mut model = filled_model();
        update_on(
            &mut model,
            Msg::DateOfBirth(DateOfBirthMsg::SetDate(
                NaiveDate::from_ymd_opt(2024, 6, 16).unwrap(),
            )),
            today(),
        );

        update_on(&mut model, Msg::SubmitRequested, today());

        assert_eq!(
            model.error.as_deref(),
            Some("Date of Birth cannot be a future date.")
        );
        assert!(!model.is_confirmed());
    }

    #[test]
    fn dismiss_error_clears_modal() {
        let mut model = AppModel::default();
        update_on(&mut model, Msg::SubmitRequested, today());
        assert_eq!(model.error.as_deref(), Some("Please fill in all fields."));

        update_on(&mut model, Msg::DismissError, today());

        assert!(model.error.is_none());
    }

    #[test]
    fn close_confirmation_keeps_field_values() {
        let mut model = filled_model();
        update_on(&mut model, Msg::SubmitRequested, today());
        assert!(model.is_confirmed());

        update_on(&mut model, Msg::CloseConfirmation, today());

        assert!(!model.is_confirmed());
        assert_eq!(model.first_name, "Ada");
        assert_eq!(model.email, "ada@example.com");
        assert!(model.can_submit());
    }

    #[test]
    fn password_toggles_are_independent() {
        let mut model = AppModel::default();

        update_on(
            &mut model,
            Msg::Password(PasswordFieldMsg::ToggleVisibility),
            today(),
        );

        assert!(model.password.visible);
        assert!(!model.confirm_password.visible);

        update_on(
            &mut model,
            Msg::ConfirmPassword(PasswordFieldMsg::ToggleVisibility),
            today(),
        );
        update_on(
            &mut model,
            Msg::Password(PasswordFieldMsg::ToggleVisibility),
            today(),
        );

        assert!(!model.password.visible);
        assert!(model.confirm_password.visible);
    }

    #[test]
    fn clearing_birth_date_disables_submit() {
        let mut model = filled_model();

        update_on(&mut model, Msg::DateOfBirth(DateOfBirthMsg::Clear), today());

        assert!(!model.can_submit());
    }
}
