// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Read-only "Submitted Information" overlay.

use eframe::egui;

use crate::models::registration::Submission;

/// Messages emitted by the confirmation overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmationMsg {
    Close,
}

/// Label/value rows shown in the overlay, in display order.
pub fn rows(submission: &Submission, date_format: &str) -> Vec<(&'static str, String)> {
    vec![
        ("First Name", submission.first_name.clone()),
        ("Last Name", submission.last_name.clone()),
        (
            "Date of Birth",
            submission.date_of_birth_display(date_format),
        ),
        ("Email", submission.email.clone()),
        ("Age", submission.age_display()),
    ]
}

/// Show the centered confirmation window for an accepted submission.
pub fn view(
    ctx: &egui::Context,
    submission: &Submission,
    date_format: &str,
) -> Vec<ConfirmationMsg> {
    let mut msgs = Vec::new();

    egui::Window::new("Submitted Information")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Grid::new("confirmation_grid")
                .num_columns(2)
                .spacing(egui::vec2(12.0, 6.0))
                .show(ui, |ui| {
                    for (label, value) in rows(submission, date_format) {
                        ui.label(egui::RichText::new(format!("{label}:")).strong());
                        ui.label(value);
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                msgs.push(ConfirmationMsg::Close);
            }
        });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn rows_list_every_field_but_the_password() {
        let submission = Submission {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            date_of_birth: NaiveDate::from_ymd_opt(2004, 6, 15),
            email: "ada@example.com".into(),
            age: Some(20),
        };

        let rows = rows(&submission, "%m/%d/%Y");

        assert_eq!(
            rows,
            vec![
                ("First Name", "Ada".to_string()),
                ("Last Name", "Lovelace".to_string()),
                ("Date of Birth", "06/15/2004".to_string()),
                ("Email", "ada@example.com".to_string()),
                ("Age", "20".to_string()),
            ]
        );
    }
}
