// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Optional date-of-birth picker in MVU-style model/update/view.

use chrono::NaiveDate;
use eframe::egui;
use egui_extras::DatePickerButton;

/// Display format for the picker button and the confirmation overlay.
pub const DISPLAY_FORMAT: &str = "%m/%d/%Y";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateOfBirthModel {
    /// Selected calendar date; `None` until the user picks one.
    pub date: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateOfBirthMsg {
    /// Start picking; seeds the calendar with today.
    Choose,
    /// Update the selected date.
    SetDate(NaiveDate),
    /// Forget the selection.
    Clear,
}

/// Apply a message to the date-of-birth model.
pub fn update(model: &mut DateOfBirthModel, msg: DateOfBirthMsg, today: NaiveDate) {
    match msg {
        DateOfBirthMsg::Choose => {
            model.date.get_or_insert(today);
        }
        DateOfBirthMsg::SetDate(date) => model.date = Some(date),
        DateOfBirthMsg::Clear => model.date = None,
    }
}

/// Render the picker controls and return any triggered messages.
pub fn view(model: &DateOfBirthModel, ui: &mut egui::Ui) -> Vec<DateOfBirthMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| match model.date {
        None => {
            if ui
                .button(format!(
                    "{} Choose date",
                    egui_phosphor::regular::CALENDAR_BLANK
                ))
                .clicked()
            {
                msgs.push(DateOfBirthMsg::Choose);
            }
        }
        Some(selected) => {
            let mut date = selected;
            if ui
                .add(
                    DatePickerButton::new(&mut date)
                        .id_salt("date_of_birth")
                        .format(DISPLAY_FORMAT)
                        .show_icon(true),
                )
                .changed()
            {
                msgs.push(DateOfBirthMsg::SetDate(date));
            }
            if ui
                .button(egui_phosphor::regular::X)
                .on_hover_text("Clear date of birth")
                .clicked()
            {
                msgs.push(DateOfBirthMsg::Clear);
            }
        }
    });

    msgs
}
