// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Masked password input with a show/hide toggle.

use eframe::egui;

/// Text plus whether it is currently shown in clear.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct PasswordFieldModel {
    pub value: String,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PasswordFieldMsg {
    ValueChanged(String),
    ToggleVisibility,
}

pub fn update(model: &mut PasswordFieldModel, msg: PasswordFieldMsg) {
    match msg {
        PasswordFieldMsg::ValueChanged(text) => model.value = text,
        PasswordFieldMsg::ToggleVisibility => model.visible = !model.visible,
    }
}

/// Render the input and its eye button, returning any triggered messages.
pub fn view(ui: &mut egui::Ui, model: &PasswordFieldModel, hint: &str) -> Vec<PasswordFieldMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        let mut value = model.value.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut value)
                    .password(!model.visible)
                    .hint_text(hint),
            )
            .changed()
        {
            msgs.push(PasswordFieldMsg::ValueChanged(value));
        }

        let (icon, tip) = if model.visible {
            (egui_phosphor::regular::EYE_SLASH, "Hide password")
        } else {
            (egui_phosphor::regular::EYE, "Show password")
        };
        if ui.button(icon).on_hover_text(tip).clicked() {
            msgs.push(PasswordFieldMsg::ToggleVisibility);
        }
    });

    msgs
}
