// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the registration form.
//! Handles layout, form controls, and the error and confirmation modals.

pub mod components;

use eframe::egui;

use crate::config::AppConfig;
use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::{confirmation, date_picker, password_field};

/// Stateful egui application holding the form model and pending messages.
pub struct RegistrationApp {
    model: AppModel,
    inbox: Vec<Msg>,
    date_format: String,
}

impl RegistrationApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            date_format: config.date_format.clone(),
        }
    }
}

impl Default for RegistrationApp {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl eframe::App for RegistrationApp {
    /// Drives a single UI frame: applies queued messages to the model, then renders
    /// the form, the status bar, and whichever modal is open. Views only enqueue
    /// messages; they are applied at the start of the next frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        let had_msgs = !self.inbox.is_empty();
        for msg in std::mem::take(&mut self.inbox) {
            mvu::update(&mut self.model, msg);
        }
        if had_msgs {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Create your account");
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);
        self.render_confirmation_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            // Form stays read-only behind an open modal.
            let editable = self.model.error.is_none() && !self.model.is_confirmed();
            ui.add_enabled_ui(editable, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_form(ui);
                    ui.add_space(12.0);
                    self.render_submit_button(ui);
                    ui.add_space(8.0);
                });
            });
        });
    }
}

impl RegistrationApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Labeled grid with one row per field.
    fn render_form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("registration_grid")
            .num_columns(2)
            .spacing(egui::vec2(8.0, 10.0))
            .min_col_width(120.0)
            .show(ui, |ui| {
                ui.label("First Name");
                if let Some(text) = text_input(ui, &self.model.first_name, "e.g., Ada") {
                    self.inbox.push(Msg::FirstNameChanged(text));
                }
                ui.end_row();

                ui.label("Last Name");
                if let Some(text) = text_input(ui, &self.model.last_name, "e.g., Lovelace") {
                    self.inbox.push(Msg::LastNameChanged(text));
                }
                ui.end_row();

                ui.label("Date of Birth");
                let dob_msgs = date_picker::view(&self.model.date_of_birth, ui);
                self.inbox.extend(dob_msgs.into_iter().map(Msg::DateOfBirth));
                ui.end_row();

                ui.label("Email");
                if let Some(text) = text_input(ui, &self.model.email, "name@example.com") {
                    self.inbox.push(Msg::EmailChanged(text));
                }
                ui.end_row();

                ui.label("Password");
                let pw_msgs = password_field::view(ui, &self.model.password, "Password");
                self.inbox.extend(pw_msgs.into_iter().map(Msg::Password));
                ui.end_row();

                ui.label("Confirm Password");
                let confirm_msgs =
                    password_field::view(ui, &self.model.confirm_password, "Repeat password");
                self.inbox
                    .extend(confirm_msgs.into_iter().map(Msg::ConfirmPassword));
                ui.end_row();
            });

        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(
                "Passwords need at least 8 characters, a number, and a special character.",
            )
            .small()
            .color(egui::Color32::from_gray(110)),
        );
    }

    /// Submit is enabled only when every field holds a value.
    fn render_submit_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(format!(
            "{} Submit",
            egui_phosphor::regular::PAPER_PLANE_RIGHT
        ))
        .min_size(egui::vec2(ui.available_width(), 0.0));

        if ui
            .add_enabled(self.model.can_submit(), button)
            .on_disabled_hover_text("Please fill in all fields")
            .clicked()
        {
            self.inbox.push(Msg::SubmitRequested);
        }
    }

    /// Render a simple modal window for validation errors.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Validation error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    fn render_confirmation_modal(&mut self, ctx: &egui::Context) {
        if let Some(submission) = &self.model.confirmation {
            let msgs = confirmation::view(ctx, submission, &self.date_format);
            self.inbox.extend(msgs.into_iter().map(|m| match m {
                confirmation::ConfirmationMsg::Close => Msg::CloseConfirmation,
            }));
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
        }
    }
}

/// Single-line text input; returns the new text when edited.
fn text_input(ui: &mut egui::Ui, current: &str, hint: &str) -> Option<String> {
    let mut text = current.to_string();
    ui.add(egui::TextEdit::singleline(&mut text).hint_text(hint))
        .changed()
        .then_some(text)
}
