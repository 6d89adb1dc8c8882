// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Desktop registration form: field validation, derived age, and an egui front end.
//!
//! The validator in [`logic::validation`] is UI-agnostic and can be used on its own.

pub mod app;
pub mod config;
pub mod logic;
pub mod models;
pub mod mvu;
pub mod ui;
pub mod utils;
