// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities.

pub mod logging;

/// Install the global tracing subscriber.
pub use logging::init_logging;
