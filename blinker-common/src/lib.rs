// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tick-driven blink controller for a single binary output line.
//!
//! This crate supports both `no_std` (embedded) and `std` (host) environments:
//! - Default: `no_std` mode for embedded targets
//! - `std` feature: Enables `std` support for host tools
//! - `embedded` feature: Enables the `embedded-hal` pin adapter
//! - `defmt` feature: Logs misuse (unbound lines, zero durations) via defmt

#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod controller;
pub mod line;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use config::BlinkConfig;
pub use controller::BlinkController;
pub use line::{FnLine, WriteLine};
pub use types::{Level, LineId, Mode, Phase, Polarity};

#[cfg(feature = "embedded")]
pub use line::PinBank;
