// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Service implementations for the firmware main loop.

pub mod blink;
pub mod button;

pub use blink::BlinkService;
pub use button::ButtonService;
