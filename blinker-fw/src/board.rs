// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Board wiring and pattern presets.
//!
//! | line | pin  | polarity    | pattern                    |
//! |------|------|-------------|----------------------------|
//! | 0    | GP25 | active high | heartbeat, forever         |
//! | 1    | GP15 | active low  | three blinks on retrigger  |
//!
//! Buttons on GP2 (retrigger line 1) and GP3 (hold line 0) are active low.

use blinker_common::{BlinkConfig, LineId, Polarity};

pub const XTAL_FREQ_HZ: u32 = 12_000_000;

/// One blink tick.
pub const TICK_PERIOD_US: u64 = 10_000;
/// Ticks replayed at most per main-loop pass after a stall.
pub const MAX_TICK_CATCH_UP: u32 = 8;

pub const HEARTBEAT_LINE: LineId = 0;
pub const STATUS_LINE: LineId = 1;
pub const LINE_COUNT: usize = 2;

/// Static setup of one controlled line.
pub struct LineSetup {
    pub line: LineId,
    pub polarity: Polarity,
    pub pattern: BlinkConfig,
    /// Start the pattern at boot instead of waiting for a retrigger.
    pub autostart: bool,
}

/// 50 ms flash every second.
pub const HEARTBEAT: LineSetup = LineSetup {
    line: HEARTBEAT_LINE,
    polarity: Polarity::ActiveHigh,
    pattern: BlinkConfig::forever(5, 95),
    autostart: true,
};

pub const STATUS: LineSetup = LineSetup {
    line: STATUS_LINE,
    polarity: Polarity::ActiveLow,
    pattern: BlinkConfig::repetitive(20, 20, 3),
    autostart: false,
};
