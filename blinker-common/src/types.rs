// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Enumerations shared by the controller and the line writers.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a physical output line. Its meaning is defined by
/// the [`WriteLine`](crate::WriteLine) implementation.
pub type LineId = u8;

/// Electrical level written to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Level {
    Low = 0,
    High = 1,
}

impl Level {
    pub const fn from_bit(bit: u8) -> Self {
        if bit & 1 == 0 {
            Level::Low
        } else {
            Level::High
        }
    }

    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        Level::from_bit(self.bit() ^ 1)
    }
}

/// Which electrical level is the active (ON) state of a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Polarity {
    /// Writing a logic 1 turns the line on.
    #[default]
    ActiveHigh = 0,
    /// Writing a logic 0 turns the line on.
    ActiveLow = 1,
}

impl Polarity {
    /// Electrical level for a logical state. ActiveLow only flips the bit.
    pub const fn level(self, active: bool) -> Level {
        Level::from_bit(self as u8 ^ active as u8)
    }
}

/// Pattern mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Active for the ON duration, then inactive and stop.
    #[default]
    Once,
    /// Alternate ON/OFF for a fixed number of cycles, then stop.
    Repetitive,
    /// Alternate ON/OFF until stopped.
    Forever,
}

impl Mode {
    /// Whether an OFF phase follows the ON phase.
    pub const fn cycles(self) -> bool {
        matches!(self, Mode::Repetitive | Mode::Forever)
    }
}

/// Half of the blink cycle currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    On,
    Off,
}
