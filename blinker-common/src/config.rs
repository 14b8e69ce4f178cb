// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Blink pattern parameters.

use crate::types::Mode;
use serde::{Deserialize, Serialize};

/// Pattern parameters, applied by the controller on the next `start`.
///
/// Durations are counted in ticks, one tick being one call to
/// [`BlinkController::advance`](crate::BlinkController::advance). Zero values
/// are stored as given and clamped to one tick (or one cycle) when the
/// pattern starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    pub mode: Mode,
    pub ticks_on: u16,
    /// Only used by [`Mode::Repetitive`] and [`Mode::Forever`].
    pub ticks_off: u16,
    /// Only used by [`Mode::Repetitive`].
    pub times: u16,
}

impl BlinkConfig {
    pub const fn new(mode: Mode, ticks_on: u16, ticks_off: u16, times: u16) -> Self {
        Self {
            mode,
            ticks_on,
            ticks_off,
            times,
        }
    }

    /// Single ON pulse.
    pub const fn once(ticks_on: u16) -> Self {
        Self::new(Mode::Once, ticks_on, 0, 1)
    }

    pub const fn repetitive(ticks_on: u16, ticks_off: u16, times: u16) -> Self {
        Self::new(Mode::Repetitive, ticks_on, ticks_off, times)
    }

    pub const fn forever(ticks_on: u16, ticks_off: u16) -> Self {
        Self::new(Mode::Forever, ticks_on, ticks_off, 1)
    }

    pub(crate) const fn effective_ticks_on(&self) -> u16 {
        clamp(self.ticks_on)
    }

    pub(crate) const fn effective_ticks_off(&self) -> u16 {
        clamp(self.ticks_off)
    }

    pub(crate) const fn effective_times(&self) -> u16 {
        clamp(self.times)
    }

    /// True when a value the mode actually uses is zero and will be clamped.
    pub const fn has_zero_count(&self) -> bool {
        match self.mode {
            Mode::Once => self.ticks_on == 0,
            Mode::Forever => self.ticks_on == 0 || self.ticks_off == 0,
            Mode::Repetitive => self.ticks_on == 0 || self.ticks_off == 0 || self.times == 0,
        }
    }

    /// Ticks from `start` until the pattern stops on its own, or `None` for
    /// [`Mode::Forever`].
    pub const fn total_ticks(&self) -> Option<u32> {
        let on = self.effective_ticks_on() as u32;
        let off = self.effective_ticks_off() as u32;
        match self.mode {
            Mode::Once => Some(on),
            Mode::Repetitive => Some((on + off) * self.effective_times() as u32),
            Mode::Forever => None,
        }
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::once(0)
    }
}

const fn clamp(count: u16) -> u16 {
    if count == 0 {
        1
    } else {
        count
    }
}
