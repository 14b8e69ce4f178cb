// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Output line write capability.
//!
//! A controller holds its own writer instead of sharing one process-wide
//! hook, so several instances can run side by side and tests can inject a
//! recorder.

use core::cell::RefCell;

use crate::types::{Level, LineId};

/// Something that can drive an output line to a level.
///
/// Called from [`BlinkController::advance`](crate::BlinkController::advance),
/// which may run in interrupt context: implementations must not block.
pub trait WriteLine {
    fn write(&mut self, line: LineId, level: Level);
}

impl<W: WriteLine + ?Sized> WriteLine for &mut W {
    fn write(&mut self, line: LineId, level: Level) {
        (**self).write(line, level);
    }
}

/// Lets several controllers in one execution context share a single board
/// writer.
impl<W: WriteLine> WriteLine for &RefCell<W> {
    fn write(&mut self, line: LineId, level: Level) {
        self.borrow_mut().write(line, level);
    }
}

/// Adapts a `FnMut(LineId, Level)` closure, e.g. a `digitalWrite`-style hook.
pub struct FnLine<F>(pub F);

impl<F: FnMut(LineId, Level)> WriteLine for FnLine<F> {
    fn write(&mut self, line: LineId, level: Level) {
        (self.0)(line, level)
    }
}

#[cfg(feature = "embedded")]
pub use pin::PinBank;

#[cfg(feature = "embedded")]
mod pin {
    use super::WriteLine;
    use crate::types::{Level, LineId};
    use embedded_hal::digital::OutputPin;

    /// Maps line ids `0..N` onto a fixed set of output pins.
    pub struct PinBank<P, const N: usize> {
        pins: [P; N],
    }

    impl<P: OutputPin, const N: usize> PinBank<P, N> {
        pub fn new(pins: [P; N]) -> Self {
            Self { pins }
        }

        pub fn pin_mut(&mut self, line: LineId) -> Option<&mut P> {
            self.pins.get_mut(line as usize)
        }

        pub fn release(self) -> [P; N] {
            self.pins
        }
    }

    impl<P: OutputPin, const N: usize> WriteLine for PinBank<P, N> {
        fn write(&mut self, line: LineId, level: Level) {
            let Some(pin) = self.pins.get_mut(line as usize) else {
                #[cfg(feature = "defmt")]
                defmt::warn!("PinBank: no pin for line {}", line);
                return;
            };

            if level.is_high() {
                pin.set_high().ok();
            } else {
                pin.set_low().ok();
            }
        }
    }

}
