// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Push-button service publishing events on press and release edges.

use crate::peripherals::Peripherals;
use blinker_common::service::{Event, Service, ServiceContext};
use core::cell::Cell;
use embedded_hal::digital::InputPin;

/// Watches one active-low button.
pub struct ButtonService {
    button: usize,
    on_press: Option<Event>,
    on_release: Option<Event>,
    pressed: Cell<bool>,
}

impl ButtonService {
    pub fn new(button: usize, on_press: Option<Event>, on_release: Option<Event>) -> Self {
        Self {
            button,
            on_press,
            on_release,
            pressed: Cell::new(false),
        }
    }
}

impl Service<Peripherals> for ButtonService {
    fn process(&self, ctx: &mut ServiceContext<Peripherals>) {
        let Some(pin) = ctx.peripherals.buttons.get_mut(self.button) else {
            return;
        };
        let pressed = pin.is_low().unwrap_or(false);
        if pressed == self.pressed.replace(pressed) {
            return;
        }

        let event = if pressed { self.on_press } else { self.on_release };
        if let Some(event) = event {
            defmt::println!("Button {}: {:?}", self.button, event);
            ctx.events.publish(event);
        }
    }
}
