// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Blink service: one controller advanced from the hardware timer.

use crate::board::{LineSetup, MAX_TICK_CATCH_UP, TICK_PERIOD_US};
use crate::peripherals::{Lines, Peripherals};
use blinker_common::service::{Event, Service, ServiceContext, TickDivider};
use blinker_common::{BlinkController, LineId};
use core::cell::RefCell;

/// Drives one line's pattern and reacts to events addressed to that line.
pub struct BlinkService<'a> {
    line: LineId,
    blink: RefCell<BlinkController<&'a RefCell<Lines>>>,
    ticks: RefCell<TickDivider>,
}

impl<'a> BlinkService<'a> {
    pub fn new(lines: &'a RefCell<Lines>, setup: &LineSetup) -> Self {
        let mut blink = BlinkController::new(lines);
        blink.begin(setup.line, setup.polarity);
        blink.set_config(setup.pattern);
        if setup.autostart {
            blink.start();
        }

        defmt::println!(
            "Line {}: {} {}, running: {}",
            setup.line,
            setup.polarity,
            setup.pattern,
            blink.is_running()
        );

        Self {
            line: setup.line,
            blink: RefCell::new(blink),
            ticks: RefCell::new(TickDivider::new(TICK_PERIOD_US, MAX_TICK_CATCH_UP)),
        }
    }

    fn handle(blink: &mut BlinkController<&'a RefCell<Lines>>, event: Event) {
        defmt::debug!("Blink: {:?}", event);
        match event {
            Event::Retrigger(_) | Event::Release(_) => blink.start(),
            Event::Hold(_) => blink.force_on(),
        }
    }
}

impl Service<Peripherals> for BlinkService<'_> {
    fn process(&self, ctx: &mut ServiceContext<Peripherals>) {
        let mut blink = self.blink.borrow_mut();
        let line = self.line;

        ctx.events.consume(|event| {
            if event.line() != line {
                return false;
            }
            Self::handle(&mut blink, *event);
            true
        });

        let now = ctx.peripherals.timer.get_counter().ticks();
        let due = self.ticks.borrow_mut().poll(now);
        for _ in 0..due {
            blink.advance();
        }

        if due > 0 {
            defmt::trace!("Blink: line {} +{} ticks, running: {}", line, due, blink.is_running());
        }
    }
}
