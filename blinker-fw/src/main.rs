// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

#![no_std]
#![no_main]

mod board;
mod peripherals;
mod services;

use blinker_common::service::{Event, EventBus, Service, ServiceContext};
use core::cell::RefCell;
use defmt_rtt as _;
use panic_probe as _;
use peripherals::{Peripherals, HOLD_BUTTON, RETRIGGER_BUTTON};
use services::{BlinkService, ButtonService};

defmt::timestamp!("{=u64:us}", { 0 });

use cortex_m_rt::entry;

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

#[entry]
fn main() -> ! {
    defmt::println!("Blinker firmware v{}", env!("BLINKER_VERSION"));

    let (mut peripherals, lines) = peripherals::init();
    let lines = RefCell::new(lines);

    let heartbeat = BlinkService::new(&lines, &board::HEARTBEAT);
    let status = BlinkService::new(&lines, &board::STATUS);
    let retrigger = ButtonService::new(
        RETRIGGER_BUTTON,
        Some(Event::Retrigger(board::STATUS_LINE)),
        None,
    );
    let hold = ButtonService::new(
        HOLD_BUTTON,
        Some(Event::Hold(board::HEARTBEAT_LINE)),
        Some(Event::Release(board::HEARTBEAT_LINE)),
    );

    let events = EventBus::new();
    let services: [&dyn Service<Peripherals>; 4] = [&retrigger, &hold, &heartbeat, &status];

    defmt::println!("Entering main loop");
    loop {
        let mut ctx = ServiceContext {
            peripherals: &mut peripherals,
            events: &events,
        };
        for service in services.iter() {
            service.process(&mut ctx);
        }
    }
}
