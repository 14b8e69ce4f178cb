// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! RP2040 bring-up and the hardware handed to services.

use crate::board::{LINE_COUNT, XTAL_FREQ_HZ};
use blinker_common::PinBank;
use rp2040_hal::{
    self as hal,
    gpio::{DynPinId, FunctionSioInput, FunctionSioOutput, Pin, PullDown, PullUp},
    pac,
};

pub type LinePin = Pin<DynPinId, FunctionSioOutput, PullDown>;
pub type ButtonPin = Pin<DynPinId, FunctionSioInput, PullUp>;

/// Output lines, indexed by `LineId`.
pub type Lines = PinBank<LinePin, LINE_COUNT>;

pub const RETRIGGER_BUTTON: usize = 0;
pub const HOLD_BUTTON: usize = 1;

/// Hardware accessed by services through the service context.
pub struct Peripherals {
    pub timer: hal::Timer,
    pub buttons: [ButtonPin; 2],
}

/// Bring up clocks, timer and GPIO. Returns the service peripherals and the
/// output lines, which controllers own through a shared writer.
pub fn init() -> (Peripherals, Lines) {
    let Some(mut pac) = pac::Peripherals::take() else {
        defmt::panic!("Peripherals already taken");
    };
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);

    let Ok(clocks) = hal::clocks::init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    ) else {
        defmt::panic!("Clock init failed");
    };

    let timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let sio = hal::Sio::new(pac.SIO);
    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let lines = PinBank::new([
        pins.gpio25.into_push_pull_output().into_dyn_pin(),
        pins.gpio15.into_push_pull_output().into_dyn_pin(),
    ]);
    let buttons = [
        pins.gpio2.into_pull_up_input().into_dyn_pin(),
        pins.gpio3.into_pull_up_input().into_dyn_pin(),
    ];

    (Peripherals { timer, buttons }, lines)
}
