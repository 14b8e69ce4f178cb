// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tick-driven blink state machine.
//!
//! The controller is advanced once per tick by the caller (timer interrupt or
//! polling loop) and writes to its line only on phase transitions:
//!
//! ```text
//!   start ──► On ──(ticks_on)──► Off ──(ticks_off)──► On ...
//!              │                  │
//!              └ Once: stop       └ Repetitive: stop after `times` cycles
//! ```

use crate::config::BlinkConfig;
use crate::line::WriteLine;
use crate::types::{Level, LineId, Mode, Phase, Polarity};

/// Runtime state, snapshotted from [`BlinkConfig`] on `start` so that
/// reconfiguring never alters a cycle already in progress.
#[derive(Clone, Copy)]
struct RunState {
    mode: Mode,
    ticks_on: u16,
    ticks_off: u16,
    phase: Phase,
    ticks_remaining: u16,
    cycles_remaining: u16,
    running: bool,
}

impl RunState {
    const IDLE: Self = Self {
        mode: Mode::Once,
        ticks_on: 1,
        ticks_off: 1,
        phase: Phase::On,
        ticks_remaining: 0,
        cycles_remaining: 0,
        running: false,
    };

    fn snapshot(config: &BlinkConfig) -> Self {
        Self {
            mode: config.mode,
            ticks_on: config.effective_ticks_on(),
            ticks_off: config.effective_ticks_off(),
            phase: Phase::On,
            ticks_remaining: config.effective_ticks_on(),
            cycles_remaining: match config.mode {
                Mode::Repetitive => config.effective_times(),
                Mode::Once | Mode::Forever => 0,
            },
            running: true,
        }
    }
}

/// Drives one output line through ON/OFF patterns.
///
/// The controller owns its line binding: it is neither `Clone` nor `Copy`,
/// so two handles can never write divergent state to the same line. Moving
/// it transfers the binding.
pub struct BlinkController<W> {
    writer: W,
    line: Option<LineId>,
    polarity: Polarity,
    config: BlinkConfig,
    state: RunState,
}

impl<W: WriteLine> BlinkController<W> {
    /// Creates an unbound controller. Call [`begin`](Self::begin) before
    /// anything else; until then no writes reach the writer.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            line: None,
            polarity: Polarity::ActiveHigh,
            config: BlinkConfig::once(0),
            state: RunState::IDLE,
        }
    }

    /// Binds the controller to `line` and drives it inactive.
    ///
    /// Rebinding while running leaves the old line at its last level; stop
    /// first.
    pub fn begin(&mut self, line: LineId, polarity: Polarity) {
        self.line = Some(line);
        self.polarity = polarity;
        self.drive(false);
    }

    /// Stores the pattern for the next [`start`](Self::start).
    ///
    /// `ticks_off` is ignored by [`Mode::Once`] and `times` by everything
    /// but [`Mode::Repetitive`]; pass `0` and `1` when unused.
    pub fn configure(&mut self, mode: Mode, ticks_on: u16, ticks_off: u16, times: u16) {
        self.set_config(BlinkConfig::new(mode, ticks_on, ticks_off, times));
    }

    pub fn set_config(&mut self, config: BlinkConfig) {
        #[cfg(feature = "defmt")]
        if config.has_zero_count() {
            defmt::warn!("Blink: zero duration in {}, treated as 1", config);
        }
        self.config = config;
    }

    /// Starts the configured pattern from the ON phase, driving the line
    /// active. Restarts from scratch when already running.
    pub fn start(&mut self) {
        #[cfg(feature = "defmt")]
        if self.line.is_none() {
            defmt::warn!("Blink: start on unbound controller");
        }

        self.state = RunState::snapshot(&self.config);
        self.drive(true);
    }

    /// Halts the pattern. The line keeps its current level.
    pub fn stop(&mut self) {
        self.state.running = false;
    }

    /// Advances the pattern by one tick.
    ///
    /// No effect when not running. Constant time, no allocation, at most one
    /// write; safe to call from an interrupt handler.
    pub fn advance(&mut self) {
        if !self.state.running {
            return;
        }

        self.state.ticks_remaining -= 1;
        if self.state.ticks_remaining != 0 {
            return;
        }

        match self.state.phase {
            Phase::On => {
                self.drive(false);

                if self.state.mode.cycles() {
                    self.state.phase = Phase::Off;
                    self.state.ticks_remaining = self.state.ticks_off;
                } else {
                    self.state.running = false;
                }
            }
            Phase::Off => {
                if self.state.mode == Mode::Repetitive {
                    self.state.cycles_remaining -= 1;
                    if self.state.cycles_remaining == 0 {
                        self.state.running = false;
                        return;
                    }
                }

                self.state.phase = Phase::On;
                self.state.ticks_remaining = self.state.ticks_on;
                self.drive(true);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Halts the pattern and holds the line active.
    pub fn force_on(&mut self) {
        self.state.running = false;
        self.drive(true);
    }

    /// Halts the pattern and holds the line inactive.
    pub fn force_off(&mut self) {
        self.state.running = false;
        self.drive(false);
    }

    /// Configuration for the next `start`; may differ from the running one.
    pub fn config(&self) -> &BlinkConfig {
        &self.config
    }

    pub fn line(&self) -> Option<LineId> {
        self.line
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Phase of the current (or last) cycle.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn ticks_remaining(&self) -> u16 {
        self.state.ticks_remaining
    }

    /// Cycles left including the current one; only tracked in
    /// [`Mode::Repetitive`].
    pub fn cycles_remaining(&self) -> u16 {
        self.state.cycles_remaining
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Electrical level written for a logical state under the bound polarity.
    pub fn level_for(&self, active: bool) -> Level {
        self.polarity.level(active)
    }

    fn drive(&mut self, active: bool) {
        if let Some(line) = self.line {
            self.writer.write(line, self.polarity.level(active));
        }
    }
}
