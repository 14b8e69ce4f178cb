// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Main-loop service plumbing: events between services and a tick source
//! built on a free-running microsecond counter.

use core::cell::RefCell;
use heapless::Vec;

use crate::types::LineId;

/// Events that can be sent between services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Restart the configured pattern on a line
    Retrigger(LineId),
    /// Hold a line active until released
    Hold(LineId),
    /// Resume the configured pattern after a hold
    Release(LineId),
}

impl Event {
    pub fn line(&self) -> LineId {
        match *self {
            Event::Retrigger(line) | Event::Hold(line) | Event::Release(line) => line,
        }
    }
}

pub const EVENT_BUS_CAPACITY: usize = 32;

/// Event bus for inter-service communication
pub struct EventBus {
    events: RefCell<Vec<Event, EVENT_BUS_CAPACITY>>,
}

impl EventBus {
    pub const fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Publish an event to the bus. Returns `false` if the bus was full and
    /// the event was dropped.
    pub fn publish(&self, event: Event) -> bool {
        if let Err(_event) = self.events.borrow_mut().push(event) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Event bus full, dropping event: {:?}", _event);
            return false;
        }
        true
    }

    /// Consume events matching a filter
    pub fn consume<F>(&self, mut filter: F)
    where
        F: FnMut(&Event) -> bool,
    {
        self.events.borrow_mut().retain(|e| !filter(e));
    }

    /// Check if an event exists without consuming it
    pub fn has_event<F>(&self, filter: F) -> bool
    where
        F: FnMut(&Event) -> bool,
    {
        self.events.borrow().iter().any(filter)
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared context passed to all services
pub struct ServiceContext<'a, P> {
    pub peripherals: &'a mut P,
    pub events: &'a EventBus,
}

/// Trait for services that run in the main loop
pub trait Service<P> {
    /// Process this service's logic
    /// Uses interior mutability (Cell/RefCell) for state changes
    fn process(&self, ctx: &mut ServiceContext<P>);
}

/// Turns a free-running microsecond counter into whole ticks of a fixed
/// period.
///
/// Each call to [`poll`](Self::poll) reports how many ticks elapsed since
/// the previous one, capped at `max_catch_up`. When the cap is hit the
/// backlog is dropped so a stalled loop does not replay a burst of ticks.
pub struct TickDivider {
    period_us: u64,
    max_catch_up: u32,
    next_us: Option<u64>,
}

impl TickDivider {
    pub const fn new(period_us: u64, max_catch_up: u32) -> Self {
        Self {
            period_us: if period_us == 0 { 1 } else { period_us },
            max_catch_up,
            next_us: None,
        }
    }

    pub fn period_us(&self) -> u64 {
        self.period_us
    }

    /// Number of ticks due at `now_us`. The first poll only arms the divider.
    pub fn poll(&mut self, now_us: u64) -> u32 {
        let Some(next) = self.next_us else {
            self.next_us = Some(now_us + self.period_us);
            return 0;
        };

        if now_us < next {
            return 0;
        }

        let due = (now_us - next) / self.period_us + 1;
        if due > self.max_catch_up as u64 {
            self.next_us = Some(now_us + self.period_us);
            return self.max_catch_up;
        }

        self.next_us = Some(next + due * self.period_us);
        due as u32
    }
}
