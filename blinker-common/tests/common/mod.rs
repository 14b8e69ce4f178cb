// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Recording line writer shared by the integration tests.

#![allow(dead_code)]

use blinker_common::{BlinkConfig, BlinkController, Level, LineId, Polarity, WriteLine};

/// Remembers every write and the level each line was last driven to.
#[derive(Default)]
pub struct Recorder {
    pub writes: Vec<(LineId, Level)>,
    levels: [Option<Level>; 4],
}

impl Recorder {
    pub fn level(&self, line: LineId) -> Option<Level> {
        self.levels[line as usize]
    }

    pub fn levels(&self) -> Vec<Level> {
        self.writes.iter().map(|&(_, level)| level).collect()
    }
}

impl WriteLine for Recorder {
    fn write(&mut self, line: LineId, level: Level) {
        self.writes.push((line, level));
        self.levels[line as usize] = Some(level);
    }
}

/// A controller bound to line 0, configured and with the begin write
/// cleared from the record.
pub fn bound(polarity: Polarity, config: BlinkConfig) -> BlinkController<Recorder> {
    let mut blink = BlinkController::new(Recorder::default());
    blink.begin(0, polarity);
    blink.set_config(config);
    blink.writer_mut().writes.clear();
    blink
}

/// Line level after `start` and after each of `ticks` advance calls.
pub fn trace(blink: &mut BlinkController<Recorder>, ticks: usize) -> Vec<Level> {
    blink.start();
    let mut out = Vec::with_capacity(ticks + 1);
    out.push(blink.writer().level(0).expect("line written on start"));
    for _ in 0..ticks {
        blink.advance();
        out.push(blink.writer().level(0).expect("line written on start"));
    }
    out
}
