// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Behaviour tests for BlinkController.

mod common;

use blinker_common::{BlinkConfig, BlinkController, Level, Mode, Phase, Polarity};
use common::{bound, trace, Recorder};

#[test]
fn test_begin_drives_line_inactive() {
    let mut high = BlinkController::new(Recorder::default());
    high.begin(2, Polarity::ActiveHigh);
    assert_eq!(high.writer().writes, vec![(2, Level::Low)]);

    let mut low = BlinkController::new(Recorder::default());
    low.begin(3, Polarity::ActiveLow);
    assert_eq!(low.writer().writes, vec![(3, Level::High)]);
    assert_eq!(low.line(), Some(3));
    assert!(!low.is_running());
}

#[test]
fn test_configure_does_not_write_or_start() {
    let mut blink = bound(Polarity::ActiveHigh, BlinkConfig::once(1));
    blink.configure(Mode::Repetitive, 2, 3, 4);

    assert!(blink.writer().writes.is_empty());
    assert!(!blink.is_running());
    assert_eq!(*blink.config(), BlinkConfig::repetitive(2, 3, 4));
}

#[test]
fn test_once_pattern() {
    let mut blink = bound(Polarity::ActiveHigh, BlinkConfig::once(5));

    blink.start();
    assert!(blink.is_running());
    assert_eq!(blink.writer().level(0), Some(Level::High));

    for _ in 0..4 {
        blink.advance();
        assert!(blink.is_running());
        assert_eq!(blink.writer().level(0), Some(Level::High));
    }

    blink.advance();
    assert!(!blink.is_running());
    assert_eq!(blink.writer().level(0), Some(Level::Low));

    for _ in 0..10 {
        blink.advance();
    }
    assert_eq!(blink.writer().levels(), vec![Level::High, Level::Low]);
}

#[test]
fn test_once_ignores_off_and_times() {
    let mut blink = bound(Polarity::ActiveHigh, BlinkConfig::new(Mode::Once, 2, 9, 9));

    let levels = trace(&mut blink, 6);

    assert_eq!(&levels[..3], &[Level::High, Level::High, Level::Low]);
    assert!(levels[3..].iter().all(|&l| l == Level::Low));
    assert!(!blink.is_running());
}

#[test]
fn test_repetitive_pattern() {
    let mut blink = bound(Polarity::ActiveHigh, BlinkConfig::repetitive(2, 3, 4));

    blink.start();
    let mut calls = 0;
    let mut per_tick = Vec::new();
    while blink.is_running() {
        blink.advance();
        calls += 1;
        per_tick.push(blink.writer().level(0).unwrap());
        assert!(calls <= 20, "pattern did not stop");
    }

    assert_eq!(calls, 20);
    assert_eq!(blink.writer().level(0), Some(Level::Low));

    // One cycle: active for ticks 0..2 (start + 1 advance), inactive for 3.
    let one_cycle = [Level::High, Level::Low, Level::Low, Level::Low, Level::High];
    for cycle in 0..3 {
        assert_eq!(&per_tick[cycle * 5..cycle * 5 + 5], &one_cycle);
    }

    let writes = blink.writer().levels();
    assert_eq!(writes.len(), 8);
    assert!(writes
        .chunks(2)
        .all(|pair| *pair == [Level::High, Level::Low]));
}

#[test]
fn test_forever_pattern_is_periodic() {
    let (on, off) = (3usize, 4usize);
    let mut blink = bound(Polarity::ActiveHigh, BlinkConfig::forever(on as u16, off as u16));

    let levels = trace(&mut blink, 10_000);

    assert!(blink.is_running());
    for (tick, &level) in levels.iter().enumerate() {
        let expected = if tick % (on + off) < on {
            Level::High
        } else {
            Level::Low
        };
        assert_eq!(level, expected, "tick {tick}");
    }
}

#[test]
fn test_polarity_inversion_complements_every_write() {
    let config = BlinkConfig::repetitive(2, 3, 4);
    let mut high = bound(Polarity::ActiveHigh, config);
    let mut low = bound(Polarity::ActiveLow, config);

    let high_trace = trace(&mut high, 25);
    let low_trace = trace(&mut low, 25);

    assert_eq!(high.writer().writes.len(), low.writer().writes.len());
    for (h, l) in high.writer().levels().iter().zip(low.writer().levels()) {
        assert_eq!(*h, !l);
    }
    for (h, l) in high_trace.iter().zip(low_trace) {
        assert_eq!(*h, !l);
    }
}

#[test]
fn test_force_on_halts_and_writes_once() {
    let mut blink = bound(Polarity::ActiveHigh, BlinkConfig::forever(2, 2));
    blink.start();
    blink.advance();
    blink.advance();
    assert_eq!(blink.phase(), Phase::Off);
    blink.writer_mut().writes.clear();

    blink.force_on();
    assert!(!blink.is_running());
    assert_eq!(blink.writer().writes, vec![(0, Level::High)]);

    for _ in 0..10 {
        blink.advance();
    }
    assert_eq!(blink.writer().writes.len(), 1);
}

#[test]
fn test_force_off_under_active_low() {
    let mut blink = bound(Polarity::ActiveLow, BlinkConfig::once(3));
    blink.start();
    blink.writer_mut().writes.clear();

    blink.force_off();
    assert!(!blink.is_running());
    assert_eq!(blink.writer().writes, vec![(0, Level::High)]);

    blink.advance();
    assert_eq!(blink.writer().writes.len(), 1);

    blink.start();
    assert!(blink.is_running());
    assert_eq!(blink.writer().level(0), Some(Level::Low));
}

#[test]
fn test_force_while_idle() {
    let mut blink = bound(Polarity::ActiveHigh, BlinkConfig::once(3));

    blink.force_on();
    blink.force_off();

    assert!(!blink.is_running());
    assert_eq!(blink.writer().levels(), vec![Level::High, Level::Low]);
}

#[test]
fn test_stop_is_idempotent_and_keeps_level() {
    let mut blink = bound(Polarity::ActiveHigh, BlinkConfig::forever(5, 5));
    blink.start();
    blink.advance();

    blink.stop();
    blink.stop();
    blink.stop();
    blink.advance();

    assert!(!blink.is_running());
    assert_eq!(blink.writer().writes, vec![(0, Level::High)]);
}

#[test]
fn test_restart_resets_progress() {
    let mut blink = bound(Polarity::ActiveHigh, BlinkConfig::repetitive(2, 3, 2));
    blink.start();
    for _ in 0..6 {
        blink.advance();
    }
    assert_eq!(blink.phase(), Phase::On);
    assert_eq!(blink.cycles_remaining(), 1);

    blink.start();
    assert_eq!(blink.phase(), Phase::On);
    assert_eq!(blink.ticks_remaining(), 2);
    assert_eq!(blink.cycles_remaining(), 2);

    let mut calls = 0;
    while blink.is_running() {
        blink.advance();
        calls += 1;
    }
    assert_eq!(calls, 10);
}

#[test]
fn test_restart_from_off_phase_drives_active() {
    let mut blink = bound(Polarity::ActiveHigh, BlinkConfig::forever(1, 4));
    blink.start();
    blink.advance();
    assert_eq!(blink.writer().level(0), Some(Level::Low));

    blink.start();
    assert_eq!(blink.writer().level(0), Some(Level::High));
    assert_eq!(blink.phase(), Phase::On);
}

#[test]
fn test_configure_applies_on_next_start() {
    let mut blink = bound(Polarity::ActiveHigh, BlinkConfig::forever(2, 2));
    blink.start();

    blink.set_config(BlinkConfig::once(1));
    for _ in 0..8 {
        blink.advance();
    }
    assert!(blink.is_running());

    blink.start();
    blink.advance();
    assert!(!blink.is_running());
}

#[test]
fn test_zero_durations_behave_as_one() {
    let mut once = bound(Polarity::ActiveHigh, BlinkConfig::once(0));
    once.start();
    once.advance();
    assert!(!once.is_running());
    assert_eq!(once.writer().levels(), vec![Level::High, Level::Low]);

    let mut rep = bound(Polarity::ActiveHigh, BlinkConfig::repetitive(0, 0, 0));
    rep.start();
    let mut calls = 0;
    while rep.is_running() {
        rep.advance();
        calls += 1;
        assert!(calls <= 2);
    }
    assert_eq!(calls, 2);
}

#[test]
fn test_times_ignored_outside_repetitive() {
    let mut blink = bound(Polarity::ActiveHigh, BlinkConfig::new(Mode::Forever, 1, 1, 1));

    trace(&mut blink, 100);

    assert!(blink.is_running());
    assert_eq!(blink.cycles_remaining(), 0);
}

#[test]
fn test_controller_moves_with_its_binding() {
    let mut blink = bound(Polarity::ActiveLow, BlinkConfig::forever(1, 1));
    blink.start();

    let mut moved = blink;
    moved.advance();

    assert_eq!(moved.line(), Some(0));
    assert_eq!(moved.polarity(), Polarity::ActiveLow);
    let recorder = moved.into_writer();
    assert_eq!(recorder.levels(), vec![Level::Low, Level::High]);
}
