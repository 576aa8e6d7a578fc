//! Mock implementations for testing
//!
//! This module provides mock implementations of all collaborator traits for
//! use in unit and integration tests. It is compiled for this crate's own
//! tests and for downstream crates that enable the `std` feature.

#![cfg(any(test, feature = "std"))]

use core::time::Duration;

use crate::audio::{AudioSink, SoundCue};
use crate::cipher::CipherEngine;
use crate::notify::Notifier;
use crate::surface::{Backdrop, Redraw, Surface};
use crate::time::{Clock, Instant, Scheduler, TimerHandle};

/// Mock cipher machine.
///
/// Encodes with a fixed ROT13 substitution and advances an odometer that
/// shows through [`rotor_positions`](CipherEngine::rotor_positions), so tests
/// can observe both the mapping and the advancing machine state.
#[derive(Debug, Default)]
pub struct MockCipher {
    steps: u32,
    encoded: usize,
}

impl MockCipher {
    /// Create a mock machine at rotor position `AAA`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `encode_char` calls so far.
    #[must_use]
    pub fn encoded_count(&self) -> usize {
        self.encoded
    }

    /// The substitution this mock applies, without advancing the machine.
    #[must_use]
    pub fn substitution(letter: char) -> char {
        let idx = (letter as u8).wrapping_sub(b'A');
        char::from(b'A' + (idx + 13) % 26)
    }
}

impl CipherEngine for MockCipher {
    fn encode_char(&mut self, letter: char) -> char {
        self.steps = self.steps.wrapping_add(1);
        self.encoded += 1;
        Self::substitution(letter)
    }

    fn rotor_positions(&self) -> [char; 3] {
        let s = self.steps;
        let digit = |d: u32| char::from(b'A' + (d % 26) as u8);
        [digit(s / 676), digit(s / 26), digit(s)]
    }
}

/// One side effect observed by [`MockHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `Surface::request_redraw`
    Redraw(Redraw),
    /// `Surface::set_backdrop`
    Backdrop(Backdrop),
    /// `AudioSink::play`
    Sound(SoundCue),
    /// `Notifier::show_message` (truncated to the recorder's capacity)
    Message(heapless::String<128>),
    /// `Scheduler::schedule_after`
    Scheduled {
        /// Requested delay.
        delay: Duration,
        /// Handle returned to the caller.
        handle: TimerHandle,
    },
}

/// Maximum number of recorded effects.
///
/// Oldest-first; further effects are silently dropped when full. Scenario
/// tests stay well under this or clear between steps.
const EFFECT_CAP: usize = 32;

/// Mock host environment.
///
/// Implements every environmental collaborator trait, records each call as an
/// [`Effect`], and exposes a manually advanced clock.
#[derive(Debug, Default)]
pub struct MockHost {
    now_ms: u64,
    next_timer_id: u64,
    effects: heapless::Vec<Effect, EFFECT_CAP>,
}

impl MockHost {
    /// Create a host at time zero with no recorded effects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the mock clock.
    pub fn advance(&mut self, by: Duration) {
        self.now_ms = self.now_ms.saturating_add(by.as_millis() as u64);
    }

    /// Everything recorded so far, oldest first.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Forget all recorded effects (the clock keeps running).
    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }

    /// Number of times `cue` was played.
    #[must_use]
    pub fn sound_count(&self, cue: SoundCue) -> usize {
        self.effects
            .iter()
            .filter(|e| matches!(e, Effect::Sound(c) if *c == cue))
            .count()
    }

    /// Most recently set backdrop, if any.
    #[must_use]
    pub fn last_backdrop(&self) -> Option<Backdrop> {
        self.effects.iter().rev().find_map(|e| match e {
            Effect::Backdrop(b) => Some(*b),
            _ => None,
        })
    }

    /// Most recent scheduling request, if any.
    #[must_use]
    pub fn last_scheduled(&self) -> Option<(Duration, TimerHandle)> {
        self.effects.iter().rev().find_map(|e| match e {
            Effect::Scheduled { delay, handle } => Some((*delay, *handle)),
            _ => None,
        })
    }

    fn record(&mut self, effect: Effect) {
        // Bounded recorder: drop once full rather than grow.
        let _ = self.effects.push(effect);
    }
}

impl Clock for MockHost {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now_ms)
    }
}

impl Scheduler for MockHost {
    fn schedule_after(&mut self, delay: Duration) -> TimerHandle {
        self.next_timer_id += 1;
        let handle = TimerHandle::new(self.next_timer_id);
        self.record(Effect::Scheduled { delay, handle });
        handle
    }
}

impl Surface for MockHost {
    fn request_redraw(&mut self, region: Redraw) {
        self.record(Effect::Redraw(region));
    }

    fn set_backdrop(&mut self, backdrop: Backdrop) {
        self.record(Effect::Backdrop(backdrop));
    }
}

impl AudioSink for MockHost {
    fn play(&mut self, cue: SoundCue) {
        self.record(Effect::Sound(cue));
    }
}

impl Notifier for MockHost {
    fn show_message(&mut self, text: &str) {
        let mut recorded = heapless::String::new();
        // Record as much as fits; tests only assert on short fixed strings.
        let _ = recorded.push_str(text);
        self.record(Effect::Message(recorded));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_cipher_is_rot13() {
        let mut m = MockCipher::new();
        assert_eq!(m.encode_char('A'), 'N');
        assert_eq!(m.encode_char('T'), 'G');
        assert_eq!(m.encode_char('Z'), 'M');
        assert_eq!(m.encoded_count(), 3);
    }

    #[test]
    fn mock_cipher_rotors_advance_like_an_odometer() {
        let mut m = MockCipher::new();
        assert_eq!(m.rotor_positions(), ['A', 'A', 'A']);
        m.encode_char('Q');
        assert_eq!(m.rotor_positions(), ['A', 'A', 'B']);
        for _ in 0..25 {
            m.encode_char('Q');
        }
        assert_eq!(m.rotor_positions(), ['A', 'B', 'A']);
    }

    #[test]
    fn mock_host_clock_advances_manually() {
        let mut host = MockHost::new();
        let t0 = host.now();
        host.advance(Duration::from_millis(40));
        assert_eq!(host.now().duration_since(t0), Duration::from_millis(40));
    }

    #[test]
    fn mock_host_records_in_order() {
        let mut host = MockHost::new();
        host.play(SoundCue::KeyDown);
        host.set_backdrop(Backdrop::OpenMachine);
        host.play(SoundCue::KeyUp);
        assert_eq!(host.effects().len(), 3);
        assert_eq!(host.sound_count(SoundCue::KeyDown), 1);
        assert_eq!(host.sound_count(SoundCue::KeyUp), 1);
        assert_eq!(host.last_backdrop(), Some(Backdrop::OpenMachine));
    }

    #[test]
    fn mock_host_scheduler_hands_out_fresh_handles() {
        let mut host = MockHost::new();
        let a = host.schedule_after(Duration::from_millis(100));
        let b = host.schedule_after(Duration::from_millis(200));
        assert_ne!(a, b);
        assert_eq!(host.last_scheduled(), Some((Duration::from_millis(200), b)));
    }
}
