//! The interaction state machine.
//!
//! [`Simulator`] owns the cipher machine and the layout registry; the host
//! adapter owns everything else and passes itself in per event as a
//! [`Host`]. Entry points are plain functions — no framework type appears
//! anywhere in the interface — and none of them panics:
//!
//! - [`on_attach`](Simulator::on_attach) once, when the surface appears
//! - [`on_resize`](Simulator::on_resize) per size change
//! - [`on_pointer_down`](Simulator::on_pointer_down) /
//!   [`on_pointer_up`](Simulator::on_pointer_up) per touch
//! - [`on_timer_fire`](Simulator::on_timer_fire) when a scheduled callback
//!   lands

use core::time::Duration;

use embedded_graphics::prelude::Point;

use layout::{CoordinateRegistry, LayoutError, SceneLayout};
use platform::{
    AudioSink, Backdrop, CipherEngine, Clock, Notifier, Redraw, ResourceProvider, Scheduler,
    SoundCue, Surface, TimerHandle,
};

use crate::state::{InteractionState, Response};

/// Minimum time a lamp stays lit, however quick the tap.
///
/// Emulates the relay circuit's visible glow: a release earlier than this
/// defers the lamp-clear instead of dropping it.
pub const LAMP_HOLD: Duration = Duration::from_millis(1000);

/// Shown once when the simulator is attached to a surface.
const STARTUP_MESSAGE: &str = "Tap the case to open the machine.";

/// Shown when the lid first opens.
const OPEN_HINT: &str = "Press and hold a key to read its lamp; the case latches lift the cover.";

/// Everything the environment does for the simulator, in one bound.
///
/// Host adapters implement the individual `platform` traits; this alias
/// exists so entry points can take a single `&mut impl Host`.
pub trait Host: Clock + Scheduler + Surface + AudioSink + Notifier {}

impl<T> Host for T where T: Clock + Scheduler + Surface + AudioSink + Notifier {}

/// The touch-surface cipher machine simulation.
pub struct Simulator<C, P> {
    cipher: C,
    registry: CoordinateRegistry<P>,
    scene: Option<SceneLayout>,
    state: InteractionState,
    pending_release: Option<TimerHandle>,
    attached: bool,
}

impl<C: CipherEngine, P: ResourceProvider> Simulator<C, P> {
    /// Create a simulator with the lid closed and no layout yet.
    pub fn new(cipher: C, provider: P) -> Self {
        Simulator {
            cipher,
            registry: CoordinateRegistry::new(provider),
            scene: None,
            state: InteractionState::LidClosed,
            pending_release: None,
            attached: false,
        }
    }

    /// One-time attach hook; greets the user. Safe to call again (no-op).
    pub fn on_attach(&mut self, host: &mut impl Host) {
        if !self.attached {
            self.attached = true;
            host.show_message(STARTUP_MESSAGE);
        }
    }

    /// Rebuild the layout for a new surface size.
    ///
    /// Configuration errors are unrecoverable: the caller should surface
    /// them and stop, not retry with the same provider.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<(), LayoutError> {
        self.scene = Some(SceneLayout::build(&mut self.registry, width, height)?);
        Ok(())
    }

    /// Feed a pointer-down at device coordinates.
    pub fn on_pointer_down(&mut self, at: Point, host: &mut impl Host) -> Response {
        match self.state {
            // A press in flight blocks new presses entirely.
            InteractionState::KeyDown { .. } => Response::Unhandled,

            InteractionState::LidClosed => {
                self.state = InteractionState::Idle;
                host.set_backdrop(Backdrop::OpenMachine);
                host.request_redraw(Redraw::Full);
                host.show_message(OPEN_HINT);
                Response::Handled
            }

            InteractionState::CoverOpen => {
                self.state = InteractionState::Idle;
                host.set_backdrop(Backdrop::OpenMachine);
                host.request_redraw(Redraw::Full);
                Response::Handled
            }

            InteractionState::Idle => self.press_at(at, host),
        }
    }

    /// Feed a pointer-up. Position is irrelevant; only the held key matters.
    pub fn on_pointer_up(&mut self, host: &mut impl Host) -> Response {
        let InteractionState::KeyDown { pressed_at, .. } = self.state else {
            // Stray release; consumed without effect.
            return Response::Handled;
        };
        if self.pending_release.is_some() {
            // A release is already on its way; keep side effects single-shot.
            return Response::Handled;
        }

        let held = host.now().duration_since(pressed_at);
        if held >= LAMP_HOLD {
            self.finish_release(host);
        } else {
            let remaining = LAMP_HOLD.saturating_sub(held);
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "deferring key-up by {=u64} ms",
                remaining.as_millis() as u64
            );
            self.pending_release = Some(host.schedule_after(remaining));
        }
        Response::Handled
    }

    /// A scheduled callback landed. Handles that are not the outstanding
    /// release timer are stale and ignored.
    pub fn on_timer_fire(&mut self, handle: TimerHandle, host: &mut impl Host) {
        if self.pending_release != Some(handle) {
            return;
        }
        self.pending_release = None;
        if matches!(self.state, InteractionState::KeyDown { .. }) {
            self.finish_release(host);
        }
    }

    /// Current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Current layout, if a resize has succeeded yet.
    #[must_use]
    pub fn scene(&self) -> Option<&SceneLayout> {
        self.scene.as_ref()
    }

    /// Rotor positions, read fresh from the machine for every redraw.
    #[must_use]
    pub fn rotor_positions(&self) -> [char; 3] {
        self.cipher.rotor_positions()
    }

    /// Resolve an `Idle` pointer-down against latches, then the keyboard.
    fn press_at(&mut self, at: Point, host: &mut impl Host) -> Response {
        let Some(scene) = self.scene.as_ref() else {
            // No layout yet; nothing can be hit.
            return Response::Unhandled;
        };

        if scene.latches.iter().any(|latch| latch.contains(at)) {
            self.state = InteractionState::CoverOpen;
            host.set_backdrop(Backdrop::OpenCover);
            host.request_redraw(Redraw::Full);
            return Response::Handled;
        }

        let Some(letter) = scene.keys.letter_at(at) else {
            #[cfg(feature = "defmt")]
            defmt::trace!("no key at ({=i32}, {=i32})", at.x, at.y);
            return Response::Unhandled;
        };

        let lamp = self.cipher.encode_char(letter);
        #[cfg(feature = "defmt")]
        defmt::debug!("encode {=u8} -> {=u8}", letter as u8, lamp as u8);

        self.state = InteractionState::KeyDown {
            letter,
            pressed_at: host.now(),
            lamp,
        };

        // The rotors stepped and a lamp lit; both regions are stale.
        host.request_redraw(Redraw::Region(scene.rotor_cluster));
        if let Some(cell) = scene.lamps.rect_for(lamp) {
            host.request_redraw(Redraw::Region(cell));
        }
        host.play(SoundCue::KeyDown);
        Response::Handled
    }

    /// Clear the lamp and return to `Idle`. The lamp-region redraw is issued
    /// before the key-up cue; both happen exactly once per press.
    fn finish_release(&mut self, host: &mut impl Host) {
        if let InteractionState::KeyDown { lamp, .. } = self.state {
            if let Some(cell) = self.scene.as_ref().and_then(|s| s.lamps.rect_for(lamp)) {
                host.request_redraw(Redraw::Region(cell));
            }
            host.play(SoundCue::KeyUp);
        }
        self.pending_release = None;
        self.state = InteractionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout::DesignSheet;
    use platform::mocks::{Effect, MockCipher, MockHost};

    fn closed_simulator() -> Simulator<MockCipher, DesignSheet> {
        Simulator::new(MockCipher::new(), DesignSheet::default())
    }

    #[test]
    fn attach_greets_exactly_once() {
        let mut sim = closed_simulator();
        let mut host = MockHost::new();
        sim.on_attach(&mut host);
        sim.on_attach(&mut host);
        let messages = host
            .effects()
            .iter()
            .filter(|e| matches!(e, Effect::Message(_)))
            .count();
        assert_eq!(messages, 1);
    }

    #[test]
    fn first_tap_opens_the_lid_without_pressing_keys() {
        let mut sim = closed_simulator();
        let mut host = MockHost::new();
        // No resize has happened; the lid transition must still work.
        let response = sim.on_pointer_down(Point::new(3, 3), &mut host);
        assert!(response.is_handled());
        assert_eq!(sim.state(), InteractionState::Idle);
        assert_eq!(host.last_backdrop(), Some(Backdrop::OpenMachine));
        assert_eq!(host.sound_count(SoundCue::KeyDown), 0);
    }

    #[test]
    fn taps_without_a_layout_miss() {
        let mut sim = closed_simulator();
        let mut host = MockHost::new();
        sim.on_pointer_down(Point::new(3, 3), &mut host); // opens the lid
        let response = sim.on_pointer_down(Point::new(500, 800), &mut host);
        assert_eq!(response, Response::Unhandled);
        assert_eq!(sim.state(), InteractionState::Idle);
    }

    #[test]
    fn stray_pointer_up_is_a_consumed_noop() {
        let mut sim = closed_simulator();
        let mut host = MockHost::new();
        assert_eq!(sim.on_pointer_up(&mut host), Response::Handled);
        assert_eq!(sim.state(), InteractionState::LidClosed);
        assert!(host.effects().is_empty());
    }
}
