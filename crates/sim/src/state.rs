//! Interaction states and event outcomes.

use platform::Instant;

/// The machine's interaction state. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InteractionState {
    /// Carrying case closed; the first tap opens it.
    LidClosed,
    /// Inner cover lifted; the next tap closes it. No other input lands.
    CoverOpen,
    /// Machine face visible and ready for key presses.
    Idle,
    /// A key is held and its lamp is lit.
    ///
    /// `lamp` is the cipher output letter, independent of which key is
    /// physically pressed.
    KeyDown {
        /// The pressed keyboard letter.
        letter: char,
        /// When the press landed, for the minimum-hold timer.
        pressed_at: Instant,
        /// The lit lamp letter.
        lamp: char,
    },
}

impl InteractionState {
    /// The currently lit lamp letter, if any.
    #[must_use]
    pub fn lit_lamp(&self) -> Option<char> {
        match self {
            InteractionState::KeyDown { lamp, .. } => Some(*lamp),
            _ => None,
        }
    }

    /// Whether the machine face is visible (renderer draws anything at all).
    #[must_use]
    pub fn face_visible(&self) -> bool {
        !matches!(
            self,
            InteractionState::LidClosed | InteractionState::CoverOpen
        )
    }
}

/// Outcome of feeding one pointer event to the simulator.
///
/// Misses and in-flight rejections are expected, non-error outcomes; no
/// entry point returns anything stronger than this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// The event was consumed (possibly as a no-op).
    Handled,
    /// The event hit nothing; the host may route it elsewhere.
    Unhandled,
}

impl Response {
    /// `true` when the event was consumed.
    #[must_use]
    pub fn is_handled(self) -> bool {
        matches!(self, Response::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_key_down_lights_a_lamp() {
        assert_eq!(InteractionState::LidClosed.lit_lamp(), None);
        assert_eq!(InteractionState::CoverOpen.lit_lamp(), None);
        assert_eq!(InteractionState::Idle.lit_lamp(), None);
        let down = InteractionState::KeyDown {
            letter: 'T',
            pressed_at: Instant::from_millis(0),
            lamp: 'G',
        };
        assert_eq!(down.lit_lamp(), Some('G'));
    }

    #[test]
    fn face_visibility_tracks_closed_states() {
        assert!(!InteractionState::LidClosed.face_visible());
        assert!(!InteractionState::CoverOpen.face_visible());
        assert!(InteractionState::Idle.face_visible());
    }

    #[test]
    fn response_predicate() {
        assert!(Response::Handled.is_handled());
        assert!(!Response::Unhandled.is_handled());
    }
}
