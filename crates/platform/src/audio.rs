//! Audio feedback abstraction.

/// Mechanical key sounds of the simulated machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SoundCue {
    /// A key was pressed down.
    KeyDown,
    /// A key sprang back up (lamp cleared).
    KeyUp,
}

/// Fire-and-forget sound playback.
///
/// The core never waits for playback and consumes no return value.
pub trait AudioSink {
    /// Play one cue.
    fn play(&mut self, cue: SoundCue);
}
