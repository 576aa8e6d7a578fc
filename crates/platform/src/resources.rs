//! Design-dimension lookup abstraction.
//!
//! The machine face is laid out against a fixed abstract design canvas; every
//! anchor point and extent on it is a named scalar dimension. A
//! [`ResourceProvider`] supplies those scalars — from a built-in table, a
//! config file, or a host resource system — and the layout crate resolves
//! each one at most once and scales it to the live surface.

/// Catalogue of named design dimensions on the machine face.
///
/// Values are signed design units: position dimensions are measured from the
/// canvas origin (top-left), extent dimensions are widths/heights, and step
/// dimensions are offsets between repeated elements. The key/lamp row steps
/// point from a row to the row *above* it, so their y components are
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DimensionId {
    // ── Rotor windows ────────────────────────────────────────────────────────
    /// Width of one rotor display window
    RotorWindowWidth,
    /// Height of one rotor display window
    RotorWindowHeight,
    /// Vertical center of the rotor window row
    RotorRowY,
    /// Horizontal center of the left rotor window
    LeftRotorX,
    /// Horizontal center of the middle rotor window
    MiddleRotorX,
    /// Horizontal center of the right rotor window
    RightRotorX,

    // ── Lamp overlay artwork ─────────────────────────────────────────────────
    /// Left edge of the lamp-overlay artwork
    LampOverlayX,
    /// Top edge of the lamp-overlay artwork
    LampOverlayY,
    /// Width of the lamp-overlay artwork
    LampOverlayWidth,
    /// Height of the lamp-overlay artwork
    LampOverlayHeight,

    // ── Keyboard ─────────────────────────────────────────────────────────────
    /// Left edge of the leftmost bottom-row key
    BaseKeyX,
    /// Top edge of the leftmost bottom-row key
    BaseKeyY,
    /// Width of one key
    KeyWidth,
    /// Height of one key
    KeyHeight,
    /// Step from one key to the next in the same row
    KeyColumnStepX,
    /// Horizontal part of the step from a key row to the row above
    KeyRowStepX,
    /// Vertical part of the step from a key row to the row above (negative)
    KeyRowStepY,

    // ── Lamp board ───────────────────────────────────────────────────────────
    /// Left edge of the leftmost bottom-row lamp
    BaseLampX,
    /// Top edge of the leftmost bottom-row lamp
    BaseLampY,
    /// Width of one lamp
    LampWidth,
    /// Height of one lamp
    LampHeight,
    /// Step from one lamp to the next in the same row
    LampColumnStepX,
    /// Horizontal part of the step from a lamp row to the row above
    LampRowStepX,
    /// Vertical part of the step from a lamp row to the row above (negative)
    LampRowStepY,

    // ── Cover latches ────────────────────────────────────────────────────────
    /// Left edge of the left cover latch
    LeftLatchX,
    /// Left edge of the right cover latch
    RightLatchX,
    /// Top edge of both cover latches
    LatchY,
    /// Width of one cover latch
    LatchWidth,
    /// Height of one cover latch
    LatchHeight,
}

impl DimensionId {
    /// Every dimension, in declaration order.
    pub const ALL: [DimensionId; 29] = [
        DimensionId::RotorWindowWidth,
        DimensionId::RotorWindowHeight,
        DimensionId::RotorRowY,
        DimensionId::LeftRotorX,
        DimensionId::MiddleRotorX,
        DimensionId::RightRotorX,
        DimensionId::LampOverlayX,
        DimensionId::LampOverlayY,
        DimensionId::LampOverlayWidth,
        DimensionId::LampOverlayHeight,
        DimensionId::BaseKeyX,
        DimensionId::BaseKeyY,
        DimensionId::KeyWidth,
        DimensionId::KeyHeight,
        DimensionId::KeyColumnStepX,
        DimensionId::KeyRowStepX,
        DimensionId::KeyRowStepY,
        DimensionId::BaseLampX,
        DimensionId::BaseLampY,
        DimensionId::LampWidth,
        DimensionId::LampHeight,
        DimensionId::LampColumnStepX,
        DimensionId::LampRowStepX,
        DimensionId::LampRowStepY,
        DimensionId::LeftLatchX,
        DimensionId::RightLatchX,
        DimensionId::LatchY,
        DimensionId::LatchWidth,
        DimensionId::LatchHeight,
    ];

    /// Stable identifier used in error messages and config files.
    pub const fn name(self) -> &'static str {
        match self {
            DimensionId::RotorWindowWidth => "rotor_window_width",
            DimensionId::RotorWindowHeight => "rotor_window_height",
            DimensionId::RotorRowY => "rotor_row_y",
            DimensionId::LeftRotorX => "left_rotor_x",
            DimensionId::MiddleRotorX => "middle_rotor_x",
            DimensionId::RightRotorX => "right_rotor_x",
            DimensionId::LampOverlayX => "lamp_overlay_x",
            DimensionId::LampOverlayY => "lamp_overlay_y",
            DimensionId::LampOverlayWidth => "lamp_overlay_width",
            DimensionId::LampOverlayHeight => "lamp_overlay_height",
            DimensionId::BaseKeyX => "base_key_x",
            DimensionId::BaseKeyY => "base_key_y",
            DimensionId::KeyWidth => "key_width",
            DimensionId::KeyHeight => "key_height",
            DimensionId::KeyColumnStepX => "key_column_step_x",
            DimensionId::KeyRowStepX => "key_row_step_x",
            DimensionId::KeyRowStepY => "key_row_step_y",
            DimensionId::BaseLampX => "base_lamp_x",
            DimensionId::BaseLampY => "base_lamp_y",
            DimensionId::LampWidth => "lamp_width",
            DimensionId::LampHeight => "lamp_height",
            DimensionId::LampColumnStepX => "lamp_column_step_x",
            DimensionId::LampRowStepX => "lamp_row_step_x",
            DimensionId::LampRowStepY => "lamp_row_step_y",
            DimensionId::LeftLatchX => "left_latch_x",
            DimensionId::RightLatchX => "right_latch_x",
            DimensionId::LatchY => "latch_y",
            DimensionId::LatchWidth => "latch_width",
            DimensionId::LatchHeight => "latch_height",
        }
    }
}

/// Source of design-unit dimension values.
///
/// `None` marks a configuration gap. The layout build turns it into a
/// fail-fast error rather than producing wrong geometry; it is never a
/// runtime condition after a successful build.
pub trait ResourceProvider {
    /// Look up one design dimension, in design units.
    fn dimension(&self, id: DimensionId) -> Option<f32>;
}

#[cfg(test)]
mod tests {
    use super::DimensionId;

    #[test]
    fn all_covers_every_dimension_once() {
        // The catalogue is the iteration source for layout builds; a
        // duplicate or missing entry would skip or double-resolve a
        // dimension.
        for (i, a) in DimensionId::ALL.iter().enumerate() {
            for b in DimensionId::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(DimensionId::ALL.len(), 29);
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in DimensionId::ALL.iter().enumerate() {
            for b in DimensionId::ALL.iter().skip(i + 1) {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
