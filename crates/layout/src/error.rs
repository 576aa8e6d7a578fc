//! Layout-build error taxonomy.
//!
//! Everything here is a configuration error: it fires while rebuilding the
//! scene for a new surface size and never afterwards. Pointer misses and
//! ignored presses are not errors and do not appear here.

use platform::DimensionId;
use thiserror_no_std::Error;

use crate::registry::RefPointId;

/// Fail-fast configuration errors raised while building the machine layout.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// The surface reported a zero width or height.
    #[error("surface reported an empty size ({width}x{height})")]
    EmptySurface {
        /// Reported width in device pixels.
        width: u32,
        /// Reported height in device pixels.
        height: u32,
    },

    /// The resource provider has no value for a required dimension.
    #[error("design sheet has no value for {}", .0.name())]
    MissingDimension(DimensionId),

    /// A delta point used as a rectangle extent has a negative component.
    #[error("negative extent for reference point {}", .0.name())]
    InvalidSpan(RefPointId),

    /// A key-grid step vector cannot produce a usable grid.
    #[error("key grid step vectors are degenerate")]
    DegenerateStep,

    /// A key-grid base rectangle has no area.
    #[error("key grid base rectangle is empty")]
    EmptyCell,

    /// The key rows do not cover the alphabet exactly once each.
    #[error("key rows must cover A..=Z exactly once")]
    AlphabetMismatch,
}
