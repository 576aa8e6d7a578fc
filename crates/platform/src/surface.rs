//! Display-surface abstraction.
//!
//! The host owns the actual drawing surface and background artwork. The
//! interaction core only tells it *what* became stale and *which* backdrop
//! to show; the host decides when to repaint.

use embedded_graphics::primitives::Rectangle;

/// A redraw request issued by the interaction core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// The whole surface is stale (backdrop switch).
    Full,
    /// Only the given device-pixel region is stale (rotor windows, one lamp).
    Region(Rectangle),
}

/// Background artwork states of the simulated machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Backdrop {
    /// Carrying case closed; nothing else is visible.
    ClosedLid,
    /// Machine face visible: rotors, lamp board, keyboard.
    OpenMachine,
    /// Inner cover lifted; the machine is not operable.
    OpenCover,
}

/// Host-side drawing surface.
pub trait Surface {
    /// Mark a region (or everything) stale. May coalesce requests.
    fn request_redraw(&mut self, region: Redraw);

    /// Switch the background artwork.
    fn set_backdrop(&mut self, backdrop: Backdrop);
}
