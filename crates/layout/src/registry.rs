//! Reference-point registry — design-space anchors scaled to the surface.
//!
//! Each [`RefPointId`] names a location or extent on the design canvas as a
//! pair of design dimensions. The registry resolves the design value through
//! the injected [`ResourceProvider`] at most once, then rescales every point
//! exactly once per surface-size change:
//!
//! ```text
//! scaled = (round(x · width / DESIGN_WIDTH), round(y · height / DESIGN_HEIGHT))
//! ```
//!
//! Rounding is half away from zero. Unresolvable dimensions are configuration
//! errors reported by [`rebuild`](CoordinateRegistry::rebuild); after a
//! successful rebuild every lookup is infallible.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use platform::{DimensionId, ResourceProvider};

use crate::design::{DESIGN_HEIGHT, DESIGN_WIDTH};
use crate::error::LayoutError;

/// Named anchor points and extents on the machine face.
///
/// `*Origin` points are top-left corners, `*Center` points are centers,
/// `*Size` points are width/height deltas and `*Step` points are offsets
/// between repeated elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefPointId {
    /// Extent of one rotor display window.
    RotorWindowSize,
    /// Center of the left rotor window.
    LeftRotorCenter,
    /// Center of the middle rotor window.
    MiddleRotorCenter,
    /// Center of the right rotor window.
    RightRotorCenter,
    /// Top-left corner of the lamp-overlay artwork.
    LampOverlayOrigin,
    /// Extent of the lamp-overlay artwork.
    LampOverlaySize,
    /// Top-left corner of the leftmost bottom-row key.
    KeyBaseOrigin,
    /// Extent of one key.
    KeySize,
    /// Offset from one key to the next in the same row.
    KeyColumnStep,
    /// Offset from a key row to the row above it.
    KeyRowStep,
    /// Top-left corner of the leftmost bottom-row lamp.
    LampBaseOrigin,
    /// Extent of one lamp.
    LampSize,
    /// Offset from one lamp to the next in the same row.
    LampColumnStep,
    /// Offset from a lamp row to the row above it.
    LampRowStep,
    /// Top-left corner of the left cover latch.
    LeftLatchOrigin,
    /// Top-left corner of the right cover latch.
    RightLatchOrigin,
    /// Extent of one cover latch.
    LatchSize,
}

/// Number of reference points in the registry.
const REF_POINT_COUNT: usize = 17;

impl RefPointId {
    /// Every reference point, in declaration order.
    pub const ALL: [RefPointId; REF_POINT_COUNT] = [
        RefPointId::RotorWindowSize,
        RefPointId::LeftRotorCenter,
        RefPointId::MiddleRotorCenter,
        RefPointId::RightRotorCenter,
        RefPointId::LampOverlayOrigin,
        RefPointId::LampOverlaySize,
        RefPointId::KeyBaseOrigin,
        RefPointId::KeySize,
        RefPointId::KeyColumnStep,
        RefPointId::KeyRowStep,
        RefPointId::LampBaseOrigin,
        RefPointId::LampSize,
        RefPointId::LampColumnStep,
        RefPointId::LampRowStep,
        RefPointId::LeftLatchOrigin,
        RefPointId::RightLatchOrigin,
        RefPointId::LatchSize,
    ];

    /// Stable identifier used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            RefPointId::RotorWindowSize => "rotor_window_size",
            RefPointId::LeftRotorCenter => "left_rotor_center",
            RefPointId::MiddleRotorCenter => "middle_rotor_center",
            RefPointId::RightRotorCenter => "right_rotor_center",
            RefPointId::LampOverlayOrigin => "lamp_overlay_origin",
            RefPointId::LampOverlaySize => "lamp_overlay_size",
            RefPointId::KeyBaseOrigin => "key_base_origin",
            RefPointId::KeySize => "key_size",
            RefPointId::KeyColumnStep => "key_column_step",
            RefPointId::KeyRowStep => "key_row_step",
            RefPointId::LampBaseOrigin => "lamp_base_origin",
            RefPointId::LampSize => "lamp_size",
            RefPointId::LampColumnStep => "lamp_column_step",
            RefPointId::LampRowStep => "lamp_row_step",
            RefPointId::LeftLatchOrigin => "left_latch_origin",
            RefPointId::RightLatchOrigin => "right_latch_origin",
            RefPointId::LatchSize => "latch_size",
        }
    }

    /// The design dimensions backing each axis. `None` means the axis is a
    /// constant zero (column steps have no vertical part).
    const fn axes(self) -> (Option<DimensionId>, Option<DimensionId>) {
        match self {
            RefPointId::RotorWindowSize => (
                Some(DimensionId::RotorWindowWidth),
                Some(DimensionId::RotorWindowHeight),
            ),
            RefPointId::LeftRotorCenter => {
                (Some(DimensionId::LeftRotorX), Some(DimensionId::RotorRowY))
            }
            RefPointId::MiddleRotorCenter => (
                Some(DimensionId::MiddleRotorX),
                Some(DimensionId::RotorRowY),
            ),
            RefPointId::RightRotorCenter => {
                (Some(DimensionId::RightRotorX), Some(DimensionId::RotorRowY))
            }
            RefPointId::LampOverlayOrigin => (
                Some(DimensionId::LampOverlayX),
                Some(DimensionId::LampOverlayY),
            ),
            RefPointId::LampOverlaySize => (
                Some(DimensionId::LampOverlayWidth),
                Some(DimensionId::LampOverlayHeight),
            ),
            RefPointId::KeyBaseOrigin => {
                (Some(DimensionId::BaseKeyX), Some(DimensionId::BaseKeyY))
            }
            RefPointId::KeySize => (Some(DimensionId::KeyWidth), Some(DimensionId::KeyHeight)),
            RefPointId::KeyColumnStep => (Some(DimensionId::KeyColumnStepX), None),
            RefPointId::KeyRowStep => (
                Some(DimensionId::KeyRowStepX),
                Some(DimensionId::KeyRowStepY),
            ),
            RefPointId::LampBaseOrigin => {
                (Some(DimensionId::BaseLampX), Some(DimensionId::BaseLampY))
            }
            RefPointId::LampSize => (Some(DimensionId::LampWidth), Some(DimensionId::LampHeight)),
            RefPointId::LampColumnStep => (Some(DimensionId::LampColumnStepX), None),
            RefPointId::LampRowStep => (
                Some(DimensionId::LampRowStepX),
                Some(DimensionId::LampRowStepY),
            ),
            RefPointId::LeftLatchOrigin => {
                (Some(DimensionId::LeftLatchX), Some(DimensionId::LatchY))
            }
            RefPointId::RightLatchOrigin => {
                (Some(DimensionId::RightLatchX), Some(DimensionId::LatchY))
            }
            RefPointId::LatchSize => {
                (Some(DimensionId::LatchWidth), Some(DimensionId::LatchHeight))
            }
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Round half away from zero. `core` has no `round`; `libm` provides the
/// C-semantics one.
pub(crate) fn round_scaled(value: f32, scale: f32) -> i32 {
    libm::roundf(value * scale) as i32
}

/// Design-to-device coordinate registry.
///
/// Owns the [`ResourceProvider`] it resolves through. Design values are read
/// at most once per dimension for the registry's lifetime; scaled values are
/// recomputed on every [`rebuild`](Self::rebuild).
pub struct CoordinateRegistry<P> {
    provider: P,
    design: [Option<(f32, f32)>; REF_POINT_COUNT],
    scaled: [Point; REF_POINT_COUNT],
    x_scale: f32,
    y_scale: f32,
}

impl<P: ResourceProvider> CoordinateRegistry<P> {
    /// Create an empty registry. Nothing is resolved until the first
    /// [`rebuild`](Self::rebuild).
    pub fn new(provider: P) -> Self {
        CoordinateRegistry {
            provider,
            design: [None; REF_POINT_COUNT],
            scaled: [Point::zero(); REF_POINT_COUNT],
            x_scale: 0.0,
            y_scale: 0.0,
        }
    }

    /// Recompute every scaled point for a new surface size.
    ///
    /// Fails fast on a zero-sized surface or a dimension the provider cannot
    /// supply; no partial state is observable through [`point`](Self::point)
    /// semantics afterwards since callers abandon the layout on error.
    pub fn rebuild(&mut self, width: u32, height: u32) -> Result<(), LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::EmptySurface { width, height });
        }
        self.x_scale = width as f32 / DESIGN_WIDTH as f32;
        self.y_scale = height as f32 / DESIGN_HEIGHT as f32;

        for id in RefPointId::ALL {
            let i = id.index();
            let design = match self.design[i] {
                Some(cached) => cached,
                None => {
                    let resolved = self.resolve(id)?;
                    self.design[i] = Some(resolved);
                    resolved
                }
            };
            self.scaled[i] = Point::new(
                round_scaled(design.0, self.x_scale),
                round_scaled(design.1, self.y_scale),
            );
        }
        Ok(())
    }

    fn resolve(&self, id: RefPointId) -> Result<(f32, f32), LayoutError> {
        let (x_dim, y_dim) = id.axes();
        let x = match x_dim {
            Some(dim) => self
                .provider
                .dimension(dim)
                .ok_or(LayoutError::MissingDimension(dim))?,
            None => 0.0,
        };
        let y = match y_dim {
            Some(dim) => self
                .provider
                .dimension(dim)
                .ok_or(LayoutError::MissingDimension(dim))?,
            None => 0.0,
        };
        Ok((x, y))
    }

    /// The scaled device-pixel value of a reference point.
    ///
    /// Valid after the first successful [`rebuild`](Self::rebuild); before
    /// that every point reads as the origin.
    #[must_use]
    pub fn point(&self, id: RefPointId) -> Point {
        self.scaled[id.index()]
    }

    /// Build a rectangle from an origin point and an extent point.
    ///
    /// A negative extent component is a configuration error.
    pub fn rect(&self, origin: RefPointId, extent: RefPointId) -> Result<Rectangle, LayoutError> {
        let top_left = self.point(origin);
        let delta = self.point(extent);
        if delta.x < 0 || delta.y < 0 {
            return Err(LayoutError::InvalidSpan(extent));
        }
        Ok(Rectangle::new(
            top_left,
            Size::new(delta.x as u32, delta.y as u32),
        ))
    }

    /// Horizontal scale factor of the last rebuild.
    #[must_use]
    pub fn x_scale(&self) -> f32 {
        self.x_scale
    }

    /// Vertical scale factor of the last rebuild.
    #[must_use]
    pub fn y_scale(&self) -> f32 {
        self.y_scale
    }
}
