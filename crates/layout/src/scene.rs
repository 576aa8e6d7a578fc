//! Scene assembly — every hit region and draw region for one surface size.
//!
//! Built once per resize from the [`CoordinateRegistry`] and read-only until
//! the next resize. Rebuild and read never interleave on the single UI
//! thread, so no partial layouts are ever observable.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use platform::ResourceProvider;

use crate::error::LayoutError;
use crate::grid::KeyGrid;
use crate::rect;
use crate::registry::{round_scaled, CoordinateRegistry, RefPointId};

/// Rotor windows are drawn inside the bezel artwork; shrink the raw window
/// rectangles by this much, in design units, scaled at build time.
const ROTOR_BEZEL_INSET_X: f32 = 7.0;
const ROTOR_BEZEL_INSET_Y: f32 = 20.0;

/// Latch hit regions get this much slop on every side, in device pixels,
/// so the small artwork is comfortably tappable.
const LATCH_SLOP: i32 = 5;

/// Device-pixel layout of the whole machine face for one surface size.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    /// Rotor glyph draw regions, left to right, inside the bezels.
    pub rotor_windows: [Rectangle; 3],
    /// One region covering all three raw rotor windows; invalidated as a
    /// whole when the rotors step.
    pub rotor_cluster: Rectangle,
    /// Bounding box of the lamp-overlay artwork.
    pub lamp_overlay: Rectangle,
    /// Cover-latch hit regions, left and right.
    pub latches: [Rectangle; 2],
    /// Keyboard hit-test grid.
    pub keys: KeyGrid,
    /// Lamp-board lookup grid.
    pub lamps: KeyGrid,
}

impl SceneLayout {
    /// Rebuild the registry for `width` × `height` and assemble the scene.
    ///
    /// Fails fast on any configuration problem; the caller must not keep
    /// using a previous scene after a failed rebuild for a new size.
    pub fn build<P: ResourceProvider>(
        registry: &mut CoordinateRegistry<P>,
        width: u32,
        height: u32,
    ) -> Result<SceneLayout, LayoutError> {
        registry.rebuild(width, height)?;

        // Rotor windows from their centers and the shared window extent.
        let window = registry.point(RefPointId::RotorWindowSize);
        if window.x < 0 || window.y < 0 {
            return Err(LayoutError::InvalidSpan(RefPointId::RotorWindowSize));
        }
        let centers = [
            registry.point(RefPointId::LeftRotorCenter),
            registry.point(RefPointId::MiddleRotorCenter),
            registry.point(RefPointId::RightRotorCenter),
        ];
        let raw_windows = centers.map(|c| {
            Rectangle::new(
                Point::new(c.x - window.x / 2, c.y - window.y / 2),
                Size::new(window.x as u32, window.y as u32),
            )
        });
        let rotor_cluster = raw_windows[1..]
            .iter()
            .fold(raw_windows[0], |acc, r| rect::union(&acc, r));

        let inset_x = round_scaled(ROTOR_BEZEL_INSET_X, registry.x_scale());
        let inset_y = round_scaled(ROTOR_BEZEL_INSET_Y, registry.y_scale());
        let rotor_windows = raw_windows.map(|w| rect::inset(&w, inset_x, inset_y));

        let lamp_overlay =
            registry.rect(RefPointId::LampOverlayOrigin, RefPointId::LampOverlaySize)?;

        let latches = [
            registry.rect(RefPointId::LeftLatchOrigin, RefPointId::LatchSize)?,
            registry.rect(RefPointId::RightLatchOrigin, RefPointId::LatchSize)?,
        ]
        .map(|r| rect::inset(&r, -LATCH_SLOP, -LATCH_SLOP));

        let keys = KeyGrid::new(
            registry.rect(RefPointId::KeyBaseOrigin, RefPointId::KeySize)?,
            registry.point(RefPointId::KeyColumnStep),
            registry.point(RefPointId::KeyRowStep),
        )?;
        let lamps = KeyGrid::new(
            registry.rect(RefPointId::LampBaseOrigin, RefPointId::LampSize)?,
            registry.point(RefPointId::LampColumnStep),
            registry.point(RefPointId::LampRowStep),
        )?;

        Ok(SceneLayout {
            rotor_windows,
            rotor_cluster,
            lamp_overlay,
            latches,
            keys,
            lamps,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::design::DesignSheet;

    fn scene_at(width: u32, height: u32) -> SceneLayout {
        let mut registry = CoordinateRegistry::new(DesignSheet::default());
        match SceneLayout::build(&mut registry, width, height) {
            Ok(scene) => scene,
            Err(e) => panic!("scene must build: {e}"),
        }
    }

    #[test]
    fn rotor_cluster_spans_all_raw_windows() {
        let scene = scene_at(1024, 1200);
        // Left window center 380, right center 644, extent 96x120.
        assert_eq!(
            scene.rotor_cluster,
            Rectangle::new(Point::new(332, 122), Size::new(360, 120))
        );
    }

    #[test]
    fn rotor_windows_sit_inside_their_bezels() {
        let scene = scene_at(1024, 1200);
        for (w, center_x) in scene.rotor_windows.iter().zip([380, 512, 644]) {
            assert_eq!(w.top_left, Point::new(center_x - 48 + 7, 122 + 20));
            assert_eq!(w.size, Size::new(82, 80));
        }
    }

    #[test]
    fn bezel_inset_scales_with_the_surface() {
        let scene = scene_at(512, 600);
        // Half-size surface: 7x20 design units round to 4x10 device pixels,
        // applied to a 48x60 raw window.
        assert_eq!(scene.rotor_windows[0].size, Size::new(48 - 8, 60 - 20));
    }

    #[test]
    fn latches_grow_by_the_tap_slop() {
        let scene = scene_at(1024, 1200);
        assert_eq!(
            scene.latches[0],
            Rectangle::new(Point::new(5, 543), Size::new(44, 44))
        );
        assert_eq!(
            scene.latches[1],
            Rectangle::new(Point::new(965, 543), Size::new(44, 44))
        );
        // A tap just outside the raw artwork still hits.
        assert!(scene.latches[0].contains(Point::new(7, 545)));
    }

    #[test]
    fn keyboard_and_lamp_grids_share_structure_not_geometry() {
        let scene = scene_at(1024, 1200);
        let key = scene.keys.rect_for('T');
        let lamp = scene.lamps.rect_for('T');
        assert!(key.is_some());
        assert!(lamp.is_some());
        assert_ne!(key, lamp);
    }

    #[test]
    fn lamp_cells_stay_inside_the_overlay_artwork() {
        let scene = scene_at(1024, 1200);
        for row in crate::grid::KEY_ROWS {
            for letter in row.chars() {
                let cell = match scene.lamps.rect_for(letter) {
                    Some(c) => c,
                    None => panic!("{letter} has no lamp"),
                };
                let merged = rect::union(&scene.lamp_overlay, &cell);
                assert_eq!(merged, scene.lamp_overlay, "lamp {letter} leaks");
            }
        }
    }

    #[test]
    fn scene_rebuild_tracks_surface_changes() {
        let mut registry = CoordinateRegistry::new(DesignSheet::default());
        let full = SceneLayout::build(&mut registry, 1024, 1200);
        let half = SceneLayout::build(&mut registry, 512, 600);
        match (full, half) {
            (Ok(f), Ok(h)) => {
                assert_ne!(f, h);
                assert_eq!(h.rotor_cluster.top_left, Point::new(166, 61));
            }
            _ => panic!("both builds must succeed"),
        }
    }
}
