//! Built-in design sheet for the machine face.
//!
//! All positions are expressed against a fixed abstract canvas; the registry
//! scales them to the live surface. The shipped values reproduce the device
//! artwork: rotor windows near the top, the lamp board in the middle, the
//! staggered three-row keyboard at the bottom, and a cover latch on each
//! case edge.
//!
//! A sheet can also be deserialized from a config file when the `serde`
//! feature is active; field names match [`DimensionId::name`].

use platform::{DimensionId, ResourceProvider};

/// Width of the design canvas, in design units.
pub const DESIGN_WIDTH: u32 = 1024;

/// Height of the design canvas, in design units.
pub const DESIGN_HEIGHT: u32 = 1200;

/// One complete set of design dimensions.
///
/// Values are signed design units; the row-step y components are negative
/// because rows are derived bottom-up. See [`DimensionId`] for the meaning
/// of each field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[allow(missing_docs)] // field meanings live on the DimensionId variants
pub struct DesignSheet {
    pub rotor_window_width: f32,
    pub rotor_window_height: f32,
    pub rotor_row_y: f32,
    pub left_rotor_x: f32,
    pub middle_rotor_x: f32,
    pub right_rotor_x: f32,

    pub lamp_overlay_x: f32,
    pub lamp_overlay_y: f32,
    pub lamp_overlay_width: f32,
    pub lamp_overlay_height: f32,

    pub base_key_x: f32,
    pub base_key_y: f32,
    pub key_width: f32,
    pub key_height: f32,
    pub key_column_step_x: f32,
    pub key_row_step_x: f32,
    pub key_row_step_y: f32,

    pub base_lamp_x: f32,
    pub base_lamp_y: f32,
    pub lamp_width: f32,
    pub lamp_height: f32,
    pub lamp_column_step_x: f32,
    pub lamp_row_step_x: f32,
    pub lamp_row_step_y: f32,

    pub left_latch_x: f32,
    pub right_latch_x: f32,
    pub latch_y: f32,
    pub latch_width: f32,
    pub latch_height: f32,
}

impl Default for DesignSheet {
    fn default() -> Self {
        DesignSheet {
            rotor_window_width: 96.0,
            rotor_window_height: 120.0,
            rotor_row_y: 182.0,
            left_rotor_x: 380.0,
            middle_rotor_x: 512.0,
            right_rotor_x: 644.0,

            lamp_overlay_x: 64.0,
            lamp_overlay_y: 380.0,
            lamp_overlay_width: 896.0,
            lamp_overlay_height: 310.0,

            base_key_x: 66.0,
            base_key_y: 1020.0,
            key_width: 72.0,
            key_height: 72.0,
            key_column_step_x: 100.0,
            // Rows are derived bottom-up: one column step plus one row step
            // reaches the middle row, which sits half a column back and one
            // row up. Two row steps bring the top row flush with the bottom.
            key_row_step_x: -50.0,
            key_row_step_y: -112.0,

            base_lamp_x: 70.0,
            base_lamp_y: 612.0,
            lamp_width: 64.0,
            lamp_height: 64.0,
            lamp_column_step_x: 100.0,
            lamp_row_step_x: -50.0,
            lamp_row_step_y: -104.0,

            left_latch_x: 10.0,
            right_latch_x: 970.0,
            latch_y: 548.0,
            latch_width: 34.0,
            latch_height: 34.0,
        }
    }
}

impl ResourceProvider for DesignSheet {
    fn dimension(&self, id: DimensionId) -> Option<f32> {
        Some(match id {
            DimensionId::RotorWindowWidth => self.rotor_window_width,
            DimensionId::RotorWindowHeight => self.rotor_window_height,
            DimensionId::RotorRowY => self.rotor_row_y,
            DimensionId::LeftRotorX => self.left_rotor_x,
            DimensionId::MiddleRotorX => self.middle_rotor_x,
            DimensionId::RightRotorX => self.right_rotor_x,
            DimensionId::LampOverlayX => self.lamp_overlay_x,
            DimensionId::LampOverlayY => self.lamp_overlay_y,
            DimensionId::LampOverlayWidth => self.lamp_overlay_width,
            DimensionId::LampOverlayHeight => self.lamp_overlay_height,
            DimensionId::BaseKeyX => self.base_key_x,
            DimensionId::BaseKeyY => self.base_key_y,
            DimensionId::KeyWidth => self.key_width,
            DimensionId::KeyHeight => self.key_height,
            DimensionId::KeyColumnStepX => self.key_column_step_x,
            DimensionId::KeyRowStepX => self.key_row_step_x,
            DimensionId::KeyRowStepY => self.key_row_step_y,
            DimensionId::BaseLampX => self.base_lamp_x,
            DimensionId::BaseLampY => self.base_lamp_y,
            DimensionId::LampWidth => self.lamp_width,
            DimensionId::LampHeight => self.lamp_height,
            DimensionId::LampColumnStepX => self.lamp_column_step_x,
            DimensionId::LampRowStepX => self.lamp_row_step_x,
            DimensionId::LampRowStepY => self.lamp_row_step_y,
            DimensionId::LeftLatchX => self.left_latch_x,
            DimensionId::RightLatchX => self.right_latch_x,
            DimensionId::LatchY => self.latch_y,
            DimensionId::LatchWidth => self.latch_width,
            DimensionId::LatchHeight => self.latch_height,
        })
    }
}
