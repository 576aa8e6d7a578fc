//! Rendering layer for the cipher-machine touch simulator.
//!
//! Draws the two things the interaction core owns the data for: the rotor
//! position glyphs and the lit-lamp glow. Backgrounds, asset loading and
//! the draw loop itself belong to the host adapter; this crate only needs a
//! [`DrawTarget`](embedded_graphics::draw_target::DrawTarget) and the
//! lamp-overlay artwork as an
//! [`ImageDrawable`](embedded_graphics::image::ImageDrawable).

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod render;

pub use render::render;
