//! Machine-face geometry — reference points, scaling, key grids.
//!
//! The machine face is designed once against a fixed abstract canvas
//! ([`DESIGN_WIDTH`] × [`DESIGN_HEIGHT`] design units) and mapped onto a
//! surface of unknown pixel size at runtime:
//!
//! ```text
//! surface size ──► CoordinateRegistry ──► SceneLayout
//!                  (design units,          (rotor windows, latches,
//!                   resolved once,          lamp overlay, key grid,
//!                   scaled per resize)      lamp grid)
//! ```
//!
//! Everything here is rebuilt wholesale when the surface reports a new size
//! and is read-only in between. Configuration problems (missing dimensions,
//! degenerate grids) surface as [`LayoutError`] at build time, never later.

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
// Coordinate arithmetic on device pixels stays far below i32 limits; the
// design canvas is ~10^3 units and scale factors are screen-sized.
#![allow(clippy::cast_possible_truncation)]

pub mod design;
pub mod error;
pub mod grid;
pub mod rect;
pub mod registry;
pub mod scene;

pub use design::{DesignSheet, DESIGN_HEIGHT, DESIGN_WIDTH};
pub use error::LayoutError;
pub use grid::{KeyGrid, KEY_ROWS};
pub use registry::{CoordinateRegistry, RefPointId};
pub use scene::SceneLayout;
