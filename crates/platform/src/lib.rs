//! Collaborator boundary for the cipher-machine touch simulator.
//!
//! This crate provides trait-based abstractions for every external
//! collaborator of the interaction core, enabling development and testing
//! without a host UI framework.
//!
//! # Architecture Layers
//!
//! ```text
//! Host adapter (touch framework, audio backend, asset pipeline)
//!         ↓ implements
//! Platform boundary (this crate - trait abstractions)
//!         ↑ consumed by
//! Interaction core (layout, sim, sim-view crates)
//! ```
//!
//! # Boundary Traits
//!
//! - [`CipherEngine`] - the encoding machine (letter in, lit letter out)
//! - [`ResourceProvider`] - design-unit dimension lookup
//! - [`Surface`] - redraw requests and backdrop switching
//! - [`AudioSink`] - fire-and-forget key click playback
//! - [`Notifier`] - fire-and-forget user-facing messages
//! - [`Clock`] / [`Scheduler`] - timestamps and single-shot deferred callbacks
//!
//! # Features
//!
//! - `std`: expose the [`mocks`] module to downstream test suites
//! - `defmt`: enable defmt logging derives (hardware builds)

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod audio;
pub mod cipher;
pub mod mocks;
pub mod notify;
pub mod resources;
pub mod surface;
pub mod time;

// Re-export the boundary traits and their vocabularies
pub use audio::{AudioSink, SoundCue};
pub use cipher::CipherEngine;
pub use notify::Notifier;
pub use resources::{DimensionId, ResourceProvider};
pub use surface::{Backdrop, Redraw, Surface};
pub use time::{Clock, Instant, Scheduler, TimerHandle};
