//! Interaction core of the cipher-machine touch simulator.
//!
//! A thin host adapter feeds this crate raw surface events; everything the
//! machine *does* in response flows back out through the `platform` traits:
//!
//! ```text
//! pointer down ──► Simulator ──► KeyGrid::letter_at ──► CipherEngine::encode_char
//!                     │                                        │
//!                     │◄── lamp letter ───────────────────────┘
//!                     ├──► Surface::request_redraw (rotors, lamp)
//!                     ├──► AudioSink::play
//!                     └──► Scheduler::schedule_after (minimum lamp hold)
//! ```
//!
//! The machine is single-threaded and event-driven: pointer events, timer
//! fires and redraws all happen on one logical UI thread, so transitions are
//! serialized by construction.

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod simulator;
pub mod state;

pub use simulator::{Host, Simulator, LAMP_HOLD};
pub use state::{InteractionState, Response};
