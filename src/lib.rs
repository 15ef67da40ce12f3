//! Terminal falling-block puzzle game.
//!
//! The `core` module is the pure game engine: board, piece catalog,
//! collision, scoring, and the session state machine. `input` and `term`
//! are the thin presentation layer; the binary in `main.rs` owns the
//! gravity timing loop and calls engine operations 1:1 from key events.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
