//! Core module - pure game logic.
//!
//! Everything here is free of terminal, timing, and I/O concerns and can be
//! unit-tested in isolation. The engine in [`game`] is the single source of
//! truth for session state; the presentation layer only reads from it.

pub mod board;
pub mod catalog;
pub mod game;
pub mod rng;
pub mod scoring;

pub use board::Board;
pub use game::{collides, ActivePiece, Game};
pub use rng::{PieceSource, SimpleRng};
