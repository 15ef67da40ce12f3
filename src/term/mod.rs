//! Terminal presentation layer.
//!
//! `fb` holds the styled-character framebuffer, `game_view` maps engine
//! state into one (pure, testable), and `renderer` flushes frames to the
//! real terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
