//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and can be unit-tested.

use crate::core::{ActivePiece, Game};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, PieceKind, BOARD_COLS, BOARD_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Fixed palette, one color per piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::J => Rgb::new(0, 64, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::S => Rgb::new(0, 208, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
        PieceKind::Z => Rgb::new(240, 0, 64),
    }
}

const WELL_BG: Rgb = Rgb::new(21, 32, 51);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const PANEL_FG: Rgb = Rgb::new(240, 244, 255);
const HELP_FG: Rgb = Rgb::new(142, 160, 200);

/// Renders the board, side panel, and overlays into a framebuffer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = BOARD_COLS as u16 * self.cell_w;
        let board_px_h = BOARD_ROWS as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = 1;
        let start_y = 1;

        let well = CellStyle {
            fg: Rgb::new(80, 90, 110),
            bg: WELL_BG,
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: BORDER_FG,
            ..CellStyle::default()
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for y in 0..BOARD_ROWS {
            for x in 0..BOARD_COLS {
                if let Some(kind) = game.board().get(x as i8, y as i8) {
                    let style = CellStyle {
                        fg: piece_color(kind),
                        bg: piece_color(kind),
                        bold: false,
                        dim: false,
                    };
                    self.fill_board_cell(&mut fb, start_x, start_y, x as i8, y as i8, ' ', style);
                }
            }
        }

        // Ghost outline below the active piece.
        self.draw_piece_cells(&mut fb, start_x, start_y, &game.ghost(), '░', |color| {
            CellStyle {
                fg: color,
                bg: WELL_BG,
                bold: false,
                dim: true,
            }
        });

        // Active piece on top.
        self.draw_piece_cells(&mut fb, start_x, start_y, &game.active(), ' ', |color| {
            CellStyle {
                fg: color,
                bg: color,
                bold: false,
                dim: false,
            }
        });

        self.draw_side_panel(&mut fb, game, start_x + frame_w + 2, start_y);

        match game.phase() {
            GamePhase::Paused => {
                self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED", None)
            }
            GamePhase::Over => self.draw_overlay(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "GAME OVER",
                Some("press R to restart"),
            ),
            GamePhase::Playing => {}
        }

        fb
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, x: i8, y: i8) -> (u16, u16) {
        (
            start_x + 1 + x as u16 * self.cell_w,
            start_y + 1 + y as u16 * self.cell_h,
        )
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Draw every visible cell of a piece; rows above the board are skipped.
    fn draw_piece_cells(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        piece: &ActivePiece,
        ch: char,
        style_for: impl Fn(Rgb) -> CellStyle,
    ) {
        let color = piece_color(piece.kind);
        for (row, cells) in piece.matrix().iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == 0 {
                    continue;
                }
                let x = piece.x + col as i8;
                let y = piece.y + row as i8;
                if y < 0 {
                    continue;
                }
                self.fill_board_cell(fb, start_x, start_y, x, y, ch, style_for(color));
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, game: &Game, x: u16, y: u16) {
        let label = CellStyle {
            fg: PANEL_FG,
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: PANEL_FG,
            ..CellStyle::default()
        };
        let help = CellStyle {
            fg: HELP_FG,
            ..CellStyle::default()
        };

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &game.score().to_string(), value);
        fb.put_str(x, y + 3, "LEVEL", label);
        fb.put_str(x, y + 4, &game.level().to_string(), value);
        fb.put_str(x, y + 6, "LINES", label);
        fb.put_str(x, y + 7, &game.cleared_lines().to_string(), value);

        fb.put_str(x, y + 9, "NEXT", label);
        self.draw_next_preview(fb, game.next(), x, y + 10);

        let controls = [
            "←/→  move",
            "↑    rotate",
            "↓    soft drop",
            "space hard drop",
            "p    pause",
            "r    restart",
            "q    quit",
        ];
        for (i, line) in controls.iter().enumerate() {
            fb.put_str(x, y + 16 + i as u16, line, help);
        }
    }

    /// Preview box for the look-ahead piece, drawn from its first rotation
    /// state.
    fn draw_next_preview(&self, fb: &mut FrameBuffer, kind: PieceKind, x: u16, y: u16) {
        let color = piece_color(kind);
        let style = CellStyle {
            fg: color,
            bg: color,
            bold: false,
            dim: false,
        };
        let matrix = crate::core::catalog::rotations(kind)[0];
        for (row, cells) in matrix.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == 0 {
                    continue;
                }
                fb.fill_rect(
                    x + col as u16 * self.cell_w,
                    y + row as u16 * self.cell_h,
                    self.cell_w,
                    self.cell_h,
                    ' ',
                    style,
                );
            }
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        title: &str,
        subtitle: Option<&str>,
    ) {
        let style = CellStyle {
            fg: Rgb::new(227, 236, 255),
            bold: true,
            ..CellStyle::default()
        };
        let cx = x + w.saturating_sub(title.chars().count() as u16) / 2;
        let cy = y + h / 2;
        fb.put_str(cx, cy, title, style);

        if let Some(sub) = subtitle {
            let sx = x + w.saturating_sub(sub.chars().count() as u16) / 2;
            fb.put_str(sx, cy + 1, sub, CellStyle { bold: false, ..style });
        }
    }
}
