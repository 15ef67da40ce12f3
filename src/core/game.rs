//! Game engine - the session state machine.
//!
//! Owns the board, the active and next pieces, the RNG, and the
//! score/level/line counters; nothing else mutates them. Failed moves and
//! rotations are silent no-ops, and the only terminal condition is the Over
//! phase (spawn collision or a lock above the visible area). The
//! presentation layer reads state through the accessors and drives gravity
//! by calling [`Game::step_down`] on its own timer.

use crate::core::catalog::{self, Matrix};
use crate::core::rng::PieceSource;
use crate::core::scoring;
use crate::core::Board;
use crate::types::{
    GameAction, GamePhase, PieceKind, BOARD_COLS, BOARD_ROWS, KICK_OFFSETS, SPAWN_COL, SPAWN_ROW,
};

/// The currently falling piece: a rotation index into the catalog plus the
/// matrix's top-left corner in board coordinates. `y` is negative while the
/// piece is still entering the well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A fresh piece at the spawn position, rotation 0.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_COL,
            y: SPAWN_ROW,
        }
    }

    /// Matrix of the current rotation state.
    pub fn matrix(&self) -> Matrix {
        catalog::rotations(self.kind)[self.rotation]
    }

    /// Number of rotation states for this piece's kind.
    pub fn state_count(&self) -> usize {
        catalog::rotations(self.kind).len()
    }
}

/// Whether the piece would overlap a wall, the floor, or locked cells after
/// shifting by `(dx, dy)` into rotation state `rotation`.
///
/// Cells above the visible board (`y < 0`) never collide with board content
/// but stay constrained by the side walls. Pure; this is the sole collision
/// authority for movement, rotation, drops, ghost projection, and spawn
/// failure.
pub fn collides(board: &Board, piece: &ActivePiece, dx: i8, dy: i8, rotation: usize) -> bool {
    let matrix = catalog::rotations(piece.kind)[rotation];
    for (row, cells) in matrix.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == 0 {
                continue;
            }
            let x = piece.x + dx + col as i8;
            let y = piece.y + dy + row as i8;
            if x < 0 || x >= BOARD_COLS as i8 || y >= BOARD_ROWS as i8 {
                return true;
            }
            if y >= 0 && board.is_occupied(x, y) {
                return true;
            }
        }
    }
    false
}

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    source: PieceSource,
    phase: GamePhase,
    score: u32,
    level: u32,
    cleared_lines: u32,
}

impl Game {
    /// Fresh session: empty board, level 1, first piece spawned and the
    /// look-ahead filled.
    pub fn new(seed: u32) -> Self {
        let mut source = PieceSource::new(seed);
        let first = source.next_kind();
        let next = source.next_kind();
        Self {
            board: Board::new(),
            active: ActivePiece::spawn(first),
            next,
            source,
            phase: GamePhase::Playing,
            score: 0,
            level: 1,
            cleared_lines: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    /// Look-ahead piece kind (no position; spawns at rotation 0).
    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn cleared_lines(&self) -> u32 {
        self.cleared_lines
    }

    /// Current gravity interval, derived from the level.
    pub fn drop_interval_ms(&self) -> u32 {
        scoring::drop_interval_ms(self.level)
    }

    /// Re-initialize everything for a new session. Callable from any phase.
    ///
    /// Seeds the new piece stream from the current RNG state so consecutive
    /// games differ while a fixed construction seed stays deterministic.
    pub fn restart(&mut self) {
        *self = Self::new(self.source.state());
    }

    fn playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Shift the active piece if the target position is free. No-op outside
    /// the Playing phase or on collision.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.playing() {
            return false;
        }
        if collides(&self.board, &self.active, dx, dy, self.active.rotation) {
            return false;
        }
        self.active.x += dx;
        self.active.y += dy;
        true
    }

    /// One gravity step. A `manual` step (player soft drop) scores 1 point
    /// per row; a blocked step settles the piece.
    pub fn step_down(&mut self, manual: bool) {
        if !self.playing() {
            return;
        }
        if self.try_move(0, 1) {
            if manual {
                self.score += scoring::drop_score(1, false);
            }
            return;
        }
        self.settle();
    }

    /// Drop the active piece to its resting row and settle it, scoring 2
    /// points per row descended.
    pub fn hard_drop(&mut self) {
        if !self.playing() {
            return;
        }
        let mut rows = 0u32;
        while self.try_move(0, 1) {
            rows += 1;
        }
        self.score += scoring::drop_score(rows, true);
        self.settle();
    }

    /// Advance to the next rotation state, trying the wall-kick offsets in
    /// order when the plain rotation collides. A rotation with no viable
    /// offset is rejected without mutation.
    pub fn rotate(&mut self) {
        if !self.playing() {
            return;
        }
        let next_rotation = (self.active.rotation + 1) % self.active.state_count();
        if !collides(&self.board, &self.active, 0, 0, next_rotation) {
            self.active.rotation = next_rotation;
            return;
        }
        for &offset in KICK_OFFSETS.iter() {
            if !collides(&self.board, &self.active, offset, 0, next_rotation) {
                self.active.x += offset;
                self.active.rotation = next_rotation;
                return;
            }
        }
    }

    /// Playing <-> Paused. No-op once the game is over.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            GamePhase::Over => GamePhase::Over,
        };
    }

    /// Where the active piece would land: a copy descended until blocked.
    /// Read-only; used by the presentation layer for the ghost outline.
    pub fn ghost(&self) -> ActivePiece {
        let mut ghost = self.active;
        while !collides(&self.board, &ghost, 0, 1, ghost.rotation) {
            ghost.y += 1;
        }
        ghost
    }

    /// Apply a player input to the matching engine operation.
    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => {
                self.try_move(-1, 0);
            }
            GameAction::MoveRight => {
                self.try_move(1, 0);
            }
            GameAction::SoftDrop => self.step_down(true),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Lock, clear, score, level up, respawn. Reached only when the active
    /// piece can no longer descend.
    fn settle(&mut self) {
        if !self.lock_active() {
            // The stack reached above the visible area.
            self.phase = GamePhase::Over;
            return;
        }
        let cleared = self.board.clear_full_rows().len();
        self.score += scoring::line_clear_score(cleared, self.level);
        self.cleared_lines += cleared as u32;
        self.level = scoring::level_for_lines(self.cleared_lines);
        self.spawn_next();
    }

    /// Merge the active piece into the board. Returns false if any occupied
    /// cell sits above the visible area; writing stops at the first such
    /// cell since the game is ending either way.
    fn lock_active(&mut self) -> bool {
        let piece = self.active;
        for (row, cells) in piece.matrix().iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == 0 {
                    continue;
                }
                let y = piece.y + row as i8;
                if y < 0 {
                    return false;
                }
                self.board.set(piece.x + col as i8, y, Some(piece.kind));
            }
        }
        true
    }

    /// Promote the look-ahead to active and draw a new one. A spawn that
    /// immediately collides ends the game.
    fn spawn_next(&mut self) {
        self.active = ActivePiece::spawn(self.next);
        self.next = self.source.next_kind();
        if collides(&self.board, &self.active, 0, 0, self.active.rotation) {
            self.phase = GamePhase::Over;
        }
    }
}
