//! Core types shared across the application.
//!
//! Pure data types and tuning constants with no external dependencies.

/// Board dimensions.
pub const BOARD_COLS: usize = 10;
pub const BOARD_ROWS: usize = 20;

/// Spawn position of a new piece (matrix top-left corner).
///
/// The spawn row sits above the visible board; pieces enter the well from
/// there.
pub const SPAWN_COL: i8 = BOARD_COLS as i8 / 2 - 2;
pub const SPAWN_ROW: i8 = -2;

/// Gravity timing (milliseconds).
pub const DROP_INTERVAL_INITIAL_MS: u32 = 650;
pub const DROP_INTERVAL_MIN_MS: u32 = 120;
pub const DROP_INTERVAL_STEP_MS: u32 = 45;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring, indexed by rows cleared in one settle; multiplied by
/// the current level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per row descended.
pub const SOFT_DROP_POINTS: u32 = 1;
pub const HARD_DROP_POINTS: u32 = 2;

/// Horizontal wall-kick offsets tried, in order, when a plain rotation
/// collides.
pub const KICK_OFFSETS: [i8; 4] = [-1, 1, -2, 2];

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];
}

/// Cell on the board (`None` = empty, `Some` = locked piece kind).
///
/// The kind doubles as the palette identifier; the presentation layer maps
/// it to a concrete color.
pub type Cell = Option<PieceKind>;

/// Session phase. Gravity and movement mutate the engine only while
/// `Playing`; `Over` is terminal except for restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Paused,
    Over,
}

/// Player inputs, mapped 1:1 to engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Restart,
}
