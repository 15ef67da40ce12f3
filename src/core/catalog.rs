//! Piece catalog - static tetromino definitions.
//!
//! Each kind maps to an ordered list of rotation-state matrices. A matrix is
//! a square 0/1 grid (4x4 for I, 2x2 for O, 3x3 otherwise) whose non-zero
//! entries mark occupied cells; a piece's board position is the matrix's
//! top-left corner. The tables are immutable; rotation is an index into the
//! per-kind list.

use crate::types::PieceKind;

/// One rotation state. Non-zero marks an occupied cell.
pub type Matrix = &'static [&'static [u8]];

/// Ordered rotation states for a piece kind.
pub fn rotations(kind: PieceKind) -> &'static [Matrix] {
    match kind {
        PieceKind::I => I_STATES,
        PieceKind::J => J_STATES,
        PieceKind::L => L_STATES,
        PieceKind::O => O_STATES,
        PieceKind::S => S_STATES,
        PieceKind::T => T_STATES,
        PieceKind::Z => Z_STATES,
    }
}

static I_STATES: &[Matrix] = &[
    &[
        &[0, 0, 0, 0],
        &[1, 1, 1, 1],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
    ],
    &[
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
    ],
];

static J_STATES: &[Matrix] = &[
    &[
        &[1, 0, 0],
        &[1, 1, 1],
        &[0, 0, 0],
    ],
    &[
        &[0, 1, 1],
        &[0, 1, 0],
        &[0, 1, 0],
    ],
    &[
        &[0, 0, 0],
        &[1, 1, 1],
        &[0, 0, 1],
    ],
    &[
        &[0, 1, 0],
        &[0, 1, 0],
        &[1, 1, 0],
    ],
];

static L_STATES: &[Matrix] = &[
    &[
        &[0, 0, 1],
        &[1, 1, 1],
        &[0, 0, 0],
    ],
    &[
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 1],
    ],
    &[
        &[0, 0, 0],
        &[1, 1, 1],
        &[1, 0, 0],
    ],
    &[
        &[1, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
    ],
];

static O_STATES: &[Matrix] = &[&[
    &[1, 1],
    &[1, 1],
]];

static S_STATES: &[Matrix] = &[
    &[
        &[0, 1, 1],
        &[1, 1, 0],
        &[0, 0, 0],
    ],
    &[
        &[0, 1, 0],
        &[0, 1, 1],
        &[0, 0, 1],
    ],
];

static T_STATES: &[Matrix] = &[
    &[
        &[0, 1, 0],
        &[1, 1, 1],
        &[0, 0, 0],
    ],
    &[
        &[0, 1, 0],
        &[0, 1, 1],
        &[0, 1, 0],
    ],
    &[
        &[0, 0, 0],
        &[1, 1, 1],
        &[0, 1, 0],
    ],
    &[
        &[0, 1, 0],
        &[1, 1, 0],
        &[0, 1, 0],
    ],
];

static Z_STATES: &[Matrix] = &[
    &[
        &[1, 1, 0],
        &[0, 1, 1],
        &[0, 0, 0],
    ],
    &[
        &[0, 0, 1],
        &[0, 1, 1],
        &[0, 1, 0],
    ],
];
