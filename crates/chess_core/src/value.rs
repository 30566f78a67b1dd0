//! Centipawn-scale values shared by material accounting and endgame scoring.

use crate::types::PieceKind;

pub type Value = i32;

pub const VALUE_ZERO: Value = 0;
pub const VALUE_DRAW: Value = 0;
pub const VALUE_KNOWN_WIN: Value = 10000;

pub const PAWN_VALUE_MG: Value = 198;
pub const PAWN_VALUE_EG: Value = 258;
pub const KNIGHT_VALUE_MG: Value = 817;
pub const KNIGHT_VALUE_EG: Value = 846;
pub const BISHOP_VALUE_MG: Value = 836;
pub const BISHOP_VALUE_EG: Value = 857;
pub const ROOK_VALUE_MG: Value = 1270;
pub const ROOK_VALUE_EG: Value = 1278;
pub const QUEEN_VALUE_MG: Value = 2521;
pub const QUEEN_VALUE_EG: Value = 2558;

/// Middlegame value of a piece, the unit non-pawn material is counted in.
pub fn piece_value_mg(kind: PieceKind) -> Value {
    match kind {
        PieceKind::Pawn => PAWN_VALUE_MG,
        PieceKind::Knight => KNIGHT_VALUE_MG,
        PieceKind::Bishop => BISHOP_VALUE_MG,
        PieceKind::Rook => ROOK_VALUE_MG,
        PieceKind::Queen => QUEEN_VALUE_MG,
        PieceKind::King => VALUE_ZERO,
    }
}
