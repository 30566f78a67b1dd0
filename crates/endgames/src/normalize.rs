//! Square normalization.
//!
//! Rules for single-pawn endgames are written once, for White as the strong
//! side with its pawn on files a-d. These helpers map any real position into
//! that frame.

use chess_core::{file_of, Color, PieceKind, Position, FILE_E};

pub use chess_core::relative_square;

/// Color flip: the square seen from the other side of the board, a1 <-> a8.
#[inline(always)]
pub fn flip(sq: u8) -> u8 {
    sq ^ 56
}

/// Horizontal mirror: a-file <-> h-file.
#[inline(always)]
pub fn mirror(sq: u8) -> u8 {
    sq ^ 7
}

/// Map `sq` as if `strong` were White and its only pawn stood on files a-d.
///
/// The caller guarantees `strong` has exactly one pawn.
pub fn normalize(pos: &Position, strong: Color, sq: u8) -> u8 {
    debug_assert_eq!(pos.count(strong, PieceKind::Pawn), 1);

    let pawn = pos.square(strong, PieceKind::Pawn);
    let sq = if file_of(pawn) >= FILE_E { mirror(sq) } else { sq };

    match strong {
        Color::White => sq,
        Color::Black => flip(sq),
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod normalize_tests;
