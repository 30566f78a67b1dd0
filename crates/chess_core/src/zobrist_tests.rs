use super::*;
use crate::types::{Color, PieceKind};

#[test]
fn test_zobrist_keys_unique() {
    let mut seen = std::collections::HashSet::new();

    for color in 0..2 {
        for kind in 0..6 {
            for n in 0..MAX_PIECE_ORDINAL {
                let key = ZOBRIST.material[color][kind][n];
                assert!(seen.insert(key), "Duplicate Zobrist key found");
            }
        }
    }
}

#[test]
fn test_key_for_counts_depends_on_color() {
    let mut white_rook = [[0u32; 6]; 2];
    white_rook[0][PieceKind::King.idx()] = 1;
    white_rook[1][PieceKind::King.idx()] = 1;
    white_rook[0][PieceKind::Rook.idx()] = 1;

    let mut black_rook = white_rook;
    black_rook[0][PieceKind::Rook.idx()] = 0;
    black_rook[1][PieceKind::Rook.idx()] = 1;

    assert_ne!(
        ZOBRIST.key_for_counts(&white_rook),
        ZOBRIST.key_for_counts(&black_rook)
    );
}

#[test]
fn test_key_for_counts_is_xor_of_ordinals() {
    let mut counts = [[0u32; 6]; 2];
    counts[1][PieceKind::Pawn.idx()] = 2;
    let expected = ZOBRIST.material_key(Color::Black, PieceKind::Pawn, 0)
        ^ ZOBRIST.material_key(Color::Black, PieceKind::Pawn, 1);
    assert_eq!(ZOBRIST.key_for_counts(&counts), expected);
}
