use super::*;
use chess_core::squares::*;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

#[test]
fn test_identity_for_white_queenside_pawn() {
    let p = pos("7k/8/8/8/8/8/2P5/K7 w - - 0 1");
    for sq in 0..64u8 {
        assert_eq!(normalize(&p, Color::White, sq), sq);
    }
}

#[test]
fn test_kingside_pawn_is_mirrored() {
    let p = pos("7k/8/8/8/8/8/5P2/K7 w - - 0 1");
    assert_eq!(normalize(&p, Color::White, F2), C2);
    assert_eq!(normalize(&p, Color::White, H8), A8);
    assert_eq!(normalize(&p, Color::White, A1), H1);
}

#[test]
fn test_black_strong_side_is_flipped() {
    let p = pos("7k/1p6/8/8/8/8/8/K7 w - - 0 1");
    assert_eq!(normalize(&p, Color::Black, B7), B2);
    assert_eq!(normalize(&p, Color::Black, H8), H1);

    // Pawn on g7: mirror first, then flip.
    let p = pos("7k/6p1/8/8/8/8/8/K7 w - - 0 1");
    assert_eq!(normalize(&p, Color::Black, G7), B2);
    assert_eq!(normalize(&p, Color::Black, A8), H1);
}

#[test]
fn test_flip_and_mirror_are_involutions() {
    for sq in 0..64u8 {
        assert_eq!(flip(flip(sq)), sq);
        assert_eq!(mirror(mirror(sq)), sq);
        assert_eq!(flip(sq), relative_square(Color::Black, sq));
    }
    assert_eq!(flip(A1), A8);
    assert_eq!(flip(C3), C6);
    assert_eq!(mirror(A1), H1);
    assert_eq!(relative_square(Color::Black, A1), A8);
}
