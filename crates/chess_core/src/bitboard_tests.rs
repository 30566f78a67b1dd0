use super::*;
use crate::types::squares::*;

#[test]
fn test_from_square() {
    assert_eq!(Bitboard::from_square(0).0, 1); // a1
    assert_eq!(Bitboard::from_square(7).0, 128); // h1
    assert_eq!(Bitboard::from_square(63).0, 1 << 63); // h8
}

#[test]
fn test_popcount() {
    assert_eq!(Bitboard::EMPTY.popcount(), 0);
    assert_eq!(Bitboard::FILE_A.popcount(), 8);
    assert_eq!(Bitboard::DARK_SQUARES.popcount(), 32);
    assert_eq!(Bitboard::ALL.popcount(), 64);
}

#[test]
fn test_iterator() {
    let bb = Bitboard(0b1010);
    let squares: Vec<u8> = bb.collect();
    assert_eq!(squares, vec![1, 3]);
}

#[test]
fn test_lsb_msb() {
    let bb = Bitboard::from_square(C3) | Bitboard::from_square(F6);
    assert_eq!(bb.lsb(), Some(C3));
    assert_eq!(bb.msb(), Some(F6));
    assert!(bb.more_than_one());
    assert!(!Bitboard::from_square(C3).more_than_one());
    assert_eq!(backmost_sq(Color::White, bb), Some(C3));
    assert_eq!(backmost_sq(Color::Black, bb), Some(F6));
}

#[test]
fn test_dark_squares() {
    assert!(Bitboard::DARK_SQUARES.contains(A1));
    assert!(Bitboard::DARK_SQUARES.contains(H8));
    assert!(!Bitboard::DARK_SQUARES.contains(H1));
    assert!(!Bitboard::DARK_SQUARES.contains(A8));
}

#[test]
fn test_in_front_and_forward() {
    assert_eq!(in_front_bb(Color::White, 6), rank_bb(7));
    assert_eq!(in_front_bb(Color::Black, 1), rank_bb(0));
    assert_eq!(in_front_bb(Color::White, 7), Bitboard::EMPTY);
    assert_eq!(in_front_bb(Color::Black, 0), Bitboard::EMPTY);

    let fwd = forward_bb(Color::White, E6);
    assert_eq!(fwd, Bitboard::from_square(E7) | Bitboard::from_square(E8));
    let fwd = forward_bb(Color::Black, B3);
    assert_eq!(fwd, Bitboard::from_square(B2) | Bitboard::from_square(B1));
}

#[test]
fn test_passed_pawn_mask() {
    let mask = passed_pawn_mask(Color::White, A6);
    assert_eq!(mask.popcount(), 4); // a7 a8 b7 b8
    assert!(mask.contains(B7));
    assert!(!mask.contains(B6));
    assert_eq!(passed_pawn_mask(Color::Black, D4).popcount(), 9);
}
