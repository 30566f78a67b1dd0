use super::squares::*;
use super::*;

#[test]
fn test_distance() {
    assert_eq!(distance(A1, H8), 7);
    assert_eq!(distance(E4, E4), 0);
    assert_eq!(distance(E4, F6), 2);
    assert_eq!(file_distance(A1, H1), 7);
    assert_eq!(rank_distance(A1, H1), 0);
}

#[test]
fn test_opposite_colors() {
    // a1 and h8 are both dark, a8 and h1 both light
    assert!(!opposite_colors(A1, H8));
    assert!(!opposite_colors(A8, H1));
    assert!(opposite_colors(A1, A8));
    assert!(opposite_colors(A1, B1));
    assert!(!opposite_colors(A1, B2));
}

#[test]
fn test_relative_helpers() {
    assert_eq!(relative_rank(Color::White, E2), RANK_2);
    assert_eq!(relative_rank(Color::Black, E2), RANK_7);
    assert_eq!(relative_square(Color::Black, A1), A8);
    assert_eq!(relative_square(Color::White, C3), C3);
    assert_eq!(shift(E2, pawn_push(Color::White)), E3);
    assert_eq!(shift(E7, pawn_push(Color::Black)), E6);
}

#[test]
fn test_coords() {
    assert_eq!(coord_to_sq("e4"), Some(E4));
    assert_eq!(sq_to_coord(H8), "h8");
    assert_eq!(coord_to_sq("i9"), None);
    assert_eq!(make_square(FILE_C, RANK_5), C5);
}

#[test]
fn test_color_not() {
    assert_eq!(!Color::White, Color::Black);
    assert_eq!(!!Color::Black, Color::Black);
}
