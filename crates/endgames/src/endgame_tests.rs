use super::*;
use chess_core::{BISHOP_VALUE_MG, KNIGHT_VALUE_MG, ROOK_VALUE_MG};

#[test]
fn test_scale_factor_sentinels() {
    assert_eq!(ScaleFactor::DRAW.get(), 0);
    assert_eq!(ScaleFactor::NORMAL.get(), 64);
    assert_eq!(ScaleFactor::MAX.get(), 128);
    assert_eq!(ScaleFactor::NONE.get(), 255);
    assert!(ScaleFactor::NONE.is_none());
    assert!(!ScaleFactor::DRAW.is_none());
    assert_eq!(ScaleFactor::new(24), ScaleFactor(24));
    assert_eq!(ScaleFactor::NONE.to_string(), "none");
    assert_eq!(ScaleFactor::new(10).to_string(), "10");
}

#[test]
fn test_registered_codes_resolve() {
    for &kind in ValueKind::REGISTERED {
        assert_eq!(ValueKind::from_code(kind.code()), Some(kind));
        assert_eq!(ScaleKind::from_code(kind.code()), None);
    }
    for &kind in ScaleKind::REGISTERED {
        assert_eq!(ScaleKind::from_code(kind.code()), Some(kind));
        assert_eq!(ValueKind::from_code(kind.code()), None);
    }
}

#[test]
fn test_generic_kinds_are_not_registered_by_code() {
    assert_eq!(ValueKind::from_code("KXK"), None);
    assert_eq!(ScaleKind::from_code("KBPsK"), None);
    assert_eq!(ScaleKind::from_code("KQKRPs"), None);
    assert_eq!(ScaleKind::from_code("KPsK"), None);
    assert_eq!(ScaleKind::from_code("KPKP"), None);
}

#[test]
fn test_sides() {
    let eg = Endgame::new(ValueKind::KRKP, Color::Black);
    assert_eq!(eg.strong_side(), Color::Black);
    assert_eq!(eg.weak_side(), Color::White);
    assert_eq!(eg.kind(), ValueKind::KRKP);
    assert_eq!(eg.code(), "KRKP");
}

#[test]
fn test_verify_material() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/1NB1K2R w - - 0 1").unwrap();
    assert!(verify_material(
        &pos,
        Color::White,
        KNIGHT_VALUE_MG + BISHOP_VALUE_MG + ROOK_VALUE_MG,
        1
    ));
    assert!(!verify_material(&pos, Color::White, ROOK_VALUE_MG, 1));
    assert!(verify_material(&pos, Color::Black, 0, 0));
}
