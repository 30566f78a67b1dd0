use super::*;

fn fen_key(fen: &str) -> u64 {
    Position::from_fen(fen).unwrap().material_key()
}

#[test]
fn test_key_matches_live_position() {
    // White rook against black pawn
    let live = fen_key("8/8/8/4k3/8/3p4/8/R3K3 w - - 0 1");
    assert_eq!(key("KRKP", Color::White), live);

    // Black rook against white pawn
    let live = fen_key("r3k3/8/3P4/8/4K3/8/8/8 b - - 0 1");
    assert_eq!(key("KRKP", Color::Black), live);
}

#[test]
fn test_strong_sides_give_distinct_keys() {
    for code in ["KPK", "KBNK", "KRKP", "KQKR", "KRPKR", "KRPPKRP", "KBPKB"] {
        assert_ne!(key(code, Color::White), key(code, Color::Black), "{code}");
    }
}

#[test]
fn test_key_is_reproducible() {
    assert_eq!(key("KBPKN", Color::White), key("KBPKN", Color::White));
}

#[test]
fn test_symmetric_code_has_equal_keys() {
    // Same material on both sides hashes the same whichever side is strong.
    assert_eq!(key("KRKR", Color::White), key("KRKR", Color::Black));
}

#[test]
#[should_panic]
fn test_key_rejects_missing_second_king() {
    key("KRP", Color::White);
}

#[test]
#[should_panic]
fn test_key_rejects_long_code() {
    key("KRPPPKRP", Color::White);
}

#[test]
fn test_validate() {
    assert!(validate("KRPKR").is_ok());
    assert!(validate("KK").is_ok());

    for bad in ["", "RKK", "KRP", "KRKKR", "KRPPPKRP", "KxK", "KrK"] {
        assert!(
            matches!(validate(bad), Err(EndgameError::MalformedCode { .. })),
            "{bad} should be rejected"
        );
    }
}
