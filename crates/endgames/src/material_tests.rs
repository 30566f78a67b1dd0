use super::*;

fn probe_kinds(fen: &str) -> (Option<(ValueKind, Color)>, [Option<ScaleKind>; 2]) {
    let eg = Endgames::new();
    let pos = Position::from_fen(fen).unwrap();
    let probe = eg.probe(&pos);
    (
        probe.value.map(|e| (e.kind(), e.strong_side())),
        probe.scale.map(|s| s.map(|e| e.kind())),
    )
}

#[test]
fn test_exact_value_entry_wins() {
    let (value, scale) = probe_kinds("8/8/8/4k3/8/8/8/1NB1K3 w - - 0 1");
    assert_eq!(value, Some((ValueKind::KBNK, Color::White)));
    assert_eq!(scale, [None, None]);
}

#[test]
fn test_generic_kxk() {
    let (value, _) = probe_kinds("8/8/8/4k3/8/8/PP6/R3K3 w - - 0 1");
    assert_eq!(value, Some((ValueKind::KXK, Color::White)));

    let (value, _) = probe_kinds("3qk3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(value, Some((ValueKind::KXK, Color::Black)));
}

#[test]
fn test_lone_minor_is_not_kxk() {
    let (value, scale) = probe_kinds("8/8/8/4k3/8/8/8/2B1K3 w - - 0 1");
    assert_eq!(value, None);
    assert_eq!(scale, [None, None]);
}

#[test]
fn test_exact_scale_entry() {
    let (value, scale) = probe_kinds("r3k3/8/8/8/8/8/P7/4K2R w - - 0 1");
    assert_eq!(value, None);
    assert_eq!(scale, [Some(ScaleKind::KRPKR), None]);
}

#[test]
fn test_generic_bishop_and_pawns() {
    let (_, scale) = probe_kinds("7k/8/6p1/8/7P/3B4/7P/4K3 w - - 0 1");
    assert_eq!(scale, [Some(ScaleKind::KBPsK), None]);
}

#[test]
fn test_generic_queen_against_rook_and_pawns() {
    let (_, scale) = probe_kinds("6k1/6p1/5r2/8/8/8/4K3/Q7 w - - 0 1");
    assert_eq!(scale, [Some(ScaleKind::KQKRPs), None]);
}

#[test]
fn test_pawns_against_bare_king() {
    let (value, scale) = probe_kinds("8/k7/8/8/8/P7/P7/4K3 w - - 0 1");
    assert_eq!(value, None);
    assert_eq!(scale, [Some(ScaleKind::KPsK), None]);

    let (_, scale) = probe_kinds("4k3/pp6/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(scale, [None, Some(ScaleKind::KPsK)]);
}

#[test]
fn test_pawn_against_pawn_scales_both_sides() {
    let (_, scale) = probe_kinds("8/3k3p/8/3K4/3P4/8/8/8 w - - 0 1");
    assert_eq!(scale, [Some(ScaleKind::KPKP), Some(ScaleKind::KPKP)]);
}

#[test]
fn test_unrelated_material_is_empty() {
    let eg = Endgames::new();
    let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
        .unwrap();
    assert!(eg.probe(&pos).is_empty());
}

#[test]
fn test_probe_helpers() {
    let eg = Endgames::new();

    let pos = Position::from_fen("1k6/8/P7/8/4K3/8/8/r6R w - - 0 1").unwrap();
    let probe = eg.probe(&pos);
    assert_eq!(probe.evaluate(&pos), None);
    assert_eq!(probe.scale_factor(&pos, Color::White), Some(ScaleFactor::DRAW));
    assert_eq!(probe.scale_factor(&pos, Color::Black), None);

    // A rule with no opinion reports nothing.
    let pos = Position::from_fen("7r/8/8/3k4/8/8/P7/R3K3 w - - 0 1").unwrap();
    let probe = eg.probe(&pos);
    assert!(probe.scale[0].is_some());
    assert_eq!(probe.scale_factor(&pos, Color::White), None);

    let pos = Position::from_fen("8/3k4/8/3K4/3P4/8/8/8 w - - 0 1").unwrap();
    assert_eq!(eg.probe(&pos).evaluate(&pos), Some(0));
}
