use super::*;

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn test_startpos_moves() {
    let pos = Position::from_fen(STARTPOS).unwrap();
    assert_eq!(legal_move_count(&pos), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    assert_eq!(legal_move_count(&pos), 48);
}

#[test]
fn test_lone_king_stalemated() {
    // Black king on a8, white queen b6, white king c7
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(legal_move_count(&pos), 0);
    assert!(pos.checkers().is_empty());
}

#[test]
fn test_lone_king_in_corner_has_moves() {
    let pos = Position::from_fen("k7/8/2K5/8/8/8/8/7Q b - - 0 1").unwrap();
    let moves = legal_moves(&pos);
    // a7 and b8 are covered by nothing; b7 is next to the white king
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_en_passant_generated() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert!(moves.iter().any(|m| m.is_en_passant));
}

#[test]
fn test_promotions_generated() {
    let pos = Position::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let promos = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.promo.is_some())
        .count();
    assert_eq!(promos, 4);
}
