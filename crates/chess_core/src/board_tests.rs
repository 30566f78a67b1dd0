use super::*;
use crate::types::squares::*;
use crate::value::{BISHOP_VALUE_MG, KNIGHT_VALUE_MG, ROOK_VALUE_MG};

#[test]
fn test_from_fen_places_pieces() {
    let pos = Position::from_fen("8/8/8/4k3/8/2N5/1B6/4K3 b - - 3 40").unwrap();
    assert_eq!(pos.side_to_move, Color::Black);
    assert_eq!(pos.king_square(Color::White), E1);
    assert_eq!(pos.king_square(Color::Black), E5);
    assert_eq!(pos.square(Color::White, PieceKind::Bishop), B2);
    assert_eq!(pos.count(Color::White, PieceKind::Knight), 1);
    assert_eq!(pos.halfmove_clock, 3);
    assert_eq!(pos.fullmove_number, 40);
    assert_eq!(
        pos.non_pawn_material(Color::White),
        KNIGHT_VALUE_MG + BISHOP_VALUE_MG
    );
    assert_eq!(pos.non_pawn_material(Color::Black), 0);
}

#[test]
fn test_from_fen_errors() {
    assert_eq!(
        Position::from_fen("8/8/8 w - -"),
        Err(FenError::RankCount(3))
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/8 w -"),
        Err(FenError::MissingFields(3))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4X3 w - -"),
        Err(FenError::InvalidPiece('X'))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/8 w - -"),
        Err(FenError::KingCount {
            color: Color::White,
            count: 0
        })
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K4 w - -"),
        Err(FenError::BadRankWidth(8))
    );
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 x - -"),
        Err(FenError::InvalidSideToMove(_))
    ));
}

#[test]
fn test_back_rank_pawns_are_accepted() {
    // Synthetic boards used for material signatures put pawns on rank 1/8.
    let pos = Position::from_fen("kp6/8/8/8/8/8/8/KR6 w - - 0 10").unwrap();
    assert_eq!(pos.count(Color::Black, PieceKind::Pawn), 1);
    assert_eq!(pos.non_pawn_material(Color::White), ROOK_VALUE_MG);
}

#[test]
fn test_material_key_ignores_squares() {
    let a = Position::from_fen("8/8/8/4k3/8/8/1R6/4K3 w - - 0 1").unwrap();
    let b = Position::from_fen("k7/8/8/8/6R1/8/8/7K b - - 0 1").unwrap();
    let c = Position::from_fen("8/8/8/4k3/8/8/1r6/4K3 w - - 0 1").unwrap();
    assert_eq!(a.material_key(), b.material_key());
    assert_ne!(a.material_key(), c.material_key());
}

#[test]
fn test_checkers_and_attacks() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").unwrap();
    assert_eq!(pos.checkers(), Bitboard::from_square(E1));
    assert!(pos.in_check(Color::Black));
    assert!(!pos.in_check(Color::White));
    assert!(pos.is_square_attacked(E7, Color::White));
    assert!(!pos.is_square_attacked(D7, Color::White));

    // Blockers are included, squares behind them are not.
    let rook = pos.attacks_from(PieceKind::Rook, E1);
    assert!(rook.contains(E8));
    assert!(rook.contains(F1));
    assert!(!rook.contains(G1));
}

#[test]
fn test_pawn_passed() {
    let pos = Position::from_fen("4k3/8/2p5/8/1P1P4/8/8/4K3 w - - 0 1").unwrap();
    assert!(!pos.pawn_passed(Color::White, B4));
    assert!(!pos.pawn_passed(Color::White, D4));
    assert!(!pos.pawn_passed(Color::Black, C6));

    let pos = Position::from_fen("4k3/8/8/p7/8/8/7P/4K3 w - - 0 1").unwrap();
    assert!(pos.pawn_passed(Color::White, H2));
    assert!(pos.pawn_passed(Color::Black, A5));
}

#[test]
fn test_bishop_pair() {
    let pair = Position::from_fen("4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1").unwrap();
    assert!(pair.bishop_pair(Color::White));
    let same_color = Position::from_fen("4k3/8/8/8/8/8/8/B1B1K3 w - - 0 1").unwrap();
    assert!(!same_color.bishop_pair(Color::White));
}

#[test]
fn test_make_unmake_restores_position() {
    let start = Position::from_fen("r3k2r/8/8/8/8/8/4P3/R3K2R w KQkq - 0 1").unwrap();
    let mut pos = start.clone();

    let mut castle = Move::new(E1, G1);
    castle.is_castle = true;
    let undo = pos.make_move(castle);
    assert_eq!(pos.piece_at(F1).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(!pos.castling.wk && !pos.castling.wq);
    pos.unmake_move(castle, undo);
    assert_eq!(pos, start);

    let push = Move::new(E2, E4);
    let undo = pos.make_move(push);
    assert_eq!(pos.en_passant, Some(E3));
    pos.unmake_move(push, undo);
    assert_eq!(pos, start);
}

#[test]
fn test_promotion_round_trip() {
    let start = Position::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let mut pos = start.clone();
    let mut promo = Move::new(A7, A8);
    promo.promo = Some(PieceKind::Knight);
    let undo = pos.make_move(promo);
    assert_eq!(pos.count(Color::White, PieceKind::Knight), 1);
    assert_eq!(pos.count(Color::White, PieceKind::Pawn), 0);
    pos.unmake_move(promo, undo);
    assert_eq!(pos, start);
}
