//! Endgames scored outright.
//!
//! Each function takes the side expected to be winning and returns a score
//! from the side to move's point of view.

use chess_core::{
    distance, file_of, legal_move_count, make_square, opposite_colors, rank_of, relative_rank,
    relative_square, Bitboard, Color, PieceKind, Position, Value, BISHOP_VALUE_MG,
    KNIGHT_VALUE_MG, PAWN_VALUE_EG, QUEEN_VALUE_EG, QUEEN_VALUE_MG, RANK_1, RANK_3, RANK_4,
    RANK_7, ROOK_VALUE_EG, ROOK_VALUE_MG, VALUE_DRAW, VALUE_KNOWN_WIN, VALUE_ZERO,
};

use crate::bitbase::probe_kpk;
use crate::endgame::{from_mover, verify_material};
use crate::normalize::{flip, normalize};
use crate::tables::{push_away, push_close, push_to_corners, push_to_edges};

/// King and enough material to mate against a bare king. Rewards driving the
/// loser to the edge and closing the king distance.
pub fn kxk(pos: &Position, strong: Color) -> Value {
    let weak = strong.other();
    debug_assert!(verify_material(pos, weak, VALUE_ZERO, 0));
    debug_assert!(pos.checkers().is_empty());

    // Stalemate with a lone king
    if pos.side_to_move == weak && legal_move_count(pos) == 0 {
        return VALUE_DRAW;
    }

    let winner = pos.king_square(strong);
    let loser = pos.king_square(weak);

    let mut result = pos.non_pawn_material(strong)
        + pos.count(strong, PieceKind::Pawn) as Value * PAWN_VALUE_EG
        + push_to_edges(loser)
        + push_close(distance(winner, loser));

    if pos.count(strong, PieceKind::Queen) > 0
        || pos.count(strong, PieceKind::Rook) > 0
        || (pos.count(strong, PieceKind::Bishop) > 0 && pos.count(strong, PieceKind::Knight) > 0)
        || pos.bishop_pair(strong)
    {
        result += VALUE_KNOWN_WIN;
    }

    from_mover(pos, strong, result)
}

/// Bishop and knight: the bare king has to go to a corner the bishop controls.
pub fn kbnk(pos: &Position, strong: Color) -> Value {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, KNIGHT_VALUE_MG + BISHOP_VALUE_MG, 0));
    debug_assert!(verify_material(pos, weak, VALUE_ZERO, 0));

    let mut winner = pos.king_square(strong);
    let mut loser = pos.king_square(weak);
    let bishop = pos.square(strong, PieceKind::Bishop);

    // The corner table points at a1/h8; a light-squared bishop needs a8/h1.
    if opposite_colors(bishop, 0) {
        winner = flip(winner);
        loser = flip(loser);
    }

    let result = VALUE_KNOWN_WIN + push_close(distance(winner, loser)) + push_to_corners(loser);

    from_mover(pos, strong, result)
}

/// King and pawn against king, decided by the bitbase.
pub fn kpk(pos: &Position, strong: Color) -> Value {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, VALUE_ZERO, 1));
    debug_assert!(verify_material(pos, weak, VALUE_ZERO, 0));

    let wksq = normalize(pos, strong, pos.king_square(strong));
    let bksq = normalize(pos, strong, pos.king_square(weak));
    let psq = normalize(pos, strong, pos.square(strong, PieceKind::Pawn));

    let us = if pos.side_to_move == strong { Color::White } else { Color::Black };

    if !probe_kpk(wksq, psq, bksq, us) {
        return VALUE_DRAW;
    }

    let result = VALUE_KNOWN_WIN + PAWN_VALUE_EG + rank_of(psq) as Value;

    from_mover(pos, strong, result)
}

/// Rook against pawn. Drawish when the pawn is far advanced with its king
/// next to it and the attacking king is far away.
pub fn krkp(pos: &Position, strong: Color) -> Value {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, ROOK_VALUE_MG, 0));
    debug_assert!(verify_material(pos, weak, VALUE_ZERO, 1));

    let wksq = relative_square(strong, pos.king_square(strong));
    let bksq = relative_square(strong, pos.king_square(weak));
    let rsq = relative_square(strong, pos.square(strong, PieceKind::Rook));
    let psq = relative_square(strong, pos.square(weak, PieceKind::Pawn));

    let queening = make_square(file_of(psq), RANK_1);
    let weak_to_move = (pos.side_to_move == weak) as i32;
    let strong_to_move = (pos.side_to_move == strong) as i32;

    let result = if wksq < psq && file_of(wksq) == file_of(psq) {
        // Strong king in front of the pawn
        ROOK_VALUE_EG - distance(wksq, psq)
    } else if distance(bksq, psq) >= 3 + weak_to_move && distance(bksq, rsq) >= 3 {
        // Weak king too far from both pawn and rook
        ROOK_VALUE_EG - distance(wksq, psq)
    } else if rank_of(bksq) <= RANK_3
        && distance(bksq, psq) == 1
        && rank_of(wksq) >= RANK_4
        && distance(wksq, psq) > 2 + strong_to_move
    {
        80 - 8 * distance(wksq, psq)
    } else {
        let stop = psq - 8;
        200 - 8 * (distance(wksq, stop) - distance(bksq, stop) - distance(psq, queening))
    };

    from_mover(pos, strong, result)
}

/// Rook against bishop: drawish, slightly better with the king on the edge.
pub fn krkb(pos: &Position, strong: Color) -> Value {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, ROOK_VALUE_MG, 0));
    debug_assert!(verify_material(pos, weak, BISHOP_VALUE_MG, 0));

    let result = push_to_edges(pos.king_square(weak));
    from_mover(pos, strong, result)
}

/// Rook against knight: as KRKB, plus a bonus for separating king and knight.
pub fn krkn(pos: &Position, strong: Color) -> Value {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, ROOK_VALUE_MG, 0));
    debug_assert!(verify_material(pos, weak, KNIGHT_VALUE_MG, 0));

    let bksq = pos.king_square(weak);
    let nsq = pos.square(weak, PieceKind::Knight);
    let result = push_to_edges(bksq) + push_away(distance(bksq, nsq));
    from_mover(pos, strong, result)
}

/// Queen against pawn. Won, except that a pawn on its seventh rank on the a,
/// c, f or h file with its king next to it can hold.
pub fn kqkp(pos: &Position, strong: Color) -> Value {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, QUEEN_VALUE_MG, 0));
    debug_assert!(verify_material(pos, weak, VALUE_ZERO, 1));

    let winner = pos.king_square(strong);
    let loser = pos.king_square(weak);
    let psq = pos.square(weak, PieceKind::Pawn);

    let mut result = push_close(distance(winner, loser));

    let drawish_files = Bitboard::FILE_A | Bitboard::FILE_C | Bitboard::FILE_F | Bitboard::FILE_H;
    if relative_rank(weak, psq) != RANK_7
        || distance(loser, psq) != 1
        || !drawish_files.contains(psq)
    {
        result += QUEEN_VALUE_EG - PAWN_VALUE_EG;
    }

    from_mover(pos, strong, result)
}

/// Queen against rook: push the king to the edge and close in.
pub fn kqkr(pos: &Position, strong: Color) -> Value {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, QUEEN_VALUE_MG, 0));
    debug_assert!(verify_material(pos, weak, ROOK_VALUE_MG, 0));

    let winner = pos.king_square(strong);
    let loser = pos.king_square(weak);

    let result = QUEEN_VALUE_EG - ROOK_VALUE_EG
        + push_to_edges(loser)
        + push_close(distance(winner, loser));

    from_mover(pos, strong, result)
}

/// Two knights cannot force mate.
pub fn knnk(_pos: &Position, _strong: Color) -> Value {
    VALUE_DRAW
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod value_tests;
