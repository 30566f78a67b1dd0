//! Legal move generation.
//!
//! Pseudo-legal moves come from the attack tables; legality is settled by
//! playing each move and asking whether the mover's king is left in check.

use crate::attacks::{attacks_bb, pawn_attacks};
use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::types::*;

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Number of legal moves for the side to move.
pub fn legal_move_count(pos: &Position) -> usize {
    legal_moves(pos).len()
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    let own = pos.pieces_of(us);
    let enemy = pos.pieces_of(us.other());
    let occupied = pos.occupied();

    for from in pos.pieces(us, PieceKind::Pawn) {
        gen_pawn(pos, from, us, enemy, out);
    }

    for kind in [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ] {
        for from in pos.pieces(us, kind) {
            for to in attacks_bb(kind, from, occupied) & !own {
                out.push(Move::new(from, to));
            }
        }
    }

    gen_castle(pos, us, out);
}

fn push_pawn_move(from: u8, to: u8, c: Color, out: &mut Vec<Move>) {
    if relative_rank(c, to) == RANK_8 {
        for pk in PROMOTIONS {
            let mut mv = Move::new(from, to);
            mv.promo = Some(pk);
            out.push(mv);
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, enemy: Bitboard, out: &mut Vec<Move>) {
    // Pawns parked on their own back rank (possible in hand-made FENs) do not move.
    if relative_rank(c, from) == RANK_1 || relative_rank(c, from) == RANK_8 {
        return;
    }

    let one = shift(from, pawn_push(c));
    if pos.piece_at(one).is_none() {
        push_pawn_move(from, one, c, out);

        if relative_rank(c, from) == RANK_2 {
            let two = shift(one, pawn_push(c));
            if pos.piece_at(two).is_none() {
                out.push(Move::new(from, two));
            }
        }
    }

    let targets = pawn_attacks(from, c);
    for to in targets & enemy {
        push_pawn_move(from, to, c, out);
    }
    if let Some(ep) = pos.en_passant
        && targets.contains(ep)
    {
        let mut mv = Move::new(from, ep);
        mv.is_en_passant = true;
        out.push(mv);
    }
}

fn gen_castle(pos: &Position, c: Color, out: &mut Vec<Move>) {
    // (king_from, king_to, right, squares that must be empty, squares that must be safe)
    let options: [(u8, u8, bool, &[u8], &[u8]); 2] = match c {
        Color::White => [
            (4, 6, pos.castling.wk, &[5, 6], &[5, 6]),
            (4, 2, pos.castling.wq, &[1, 2, 3], &[2, 3]),
        ],
        Color::Black => [
            (60, 62, pos.castling.bk, &[61, 62], &[61, 62]),
            (60, 58, pos.castling.bq, &[57, 58, 59], &[58, 59]),
        ],
    };

    let enemy = c.other();
    for (king_from, king_to, right, empty, safe) in options {
        if !right
            || pos.piece_at(king_from)
                != Some(Piece {
                    color: c,
                    kind: PieceKind::King,
                })
        {
            continue;
        }
        if pos.in_check(c) {
            return;
        }
        if empty.iter().any(|&s| pos.piece_at(s).is_some())
            || safe.iter().any(|&s| pos.is_square_attacked(s, enemy))
        {
            continue;
        }
        let mut mv = Move::new(king_from, king_to);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
