//! Endgames that scale the ordinary evaluation.
//!
//! These recognize drawish patterns inside material balances that usually
//! favour the strong side. A rule that fires returns a factor in
//! `DRAW..=MAX`; when none fires the result is [`ScaleFactor::NONE`].

use chess_core::{
    backmost_sq, distance, file_bb, file_distance, file_of, forward_bb, in_front_bb, make_square,
    opposite_colors, pawn_push, pseudo_attacks, rank_distance, rank_of, relative_rank,
    relative_square, shift, Bitboard, Color, PieceKind, Position, BISHOP_VALUE_MG, FILE_A,
    FILE_B, FILE_D, FILE_G, FILE_H, KNIGHT_VALUE_MG, QUEEN_VALUE_MG, RANK_1, RANK_2, RANK_3,
    RANK_4, RANK_5, RANK_6, RANK_7, RANK_8, ROOK_VALUE_MG, VALUE_ZERO,
};

use crate::bitbase::probe_kpk;
use crate::endgame::{verify_material, ScaleFactor};
use crate::normalize::normalize;

use chess_core::squares::{A7, A8, G7, H5, H7};

/// Bishop and pawns. Draws with rook pawns and the wrong bishop, and with
/// b/g-file pawns blocked on the seventh rank. The weak side's material is
/// not checked so the pattern is caught even when it still has pawns.
pub fn kbpsk(pos: &Position, strong: Color) -> ScaleFactor {
    let weak = strong.other();
    debug_assert_eq!(pos.non_pawn_material(strong), BISHOP_VALUE_MG);
    debug_assert!(pos.count(strong, PieceKind::Pawn) >= 1);

    let pawns = pos.pieces(strong, PieceKind::Pawn);
    let pawn_file = file_of(pos.square(strong, PieceKind::Pawn));

    // All pawns on one rook file
    if (pawn_file == FILE_A || pawn_file == FILE_H) && (pawns & !file_bb(pawn_file)).is_empty() {
        let bishop = pos.square(strong, PieceKind::Bishop);
        let queening = relative_square(strong, make_square(pawn_file, RANK_8));
        let ksq = pos.king_square(weak);

        if opposite_colors(queening, bishop) && distance(queening, ksq) <= 1 {
            return ScaleFactor::DRAW;
        }
    }

    // All pawns of both sides on the same b or g file
    if (pawn_file == FILE_B || pawn_file == FILE_G)
        && (pos.pieces_kind(PieceKind::Pawn) & !file_bb(pawn_file)).is_empty()
        && pos.non_pawn_material(weak) == VALUE_ZERO
        && pos.count(weak, PieceKind::Pawn) >= 1
    {
        let Some(weak_pawn) = backmost_sq(weak, pos.pieces(weak, PieceKind::Pawn)) else {
            return ScaleFactor::NONE;
        };

        let strong_king = pos.king_square(strong);
        let weak_king = pos.king_square(weak);
        let bishop = pos.square(strong, PieceKind::Bishop);

        // Our pawn is blocked on the seventh rank, and either the bishop
        // cannot attack the blocker or only one pawn is left.
        if relative_rank(strong, weak_pawn) == RANK_7
            && pos.pieces(strong, PieceKind::Pawn).contains(shift(weak_pawn, pawn_push(weak)))
            && (opposite_colors(bishop, weak_pawn) || pos.count(strong, PieceKind::Pawn) == 1)
        {
            let strong_king_dist = distance(weak_pawn, strong_king);
            let weak_king_dist = distance(weak_pawn, weak_king);

            if relative_rank(strong, weak_king) >= RANK_7
                && weak_king_dist <= 2
                && weak_king_dist <= strong_king_dist
            {
                return ScaleFactor::DRAW;
            }
        }
    }

    ScaleFactor::NONE
}

/// Queen against rook and pawns: the rook on the third rank guarded by a pawn
/// next to its king is a fortress.
pub fn kqkrps(pos: &Position, strong: Color) -> ScaleFactor {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, QUEEN_VALUE_MG, 0));
    debug_assert_eq!(pos.count(weak, PieceKind::Rook), 1);
    debug_assert!(pos.count(weak, PieceKind::Pawn) >= 1);

    let ksq = pos.king_square(weak);
    let rsq = pos.square(weak, PieceKind::Rook);

    if relative_rank(weak, ksq) <= RANK_2
        && relative_rank(weak, pos.king_square(strong)) >= RANK_4
        && relative_rank(weak, rsq) == RANK_3
        && !(pos.pieces(weak, PieceKind::Pawn)
            & pos.attacks_from(PieceKind::King, ksq)
            & pos.pawn_attacks_from(strong, rsq))
            .is_empty()
    {
        return ScaleFactor::DRAW;
    }

    ScaleFactor::NONE
}

/// Rook and pawn against rook. Knows the main drawing setups (third-rank
/// defence, checks from behind, the a7/a8 trap, a blockading king) and the
/// main winning one, a pawn supported by its rook from behind.
pub fn krpkr(pos: &Position, strong: Color) -> ScaleFactor {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, ROOK_VALUE_MG, 1));
    debug_assert!(verify_material(pos, weak, ROOK_VALUE_MG, 0));

    let wksq = normalize(pos, strong, pos.king_square(strong));
    let bksq = normalize(pos, strong, pos.king_square(weak));
    let wrsq = normalize(pos, strong, pos.square(strong, PieceKind::Rook));
    let wpsq = normalize(pos, strong, pos.square(strong, PieceKind::Pawn));
    let brsq = normalize(pos, strong, pos.square(weak, PieceKind::Rook));

    let file = file_of(wpsq);
    let rank = rank_of(wpsq);
    let queening = make_square(file, RANK_8);
    let tempo = (pos.side_to_move == strong) as i32;

    // Third-rank defence with the king on the queening square
    if rank <= RANK_5
        && distance(bksq, queening) <= 1
        && wksq <= H5
        && (rank_of(brsq) == RANK_6 || (rank <= RANK_3 && rank_of(wrsq) != RANK_6))
    {
        return ScaleFactor::DRAW;
    }

    // Checks from behind once the pawn reaches the sixth
    if rank == RANK_6
        && distance(bksq, queening) <= 1
        && rank_of(wksq) as i32 + tempo <= RANK_6 as i32
        && (rank_of(brsq) == RANK_1 || (tempo == 0 && file_distance(brsq, wpsq) >= 3))
    {
        return ScaleFactor::DRAW;
    }

    if rank >= RANK_6
        && bksq == queening
        && rank_of(brsq) == RANK_1
        && (tempo == 0 || distance(wksq, wpsq) >= 2)
    {
        return ScaleFactor::DRAW;
    }

    // Pawn a7, rook a8, king g7/h7 and the defending rook behind the pawn
    if wpsq == A7
        && wrsq == A8
        && (bksq == H7 || bksq == G7)
        && file_of(brsq) == FILE_A
        && (rank_of(brsq) <= RANK_3 || file_of(wksq) >= FILE_D || rank_of(wksq) <= RANK_5)
    {
        return ScaleFactor::DRAW;
    }

    // Defending king blocks the pawn and the attacking king is too far away
    if rank <= RANK_5
        && bksq == wpsq + 8
        && distance(wksq, wpsq) - tempo >= 2
        && distance(wksq, brsq) - tempo >= 2
    {
        return ScaleFactor::DRAW;
    }

    // Seventh-rank pawn supported from behind; the attacking king is closer to
    // the queening square and cannot be gained tempo on via the rook.
    if rank == RANK_7
        && file != FILE_A
        && file_of(wrsq) == file
        && wrsq != queening
        && distance(wksq, queening) < distance(bksq, queening) - 2 + tempo
        && distance(wksq, queening) < distance(bksq, wrsq) + tempo
    {
        return ScaleFactor::new(ScaleFactor::MAX.get() as i32 - 2 * distance(wksq, queening));
    }

    // Same, with the pawn further back
    let stop = wpsq + 8;
    if file != FILE_A
        && file_of(wrsq) == file
        && wrsq < wpsq
        && distance(wksq, queening) < distance(bksq, queening) - 2 + tempo
        && distance(wksq, stop) < distance(bksq, stop) - 2 + tempo
        && (distance(bksq, wrsq) + tempo >= 3
            || (distance(wksq, queening) < distance(bksq, wrsq) + tempo
                && distance(wksq, stop) < distance(bksq, wrsq) + tempo))
    {
        return ScaleFactor::new(
            ScaleFactor::MAX.get() as i32
                - 8 * distance(wpsq, queening)
                - 2 * distance(wksq, queening),
        );
    }

    // Defending king somewhere in the path of a pawn that is not far advanced
    if rank <= RANK_4 && bksq > wpsq {
        if file_of(bksq) == file_of(wpsq) {
            return ScaleFactor::new(10);
        }
        if file_distance(bksq, wpsq) == 1 && distance(wksq, bksq) > 2 {
            return ScaleFactor::new(24 - 2 * distance(wksq, bksq));
        }
    }

    ScaleFactor::NONE
}

/// Rook and rook pawn against bishop: fortress chances when the pawn stands
/// on the bishop's colour or the bishop controls the promotion path.
pub fn krpkb(pos: &Position, strong: Color) -> ScaleFactor {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, ROOK_VALUE_MG, 1));
    debug_assert!(verify_material(pos, weak, BISHOP_VALUE_MG, 0));

    if (pos.pieces_kind(PieceKind::Pawn) & (Bitboard::FILE_A | Bitboard::FILE_H)).is_empty() {
        return ScaleFactor::NONE;
    }

    let ksq = pos.king_square(weak);
    let bsq = pos.square(weak, PieceKind::Bishop);
    let psq = pos.square(strong, PieceKind::Pawn);
    let rank = relative_rank(strong, psq);
    let push = pawn_push(strong);

    // Fifth-rank pawn on the bishop's colour: a moderate reduction, or a
    // strong one when the defending king is near the corner without being
    // trapped there.
    if rank == RANK_5 && !opposite_colors(bsq, psq) {
        let king_dist = distance(shift(psq, 3 * push), ksq);

        let behind_strong_king =
            ksq as i32 == pos.king_square(strong) as i32 + 2 * push as i32;

        if king_dist <= 2 && !(king_dist == 0 && behind_strong_king) {
            return ScaleFactor::new(24);
        }
        return ScaleFactor::new(48);
    }

    // Sixth-rank pawn with the bishop eyeing the stop square from a distance
    if rank == RANK_6
        && distance(shift(psq, 2 * push), ksq) <= 1
        && pseudo_attacks(PieceKind::Bishop, bsq).contains(shift(psq, push))
        && file_distance(bsq, psq) >= 2
    {
        return ScaleFactor::new(8);
    }

    ScaleFactor::NONE
}

/// Two rooks' pawns against one: drawish when no pawn is passed and the
/// defending king stands active in front of them.
pub fn krppkrp(pos: &Position, strong: Color) -> ScaleFactor {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, ROOK_VALUE_MG, 2));
    debug_assert!(verify_material(pos, weak, ROOK_VALUE_MG, 1));

    let pawns = pos.pieces(strong, PieceKind::Pawn);
    let (Some(wpsq1), Some(wpsq2)) = (pawns.lsb(), pawns.msb()) else {
        return ScaleFactor::NONE;
    };
    let bksq = pos.king_square(weak);

    if pos.pawn_passed(strong, wpsq1) || pos.pawn_passed(strong, wpsq2) {
        return ScaleFactor::NONE;
    }

    let rank = relative_rank(strong, wpsq1).max(relative_rank(strong, wpsq2));

    if file_distance(bksq, wpsq1) <= 1
        && file_distance(bksq, wpsq2) <= 1
        && relative_rank(strong, bksq) > rank
    {
        return match rank {
            RANK_2 | RANK_3 => ScaleFactor::new(10),
            RANK_4 => ScaleFactor::new(15),
            RANK_5 => ScaleFactor::new(20),
            RANK_6 => ScaleFactor::new(40),
            _ => {
                debug_assert!(false, "unblocked pawn on relative rank {rank}");
                ScaleFactor::NONE
            }
        };
    }

    ScaleFactor::NONE
}

/// Pawns against a bare king: all on one rook file with the king in front of
/// them holds the draw.
pub fn kpsk(pos: &Position, strong: Color) -> ScaleFactor {
    let weak = strong.other();
    debug_assert_eq!(pos.non_pawn_material(strong), VALUE_ZERO);
    debug_assert!(pos.count(strong, PieceKind::Pawn) >= 2);
    debug_assert!(verify_material(pos, weak, VALUE_ZERO, 0));

    let ksq = pos.king_square(weak);
    let pawns = pos.pieces(strong, PieceKind::Pawn);
    let psq = pos.square(strong, PieceKind::Pawn);

    if (pawns & !in_front_bb(weak, rank_of(ksq))).is_empty()
        && ((pawns & !Bitboard::FILE_A).is_empty() || (pawns & !Bitboard::FILE_H).is_empty())
        && file_distance(ksq, psq) <= 1
    {
        return ScaleFactor::DRAW;
    }

    ScaleFactor::NONE
}

/// Defending king on the pawn's file, in front of it, where the bishop cannot
/// drive it away.
fn king_blocks_pawn(pos: &Position, strong: Color, psq: u8, bishop: u8) -> bool {
    let weak_king = pos.king_square(strong.other());

    file_of(weak_king) == file_of(psq)
        && relative_rank(strong, psq) < relative_rank(strong, weak_king)
        && (opposite_colors(weak_king, bishop) || relative_rank(strong, weak_king) <= RANK_6)
}

/// Bishop and pawn against bishop: a blockading king, or opposite-coloured
/// bishops in most configurations, draws.
pub fn kbpkb(pos: &Position, strong: Color) -> ScaleFactor {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, BISHOP_VALUE_MG, 1));
    debug_assert!(verify_material(pos, weak, BISHOP_VALUE_MG, 0));

    let psq = pos.square(strong, PieceKind::Pawn);
    let strong_bishop = pos.square(strong, PieceKind::Bishop);
    let weak_bishop = pos.square(weak, PieceKind::Bishop);

    if king_blocks_pawn(pos, strong, psq, strong_bishop) {
        return ScaleFactor::DRAW;
    }

    if opposite_colors(strong_bishop, weak_bishop) {
        // Drawn when the pawn is not past the fifth, the defending king
        // stands in its path, or the defending bishop covers the path from
        // a distance.
        if relative_rank(strong, psq) <= RANK_5 {
            return ScaleFactor::DRAW;
        }

        let path = forward_bb(strong, psq);

        if !(path & pos.pieces(weak, PieceKind::King)).is_empty() {
            return ScaleFactor::DRAW;
        }

        if !(pos.attacks_from(PieceKind::Bishop, weak_bishop) & path).is_empty()
            && distance(weak_bishop, psq) >= 3
        {
            return ScaleFactor::DRAW;
        }
    }

    ScaleFactor::NONE
}

/// Two pawns and bishop against bishop, opposite colours only: blockades on
/// the same or adjacent files.
pub fn kbppkb(pos: &Position, strong: Color) -> ScaleFactor {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, BISHOP_VALUE_MG, 2));
    debug_assert!(verify_material(pos, weak, BISHOP_VALUE_MG, 0));

    let wbsq = pos.square(strong, PieceKind::Bishop);
    let bbsq = pos.square(weak, PieceKind::Bishop);

    if !opposite_colors(wbsq, bbsq) {
        return ScaleFactor::NONE;
    }

    let ksq = pos.king_square(weak);
    let pawns = pos.pieces(strong, PieceKind::Pawn);
    let (Some(psq1), Some(psq2)) = (pawns.lsb(), pawns.msb()) else {
        return ScaleFactor::NONE;
    };

    // block1 is in front of the leading pawn, block2 beside it on the other
    // pawn's file.
    let (block1, block2) = if relative_rank(strong, psq1) > relative_rank(strong, psq2) {
        (shift(psq1, pawn_push(strong)), make_square(file_of(psq2), rank_of(psq1)))
    } else {
        (shift(psq2, pawn_push(strong)), make_square(file_of(psq1), rank_of(psq2)))
    };

    let weak_bishops = pos.pieces(weak, PieceKind::Bishop);

    match file_distance(psq1, psq2) {
        0 => {
            // Same file: the king firmly holds a square in front.
            if file_of(ksq) == file_of(block1)
                && relative_rank(strong, ksq) >= relative_rank(strong, block1)
                && opposite_colors(ksq, wbsq)
            {
                return ScaleFactor::DRAW;
            }
            ScaleFactor::NONE
        }
        1 => {
            // Adjacent files: the king holds one blocking square and the
            // bishop the other.
            if ksq == block1
                && opposite_colors(ksq, wbsq)
                && (bbsq == block2
                    || !(pos.attacks_from(PieceKind::Bishop, block2) & weak_bishops).is_empty()
                    || rank_distance(psq1, psq2) >= 2)
            {
                ScaleFactor::DRAW
            } else if ksq == block2
                && opposite_colors(ksq, wbsq)
                && (bbsq == block1
                    || !(pos.attacks_from(PieceKind::Bishop, block1) & weak_bishops).is_empty())
            {
                ScaleFactor::DRAW
            } else {
                ScaleFactor::NONE
            }
        }
        _ => ScaleFactor::NONE,
    }
}

/// Bishop and pawn against knight: only the blockading-king draw.
pub fn kbpkn(pos: &Position, strong: Color) -> ScaleFactor {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, BISHOP_VALUE_MG, 1));
    debug_assert!(verify_material(pos, weak, KNIGHT_VALUE_MG, 0));

    let psq = pos.square(strong, PieceKind::Pawn);
    let bishop = pos.square(strong, PieceKind::Bishop);

    if king_blocks_pawn(pos, strong, psq, bishop) {
        return ScaleFactor::DRAW;
    }

    ScaleFactor::NONE
}

/// Knight and pawn against king: a rook pawn on the seventh with the king
/// in the corner cannot advance.
pub fn knpk(pos: &Position, strong: Color) -> ScaleFactor {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, KNIGHT_VALUE_MG, 1));
    debug_assert!(verify_material(pos, weak, VALUE_ZERO, 0));

    let psq = normalize(pos, strong, pos.square(strong, PieceKind::Pawn));
    let weak_king = normalize(pos, strong, pos.king_square(weak));

    if psq == A7 && distance(A8, weak_king) <= 1 {
        return ScaleFactor::DRAW;
    }

    ScaleFactor::NONE
}

/// Knight and pawn against bishop: if the bishop controls the pawn's path the
/// knight has to block, which a nearby king prevents.
pub fn knpkb(pos: &Position, strong: Color) -> ScaleFactor {
    let weak = strong.other();
    let psq = pos.square(strong, PieceKind::Pawn);
    let bsq = pos.square(weak, PieceKind::Bishop);
    let weak_king = pos.king_square(weak);

    if !(forward_bb(strong, psq) & pos.attacks_from(PieceKind::Bishop, bsq)).is_empty() {
        return ScaleFactor::new(distance(weak_king, psq));
    }

    ScaleFactor::NONE
}

/// Pawn against pawn: probe KPK without the weak pawn. A draw there is taken
/// as at least a draw here, except for an advanced non-rook pawn.
pub fn kpkp(pos: &Position, strong: Color) -> ScaleFactor {
    let weak = strong.other();
    debug_assert!(verify_material(pos, strong, VALUE_ZERO, 1));
    debug_assert!(verify_material(pos, weak, VALUE_ZERO, 1));

    let wksq = normalize(pos, strong, pos.king_square(strong));
    let bksq = normalize(pos, strong, pos.king_square(weak));
    let psq = normalize(pos, strong, pos.square(strong, PieceKind::Pawn));

    let us = if pos.side_to_move == strong { Color::White } else { Color::Black };

    if rank_of(psq) >= RANK_5 && file_of(psq) != FILE_A {
        return ScaleFactor::NONE;
    }

    if probe_kpk(wksq, psq, bksq, us) {
        ScaleFactor::NONE
    } else {
        ScaleFactor::DRAW
    }
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod scale_tests;
