//! Endgame selection from a position's material.
//!
//! The registry only knows exact material signatures. Some rules apply to a
//! whole family of balances (any mating material against a bare king, any
//! number of pawns against a bare king, ...); those are matched here by
//! counting pieces, in the order a caller should try them.

use chess_core::{
    Color, PieceKind, Position, Value, BISHOP_VALUE_MG, QUEEN_VALUE_MG, ROOK_VALUE_MG, VALUE_ZERO,
};

use crate::endgame::{Endgame, ScaleFactor, ScaleKind, ValueKind};
use crate::registry::Endgames;

static KXK: [Endgame<ValueKind>; 2] =
    [Endgame::new(ValueKind::KXK, Color::White), Endgame::new(ValueKind::KXK, Color::Black)];
static KBPSK: [Endgame<ScaleKind>; 2] =
    [Endgame::new(ScaleKind::KBPsK, Color::White), Endgame::new(ScaleKind::KBPsK, Color::Black)];
static KQKRPS: [Endgame<ScaleKind>; 2] =
    [Endgame::new(ScaleKind::KQKRPs, Color::White), Endgame::new(ScaleKind::KQKRPs, Color::Black)];
static KPSK: [Endgame<ScaleKind>; 2] =
    [Endgame::new(ScaleKind::KPsK, Color::White), Endgame::new(ScaleKind::KPsK, Color::Black)];
static KPKP: [Endgame<ScaleKind>; 2] =
    [Endgame::new(ScaleKind::KPKP, Color::White), Endgame::new(ScaleKind::KPKP, Color::Black)];

/// Evaluators that apply to one position. `scale` is indexed by the color
/// whose winning chances get scaled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndgameProbe<'a> {
    pub value: Option<&'a Endgame<ValueKind>>,
    pub scale: [Option<&'a Endgame<ScaleKind>>; 2],
}

impl EndgameProbe<'_> {
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.scale.iter().all(Option::is_none)
    }

    /// Score from the side to move's point of view, if a value endgame applies.
    pub fn evaluate(&self, pos: &Position) -> Option<Value> {
        self.value.map(|eg| eg.evaluate(pos))
    }

    /// Scale factor for `color`'s winning chances. `None` when no evaluator
    /// applies or the evaluator had no opinion.
    pub fn scale_factor(&self, pos: &Position, color: Color) -> Option<ScaleFactor> {
        self.scale[color.idx()]
            .map(|eg| eg.scale(pos))
            .filter(|sf| !sf.is_none())
    }
}

fn is_kxk(pos: &Position, us: Color) -> bool {
    let them = us.other();
    pos.count(them, PieceKind::Pawn) == 0
        && pos.non_pawn_material(them) == VALUE_ZERO
        && pos.non_pawn_material(us) >= ROOK_VALUE_MG
}

fn is_kbpsks(pos: &Position, us: Color) -> bool {
    pos.non_pawn_material(us) == BISHOP_VALUE_MG
        && pos.count(us, PieceKind::Bishop) == 1
        && pos.count(us, PieceKind::Pawn) >= 1
}

fn is_kqkrps(pos: &Position, us: Color) -> bool {
    let them = us.other();
    pos.count(us, PieceKind::Pawn) == 0
        && pos.non_pawn_material(us) == QUEEN_VALUE_MG
        && pos.count(us, PieceKind::Queen) == 1
        && pos.count(them, PieceKind::Rook) == 1
        && pos.count(them, PieceKind::Pawn) >= 1
}

impl Endgames {
    /// Evaluators that apply to `pos`. A value endgame, exact or generic,
    /// ends the search; otherwise an exact scale entry does; otherwise the
    /// generic scale rules are tried for each side.
    pub fn probe(&self, pos: &Position) -> EndgameProbe<'_> {
        let key = pos.material_key();
        let mut probe = EndgameProbe::default();

        probe.value = self.probe_value(key).or_else(|| {
            Color::ALL
                .into_iter()
                .find(|&c| is_kxk(pos, c))
                .map(|c| &KXK[c.idx()])
        });
        if probe.value.is_some() {
            return probe;
        }

        if let Some(eg) = self.probe_scale(key) {
            probe.scale[eg.strong_side().idx()] = Some(eg);
            return probe;
        }

        for c in Color::ALL {
            if is_kbpsks(pos, c) {
                probe.scale[c.idx()] = Some(&KBPSK[c.idx()]);
            } else if is_kqkrps(pos, c) {
                probe.scale[c.idx()] = Some(&KQKRPS[c.idx()]);
            }
        }

        let npm = pos.non_pawn_material(Color::White) + pos.non_pawn_material(Color::Black);
        if npm == VALUE_ZERO && !pos.pieces_kind(PieceKind::Pawn).is_empty() {
            let white = pos.count(Color::White, PieceKind::Pawn);
            let black = pos.count(Color::Black, PieceKind::Pawn);

            // A single pawn against a bare king is KPK, found above.
            if black == 0 && white >= 2 {
                probe.scale[Color::White.idx()] = Some(&KPSK[Color::White.idx()]);
            } else if white == 0 && black >= 2 {
                probe.scale[Color::Black.idx()] = Some(&KPSK[Color::Black.idx()]);
            } else if white == 1 && black == 1 {
                probe.scale = [Some(&KPKP[0]), Some(&KPKP[1])];
            }
        }

        probe
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod material_tests;
