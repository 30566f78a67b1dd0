//! Endgame entries and the evaluator kinds they dispatch to.

use std::fmt;

use chess_core::{Color, PieceKind, Position, Value};
use serde::Serialize;

use crate::{scale, value};

/// Multiplier applied to the endgame part of a score, out of
/// [`ScaleFactor::NORMAL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ScaleFactor(u8);

impl ScaleFactor {
    pub const DRAW: ScaleFactor = ScaleFactor(0);
    pub const NORMAL: ScaleFactor = ScaleFactor(64);
    pub const MAX: ScaleFactor = ScaleFactor(128);
    /// No opinion; the caller keeps whatever scale it would otherwise use.
    pub const NONE: ScaleFactor = ScaleFactor(255);

    /// Build a factor from a computed magnitude. Rules only produce values in
    /// `DRAW..=MAX`.
    #[inline]
    pub fn new(v: i32) -> ScaleFactor {
        debug_assert!((0..=Self::MAX.0 as i32).contains(&v), "scale factor {v} out of range");
        ScaleFactor(v.clamp(0, Self::MAX.0 as i32) as u8)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Shared surface of [`ValueKind`] and [`ScaleKind`], used by the registry to
/// map codes onto kinds.
pub trait EndgameKind: Copy + fmt::Debug + Send + Sync + 'static {
    /// Kinds that are registered by code. Generic kinds are reached only
    /// through material dispatch.
    const REGISTERED: &'static [Self];

    fn code(self) -> &'static str;

    fn from_code(code: &str) -> Option<Self> {
        Self::REGISTERED.iter().copied().find(|k| k.code() == code)
    }
}

/// Evaluators that return an exact score.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ValueKind {
    /// Mating material against a bare king.
    KXK,
    KBNK,
    KPK,
    KRKP,
    KRKB,
    KRKN,
    KQKP,
    KQKR,
    KNNK,
}

impl EndgameKind for ValueKind {
    const REGISTERED: &'static [ValueKind] = &[
        ValueKind::KPK,
        ValueKind::KNNK,
        ValueKind::KBNK,
        ValueKind::KRKP,
        ValueKind::KRKB,
        ValueKind::KRKN,
        ValueKind::KQKP,
        ValueKind::KQKR,
    ];

    fn code(self) -> &'static str {
        match self {
            ValueKind::KXK => "KXK",
            ValueKind::KBNK => "KBNK",
            ValueKind::KPK => "KPK",
            ValueKind::KRKP => "KRKP",
            ValueKind::KRKB => "KRKB",
            ValueKind::KRKN => "KRKN",
            ValueKind::KQKP => "KQKP",
            ValueKind::KQKR => "KQKR",
            ValueKind::KNNK => "KNNK",
        }
    }
}

/// Evaluators that return a scale factor for the ordinary evaluation.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ScaleKind {
    /// Bishop and pawns against anything without a second minor.
    KBPsK,
    /// Queen against rook and pawns.
    KQKRPs,
    KRPKR,
    KRPKB,
    KRPPKRP,
    /// Pawns against a bare king.
    KPsK,
    KBPKB,
    KBPPKB,
    KBPKN,
    KNPK,
    KNPKB,
    KPKP,
}

impl EndgameKind for ScaleKind {
    const REGISTERED: &'static [ScaleKind] = &[
        ScaleKind::KNPK,
        ScaleKind::KNPKB,
        ScaleKind::KRPKR,
        ScaleKind::KRPKB,
        ScaleKind::KBPKB,
        ScaleKind::KBPKN,
        ScaleKind::KBPPKB,
        ScaleKind::KRPPKRP,
    ];

    fn code(self) -> &'static str {
        match self {
            ScaleKind::KBPsK => "KBPsK",
            ScaleKind::KQKRPs => "KQKRPs",
            ScaleKind::KRPKR => "KRPKR",
            ScaleKind::KRPKB => "KRPKB",
            ScaleKind::KRPPKRP => "KRPPKRP",
            ScaleKind::KPsK => "KPsK",
            ScaleKind::KBPKB => "KBPKB",
            ScaleKind::KBPPKB => "KBPPKB",
            ScaleKind::KBPKN => "KBPKN",
            ScaleKind::KNPK => "KNPK",
            ScaleKind::KNPKB => "KNPKB",
            ScaleKind::KPKP => "KPKP",
        }
    }
}

/// One evaluator bound to the side that is expected to be winning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endgame<K> {
    kind: K,
    strong: Color,
}

impl<K: EndgameKind> Endgame<K> {
    pub const fn new(kind: K, strong: Color) -> Self {
        Endgame { kind, strong }
    }

    #[inline]
    pub fn kind(&self) -> K {
        self.kind
    }

    #[inline]
    pub fn strong_side(&self) -> Color {
        self.strong
    }

    #[inline]
    pub fn weak_side(&self) -> Color {
        self.strong.other()
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl Endgame<ValueKind> {
    /// Score of `pos` from the side to move's point of view.
    pub fn evaluate(&self, pos: &Position) -> Value {
        let strong = self.strong;
        match self.kind {
            ValueKind::KXK => value::kxk(pos, strong),
            ValueKind::KBNK => value::kbnk(pos, strong),
            ValueKind::KPK => value::kpk(pos, strong),
            ValueKind::KRKP => value::krkp(pos, strong),
            ValueKind::KRKB => value::krkb(pos, strong),
            ValueKind::KRKN => value::krkn(pos, strong),
            ValueKind::KQKP => value::kqkp(pos, strong),
            ValueKind::KQKR => value::kqkr(pos, strong),
            ValueKind::KNNK => value::knnk(pos, strong),
        }
    }
}

impl Endgame<ScaleKind> {
    /// Scale factor for the strong side's winning chances, or
    /// [`ScaleFactor::NONE`] when no rule applies.
    pub fn scale(&self, pos: &Position) -> ScaleFactor {
        let strong = self.strong;
        match self.kind {
            ScaleKind::KBPsK => scale::kbpsk(pos, strong),
            ScaleKind::KQKRPs => scale::kqkrps(pos, strong),
            ScaleKind::KRPKR => scale::krpkr(pos, strong),
            ScaleKind::KRPKB => scale::krpkb(pos, strong),
            ScaleKind::KRPPKRP => scale::krppkrp(pos, strong),
            ScaleKind::KPsK => scale::kpsk(pos, strong),
            ScaleKind::KBPKB => scale::kbpkb(pos, strong),
            ScaleKind::KBPPKB => scale::kbppkb(pos, strong),
            ScaleKind::KBPKN => scale::kbpkn(pos, strong),
            ScaleKind::KNPK => scale::knpk(pos, strong),
            ScaleKind::KNPKB => scale::knpkb(pos, strong),
            ScaleKind::KPKP => scale::kpkp(pos, strong),
        }
    }
}

/// `color` owns exactly `npm` of non-pawn material and `pawns` pawns.
pub fn verify_material(pos: &Position, color: Color, npm: Value, pawns: u32) -> bool {
    pos.non_pawn_material(color) == npm && pos.count(color, PieceKind::Pawn) == pawns
}

/// Flip the sign of a strong-side score when the weak side is to move.
#[inline]
pub(crate) fn from_mover(pos: &Position, strong: Color, result: Value) -> Value {
    if pos.side_to_move == strong {
        result
    } else {
        -result
    }
}

#[cfg(test)]
#[path = "endgame_tests.rs"]
mod endgame_tests;
