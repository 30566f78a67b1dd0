//! Geometry incentive tables.

/// Drives the defending king towards the edge of the board, used in KX vs K
/// and KQ vs KR.
#[rustfmt::skip]
pub const PUSH_TO_EDGES: [i32; 64] = [
    100, 90, 80, 70, 70, 80, 90, 100,
     90, 70, 60, 50, 50, 60, 70,  90,
     80, 60, 40, 30, 30, 40, 60,  80,
     70, 50, 30, 20, 20, 30, 50,  70,
     70, 50, 30, 20, 20, 30, 50,  70,
     80, 60, 40, 30, 30, 40, 60,  80,
     90, 70, 60, 50, 50, 60, 70,  90,
    100, 90, 80, 70, 70, 80, 90, 100,
];

/// Drives the defending king towards a1 or h8 in KBN vs K. Callers with a
/// light-squared bishop flip both kings before indexing.
#[rustfmt::skip]
pub const PUSH_TO_CORNERS: [i32; 64] = [
    200, 190, 180, 170, 160, 150, 140, 130,
    190, 180, 170, 160, 150, 140, 130, 140,
    180, 170, 155, 140, 140, 125, 140, 150,
    170, 160, 140, 120, 110, 140, 150, 160,
    160, 150, 140, 110, 120, 140, 160, 170,
    150, 140, 125, 140, 140, 155, 170, 180,
    140, 130, 140, 150, 160, 170, 180, 190,
    130, 140, 150, 160, 170, 180, 190, 200,
];

/// Bonus for keeping two pieces close, indexed by king distance.
pub const PUSH_CLOSE: [i32; 8] = [0, 0, 100, 80, 60, 40, 20, 10];

/// Bonus for keeping two pieces apart, indexed by king distance.
pub const PUSH_AWAY: [i32; 8] = [0, 5, 20, 40, 60, 80, 90, 100];

#[inline(always)]
pub fn push_to_edges(sq: u8) -> i32 {
    PUSH_TO_EDGES[sq as usize]
}

#[inline(always)]
pub fn push_to_corners(sq: u8) -> i32 {
    PUSH_TO_CORNERS[sq as usize]
}

#[inline(always)]
pub fn push_close(distance: i32) -> i32 {
    PUSH_CLOSE[distance as usize]
}

#[inline(always)]
pub fn push_away(distance: i32) -> i32 {
    PUSH_AWAY[distance as usize]
}
