use utils::ScorePair;

const fn s(mg: i16, eg: i16) -> ScorePair {
    ScorePair::new(mg, eg)
}

/// Weights of the hand-crafted evaluation. Penalties are stored negative
/// and added like bonuses.
#[derive(Debug, Clone)]
pub struct HCEConfig {
    pub tempo_bonus: ScorePair,

    // Pawn structure, indexed by relative rank or by file
    pub pawn_phalanx_bonus: [ScorePair; 8],
    pub passed_pawn_bonus: [ScorePair; 8],
    pub defended_pawn_bonus: [ScorePair; 8],
    pub doubled_pawn_penalty: [ScorePair; 8],
    pub isolated_pawn_penalty: [ScorePair; 8],

    // Passed pawns vs kings, indexed by king distance
    pub king_passed_pawn_distance: [ScorePair; 8],
    pub enemy_king_passed_pawn_distance: [ScorePair; 8],
    pub king_cant_reach_passed_pawn_bonus: ScorePair,

    // Mobility, indexed by reachable square count
    pub knight_mobility: [ScorePair; 9],
    pub bishop_mobility: [ScorePair; 14],
    pub rook_mobility: [ScorePair; 15],
    pub queen_mobility: [ScorePair; 28],

    // Pressure on the enemy king zone, [knight, bishop, rook, queen][min(7, squares hit)]
    pub attack_power: [[ScorePair; 8]; 4],

    // Outposts, indexed by (relative rank - 3) * 8 + file
    pub knight_outpost: [ScorePair; 24],
    pub bishop_outpost: [ScorePair; 24],

    pub bishop_pair_bonus: ScorePair,

    // [semi-open][file]
    pub rook_on_file_bonus: [[ScorePair; 8]; 2],
    pub king_on_file_penalty: [[ScorePair; 8]; 2],

    // Own pawns near the own king; the king sits at index 7, three squares per rank
    pub pawn_shelter: [ScorePair; 12],
    // Own pawns near the enemy king; the king sits at index 19, three squares per rank
    pub pawn_storm: [ScorePair; 21],

    // [threatened piece][defended]
    pub threatened_by_knight: [[ScorePair; 2]; 6],
    pub threatened_by_bishop: [[ScorePair; 2]; 6],
    pub threatened_by_rook: [[ScorePair; 2]; 6],
    pub threatened_by_pawn: [[ScorePair; 2]; 6],

    // [threatened piece]
    pub pawn_push_threat: [ScorePair; 6],
    // [knight, bishop, rook, queen]
    pub safe_check_bonus: [ScorePair; 4],
}

impl Default for HCEConfig {
    fn default() -> Self {
        Self {
            tempo_bonus: s(16, 8),

            pawn_phalanx_bonus: [
                s(0, 0), s(4, -2), s(8, 4), s(14, 10),
                s(30, 28), s(56, 72), s(90, 110), s(0, 0),
            ],
            passed_pawn_bonus: [
                s(0, 0), s(-6, 8), s(-8, 14), s(-4, 30),
                s(18, 54), s(42, 110), s(76, 168), s(0, 0),
            ],
            defended_pawn_bonus: [
                s(0, 0), s(0, 0), s(14, 8), s(10, 8),
                s(14, 16), s(28, 36), s(90, 32), s(0, 0),
            ],
            doubled_pawn_penalty: [
                s(-4, -30), s(2, -22), s(-8, -18), s(-10, -14),
                s(-10, -14), s(-8, -18), s(2, -22), s(-4, -30),
            ],
            isolated_pawn_penalty: [
                s(-2, -4), s(-6, -10), s(-10, -10), s(-14, -14),
                s(-14, -14), s(-10, -10), s(-6, -10), s(-2, -4),
            ],

            king_passed_pawn_distance: [
                s(0, 0), s(4, 32), s(-4, 22), s(-4, 8),
                s(-2, -2), s(2, -8), s(6, -10), s(-4, -12),
            ],
            enemy_king_passed_pawn_distance: [
                s(0, 0), s(-44, -60), s(2, -22), s(4, 4),
                s(2, 18), s(0, 28), s(-2, 34), s(-12, 34),
            ],
            king_cant_reach_passed_pawn_bonus: s(40, 180),

            knight_mobility: [
                s(-38, -66), s(-24, -36), s(-14, -12), s(-8, 2), s(-2, 10),
                s(2, 18), s(8, 20), s(14, 18), s(20, 10),
            ],
            bishop_mobility: [
                s(-32, -60), s(-22, -42), s(-12, -22), s(-6, -8), s(0, 2),
                s(4, 10), s(8, 16), s(10, 20), s(12, 24), s(14, 24),
                s(18, 22), s(24, 18), s(26, 22), s(32, 10),
            ],
            rook_mobility: [
                s(-36, -48), s(-24, -30), s(-18, -20), s(-14, -10), s(-14, -2),
                s(-8, 2), s(-4, 8), s(0, 12), s(4, 16), s(6, 20),
                s(8, 24), s(10, 28), s(12, 30), s(16, 28), s(22, 24),
            ],
            queen_mobility: [
                s(-24, -40), s(-18, -34), s(-14, -28), s(-12, -24), s(-10, -18),
                s(-8, -12), s(-6, -6), s(-4, -2), s(-2, 4), s(0, 8),
                s(2, 12), s(2, 16), s(4, 20), s(4, 24), s(6, 26),
                s(6, 28), s(6, 30), s(6, 32), s(8, 32), s(10, 30),
                s(12, 28), s(16, 24), s(18, 22), s(22, 18), s(24, 16),
                s(26, 14), s(28, 12), s(30, 10),
            ],

            attack_power: [
                [s(0, 0), s(12, 2), s(22, 4), s(34, 6), s(44, 8), s(52, 10), s(60, 12), s(66, 14)],
                [s(0, 0), s(10, 2), s(18, 4), s(28, 6), s(36, 8), s(44, 10), s(50, 12), s(56, 14)],
                [s(0, 0), s(14, 2), s(26, 4), s(38, 6), s(50, 8), s(60, 10), s(68, 12), s(76, 14)],
                [s(0, 0), s(8, 4), s(18, 8), s(30, 12), s(44, 16), s(56, 20), s(66, 24), s(74, 28)],
            ],

            knight_outpost: [
                s(8, 4), s(14, 6), s(18, 10), s(22, 14), s(22, 14), s(18, 10), s(14, 6), s(8, 4),
                s(12, 8), s(18, 12), s(26, 16), s(32, 20), s(32, 20), s(26, 16), s(18, 12), s(12, 8),
                s(10, 6), s(20, 10), s(28, 14), s(36, 18), s(36, 18), s(28, 14), s(20, 10), s(10, 6),
            ],
            bishop_outpost: [
                s(6, 2), s(10, 4), s(12, 6), s(14, 8), s(14, 8), s(12, 6), s(10, 4), s(6, 2),
                s(8, 4), s(12, 6), s(16, 8), s(20, 10), s(20, 10), s(16, 8), s(12, 6), s(8, 4),
                s(4, 2), s(10, 4), s(14, 6), s(18, 8), s(18, 8), s(14, 6), s(10, 4), s(4, 2),
            ],

            bishop_pair_bonus: s(26, 62),

            rook_on_file_bonus: [
                [s(34, 6), s(30, 6), s(28, 8), s(30, 6), s(32, 6), s(34, 4), s(40, 2), s(46, 0)],
                [s(6, 18), s(10, 12), s(10, 10), s(12, 8), s(14, 8), s(14, 8), s(18, 10), s(22, 14)],
            ],
            king_on_file_penalty: [
                [s(-64, -6), s(-76, 2), s(-54, 6), s(-36, 2), s(-40, 4), s(-52, 6), s(-72, 2), s(-58, -4)],
                [s(-24, 4), s(-38, 10), s(-22, 8), s(-14, 2), s(-16, 2), s(-22, 8), s(-36, 10), s(-24, 4)],
            ],

            pawn_shelter: [
                s(12, -4), s(18, -6), s(12, -4),
                s(30, -10), s(38, -12), s(30, -10),
                s(22, -2), s(0, 0), s(22, -2),
                s(4, 2), s(10, 4), s(4, 2),
            ],
            pawn_storm: [
                s(0, 0), s(0, 0), s(0, 0),
                s(-4, 2), s(-6, 4), s(-4, 2),
                s(2, -2), s(4, -2), s(2, -2),
                s(10, -4), s(14, -6), s(10, -4),
                s(24, -8), s(30, -10), s(24, -8),
                s(-6, 2), s(-12, 4), s(-6, 2),
                s(8, 6), s(0, 0), s(8, 6),
            ],

            threatened_by_knight: [
                [s(-4, -12), s(0, -6)],
                [s(-20, -28), s(-10, -16)],
                [s(-22, -30), s(-14, -18)],
                [s(-48, -24), s(-40, -20)],
                [s(-46, -28), s(-40, -24)],
                [s(0, 0), s(0, 0)],
            ],
            threatened_by_bishop: [
                [s(-4, -14), s(0, -8)],
                [s(-18, -28), s(-10, -16)],
                [s(-4, -6), s(0, 0)],
                [s(-40, -20), s(-34, -16)],
                [s(-50, -46), s(-44, -40)],
                [s(0, 0), s(0, 0)],
            ],
            threatened_by_rook: [
                [s(-2, -16), s(2, -10)],
                [s(-18, -24), s(-8, -14)],
                [s(-20, -26), s(-10, -16)],
                [s(-8, -10), s(-2, -2)],
                [s(-48, -38), s(-42, -32)],
                [s(0, 0), s(0, 0)],
            ],
            threatened_by_pawn: [
                [s(0, 0), s(0, 0)],
                [s(-52, -26), s(-44, -20)],
                [s(-50, -32), s(-42, -26)],
                [s(-66, -36), s(-58, -30)],
                [s(-58, -24), s(-52, -18)],
                [s(0, 0), s(0, 0)],
            ],

            pawn_push_threat: [
                s(0, 0), s(18, 16), s(18, 18), s(22, 14), s(20, 8), s(10, 0),
            ],
            safe_check_bonus: [s(56, 6), s(18, 16), s(44, 6), s(26, 22)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_mirror_symmetric(table: &[ScorePair]) -> bool {
        table.chunks(3).all(|triple| triple[0] == triple[2])
    }

    #[test]
    fn test_king_zone_tables_are_left_right_symmetric() {
        let config = HCEConfig::default();
        assert!(is_mirror_symmetric(&config.pawn_shelter));
        assert!(is_mirror_symmetric(&config.pawn_storm));
    }
}
