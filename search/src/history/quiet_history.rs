use utils::{Bitboard, Move, Position, Square};

use super::utils::{apply_gravity, history_bonus};
use crate::{SearchConfig, SearchStackEntry};

// [colour][from][to][threat class]
const QUIET_HISTORY_SIZE: usize = 2 * Square::NUM * Square::NUM * 4;

/// Butterfly history for quiet moves, split by whether the origin and the
/// destination square are attacked by the opponent.
#[derive(Clone)]
pub struct QuietHistory {
    history: Vec<i16>,
    config: SearchConfig,
}

impl QuietHistory {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            history: vec![0; QUIET_HISTORY_SIZE],
            config: config.clone(),
        }
    }

    pub fn configure(&mut self, config: &SearchConfig) {
        self.config = config.clone();
        self.reset();
    }

    #[inline(always)]
    pub fn reset(&mut self) {
        self.history.fill(0);
    }

    #[inline(always)]
    pub fn get_score(&self, position: &Position, mv: Move, threats: Bitboard) -> i16 {
        self.history[Self::index(position, mv, threats)]
    }

    /// Rewards the move stored in `entry` and punishes every quiet tried
    /// before it.
    pub fn update_score(
        &mut self,
        position: &Position,
        entry: &SearchStackEntry,
        depth: i32,
        threats: Bitboard,
        failed_quiets: &[Move],
    ) {
        let Some(best) = entry.mv else {
            return;
        };

        let max_value = self.config.history_max_value.value;
        let bonus = history_bonus(depth, &self.config);

        let idx = Self::index(position, best, threats);
        apply_gravity(&mut self.history[idx], bonus, max_value);

        for &mv in failed_quiets {
            if mv == best {
                continue;
            }
            let idx = Self::index(position, mv, threats);
            apply_gravity(&mut self.history[idx], -bonus, max_value);
        }
    }

    #[inline(always)]
    fn index(position: &Position, mv: Move, threats: Bitboard) -> usize {
        let color = position.side_to_move() as usize;
        let threat = 2 * threats.is_set(mv.from) as usize + threats.is_set(mv.to) as usize;
        ((color * Square::NUM + mv.from.index()) * Square::NUM + mv.to.index()) * 4 + threat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Board;

    fn position(fen: &str) -> Position {
        let board: Board = fen.parse().unwrap();
        Position::from_board(&board, |_, _, _| Default::default())
    }

    fn mv(text: &str) -> Move {
        Move::new(sq(&text[..2]), sq(&text[2..]))
    }

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_cutoff_rewarded_failed_quiets_penalised() {
        let config = SearchConfig::default();
        let mut history = QuietHistory::new(&config);
        let pos = position(START_FEN);

        let best = mv("g1f3");
        let failed = [mv("a2a3"), mv("h2h3"), best];
        let entry = SearchStackEntry {
            mv: Some(best),
            static_eval: None,
        };

        history.update_score(&pos, &entry, 4, Bitboard::EMPTY, &failed);

        let bonus = history_bonus(4, &config) as i16;
        assert_eq!(history.get_score(&pos, best, Bitboard::EMPTY), bonus);
        assert_eq!(history.get_score(&pos, mv("a2a3"), Bitboard::EMPTY), -bonus);
        assert_eq!(history.get_score(&pos, mv("h2h3"), Bitboard::EMPTY), -bonus);
        assert_eq!(history.get_score(&pos, mv("b1c3"), Bitboard::EMPTY), 0);
    }

    #[test]
    fn test_threat_classes_are_separate() {
        let config = SearchConfig::default();
        let mut history = QuietHistory::new(&config);
        let pos = position(START_FEN);

        let best = mv("g1f3");
        let threatened_to = sq("f3").bitboard();
        let entry = SearchStackEntry {
            mv: Some(best),
            static_eval: None,
        };
        history.update_score(&pos, &entry, 6, threatened_to, &[]);

        assert!(history.get_score(&pos, best, threatened_to) > 0);
        assert_eq!(history.get_score(&pos, best, Bitboard::EMPTY), 0);
        assert_eq!(history.get_score(&pos, best, sq("g1").bitboard()), 0);
    }

    #[test]
    fn test_colours_are_separate_and_reset_clears() {
        let config = SearchConfig::default();
        let mut history = QuietHistory::new(&config);
        let white = position(START_FEN);
        let black = position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");

        let entry = SearchStackEntry {
            mv: Some(mv("e2e4")),
            static_eval: Some(20),
        };
        history.update_score(&white, &entry, 3, Bitboard::EMPTY, &[]);

        assert!(history.get_score(&white, mv("e2e4"), Bitboard::EMPTY) > 0);
        assert_eq!(history.get_score(&black, mv("e2e4"), Bitboard::EMPTY), 0);

        history.reset();
        assert_eq!(history.get_score(&white, mv("e2e4"), Bitboard::EMPTY), 0);
    }

    #[test]
    fn test_saturates_at_configured_ceiling() {
        let mut config = SearchConfig::default();
        config.update("History Max Value", "2000").unwrap();
        let mut history = QuietHistory::new(&config);
        let pos = position(START_FEN);

        let entry = SearchStackEntry {
            mv: Some(mv("d2d4")),
            static_eval: None,
        };
        for _ in 0..500 {
            history.update_score(&pos, &entry, 20, Bitboard::EMPTY, &[]);
        }

        assert_eq!(history.get_score(&pos, mv("d2d4"), Bitboard::EMPTY), 2000);
    }

    #[test]
    fn test_configure_clears_and_applies_new_ceiling() {
        let mut history = QuietHistory::new(&SearchConfig::default());
        let pos = position(START_FEN);
        let entry = SearchStackEntry::with_move(mv("b1c3"));
        history.update_score(&pos, &entry, 8, Bitboard::EMPTY, &[]);
        assert!(history.get_score(&pos, mv("b1c3"), Bitboard::EMPTY) > 1024);

        let mut config = SearchConfig::default();
        config.update("History Max Value", "1024").unwrap();
        history.configure(&config);
        assert_eq!(history.get_score(&pos, mv("b1c3"), Bitboard::EMPTY), 0);

        history.update_score(&pos, &entry, 8, Bitboard::EMPTY, &[]);
        assert_eq!(history.get_score(&pos, mv("b1c3"), Bitboard::EMPTY), 1024);
    }
}
