use utils::Position;

use super::utils::apply_gravity;
use crate::SearchConfig;

const TT_MOVE_HISTORY_SIZE: usize = 8192;

/// Tracks how often the hash move held up for a given pawn structure.
#[derive(Clone)]
pub struct TTMoveHistory {
    history: Vec<[i16; 2]>,
    max_value: i32,
}

impl TTMoveHistory {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            history: vec![[0; 2]; TT_MOVE_HISTORY_SIZE],
            max_value: config.history_max_value.value,
        }
    }

    pub fn configure(&mut self, config: &SearchConfig) {
        self.max_value = config.history_max_value.value;
        self.reset();
    }

    #[inline(always)]
    pub fn reset(&mut self) {
        self.history.fill([0; 2]);
    }

    #[inline(always)]
    pub fn get_score(&self, position: &Position) -> i16 {
        let (idx, color) = Self::index(position);
        self.history[idx][color]
    }

    #[inline(always)]
    pub fn update_table_score(&mut self, position: &Position, bonus: i32) {
        let (idx, color) = Self::index(position);
        apply_gravity(&mut self.history[idx][color], bonus, self.max_value);
    }

    #[inline(always)]
    fn index(position: &Position) -> (usize, usize) {
        (
            (position.pawn_key() as usize) & (TT_MOVE_HISTORY_SIZE - 1),
            position.side_to_move() as usize,
        )
    }
}
