mod quiet_history;
mod tt_move_history;
mod utils;

pub use quiet_history::QuietHistory;
pub use tt_move_history::TTMoveHistory;
pub use utils::{apply_gravity, history_bonus, scale_bonus};
