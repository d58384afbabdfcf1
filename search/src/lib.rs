mod config;
mod history;
mod see;
mod stack;

pub use config::{ConfigParam, SearchConfig};
pub use history::{apply_gravity, history_bonus, scale_bonus, QuietHistory, TTMoveHistory};
pub use see::static_exchange;
pub use stack::SearchStackEntry;
