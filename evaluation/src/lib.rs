pub mod def;
pub mod hce;
mod piece_values;

pub use def::HCE;
pub use hce::{Evaluator, HCEConfig, PawnCache};
pub use piece_values::PieceValues;
