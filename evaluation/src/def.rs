use utils::Position;

/// Hand-Crafted Evaluation interface.
pub trait HCE: Send + Sync {
    fn name(&self) -> String;
    /// Evaluate position from the side to move's perspective. Positive = side to move is better.
    fn evaluate(&self, position: &Position) -> i16;
}
