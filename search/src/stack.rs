use utils::Move;

/// Per-ply record the search driver keeps; history updates read the move
/// that produced the cutoff from here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStackEntry {
    pub mv: Option<Move>,
    pub static_eval: Option<i16>,
}

impl SearchStackEntry {
    #[inline(always)]
    pub fn with_move(mv: Move) -> Self {
        Self {
            mv: Some(mv),
            static_eval: None,
        }
    }
}
