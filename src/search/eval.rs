use crate::board::{Board, Mark};

// Terminal scoring helpers
pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

// Score of a finished position from `me`'s side, or None while the game is on.
// Depth is the turn count, so quicker wins score higher and slower losses
// score less negative. Only valid for the 9-ply board.
pub fn eval_terminal(board: &Board, me: Mark) -> Option<i32> {
    if board.is_won() {
        let depth = board.turn() as i32;
        return Some(if board.winner() == Some(me) { WIN_SCORE - depth } else { depth - WIN_SCORE });
    }
    if board.is_full() { return Some(DRAW_SCORE); }
    None
}
