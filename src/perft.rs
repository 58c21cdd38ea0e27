// Game-tree counting using scoped place/clear (no cloning)
use crate::board::{Board, Mark};

/// Move sequences of exactly `depth` plies from `board`, never continuing
/// past a finished game. `marks[board.turn() % 2]` moves first.
pub fn perft(board: &mut Board, marks: [Mark; 2], depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if board.is_over() { return 0; }
    let mark = marks[board.turn() % 2];
    let mut nodes = 0u64;
    for index in board.open_cells() {
        if let Some(mut placed) = board.place_scoped(index, mark) {
            nodes += perft(&mut placed, marks, depth - 1);
        }
    }
    nodes
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameCount {
    pub total: u64,
    pub first_wins: u64,
    pub second_wins: u64,
    pub draws: u64,
}

/// Every complete game reachable from `board`, split by outcome.
pub fn count_games(board: &mut Board, marks: [Mark; 2]) -> GameCount {
    let mut count = GameCount::default();
    walk(board, marks, &mut count);
    count
}

fn walk(board: &mut Board, marks: [Mark; 2], count: &mut GameCount) {
    if board.is_over() {
        count.total += 1;
        match board.winner() {
            Some(m) if m == marks[0] => count.first_wins += 1,
            Some(_) => count.second_wins += 1,
            None => count.draws += 1,
        }
        return;
    }
    let mark = marks[board.turn() % 2];
    for index in board.open_cells() {
        if let Some(mut placed) = board.place_scoped(index, mark) {
            walk(&mut placed, marks, count);
        }
    }
}
