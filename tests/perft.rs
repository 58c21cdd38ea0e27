use pretty_assertions::assert_eq;
use tictactoe::perft::{count_games, perft, GameCount};
use tictactoe::{Board, Mark};

fn xo() -> [Mark; 2] { [Mark::new('X').unwrap(), Mark::new('O').unwrap()] }

#[test]
fn perft_empty_board_all_depths() {
    let mut b = Board::new();
    let expected = [1u64, 9, 72, 504, 3024, 15120, 54720, 148176, 200448, 127872];
    for (depth, &nodes) in expected.iter().enumerate() {
        assert_eq!(perft(&mut b, xo(), depth as u32), nodes, "depth {depth}");
    }
    assert_eq!(b, Board::new(), "perft must leave the board as it found it");
}

#[test]
fn perft_beyond_game_length_is_zero() {
    let mut b = Board::new();
    assert_eq!(perft(&mut b, xo(), 10), 0);
}

#[test]
fn complete_games_from_empty_board() {
    let mut b = Board::new();
    let c = count_games(&mut b, xo());
    assert_eq!(c, GameCount { total: 255_168, first_wins: 131_184, second_wins: 77_904, draws: 46_080 });
    assert_eq!(b, Board::new());
}

#[test]
fn complete_games_from_finished_board() {
    let [x, o] = xo();
    let mut b = Board::from_layout("XXX/OO./...", [x, o]).unwrap();
    let c = count_games(&mut b, [x, o]);
    assert_eq!(c, GameCount { total: 1, first_wins: 1, second_wins: 0, draws: 0 });
}
