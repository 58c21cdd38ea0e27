use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tictactoe::{Board, Error, Mark};

fn xo() -> (Mark, Mark) { (Mark::new('X').unwrap(), Mark::new('O').unwrap()) }

fn marked(board: &Board) -> usize { board.cells().iter().filter(|c| c.is_some()).count() }

#[test]
fn new_board_is_empty() {
    let b = Board::new();
    assert_eq!(b.turn(), 0);
    assert_eq!(b.open_cells(), (0..9).collect::<Vec<_>>());
    assert!(!b.is_won());
    assert!(!b.is_full());
    assert_eq!(b.won_set(), None);
}

#[test]
fn turn_tracks_marks_over_random_games() {
    let (x, o) = xo();
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..200 {
        let mut b = Board::new();
        while !b.is_over() {
            let i = *b.open_cells().choose(&mut rng).unwrap();
            let mark = if b.turn() % 2 == 0 { x } else { o };
            assert!(b.place_mark(i, mark));
            assert_eq!(b.turn(), marked(&b), "turn diverged from mark count");
        }
        // Unwind in random order
        let mut filled: Vec<usize> = (0..9).filter(|&i| !b.is_empty(i)).collect();
        filled.shuffle(&mut rng);
        for i in filled {
            b.clear_mark(i);
            assert_eq!(b.turn(), marked(&b));
        }
        assert_eq!(b, Board::new());
    }
}

#[test]
fn place_then_clear_restores_exactly() {
    let (x, o) = xo();
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..200 {
        let mut b = Board::new();
        let plies = rand::Rng::gen_range(&mut rng, 0..9);
        for _ in 0..plies {
            if b.is_over() { break; }
            let i = *b.open_cells().choose(&mut rng).unwrap();
            let mark = if b.turn() % 2 == 0 { x } else { o };
            b.place_mark(i, mark);
        }
        // Moves are only legal while the game is on
        if b.is_over() { continue; }
        for i in b.open_cells() {
            let snapshot = b.clone();
            let mark = if b.turn() % 2 == 0 { x } else { o };
            assert!(b.place_mark(i, mark));
            b.clear_mark(i);
            assert_eq!(b, snapshot, "place/clear at {i} did not restore the board");
        }
    }
}

#[test]
fn scoped_placement_clears_on_drop() {
    let (x, _) = xo();
    let mut b = Board::new();
    {
        let placed = b.place_scoped(4, x).expect("cell is open");
        assert_eq!(placed.index(), 4);
        assert_eq!(placed.turn(), 1);
        assert_eq!(placed.cell(4), Some(x));
    }
    assert_eq!(b, Board::new());
    b.place_mark(4, x);
    assert!(b.place_scoped(4, x).is_none());
    assert_eq!(b.turn(), 1);
}

#[test]
fn win_detected_on_top_row() {
    let (x, o) = xo();
    let mut b = Board::new();
    assert!(b.place_mark(6, o));
    assert!(b.place_mark(7, o));
    assert!(b.place_mark(0, x));
    assert!(b.place_mark(1, x));
    assert!(!b.is_won());
    assert!(b.place_mark(2, x));
    assert_eq!(b.won_set(), Some([0, 1, 2]));
    assert!(b.is_won());
    assert_eq!(b.winner(), Some(x));
}

#[test]
fn no_win_recorded_before_fifth_mark() {
    let (x, _) = xo();
    let mut b = Board::new();
    for i in [0, 1, 2] { b.place_mark(i, x); }
    assert!(!b.is_won(), "three marks cannot win by turn count");
}

#[test]
fn simultaneous_lines_record_last_in_table_order() {
    let (x, _) = xo();
    let mut b = Board::new();
    for i in [1, 2, 4, 8] { b.place_mark(i, x); }
    assert!(!b.is_won());
    b.place_mark(0, x);
    assert_eq!(b.won_set(), Some([0, 4, 8]));
}

#[test]
fn occupied_cell_is_rejected_without_mutation() {
    let (x, o) = xo();
    let mut b = Board::new();
    b.place_mark(3, x);
    let snapshot = b.clone();
    assert!(!b.place_mark(3, o));
    assert_eq!(b, snapshot);
}

#[test]
fn clearing_empty_cell_is_noop() {
    let mut b = Board::new();
    b.clear_mark(5);
    assert_eq!(b, Board::new());
}

#[test]
fn clearing_outside_won_line_keeps_win() {
    let (x, o) = xo();
    let mut b = Board::from_layout("XXX/OO./...", [x, o]).unwrap();
    assert_eq!(b.won_set(), Some([0, 1, 2]));
    b.clear_mark(3);
    assert_eq!(b.won_set(), Some([0, 1, 2]));
    b.clear_mark(1);
    assert_eq!(b.won_set(), None);
    assert_eq!(b.turn(), 3);
}

#[test]
fn full_board_without_line_is_draw() {
    let (x, o) = xo();
    let b = Board::from_layout("XOX/XOO/OXX", [x, o]).unwrap();
    assert!(b.is_full());
    assert!(!b.is_won());
    assert!(b.open_cells().is_empty());
}

#[test]
fn reset_returns_to_empty() {
    let (x, o) = xo();
    let mut b = Board::from_layout("XXX/OO./...", [x, o]).unwrap();
    b.reset();
    assert_eq!(b, Board::new());
}

#[test]
#[should_panic(expected = "out of range")]
fn is_empty_panics_out_of_range() {
    Board::new().is_empty(9);
}

#[test]
#[should_panic(expected = "out of range")]
fn place_mark_panics_out_of_range() {
    let (x, _) = xo();
    Board::new().place_mark(42, x);
}

#[test]
fn layout_parsing() {
    let (x, o) = xo();
    let b = Board::from_layout("X.O|...|..X", [x, o]).unwrap();
    assert_eq!(b.turn(), 3);
    assert_eq!(b.cell(0), Some(x));
    assert_eq!(b.cell(2), Some(o));
    assert_eq!(b.cell(8), Some(x));
    assert_eq!(b.open_cells(), vec![1, 3, 4, 5, 6, 7]);

    assert!(matches!(Board::from_layout("X.O", [x, o]), Err(Error::InvalidLayout(_))));
    assert!(matches!(Board::from_layout("..........", [x, o]), Err(Error::InvalidLayout(_))));
    assert!(matches!(Board::from_layout("X.Q......", [x, o]), Err(Error::InvalidLayout(_))));
    assert!(matches!(Board::from_layout(".........", [x, x]), Err(Error::DuplicateMarks(_))));
}

#[test]
fn custom_glyphs_are_supported() {
    let (a, b) = (Mark::new('A').unwrap(), Mark::new('B').unwrap());
    let mut board = Board::new();
    for (i, m) in [(0, a), (3, b), (1, a), (4, b), (2, a)] { board.place_mark(i, m); }
    assert_eq!(board.winner(), Some(a));
    assert!(board.to_string().starts_with(" A | A | A "));
}
