// Fixed 3x3 board with incremental win detection and undo.
pub mod lines;

use crate::error::{Error, Result};
use lines::{Line, LINES_THROUGH, MIN_WIN_TURN, WIN_LINES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

pub const NUM_CELLS: usize = 9;

const EMPTY_GLYPHS: [char; 4] = ['.', '-', '_', ' '];
const SEPARATOR_GLYPHS: [char; 4] = ['/', '|', '\n', '\r'];

/// Identity token of a player. The glyph is chosen by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Mark(char);

impl Mark {
    pub fn new(glyph: char) -> Result<Self> {
        if glyph.is_whitespace() || glyph.is_control() {
            return Err(Error::InvalidMark(glyph.to_string()));
        }
        Ok(Self(glyph))
    }

    pub fn glyph(self) -> char { self.0 }
}

impl TryFrom<char> for Mark {
    type Error = Error;
    fn try_from(glyph: char) -> Result<Self> { Mark::new(glyph) }
}

impl From<Mark> for char {
    fn from(mark: Mark) -> char { mark.0 }
}

impl FromStr for Mark {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Mark::new(c),
            _ => Err(Error::InvalidMark(s.to_string())),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; NUM_CELLS],
    turn: usize,
    won_set: Option<Line>,
}

impl Board {
    pub fn new() -> Self { Self::default() }

    /// Parse a 9-cell layout such as `"XX./XO./..O"`. Empty cells are `.`, `-`, `_`
    /// or space; `/`, `|` and line breaks are ignored. The won line is recomputed
    /// from scratch, so positions that could not arise in play are accepted as-is.
    pub fn from_layout(layout: &str, marks: [Mark; 2]) -> Result<Self> {
        if marks[0] == marks[1] { return Err(Error::DuplicateMarks(marks[0])); }
        for m in marks {
            if EMPTY_GLYPHS.contains(&m.glyph()) || SEPARATOR_GLYPHS.contains(&m.glyph()) {
                return Err(Error::InvalidLayout(format!("mark '{m}' collides with a layout glyph")));
            }
        }
        let mut board = Board::new();
        let mut index = 0usize;
        for ch in layout.chars() {
            if SEPARATOR_GLYPHS.contains(&ch) { continue; }
            if index >= NUM_CELLS {
                return Err(Error::InvalidLayout(format!("more than {NUM_CELLS} cells in {layout:?}")));
            }
            if let Some(&mark) = marks.iter().find(|m| m.glyph() == ch) {
                board.cells[index] = Some(mark);
                board.turn += 1;
            } else if !EMPTY_GLYPHS.contains(&ch) {
                return Err(Error::InvalidLayout(format!("unexpected {ch:?} at cell {index}")));
            }
            index += 1;
        }
        if index != NUM_CELLS {
            return Err(Error::InvalidLayout(format!("expected {NUM_CELLS} cells, found {index}")));
        }
        board.won_set = WIN_LINES.iter().copied().filter(|&line| board.line_owner(line).is_some()).last();
        Ok(board)
    }

    pub fn cells(&self) -> &[Option<Mark>; NUM_CELLS] { &self.cells }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        check_index(index);
        self.cells[index]
    }

    pub fn turn(&self) -> usize { self.turn }

    pub fn won_set(&self) -> Option<Line> { self.won_set }

    pub fn winner(&self) -> Option<Mark> { self.won_set.and_then(|line| self.cells[line[0]]) }

    pub fn open_cells(&self) -> Vec<usize> {
        (0..NUM_CELLS).filter(|&i| self.cells[i].is_none()).collect()
    }

    pub fn is_won(&self) -> bool { self.won_set.is_some() }

    pub fn is_full(&self) -> bool { self.turn == NUM_CELLS }

    pub fn is_over(&self) -> bool { self.is_won() || self.is_full() }

    /// Panics if `index` is not a cell of the board.
    pub fn is_empty(&self, index: usize) -> bool {
        check_index(index);
        self.cells[index].is_none()
    }

    /// Returns `false` without touching the board if the cell is taken.
    pub fn place_mark(&mut self, index: usize, mark: Mark) -> bool {
        if !self.is_empty(index) { return false; }
        self.cells[index] = Some(mark);
        self.turn += 1;
        if self.turn >= MIN_WIN_TURN {
            // Every completed line is recorded in table order; the last one sticks.
            for line in LINES_THROUGH[index] {
                if line.iter().all(|&i| self.cells[i] == Some(mark)) {
                    self.won_set = Some(*line);
                }
            }
        }
        true
    }

    pub fn clear_mark(&mut self, index: usize) {
        if self.is_empty(index) { return; }
        self.cells[index] = None;
        self.turn -= 1;
        if self.won_set.map_or(false, |line| line.contains(&index)) {
            self.won_set = None;
        }
    }

    /// Place a mark that is cleared again when the returned guard drops.
    pub fn place_scoped(&mut self, index: usize, mark: Mark) -> Option<Placement<'_>> {
        if self.place_mark(index, mark) { Some(Placement { board: self, index }) } else { None }
    }

    pub fn reset(&mut self) { *self = Self::new(); }

    fn line_owner(&self, line: Line) -> Option<Mark> {
        let first = self.cells[line[0]]?;
        if line[1..].iter().all(|&i| self.cells[i] == Some(first)) { Some(first) } else { None }
    }
}

fn check_index(index: usize) {
    assert!(index < NUM_CELLS, "cell index {index} out of range (0..{NUM_CELLS})");
}

/// A mark placed by [`Board::place_scoped`]; derefs to the board it was placed on.
pub struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Placement<'_> {
    pub fn index(&self) -> usize { self.index }
}

impl Deref for Placement<'_> {
    type Target = Board;
    fn deref(&self) -> &Board { &*self.board }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board { &mut *self.board }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) { self.board.clear_mark(self.index); }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = |c: Option<Mark>| c.map_or(' ', Mark::glyph);
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 { write!(f, "\n---+---+---\n")?; }
            write!(f, " {} | {} | {} ", glyph(cells[0]), glyph(cells[1]), glyph(cells[2]))?;
        }
        Ok(())
    }
}
