use crate::board::lines::Line;
use crate::board::{Board, Mark, NUM_CELLS};
use crate::error::{Error, Result};
use crate::players::Player;
use log::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { to_move: Mark },
    Won { winner: Mark, line: Line },
    Draw,
}

/// A board plus the two players taking turns on it. The first player moves
/// on even turns.
pub struct Game {
    board: Board,
    players: [Player; 2],
    history: Vec<usize>,
}

impl Game {
    pub fn new(first: Player, second: Player) -> Result<Self> {
        if first.mark() == second.mark() { return Err(Error::DuplicateMarks(first.mark())); }
        Ok(Self { board: Board::new(), players: [first, second], history: Vec::with_capacity(NUM_CELLS) })
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn players(&self) -> &[Player; 2] { &self.players }

    pub fn history(&self) -> &[usize] { &self.history }

    pub fn current_player(&self) -> &Player { &self.players[self.board.turn() % 2] }

    pub fn description(&self) -> String {
        format!("{} vs {}", self.players[0].description(), self.players[1].description())
    }

    pub fn status(&self) -> GameStatus {
        match (self.board.won_set(), self.board.winner()) {
            (Some(line), Some(winner)) => GameStatus::Won { winner, line },
            _ if self.board.is_full() => GameStatus::Draw,
            _ => GameStatus::InProgress { to_move: self.current_player().mark() },
        }
    }

    pub fn is_over(&self) -> bool { self.board.is_over() }

    /// Play one ply for whoever is to move. A human needs `index`; it is
    /// validated here so bad input never reaches the board.
    pub fn step(&mut self, index: Option<usize>) -> Result<usize> {
        if self.is_over() { return Err(Error::GameOver); }
        let slot = self.board.turn() % 2;
        if self.players[slot].is_human() {
            let i = index.ok_or_else(|| Error::MoveRequired(self.players[slot].description()))?;
            if i >= NUM_CELLS { return Err(Error::IndexOutOfRange(i)); }
            if !self.board.is_empty(i) { return Err(Error::CellOccupied(i)); }
        }
        let played = self.players[slot].play_turn(&mut self.board, index).ok_or(Error::NoMoveAvailable)?;
        self.history.push(played);
        if self.is_over() { info!("{}: {:?} after {} plies", self.description(), self.status(), self.board.turn()); }
        Ok(played)
    }

    /// Let AI players move until the game ends. Stops with `MoveRequired`
    /// as soon as a human is to move.
    pub fn play_out(&mut self) -> Result<GameStatus> {
        while !self.is_over() {
            self.step(None)?;
        }
        Ok(self.status())
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
    }
}
