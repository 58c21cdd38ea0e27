use crate::board::{Board, Mark};
use crate::error::{Error, Result};
use crate::search::minimax::Searcher;
use crate::search::opening::book_move;
use log::trace;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Random,
    Minimax,
}

impl PlayerKind {
    /// `opponent` is only used by the minimax player, `seed` only by the random one.
    pub fn build(self, mark: Mark, opponent: Mark, seed: u64) -> Player {
        match self {
            PlayerKind::Human => Player::human(mark),
            PlayerKind::Random => Player::random(mark, seed),
            PlayerKind::Minimax => Player::minimax(mark, opponent),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "human" | "h" => Ok(PlayerKind::Human),
            "random" | "easy" | "r" => Ok(PlayerKind::Random),
            "minimax" | "hard" | "c" => Ok(PlayerKind::Minimax),
            _ => Err(Error::UnknownPlayerKind(s.to_string())),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self { PlayerKind::Human => "human", PlayerKind::Random => "random", PlayerKind::Minimax => "minimax" };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
pub enum Player {
    /// Plays whatever cell the caller hands in.
    Human { mark: Mark },
    /// Picks uniformly among the open cells.
    Random { mark: Mark, rng: SmallRng },
    /// Opening book, then exhaustive minimax.
    Minimax { mark: Mark, opponent: Mark },
}

impl Player {
    pub fn human(mark: Mark) -> Self { Player::Human { mark } }

    pub fn random(mark: Mark, seed: u64) -> Self { Player::Random { mark, rng: SmallRng::seed_from_u64(seed) } }

    pub fn minimax(mark: Mark, opponent: Mark) -> Self { Player::Minimax { mark, opponent } }

    pub fn mark(&self) -> Mark {
        match self {
            Player::Human { mark } | Player::Random { mark, .. } | Player::Minimax { mark, .. } => *mark,
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Human { .. } => PlayerKind::Human,
            Player::Random { .. } => PlayerKind::Random,
            Player::Minimax { .. } => PlayerKind::Minimax,
        }
    }

    pub fn is_human(&self) -> bool { matches!(self, Player::Human { .. }) }

    pub fn description(&self) -> String {
        match self {
            Player::Human { mark } => format!("Human ({mark})"),
            Player::Random { mark, .. } => format!("Easy AI ({mark})"),
            Player::Minimax { mark, .. } => format!("Hard AI ({mark})"),
        }
    }

    /// Play one move on `board` and return the cell taken, or `None` if no move
    /// was made. Humans need `index`; AI players ignore it. A human index outside
    /// the board panics like any other board access.
    pub fn play_turn(&mut self, board: &mut Board, index: Option<usize>) -> Option<usize> {
        let played = match self {
            Player::Human { mark } => index.filter(|&i| board.place_mark(i, *mark)),
            Player::Random { mark, rng } => {
                let choice = random_move(board, rng)?;
                board.place_mark(choice, *mark).then_some(choice)
            }
            Player::Minimax { mark, opponent } => {
                let choice = minimax_move(board, *mark, *opponent)?;
                board.place_mark(choice, *mark).then_some(choice)
            }
        };
        trace!("{} played {:?} (turn {})", self.description(), played, board.turn());
        played
    }
}

pub fn random_move(board: &Board, rng: &mut SmallRng) -> Option<usize> {
    board.open_cells().choose(rng).copied()
}

/// Book move for the first two plies, full search afterwards. `None` on a finished board.
pub fn minimax_move(board: &mut Board, me: Mark, opponent: Mark) -> Option<usize> {
    if board.is_over() { return None; }
    if let Some(book) = book_move(board) { return Some(book); }
    Searcher::new(me, opponent).search(board).best
}
