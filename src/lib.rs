// Tic-tac-toe board, minimax search and match tooling
pub mod board;
pub mod error;
pub mod game;
pub mod perft;
pub mod players;
pub mod search;
pub mod selfplay;

pub use board::{Board, Mark, Placement};
pub use error::{Error, Result};
pub use game::{Game, GameStatus};
pub use players::{Player, PlayerKind};
