use crate::board::lines::Line;
use crate::board::Mark;
use crate::error::{Error, Result};
use crate::game::{Game, GameStatus};
use crate::players::PlayerKind;
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// Per-game seed spreading (64-bit golden ratio)
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Debug)]
pub struct MatchParams {
    pub games: usize,
    pub first: PlayerKind,
    pub second: PlayerKind,
    pub first_mark: Mark,
    pub second_mark: Mark,
    pub seed: u64,
    pub threads: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game: usize,
    pub seed: u64,
    pub moves: Vec<usize>,
    pub winner: Option<Mark>,
    pub line: Option<Line>,
    pub plies: usize,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
}

pub fn game_seed(seed: u64, game: usize) -> u64 {
    seed ^ (game as u64 + 1).wrapping_mul(SEED_MIX)
}

pub fn play_games(params: &MatchParams) -> Result<Vec<GameRecord>> {
    play_games_with(params, |_| {})
}

/// Play `params.games` independent games, each on its own board, calling
/// `on_game` as each one finishes. Records come back in game order.
pub fn play_games_with<F>(params: &MatchParams, on_game: F) -> Result<Vec<GameRecord>>
where
    F: Fn(&GameRecord) + Sync,
{
    if params.first_mark == params.second_mark { return Err(Error::DuplicateMarks(params.first_mark)); }
    let run = || (0..params.games).into_par_iter().map(|game| -> Result<GameRecord> {
        let record = play_one(params, game)?;
        on_game(&record);
        Ok(record)
    }).collect::<Result<Vec<GameRecord>>>();

    let records = if params.threads > 1 {
        match rayon::ThreadPoolBuilder::new().num_threads(params.threads).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                warn!("could not build a {}-thread pool ({e}); using the global pool", params.threads);
                run()
            }
        }
    } else {
        run()
    }?;
    let summary = summarize(&records);
    info!("{} vs {}: {:?}", params.first, params.second, summary);
    Ok(records)
}

fn play_one(params: &MatchParams, game: usize) -> Result<GameRecord> {
    let seed = game_seed(params.seed, game);
    let first = params.first.build(params.first_mark, params.second_mark, seed);
    let second = params.second.build(params.second_mark, params.first_mark, seed.rotate_left(17));
    let mut g = Game::new(first, second)?;
    let status = g.play_out()?;
    let (winner, line) = match status {
        GameStatus::Won { winner, line } => (Some(winner), Some(line)),
        _ => (None, None),
    };
    Ok(GameRecord { game, seed, moves: g.history().to_vec(), winner, line, plies: g.board().turn() })
}

// A won game ends on the winner's move, so an odd ply count means the first player won.
pub fn summarize(records: &[GameRecord]) -> MatchSummary {
    let mut s = MatchSummary { games: records.len(), ..MatchSummary::default() };
    for r in records {
        match r.winner {
            None => s.draws += 1,
            Some(_) if r.plies % 2 == 1 => s.first_wins += 1,
            Some(_) => s.second_wins += 1,
        }
    }
    s
}

/// One JSON object per line.
pub fn write_records<P: AsRef<Path>>(records: &[GameRecord], path: P) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for r in records {
        serde_json::to_writer(&mut w, r)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}
