use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tictactoe::selfplay::{play_games_with, summarize, write_records, MatchParams};
use tictactoe::{Board, Mark, PlayerKind};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe matches between engine players", long_about = None)]
struct Args {
    /// Player moving first: 'minimax', 'random' (humans cannot play batch matches)
    #[arg(long, default_value = "minimax")]
    first: PlayerKind,

    /// Player moving second
    #[arg(long, default_value = "random")]
    second: PlayerKind,

    #[arg(long, default_value = "X")]
    first_mark: Mark,

    #[arg(long, default_value = "O")]
    second_mark: Mark,

    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Base seed for the random players
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Worker threads (games run in parallel)
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Write one JSON record per game to this file
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the final board of every game
    #[arg(long)]
    show_boards: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = MatchParams {
        games: args.games,
        first: args.first,
        second: args.second,
        first_mark: args.first_mark,
        second_mark: args.second_mark,
        seed: args.seed,
        threads: args.threads.max(1),
    };

    let pb = ProgressBar::new(args.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);
    let t0 = Instant::now();
    let records = play_games_with(&params, |_| pb.inc(1))?;
    pb.finish_and_clear();
    let dt = t0.elapsed();

    if args.show_boards {
        let marks = [args.first_mark, args.second_mark];
        for r in &records {
            let mut board = Board::new();
            for (ply, &index) in r.moves.iter().enumerate() {
                board.place_mark(index, marks[ply % 2]);
            }
            let outcome = r.winner.map_or_else(|| "draw".to_string(), |w| format!("{w} wins"));
            println!("game {} ({outcome}, moves {:?})\n{}\n", r.game, r.moves, board);
        }
    }

    let s = summarize(&records);
    println!(
        "{} ({}) vs {} ({}): games={} first_wins={} second_wins={} draws={} elapsed={:.3}s",
        args.first, args.first_mark, args.second, args.second_mark, s.games, s.first_wins, s.second_wins, s.draws, dt.as_secs_f64()
    );

    if let Some(path) = args.out.as_ref() {
        write_records(&records, path)?;
        eprintln!("Wrote {} records to {}", records.len(), path.display());
    }
    Ok(())
}
