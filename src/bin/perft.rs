use tictactoe::perft::{count_games, perft};
use tictactoe::{Board, Mark};
use std::time::Instant;

#[derive(clap::Parser, Debug)]
#[command(name = "tictactoe-perft", about = "Count tic-tac-toe move sequences and complete games")]
struct Args {
    /// Maximum depth to report (plies)
    #[arg(value_name = "DEPTH", default_value_t = 9)]
    depth: u32,
    /// Starting layout, e.g. "X...O...." ('.' for empty); empty board when omitted
    #[arg(long)]
    layout: Option<String>,
    #[arg(long, default_value = "X")]
    first_mark: Mark,
    #[arg(long, default_value = "O")]
    second_mark: Mark,
    /// Also enumerate every complete game and split by outcome
    #[arg(long, default_value_t = false)]
    games: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    env_logger::init();
    let args = Args::parse();
    let marks = [args.first_mark, args.second_mark];
    let mut board = match args.layout.as_deref() {
        Some(layout) => Board::from_layout(layout, marks)?,
        None => Board::new(),
    };

    for depth in 1..=args.depth {
        let t0 = Instant::now();
        let nodes = perft(&mut board, marks, depth);
        println!("perft {depth}: {nodes} ({:.3}s)", t0.elapsed().as_secs_f64());
    }

    if args.games {
        let t0 = Instant::now();
        let c = count_games(&mut board, marks);
        println!(
            "games: {} ({} wins: {}, {} wins: {}, draws: {}) ({:.3}s)",
            c.total, marks[0], c.first_wins, marks[1], c.second_wins, c.draws, t0.elapsed().as_secs_f64()
        );
    }
    Ok(())
}
