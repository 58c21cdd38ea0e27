use clap::Parser;
use tictactoe::search::minimax::{SearchParams, Searcher};
use tictactoe::search::opening::book_move;
use tictactoe::{Board, Mark};

#[derive(Parser, Debug)]
#[command(name = "tictactoe-analyze", version, about = "Score a tic-tac-toe position with exhaustive minimax")]
struct Args {
    /// Nine cells row by row, e.g. "XX./XO./..O" ('.' for empty, '/' ignored)
    #[arg(long, default_value = ".........")]
    layout: String,

    /// Mark to search for; defaults to the side whose turn it is
    #[arg(long)]
    to_move: Option<Mark>,

    #[arg(long, default_value = "X")]
    first_mark: Mark,

    #[arg(long, default_value = "O")]
    second_mark: Mark,

    /// Threads for root-split search
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let marks = [args.first_mark, args.second_mark];
    let mut board = Board::from_layout(&args.layout, marks)?;
    let me = args.to_move.unwrap_or(marks[board.turn() % 2]);
    if !marks.contains(&me) { anyhow::bail!("--to-move must be one of {} or {}", marks[0], marks[1]); }
    let opponent = if me == marks[0] { marks[1] } else { marks[0] };

    println!("{board}\n");
    if let Some(book) = book_move(&board) {
        println!("book move: {book}");
    }
    let mut searcher = Searcher::new(me, opponent);
    let res = searcher.search_with_params(&mut board, SearchParams { threads: args.threads.max(1) });
    let best = res.best.map_or_else(|| "(none)".to_string(), |b| b.to_string());
    println!("side={me} bestmove={best} score={} nodes={}", res.score, res.nodes);
    Ok(())
}
