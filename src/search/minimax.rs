use crate::board::{Board, Mark};
use crate::search::eval::eval_terminal;
use log::{debug, warn};
use rayon::prelude::*;

#[derive(Default, Debug, Clone, Copy)]
pub struct SearchParams {
    pub threads: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<usize>,
    pub score: i32,
    pub nodes: u64,
}

/// Exhaustive minimax for one side. The board is mutated in place and every
/// placement is rolled back before the call returns.
pub struct Searcher {
    me: Mark,
    opponent: Mark,
    pub(crate) nodes: u64,
}

impl Searcher {
    pub fn new(me: Mark, opponent: Mark) -> Self { Self { me, opponent, nodes: 0 } }

    pub fn me(&self) -> Mark { self.me }

    pub fn opponent(&self) -> Mark { self.opponent }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// Best score and move for the side selected by `maximizing`. Ties keep the
    /// lowest index; terminal positions return no move.
    pub fn minimax(&mut self, board: &mut Board, maximizing: bool) -> (i32, Option<usize>) {
        self.nodes += 1;
        if let Some(score) = eval_terminal(board, self.me) { return (score, None); }

        let (mut best_score, mark) = if maximizing { (i32::MIN, self.me) } else { (i32::MAX, self.opponent) };
        let mut best = None;
        for index in board.open_cells() {
            let Some(mut placed) = board.place_scoped(index, mark) else { continue };
            let (score, _) = self.minimax(&mut placed, !maximizing);
            drop(placed);
            let improves = if maximizing { score > best_score } else { score < best_score };
            if improves { best_score = score; best = Some(index); }
        }
        (best_score, best)
    }

    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        self.nodes = 0;
        let (score, best) = self.minimax(board, true);
        debug!("minimax {}: best={:?} score={} nodes={} turn={}", self.me, best, score, self.nodes, board.turn());
        SearchResult { best, score, nodes: self.nodes }
    }

    pub fn search_with_params(&mut self, board: &mut Board, params: SearchParams) -> SearchResult {
        if params.threads <= 1 { return self.search(board); }
        match rayon::ThreadPoolBuilder::new().num_threads(params.threads).build() {
            Ok(pool) => pool.install(|| self.search_parallel(board)),
            Err(e) => {
                warn!("could not build a {}-thread pool ({e}); using the global pool", params.threads);
                self.search_parallel(board)
            }
        }
    }

    /// Root-split search: each root move is searched on its own board clone.
    /// Results are reduced in ascending index order, so the outcome matches
    /// [`Searcher::search`] exactly, node count included.
    pub fn search_parallel(&mut self, board: &Board) -> SearchResult {
        self.nodes = 1;
        if let Some(score) = eval_terminal(board, self.me) {
            return SearchResult { best: None, score, nodes: self.nodes };
        }

        let (me, opponent) = (self.me, self.opponent);
        let results: Vec<(usize, i32, u64)> = board.open_cells().par_iter().map(|&index| {
            let mut child = board.clone();
            child.place_mark(index, me);
            let mut w = Searcher::new(me, opponent);
            let (score, _) = w.minimax(&mut child, false);
            (index, score, w.nodes)
        }).collect();

        let mut best = None;
        let mut best_score = i32::MIN;
        for (index, score, n) in results {
            self.nodes += n;
            if score > best_score { best_score = score; best = Some(index); }
        }
        debug!("parallel minimax {me}: best={best:?} score={best_score} nodes={}", self.nodes);
        SearchResult { best, score: best_score, nodes: self.nodes }
    }
}
