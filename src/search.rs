use log::debug;

use crate::board::{Board, Color};
use crate::evaluation::Evaluator;
use crate::movegen::{self, Move};

// Saturating stand-in for an unbounded score. Comfortably above any total the
// evaluator can produce (king value times every square).
pub const INFINITY: i32 = 10_000_000;

pub struct Search {
    evaluator: Evaluator,
    nodes_searched: u64,
}

impl Search {
    pub fn new() -> Self {
        Self {
            evaluator: Evaluator::new(),
            nodes_searched: 0,
        }
    }

    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    // Full-width search. White maximizes, Black minimizes; a node with no
    // legal continuation keeps its starting sentinel.
    pub fn minimax(&mut self, board: &Board, depth: u32, maximizing: bool) -> i32 {
        self.nodes_searched += 1;
        if depth == 0 {
            return self.evaluator.evaluate(board);
        }

        let color = if maximizing { Color::White } else { Color::Black };
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for (from, _) in board.pieces(color) {
            for to in movegen::pseudo_legal_moves(board, from) {
                let mut child = board.clone();
                if !child.apply_move(from, to) {
                    continue;
                }
                let score = self.minimax(&child, depth - 1, !maximizing);
                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }
        }
        best
    }

    // Same traversal as minimax, with a [alpha, beta] window. Siblings are
    // abandoned once the window closes; the returned value matches minimax
    // when called with the full window.
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes_searched += 1;
        if depth == 0 {
            return self.evaluator.evaluate(board);
        }

        let color = if maximizing { Color::White } else { Color::Black };
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        'pieces: for (from, _) in board.pieces(color) {
            for to in movegen::pseudo_legal_moves(board, from) {
                let mut child = board.clone();
                if !child.apply_move(from, to) {
                    continue;
                }
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing);
                if maximizing {
                    best = best.max(score);
                    alpha = alpha.max(score);
                } else {
                    best = best.min(score);
                    beta = beta.min(score);
                }
                if beta <= alpha {
                    break 'pieces;
                }
            }
        }
        best
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    Minimax,
    AlphaBeta,
}

pub struct Bot {
    color: Color,
    depth: u32,
    strategy: SearchStrategy,
    search: Search,
}

impl Bot {
    pub fn new(color: Color, depth: u32, strategy: SearchStrategy) -> Self {
        Self {
            color,
            depth,
            strategy,
            search: Search::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    // Scores every legal root move one ply down from the opponent's side and
    // keeps the first strict improvement. None when no root move is legal.
    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.search.nodes_searched = 0;
        let maximizing_reply = self.color == Color::Black;
        let mut best_move = None;
        let mut best_score = if self.color == Color::White {
            -INFINITY
        } else {
            INFINITY
        };
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;

        'pieces: for (from, _) in board.pieces(self.color) {
            for to in movegen::pseudo_legal_moves(board, from) {
                let mut child = board.clone();
                if !child.apply_move(from, to) {
                    continue;
                }
                let score = match self.strategy {
                    SearchStrategy::Minimax => {
                        self.search.minimax(&child, self.depth - 1, maximizing_reply)
                    }
                    SearchStrategy::AlphaBeta => {
                        self.search
                            .alpha_beta(&child, self.depth - 1, alpha, beta, maximizing_reply)
                    }
                };
                match self.color {
                    Color::White => {
                        if score > best_score {
                            best_score = score;
                            best_move = Some(Move::new(from, to));
                        }
                        alpha = alpha.max(score);
                    }
                    Color::Black => {
                        if score < best_score {
                            best_score = score;
                            best_move = Some(Move::new(from, to));
                        }
                        beta = beta.min(score);
                    }
                }
                // The window only prunes in the alpha-beta variant.
                if self.strategy == SearchStrategy::AlphaBeta && beta <= alpha {
                    break 'pieces;
                }
            }
        }

        debug!(
            "{} bot searched {} nodes, best score {}",
            self.color,
            self.search.nodes_searched(),
            best_score
        );
        best_move
    }
}
