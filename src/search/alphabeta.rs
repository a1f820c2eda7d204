//! Minimax search with alpha-beta pruning and iterative deepening
//!
//! The search explores candidate moves near the existing stones, applying
//! each move in place and undoing it after the recursive call returns.
//! Every successful `place` is paired with exactly one `undo` on every
//! path through a node, including beta cutoffs and deadline exits; the
//! board handed in is bit-for-bit restored when the search returns.
//!
//! Time limits are soft: the clock is read once per node and once per
//! deepening iteration, so a slow leaf can overrun the nominal deadline.
//! An expired clock truncates the search and propagates the best partial
//! result - it is a control signal, never an error.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use gomoku_ai::board::{Board, Player, Pos};
//! use gomoku_ai::search::Searcher;
//!
//! let mut board = Board::new(15);
//! board.place(Pos::new(7, 7), Player::Black);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&mut board, Player::White, 2, Duration::from_millis(500));
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Player, Pos};
use crate::eval::evaluate;

/// Sentinel score for a decided game. Stands in for infinity: far above
/// any sum the heuristic evaluator can produce, so a found win always
/// dominates heuristic preferences.
pub const WIN_SCORE: i32 = 1_000_000_000;

/// Infinite bound for the initial alpha-beta window
const INF: i32 = i32::MAX;

/// Candidate generation radius around existing stones
const CANDIDATE_RADIUS: usize = 2;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; absent only when no iteration produced a move
    pub best_move: Option<Pos>,
    /// Value of the best move from the root player's perspective
    pub score: i32,
    /// Deepest completed iteration that produced the move
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Minimax searcher with iterative deepening.
///
/// Holds only per-search statistics; all position state lives on the
/// `Board`, which the searcher mutates in place and restores via undo.
/// One searcher drives one board at a time.
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Search for the best move using iterative deepening.
    ///
    /// Runs depth-limited minimax at depth 1, 2, ... up to `max_depth`,
    /// stopping when the wall-clock budget runs out. Each completed
    /// iteration supersedes the previous one, so the deepest finished
    /// answer wins; a found win sentinel stops deepening immediately since
    /// certainty cannot be improved.
    ///
    /// With a zero budget (or no legal moves) the result carries no move
    /// and the caller is expected to fall back to any legal candidate.
    #[must_use]
    pub fn search(
        &mut self,
        board: &mut Board,
        player: Player,
        max_depth: u8,
        time_limit: Duration,
    ) -> SearchResult {
        self.nodes = 0;
        let start = Instant::now();
        let deadline = start + time_limit;

        let mut best = SearchResult {
            best_move: None,
            score: -INF,
            depth: 0,
            nodes: 0,
        };

        for depth in 1..=max_depth {
            if Instant::now() >= deadline {
                break;
            }

            let (score, mov) = self.minimax(board, depth, -INF, INF, true, player, deadline);

            if let Some(mov) = mov {
                best.best_move = Some(mov);
                best.score = score;
                best.depth = depth;
            }

            debug!(
                "depth {}: score {} move {:?} nodes {} elapsed {:?}",
                depth,
                score,
                best.best_move,
                self.nodes,
                start.elapsed()
            );

            // A forced win is exact; deeper search cannot improve on it
            if score == WIN_SCORE {
                break;
            }
        }

        best.nodes = self.nodes;
        best
    }

    /// Depth-and-bound minimax step.
    ///
    /// Terminal states are checked before anything else: a completed game
    /// is exact knowledge and overrides both the depth and the time limit.
    /// Heuristic leaves (depth exhausted, full board, expired clock) are
    /// scored by the evaluator from the root player's perspective.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root: Player,
        deadline: Instant,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if let Some(winner) = board.winner() {
            let score = if winner == root { WIN_SCORE } else { -WIN_SCORE };
            return (score, None);
        }

        if depth == 0 || board.is_full() || Instant::now() >= deadline {
            return (evaluate(board, root), None);
        }

        let mover = if maximizing { root } else { root.opponent() };
        let moves = self.order_moves(board, mover);
        let mut best_move = None;

        if maximizing {
            let mut value = -INF;
            for mov in moves {
                if !board.place(mov, mover) {
                    continue;
                }
                let (score, _) = self.minimax(board, depth - 1, alpha, beta, false, root, deadline);
                board.undo();

                if score > value {
                    value = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(value);
                if beta <= alpha || Instant::now() >= deadline {
                    break;
                }
            }
            (value, best_move)
        } else {
            let mut value = INF;
            for mov in moves {
                if !board.place(mov, mover) {
                    continue;
                }
                let (score, _) = self.minimax(board, depth - 1, alpha, beta, true, root, deadline);
                board.undo();

                if score < value {
                    value = score;
                    best_move = Some(mov);
                }
                beta = beta.min(value);
                if beta <= alpha || Instant::now() >= deadline {
                    break;
                }
            }
            (value, best_move)
        }
    }

    /// Candidate moves for `mover`, strongest first.
    ///
    /// Each candidate is pre-scored by a one-ply lookahead: place it,
    /// evaluate from the mover's own perspective, undo. The ordering only
    /// sharpens pruning; correctness does not depend on it.
    fn order_moves(&self, board: &mut Board, mover: Player) -> Vec<Pos> {
        let candidates = board.candidate_moves(CANDIDATE_RADIUS);

        let mut scored: Vec<(i32, Pos)> = Vec::with_capacity(candidates.len());
        for mov in candidates {
            if board.place(mov, mover) {
                let score = evaluate(board, mover);
                board.undo();
                scored.push((score, mov));
            }
        }

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, mov)| mov).collect()
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(board: &Board) -> Vec<i8> {
        let mut cells = Vec::with_capacity(board.size() * board.size());
        for row in 0..board.size() {
            for col in 0..board.size() {
                cells.push(board.cell(row, col));
            }
        }
        cells
    }

    #[test]
    fn test_search_empty_board_plays_center() {
        let mut board = Board::new(15);
        let mut searcher = Searcher::new();

        let result = searcher.search(&mut board, Player::Black, 2, Duration::from_secs(5));
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_search_takes_winning_completion() {
        // Black has four at (0,0)..(0,3); the fifth stone ends the game
        let mut board = Board::new(10);
        for col in 0..4 {
            board.place(Pos::new(0, col), Player::Black);
        }

        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, Player::Black, 2, Duration::from_secs(10));

        assert_eq!(result.best_move, Some(Pos::new(0, 4)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_search_blocks_closed_four() {
        // White's four hugs the edge, so (5,4) is the only completion;
        // every other black reply loses on the spot.
        let mut board = Board::new(10);
        for col in 0..4 {
            board.place(Pos::new(5, col), Player::White);
        }
        board.place(Pos::new(7, 5), Player::Black);

        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, Player::Black, 2, Duration::from_secs(10));

        assert_eq!(result.best_move, Some(Pos::new(5, 4)));
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::new(10);
        board.place(Pos::new(4, 4), Player::Black);
        board.place(Pos::new(5, 5), Player::White);
        board.place(Pos::new(4, 5), Player::Black);
        let cells = snapshot(&board);

        let mut searcher = Searcher::new();
        let _ = searcher.search(&mut board, Player::White, 3, Duration::from_secs(5));

        assert_eq!(snapshot(&board), cells, "place/undo pairing must restore the board");
        assert_eq!(board.stone_count(), 3);
        assert_eq!(board.last_move(), Some(Pos::new(4, 5)));
    }

    #[test]
    fn test_zero_time_budget_yields_no_move() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Player::Black);

        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, Player::White, 4, Duration::ZERO);

        assert_eq!(result.best_move, None);
        assert_eq!(result.depth, 0);
    }

    #[test]
    fn test_deep_search_terminates_under_budget() {
        // An oversized depth with a small clock must come back promptly
        // with the deepest completed iteration (possibly none), and any
        // returned move must be legal.
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Player::Black);
        board.place(Pos::new(8, 8), Player::White);
        board.place(Pos::new(7, 8), Player::Black);

        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, Player::White, 30, Duration::from_millis(200));

        if let Some(mov) = result.best_move {
            assert!(board.is_empty(mov));
            assert!(result.depth >= 1);
        }
    }

    #[test]
    fn test_order_moves_puts_win_first() {
        let mut board = Board::new(10);
        for col in 0..4 {
            board.place(Pos::new(0, col), Player::Black);
        }

        let mut searcher = Searcher::new();
        let moves = searcher.order_moves(&mut board, Player::Black);

        assert_eq!(moves.first(), Some(&Pos::new(0, 4)), "completion must sort first");
    }

    #[test]
    fn test_search_on_won_board_reports_terminal() {
        let mut board = Board::new(10);
        for col in 0..5 {
            board.place(Pos::new(0, col), Player::Black);
        }

        let mut searcher = Searcher::new();
        let result = searcher.search(&mut board, Player::Black, 3, Duration::from_secs(1));

        // Terminal at the root: no move to make, sentinel score propagated
        assert_eq!(result.best_move, None);
    }
}
