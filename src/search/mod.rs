//! Search module for the Gomoku engine
//!
//! Contains the depth-limited minimax search with alpha-beta pruning and
//! the time-bounded iterative-deepening driver on top of it.

pub mod alphabeta;

pub use alphabeta::{SearchResult, Searcher, WIN_SCORE};
