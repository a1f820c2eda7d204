//! Evaluation module for Gomoku positions
//!
//! Provides pattern recognition and scoring for board positions. Each side
//! is scored independently by scanning every line through the board for
//! recognized stone shapes; the final value is the difference, with the
//! opponent's threats slightly discounted.

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{PatternScore, OPPONENT_DISCOUNT, PATTERN_TABLE};
