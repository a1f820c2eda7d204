//! Engine facade tying board, evaluator and search together
//!
//! This is the surface a front end talks to: configure depth and time
//! budget, hand over a board and a color, get a move back. The engine owns
//! the searcher; the board stays owned by the caller and is restored to
//! its input state after every call.
//!
//! # Example
//!
//! ```
//! use gomoku_ai::board::{Board, Player, Pos};
//! use gomoku_ai::engine::{Engine, EngineConfig};
//!
//! let mut board = Board::new(15);
//! board.place(Pos::new(7, 7), Player::Black);
//!
//! let mut engine = Engine::new(EngineConfig { max_depth: 2, time_limit_ms: 500 });
//! let reply = engine.choose_move(&mut board, Player::White).unwrap();
//! assert!(board.place(reply, Player::White));
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Player, Pos};
use crate::search::{SearchResult, Searcher};

/// Optional configuration file read by the front ends
pub const CONFIG_FILE: &str = "gomoku.toml";

/// Candidate radius used for the fallback move when the search comes back
/// empty-handed (zero budget, for instance)
const FALLBACK_RADIUS: usize = 2;

/// Errors surfaced by the engine.
///
/// Illegal placements are not errors (the board reports them as a plain
/// `false`), and a blown time budget is not one either - it just truncates
/// the search. The only failure is being asked for a move when none exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The board offers no candidate moves; the caller should have checked
    /// `winner()` / `is_full()` before asking.
    #[error("no legal moves available")]
    NoMoves,
}

/// Engine tuning knobs, adjustable between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth ceiling per move
    pub max_depth: u8,
    /// Wall-clock budget per move in milliseconds (soft limit)
    pub time_limit_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            time_limit_ms: 2000,
        }
    }
}

impl EngineConfig {
    /// Time budget as a `Duration`
    #[inline]
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("failed to read config file: {e}"))?;
        toml::from_str(&contents).map_err(|e| format!("failed to parse config file: {e}"))
    }

    /// Load `gomoku.toml` from the working directory, falling back to the
    /// built-in defaults when the file is missing or malformed.
    pub fn load_or_default() -> Self {
        match Self::from_file(CONFIG_FILE) {
            Ok(config) => config,
            Err(e) => {
                warn!("using default engine config: {e}");
                Self::default()
            }
        }
    }
}

/// Gomoku engine: iterative-deepening alpha-beta behind a two-knob config.
pub struct Engine {
    config: EngineConfig,
    searcher: Searcher,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            searcher: Searcher::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Set the search depth ceiling for subsequent moves.
    pub fn set_max_depth(&mut self, depth: u8) {
        self.config.max_depth = depth;
    }

    /// Set the per-move time budget for subsequent moves.
    pub fn set_time_limit(&mut self, time_limit: Duration) {
        self.config.time_limit_ms = time_limit.as_millis() as u64;
    }

    /// Choose a move for `player` on the given board.
    ///
    /// Runs the time-bounded iterative-deepening search. When the search
    /// produces nothing (zero budget), falls back to the first candidate
    /// move so a legal answer is still returned. Fails only when the board
    /// has no candidates at all.
    pub fn choose_move(&mut self, board: &mut Board, player: Player) -> Result<Pos, EngineError> {
        self.choose_move_with_stats(board, player).map(|(pos, _)| pos)
    }

    /// Like [`choose_move`](Self::choose_move), but also returns the
    /// search statistics behind the decision.
    pub fn choose_move_with_stats(
        &mut self,
        board: &mut Board,
        player: Player,
    ) -> Result<(Pos, SearchResult), EngineError> {
        let result = self.analyze(board, player);

        if let Some(best_move) = result.best_move {
            info!(
                "chose {:?} at depth {} (score {}, {} nodes)",
                best_move, result.depth, result.score, result.nodes
            );
            return Ok((best_move, result));
        }

        // Best-effort fallback: any legal candidate beats no answer
        let fallback = board
            .candidate_moves(FALLBACK_RADIUS)
            .into_iter()
            .next()
            .ok_or(EngineError::NoMoves)?;
        info!("search produced no move, falling back to {fallback:?}");
        Ok((fallback, result))
    }

    /// Run the search and return the raw result with statistics.
    ///
    /// Unlike [`choose_move`](Self::choose_move) this does not apply the
    /// fallback policy; `best_move` may be absent.
    #[must_use]
    pub fn analyze(&mut self, board: &mut Board, player: Player) -> SearchResult {
        self.searcher.search(
            board,
            player,
            self.config.max_depth,
            self.config.time_limit(),
        )
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.time_limit_ms, 2000);
        assert_eq!(config.time_limit(), Duration::from_secs(2));
    }

    #[test]
    fn test_config_parses_partial_toml() {
        let config: EngineConfig = toml::from_str("max_depth = 6").unwrap();
        assert_eq!(config.max_depth, 6);
        assert_eq!(config.time_limit_ms, 2000, "missing fields use defaults");
    }

    #[test]
    fn test_engine_setters() {
        let mut engine = Engine::default();
        engine.set_max_depth(6);
        engine.set_time_limit(Duration::from_millis(250));
        assert_eq!(engine.config().max_depth, 6);
        assert_eq!(engine.config().time_limit_ms, 250);
    }

    #[test]
    fn test_choose_move_empty_board_center() {
        let mut board = Board::new(15);
        let mut engine = Engine::new(EngineConfig {
            max_depth: 2,
            time_limit_ms: 5000,
        });

        let mov = engine.choose_move(&mut board, Player::Black).unwrap();
        assert_eq!(mov, Pos::new(7, 7));
    }

    #[test]
    fn test_choose_move_is_always_legal() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Player::Black);
        board.place(Pos::new(8, 7), Player::White);

        let mut engine = Engine::new(EngineConfig {
            max_depth: 2,
            time_limit_ms: 5000,
        });
        let mov = engine.choose_move(&mut board, Player::Black).unwrap();
        assert!(board.place(mov, Player::Black), "chosen move must be playable");
    }

    #[test]
    fn test_choose_move_takes_immediate_win() {
        let mut board = Board::new(10);
        for col in 0..4 {
            board.place(Pos::new(0, col), Player::Black);
        }

        let mut engine = Engine::new(EngineConfig {
            max_depth: 2,
            time_limit_ms: 10_000,
        });
        let mov = engine.choose_move(&mut board, Player::Black).unwrap();
        assert_eq!(mov, Pos::new(0, 4));
    }

    #[test]
    fn test_choose_move_zero_budget_falls_back() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Player::Black);

        let mut engine = Engine::new(EngineConfig {
            max_depth: 4,
            time_limit_ms: 0,
        });
        let mov = engine.choose_move(&mut board, Player::White).unwrap();
        assert!(board.is_empty(mov), "fallback move must be legal");
    }

    #[test]
    fn test_choose_move_exhausted_board_fails() {
        // 2x2 board filled completely: no candidates left
        let mut board = Board::new(2);
        board.place(Pos::new(0, 0), Player::Black);
        board.place(Pos::new(0, 1), Player::White);
        board.place(Pos::new(1, 0), Player::Black);
        board.place(Pos::new(1, 1), Player::White);

        let mut engine = Engine::default();
        assert_eq!(
            engine.choose_move(&mut board, Player::Black),
            Err(EngineError::NoMoves)
        );
    }

    #[test]
    fn test_analyze_reports_stats() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Player::Black);

        let mut engine = Engine::new(EngineConfig {
            max_depth: 2,
            time_limit_ms: 5000,
        });
        let result = engine.analyze(&mut board, Player::White);

        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
        assert!(result.depth >= 1);
    }
}
