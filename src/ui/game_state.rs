//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::{Board, Player, Pos};
use crate::engine::{Engine, EngineConfig, EngineError};
use crate::search::SearchResult;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Player::Black,
        }
    }
}

/// AI computation state.
///
/// The engine runs on a worker thread so the event loop stays responsive;
/// the result comes back over a channel and is polled every frame.
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<(Pos, SearchResult), EngineError>>,
        start_time: Instant,
    },
}

/// How the game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Win { winner: Player, line: Vec<Pos> },
    Draw,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Player,
    pub outcome: Option<GameOutcome>,
    pub last_ai_result: Option<SearchResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    /// Engine knobs, loaded from gomoku.toml when present
    pub engine_config: EngineConfig,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::default(),
            mode,
            current_turn: Player::Black,
            outcome: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            engine_config: EngineConfig::load_or_default(),
        }
    }

    /// Start over, keeping mode and engine configuration
    pub fn reset(&mut self) {
        self.board = Board::default();
        self.current_turn = Player::Black;
        self.outcome = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.outcome.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        if !self.board.is_empty(pos) {
            return Err("Cell is occupied".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let player = self.current_turn;

        if !self.board.place(pos, player) {
            self.message = Some("Invalid move".to_string());
            return;
        }

        self.suggested_move = None;
        self.move_timer.stop();

        if let Some((winner, line)) = self.board.winner_line() {
            self.outcome = Some(GameOutcome::Win { winner, line });
            return;
        }
        if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            return;
        }

        self.current_turn = player.opponent();
        self.move_timer.start();
        self.message = None;
    }

    /// Undo the last move (human + AI pair in PvE)
    pub fn undo(&mut self) {
        if self.board.stone_count() == 0 || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.board.stone_count() >= 2 => 2,
            _ => 1,
        };
        for _ in 0..undo_count {
            self.board.undo();
        }

        self.outcome = None;
        self.suggested_move = None;
        self.message = None;
        // Black always opens, so history parity determines the turn
        self.current_turn = if self.board.stone_count() % 2 == 0 {
            Player::Black
        } else {
            Player::White
        };
        self.move_timer.start();
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.outcome.is_some() {
            return;
        }

        let mut board = self.board.clone();
        let player = self.current_turn;
        let config = self.engine_config;

        let (tx, rx) = channel();
        thread::spawn(move || {
            let mut engine = Engine::new(config);
            let result = engine.choose_move_with_stats(&mut board, player);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Poll for a finished AI move
    pub fn check_ai_result(&mut self) {
        let finished = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI thread died".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((result, elapsed)) = finished {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);

            match result {
                Ok((pos, stats)) => {
                    self.last_ai_result = Some(stats);
                    self.execute_move(pos);
                }
                Err(e) => {
                    self.message = Some(format!("AI error: {e}"));
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request a quick move suggestion (PvP hint)
    pub fn request_suggestion(&mut self) {
        if self.outcome.is_some() || self.is_ai_thinking() {
            return;
        }

        // Shallow and fast; runs inline
        let mut engine = Engine::new(EngineConfig {
            max_depth: 2,
            time_limit_ms: 200,
        });
        match engine.choose_move_with_stats(&mut self.board, self.current_turn) {
            Ok((pos, stats)) => {
                self.suggested_move = Some(pos);
                self.last_ai_result = Some(stats);
            }
            Err(_) => {
                self.message = Some("No suggestion available".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_turn_tracking() {
        let state = GameState::new(GameMode::PvE {
            human_color: Player::Black,
        });
        assert!(state.is_human_turn());
        assert!(!state.is_ai_turn());

        let state = GameState::new(GameMode::PvE {
            human_color: Player::White,
        });
        assert!(!state.is_human_turn());
        assert!(state.is_ai_turn());
    }

    #[test]
    fn test_place_and_win_detection() {
        let mut state = GameState::new(GameMode::PvP);
        // Black and white alternate; black builds a row at 7, white at 9
        for col in 0..4 {
            state.try_place_stone(Pos::new(7, col)).unwrap();
            state.try_place_stone(Pos::new(9, col)).unwrap();
        }
        assert!(state.outcome.is_none());

        state.try_place_stone(Pos::new(7, 4)).unwrap();
        match &state.outcome {
            Some(GameOutcome::Win { winner, line }) => {
                assert_eq!(*winner, Player::Black);
                assert_eq!(line.len(), 5);
            }
            other => panic!("expected black win, got {other:?}"),
        }

        // Further placement is rejected
        assert!(state.try_place_stone(Pos::new(9, 4)).is_err());
    }

    #[test]
    fn test_undo_restores_turn_parity() {
        let mut state = GameState::new(GameMode::PvP);
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.try_place_stone(Pos::new(7, 8)).unwrap();
        assert_eq!(state.current_turn, Player::Black);

        state.undo();
        assert_eq!(state.board.stone_count(), 1);
        assert_eq!(state.current_turn, Player::White);

        state.undo();
        assert_eq!(state.board.stone_count(), 0);
        assert_eq!(state.current_turn, Player::Black);

        // Undo on an empty board stays a no-op
        state.undo();
        assert_eq!(state.board.stone_count(), 0);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new(GameMode::PvP);
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert!(state.try_place_stone(Pos::new(7, 7)).is_err());
        assert_eq!(state.board.stone_count(), 1);
    }
}
