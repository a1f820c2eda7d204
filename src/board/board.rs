//! Board structure with move history and win detection

use super::{Player, Pos, DEFAULT_BOARD_SIZE, WIN_LENGTH};

/// Direction vectors for line checking (4 axes).
/// Each axis is scanned in both signs from the anchor stone.
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Game board: a flat signed grid plus the ordered move history.
///
/// The history is what makes the board cheap to search with: `place` and
/// `undo` are a push/pop pair, and win detection only ever inspects the
/// most recently played stone. Every successful `place` during search must
/// be matched by exactly one `undo`.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// `size * size` cells, +1 black / -1 white / 0 empty
    grid: Vec<i8>,
    /// Played positions in order, for undo and last-move win scans
    moves: Vec<Pos>,
}

impl Board {
    /// Create an empty board of the given size.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            grid: vec![0; size * size],
            moves: Vec::with_capacity(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    /// Check that signed coordinates fall on the board
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.size as i32 && col >= 0 && col < self.size as i32
    }

    /// Raw signed cell value: +1 black, -1 white, 0 empty
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> i8 {
        self.grid[row * self.size + col]
    }

    /// Stone at position, `None` if empty
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        Player::from_sign(self.grid[self.index(pos)])
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.grid[self.index(pos)] == 0
    }

    /// Place a stone.
    ///
    /// Returns `false` without mutating anything if the position is out of
    /// bounds or occupied. On success the move is appended to the history.
    pub fn place(&mut self, pos: Pos, player: Player) -> bool {
        if !self.in_bounds(i32::from(pos.row), i32::from(pos.col)) || !self.is_empty(pos) {
            return false;
        }
        let idx = self.index(pos);
        self.grid[idx] = player.sign();
        self.moves.push(pos);
        true
    }

    /// Undo the most recent move. Silent no-op on an empty history.
    pub fn undo(&mut self) {
        if let Some(pos) = self.moves.pop() {
            let idx = self.index(pos);
            self.grid[idx] = 0;
        }
    }

    /// Most recently played position, if any
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.moves.last().copied()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.moves.len()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.moves.len() == self.size * self.size
    }

    /// Winner of the game, if the last move completed five in a row.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner_line().map(|(player, _)| player)
    }

    /// Winner together with the full winning run, sorted end to end.
    ///
    /// Only the last played stone is inspected: any five-in-a-row must run
    /// through it, so the four axes are scanned outward in both signs from
    /// that anchor. Returns `None` when no axis reaches five.
    #[must_use]
    pub fn winner_line(&self) -> Option<(Player, Vec<Pos>)> {
        let anchor = self.last_move()?;
        let player = self.get(anchor)?;

        for &(dr, dc) in &DIRECTIONS {
            let mut line = vec![anchor];
            self.collect_run(anchor, dr, dc, player, &mut line);
            self.collect_run(anchor, -dr, -dc, player, &mut line);

            if line.len() >= WIN_LENGTH {
                line.sort();
                return Some((player, line));
            }
        }
        None
    }

    /// Append the contiguous same-player stones beyond `from` in one direction
    fn collect_run(&self, from: Pos, dr: i32, dc: i32, player: Player, acc: &mut Vec<Pos>) {
        let mut r = i32::from(from.row) + dr;
        let mut c = i32::from(from.col) + dc;
        while self.in_bounds(r, c) && self.cell(r as usize, c as usize) == player.sign() {
            acc.push(Pos::new(r as u8, c as u8));
            r += dr;
            c += dc;
        }
    }

    /// Generate candidate moves near existing stones.
    ///
    /// An empty board yields the single center cell. Otherwise the bounding
    /// box of all played stones is expanded by `radius` (clamped to the
    /// board) and every empty cell inside it with at least one occupied
    /// neighbor within Chebyshev distance `radius` is a candidate. This
    /// keeps the branching factor bound to the active region instead of the
    /// whole board.
    #[must_use]
    pub fn candidate_moves(&self, radius: usize) -> Vec<Pos> {
        if self.moves.is_empty() {
            let mid = (self.size / 2) as u8;
            return vec![Pos::new(mid, mid)];
        }

        let r = radius as i32;
        let mut min_row = i32::MAX;
        let mut max_row = i32::MIN;
        let mut min_col = i32::MAX;
        let mut max_col = i32::MIN;
        for pos in &self.moves {
            min_row = min_row.min(i32::from(pos.row));
            max_row = max_row.max(i32::from(pos.row));
            min_col = min_col.min(i32::from(pos.col));
            max_col = max_col.max(i32::from(pos.col));
        }
        let min_row = (min_row - r).max(0);
        let max_row = (max_row + r).min(self.size as i32 - 1);
        let min_col = (min_col - r).max(0);
        let max_col = (max_col + r).min(self.size as i32 - 1);

        let mut candidates = Vec::new();
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                if self.cell(row as usize, col as usize) != 0 {
                    continue;
                }
                if self.has_neighbor(row, col, r) {
                    candidates.push(Pos::new(row as u8, col as u8));
                }
            }
        }
        candidates
    }

    /// Any stone within Chebyshev distance `radius` of (row, col)?
    fn has_neighbor(&self, row: i32, col: i32, radius: i32) -> bool {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (nr, nc) = (row + dr, col + dc);
                if self.in_bounds(nr, nc) && self.cell(nr as usize, nc as usize) != 0 {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}
