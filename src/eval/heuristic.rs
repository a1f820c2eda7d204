//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores a position by scanning every line of length >= 5 (rows, columns,
//! both diagonal families) for the shapes in the pattern table. Both sides
//! are scored with the same mechanism; the result is the difference with
//! the opponent's total discounted, so threats are answered but the engine
//! keeps a slight preference for pressing its own attack.

use crate::board::{Board, Player};

use super::patterns::{OPPONENT_DISCOUNT, PATTERN_TABLE};

/// Evaluate the board from the perspective of `player`.
///
/// Positive favors `player`, negative favors the opponent. The value is
/// heuristic: it ranks positions, it does not prove anything. Terminal
/// positions are the search's business, not the evaluator's.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let own = score_player(board, player);
    let opp = score_player(board, player.opponent());
    own - (f64::from(opp) * OPPONENT_DISCOUNT).round() as i32
}

/// Total pattern score for one side across all lines
fn score_player(board: &Board, player: Player) -> i32 {
    lines(board)
        .iter()
        .map(|line| score_line(&encode_line(line, player)))
        .sum()
}

/// Encode a line of raw cells for matching: the scored player's stones
/// become `1`, opponent stones `2`, empties `0`.
fn encode_line(cells: &[i8], player: Player) -> Vec<u8> {
    let sign = player.sign();
    cells
        .iter()
        .map(|&cell| {
            if cell == sign {
                b'1'
            } else if cell == -sign {
                b'2'
            } else {
                b'0'
            }
        })
        .collect()
}

/// Sum of weight x overlapping-occurrence-count over the pattern table
fn score_line(encoded: &[u8]) -> i32 {
    let mut score = 0;
    for &(pattern, weight) in PATTERN_TABLE {
        if pattern.len() > encoded.len() {
            continue;
        }
        let count = encoded
            .windows(pattern.len())
            .filter(|window| *window == pattern)
            .count() as i32;
        score += count * weight;
    }
    score
}

/// Extract every scorable line: all rows and columns, plus the diagonals
/// and anti-diagonals long enough to hold a five.
fn lines(board: &Board) -> Vec<Vec<i8>> {
    let size = board.size();
    let mut lines: Vec<Vec<i8>> = Vec::with_capacity(6 * size);

    for i in 0..size {
        lines.push((0..size).map(|col| board.cell(i, col)).collect());
        lines.push((0..size).map(|row| board.cell(row, i)).collect());
    }

    // Diagonals (top-left to bottom-right), indexed by row - col
    for d in -(size as i32 - 1)..size as i32 {
        let diag: Vec<i8> = (0..size as i32)
            .filter(|&row| row - d >= 0 && row - d < size as i32)
            .map(|row| board.cell(row as usize, (row - d) as usize))
            .collect();
        if diag.len() >= 5 {
            lines.push(diag);
        }
    }

    // Anti-diagonals (top-right to bottom-left), indexed by row + col
    for d in 0..(2 * size as i32 - 1) {
        let anti: Vec<i8> = (0..size as i32)
            .filter(|&row| d - row >= 0 && d - row < size as i32)
            .map(|row| board.cell(row as usize, (d - row) as usize))
            .collect();
        if anti.len() >= 5 {
            lines.push(anti);
        }
    }

    lines
}
