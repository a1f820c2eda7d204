//! Interactive terminal front end
//!
//! A minimal turn loop: the human plays black via `row col` input, the
//! engine answers as white. Board dumps and input parsing live here - the
//! core engine knows nothing about text.

use std::io::{self, Write};

use crate::board::{Board, Player, Pos};
use crate::engine::{Engine, EngineConfig};

/// Run a terminal game until someone wins, the board fills up, or stdin
/// closes.
pub fn play(size: usize, config: EngineConfig) -> io::Result<()> {
    let mut board = Board::new(size);
    let mut engine = Engine::new(config);
    let mut current = Player::Black;

    println!("Gomoku - you are X (black). Enter moves as: row col");

    loop {
        print_board(&board);

        if let Some((winner, _)) = board.winner_line() {
            match winner {
                Player::Black => println!("You win!"),
                Player::White => println!("AI wins!"),
            }
            break;
        }
        if board.is_full() {
            println!("Draw!");
            break;
        }

        if current == Player::Black {
            print!("Your move: ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                // stdin closed
                println!();
                break;
            }

            match parse_move(&line, size) {
                Ok(pos) => {
                    if !board.place(pos, current) {
                        println!("Invalid move. Try again.");
                        continue;
                    }
                }
                Err(e) => {
                    println!("Error: {e}");
                    continue;
                }
            }
        } else {
            println!("AI thinking...");
            match engine.choose_move(&mut board, current) {
                Ok(pos) => {
                    board.place(pos, current);
                    println!("AI plays: {} {}", pos.row, pos.col);
                }
                Err(e) => {
                    println!("Engine error: {e}");
                    break;
                }
            }
        }

        current = current.opponent();
    }

    Ok(())
}

/// Parse a move typed as `row col`
fn parse_move(input: &str, size: usize) -> Result<Pos, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("enter move as: row col".to_string());
    }

    let row: usize = parts[0]
        .parse()
        .map_err(|_| format!("'{}' is not a number", parts[0]))?;
    let col: usize = parts[1]
        .parse()
        .map_err(|_| format!("'{}' is not a number", parts[1]))?;

    if row >= size || col >= size {
        return Err(format!("coordinates must be in range [0,{}]", size - 1));
    }

    Ok(Pos::new(row as u8, col as u8))
}

/// Print the board with row/column headers
fn print_board(board: &Board) {
    print!("   ");
    for col in 0..board.size() {
        print!("{col:2} ");
    }
    println!();

    for row in 0..board.size() {
        print!("{row:2} ");
        for col in 0..board.size() {
            let ch = match Player::from_sign(board.cell(row, col)) {
                Some(Player::Black) => " X ",
                Some(Player::White) => " O ",
                None => " . ",
            };
            print!("{ch}");
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_valid() {
        assert_eq!(parse_move("3 4", 15), Ok(Pos::new(3, 4)));
        assert_eq!(parse_move("  0   14 \n", 15), Ok(Pos::new(0, 14)));
    }

    #[test]
    fn test_parse_move_wrong_arity() {
        assert!(parse_move("3", 15).is_err());
        assert!(parse_move("3 4 5", 15).is_err());
        assert!(parse_move("", 15).is_err());
    }

    #[test]
    fn test_parse_move_not_a_number() {
        assert!(parse_move("a b", 15).is_err());
        assert!(parse_move("3 x", 15).is_err());
    }

    #[test]
    fn test_parse_move_out_of_range() {
        assert!(parse_move("15 0", 15).is_err());
        assert!(parse_move("0 15", 15).is_err());
    }
}
