use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::game::player::GamePlayer;
use crate::gomoku::core::{color_to_str, Action, State};
use crate::gomoku::Gomoku;

pub fn cli_print_board(state: &State) {
    print!("{}", state.board());
}

/// Parse a move written as a row number followed by a column letter, such as `4 E` or `4e`.
pub fn parse_action(text: &str, board_size: usize) -> Result<Action> {
    let err = |reason: &str| Error::ParseAction {
        input: text.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = text.trim();
    let digits_end = trimmed
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (row_str, rest) = trimmed.split_at(digits_end);
    if row_str.is_empty() {
        return Err(err("expected a row number first"));
    }
    let row = row_str
        .parse::<usize>()
        .map_err(|e| err(&e.to_string()))?;

    let mut chars = rest.trim_start().chars();
    let col_ch = chars.next().ok_or_else(|| err("missing column letter"))?;
    if chars.next().is_some() {
        return Err(err("unexpected input after the column letter"));
    }
    if !col_ch.is_ascii_alphabetic() {
        return Err(err("column should be a letter"));
    }
    let col = (col_ch.to_ascii_uppercase() as u8 - b'A') as usize;

    if row >= board_size || col >= board_size {
        return Err(err(&format!("outside of the {}x{} board", board_size, board_size)));
    }
    Ok(Action::new(row, col))
}

/// Parse a comma separated list of moves, such as `4E,5E,4F`.
pub fn parse_actions(text: &str, board_size: usize) -> Result<Vec<Action>> {
    text.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_action(s, board_size))
        .collect()
}

fn is_quit(line: &str) -> bool {
    matches!(line, "q" | "quit" | "exit")
}

/// Reads moves from stdin. Quitting, or the end of the input, gives up the game.
pub struct GomokuPlayerCmd;
impl GamePlayer<Gomoku> for GomokuPlayerCmd {
    fn next_action(&mut self, env: &Gomoku, state: &State) -> Option<Action> {
        let player = env.player(state)?;

        println!("Current position:");
        cli_print_board(state);

        loop {
            print!("\nTurn {} (Player {}): ", state.id().len() + 1, color_to_str(Some(player)));
            let _ = io::stdout().flush();

            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    log::error!("failed to read input: {}", e);
                    return None;
                }
            }
            let line = line.trim();
            if is_quit(line) {
                return None;
            }

            let action = match parse_action(line, env.board_size()) {
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
                Ok(action) => action,
            };
            if env.possible_actions(state, player).contains(action) {
                return Some(action);
            }
            println!("invalid move");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_row_and_column_letter() {
        assert_eq!(parse_action("4 E", 19), Ok(Action::new(4, 4)));
        assert_eq!(parse_action("  12e ", 19), Ok(Action::new(12, 4)));
        assert_eq!(parse_action("0A", 19), Ok(Action::new(0, 0)));
        assert_eq!(parse_action("18 S", 19), Ok(Action::new(18, 18)));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for input in ["", "E", "4", "4 EE", "4 5", "-1 A", "4,E"] {
            assert!(
                matches!(parse_action(input, 19), Err(Error::ParseAction { .. })),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn parse_rejects_out_of_board() {
        assert!(parse_action("19 A", 19).is_err());
        assert!(parse_action("0 T", 19).is_err());
        assert!(parse_action("9 A", 9).is_err());
        assert!(parse_action("0 J", 9).is_err());
        assert_eq!(parse_action("8 I", 9), Ok(Action::new(8, 8)));
    }

    #[test]
    fn parse_move_list() {
        assert_eq!(
            parse_actions("4E, 5E,4F", 19),
            Ok(vec![Action::new(4, 4), Action::new(5, 4), Action::new(4, 5)])
        );
        assert_eq!(parse_actions("", 19), Ok(vec![]));
        assert!(parse_actions("4E,zz", 19).is_err());
    }

    #[test]
    fn board_rendering() {
        let env = Gomoku::new(crate::gomoku::GomokuConfig {
            board_size: 3,
            win_length: 3,
        })
        .unwrap();
        let state = env
            .fast_forward(env.reset(), [Action::new(0, 0), Action::new(1, 2)])
            .unwrap();
        assert_eq!(
            state.board().to_string(),
            "   A B C\n 0 O . .\n 1 . . X\n 2 . . .\n"
        );
    }
}
