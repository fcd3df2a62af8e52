//! Win detection for freestyle gomoku
//!
//! Only the four lines through the last played stone are scanned. A line of `win_length` or more
//! stones of the mover wins, overlines included.

use crate::game::GameColor;
use crate::gomoku::core::{Action, Board};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Continue,
    Draw,
    Win,
}

/// Row, column, main diagonal and anti diagonal.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Number of consecutive `color` stones starting next to `action` and walking along `(dr, dc)`.
fn ray_extent(board: &Board, color: GameColor, action: Action, (dr, dc): (isize, isize)) -> usize {
    let size = board.size() as isize;
    let mut r = action.row as isize + dr;
    let mut c = action.col as isize + dc;
    let mut extent = 0;
    while (0..size).contains(&r)
        && (0..size).contains(&c)
        && board.has_stone(Action::new(r as usize, c as usize), color)
    {
        extent += 1;
        r += dr;
        c += dc;
    }
    extent
}

/// Length of the contiguous run of `color` stones through `action` along a direction, in both
/// senses. Zero if `action` itself is not a `color` stone.
pub fn run_length(board: &Board, color: GameColor, action: Action, dir: (isize, isize)) -> usize {
    if !board.has_stone(action, color) {
        return 0;
    }
    let (dr, dc) = dir;
    1 + ray_extent(board, color, action, (dr, dc)) + ray_extent(board, color, action, (-dr, -dc))
}

/// Classify the move `action` just played by `color`.
///
/// The mover can't lose by its own move, so there is no losing outcome.
pub fn check_win(board: &Board, color: GameColor, action: Action, win_length: usize) -> Outcome {
    if DIRECTIONS
        .iter()
        .any(|&dir| run_length(board, color, action, dir) >= win_length)
    {
        return Outcome::Win;
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, stones: &[(usize, usize, GameColor)]) -> Board {
        let mut board = Board::new(size);
        for &(r, c, color) in stones {
            board.place(Action::new(r, c), color);
        }
        board
    }

    fn line(
        begin: (usize, usize),
        dir: (isize, isize),
        len: usize,
        color: GameColor,
    ) -> Vec<(usize, usize, GameColor)> {
        (0..len as isize)
            .map(|i| {
                (
                    (begin.0 as isize + dir.0 * i) as usize,
                    (begin.1 as isize + dir.1 * i) as usize,
                    color,
                )
            })
            .collect()
    }

    #[test]
    fn four_doesnt_win_five_wins() {
        let p1 = GameColor::Player1;
        for dir in DIRECTIONS {
            let begin = if dir.1 < 0 { (3, 10) } else { (3, 3) };

            let board = board_with(19, &line(begin, dir, 4, p1));
            let last = Action::new(begin.0, begin.1);
            assert_eq!(run_length(&board, p1, last, dir), 4);
            assert_eq!(check_win(&board, p1, last, 5), Outcome::Continue);

            let board = board_with(19, &line(begin, dir, 5, p1));
            assert_eq!(run_length(&board, p1, last, dir), 5);
            assert_eq!(check_win(&board, p1, last, 5), Outcome::Win);
        }
    }

    #[test]
    fn overline_wins() {
        let p2 = GameColor::Player2;
        let board = board_with(19, &line((0, 0), (1, 1), 6, p2));
        assert_eq!(check_win(&board, p2, Action::new(2, 2), 5), Outcome::Win);
    }

    #[test]
    fn middle_stone_joins_runs() {
        let p1 = GameColor::Player1;
        let mut stones = line((7, 2), (0, 1), 2, p1);
        stones.extend(line((7, 5), (0, 1), 2, p1));
        let board = board_with(19, &stones);
        assert_eq!(check_win(&board, p1, Action::new(7, 5), 5), Outcome::Continue);

        stones.push((7, 4, p1));
        let board = board_with(19, &stones);
        assert_eq!(run_length(&board, p1, Action::new(7, 4), (0, 1)), 5);
        assert_eq!(check_win(&board, p1, Action::new(7, 4), 5), Outcome::Win);
    }

    #[test]
    fn opponent_stone_breaks_run() {
        let p1 = GameColor::Player1;
        let mut stones = line((0, 0), (1, 0), 4, p1);
        stones.push((4, 0, GameColor::Player2));
        stones.extend(line((5, 0), (1, 0), 1, p1));
        let board = board_with(19, &stones);
        assert_eq!(run_length(&board, p1, Action::new(3, 0), (1, 0)), 4);
        assert_eq!(check_win(&board, p1, Action::new(3, 0), 5), Outcome::Continue);
    }

    #[test]
    fn runs_stop_at_board_edges() {
        let p1 = GameColor::Player1;
        let board = board_with(19, &line((14, 18), (1, 0), 5, p1));
        assert_eq!(check_win(&board, p1, Action::new(18, 18), 5), Outcome::Win);

        let board = board_with(19, &line((0, 18), (1, -1), 5, p1));
        assert_eq!(run_length(&board, p1, Action::new(4, 14), (1, -1)), 5);
        assert_eq!(run_length(&board, p1, Action::new(4, 14), (0, 1)), 1);
    }

    #[test]
    fn full_board_without_line_is_draw() {
        /* O X / X O on a 2x2 board never reaches a line of three */
        let board = board_with(
            2,
            &[
                (0, 0, GameColor::Player1),
                (0, 1, GameColor::Player2),
                (1, 0, GameColor::Player2),
                (1, 1, GameColor::Player1),
            ],
        );
        let last = Action::new(1, 1);
        assert_eq!(check_win(&board, GameColor::Player1, last, 3), Outcome::Draw);
        assert_eq!(check_win(&board, GameColor::Player1, last, 2), Outcome::Win);
    }
}
