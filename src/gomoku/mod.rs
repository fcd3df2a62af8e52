pub mod cli;
pub mod core;
pub mod env;
pub mod net;
pub mod rules;


pub use self::core::{Action, Bitboard, Board, Positions, State, MAX_BOARD_SIZE};
pub use self::env::{Gomoku, GomokuConfig, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH};
