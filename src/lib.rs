pub mod error;
pub mod game;
pub mod gomoku;
pub mod util;

pub use error::{Error, Result};
