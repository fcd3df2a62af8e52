use itertools::Itertools;
use std::fmt::{self, Display};

use crate::game::{GameColor, GameStatus, PLAYERS_NUM};

/// Columns are labeled with a single letter, which bounds the board edge.
pub const MAX_BOARD_SIZE: usize = 26;
const BITBOARD_WORDS: usize = (MAX_BOARD_SIZE * MAX_BOARD_SIZE + 63) / 64;
const BITBOARD_CAPACITY: usize = BITBOARD_WORDS * 64;

pub fn color_to_str(c: Option<GameColor>) -> String {
    match c {
        None => String::from("None"),
        Some(GameColor::Player1) => String::from("O"),
        Some(GameColor::Player2) => String::from("X"),
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A fixed capacity set of cell indices, `row * size + col`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Bitboard {
    words: [u64; BITBOARD_WORDS],
}

impl Default for Bitboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Bitboard {
    pub fn new() -> Self {
        Self {
            words: [0; BITBOARD_WORDS],
        }
    }

    /// A bitboard with the first `len` indices set.
    pub fn full(len: usize) -> Self {
        assert!(len <= BITBOARD_CAPACITY);
        let mut b = Self::new();
        for (w, word) in b.words.iter_mut().enumerate() {
            let begin = w * 64;
            if len >= begin + 64 {
                *word = u64::MAX;
            } else if len > begin {
                *word = (1u64 << (len - begin)) - 1;
            }
        }
        b
    }

    pub fn get(&self, idx: usize) -> bool {
        assert!(idx < BITBOARD_CAPACITY);
        (self.words[idx / 64] & (1u64 << (idx % 64))) != 0
    }

    pub fn set(&mut self, idx: usize, val: bool) {
        assert!(idx < BITBOARD_CAPACITY);
        if val {
            self.words[idx / 64] |= 1u64 << (idx % 64);
        } else {
            self.words[idx / 64] &= !(1u64 << (idx % 64));
        }
    }

    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn union(&self, other: &Bitboard) -> Bitboard {
        let mut res = *self;
        for (w, o) in res.words.iter_mut().zip(other.words.iter()) {
            *w |= o;
        }
        res
    }

    /// The set indices in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let b = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(w * 64 + b)
            })
        })
    }
}

/// Stones of both players on a square board.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    size: usize,
    stones: [Bitboard; PLAYERS_NUM],
}

impl Board {
    pub fn new(size: usize) -> Self {
        assert!((1..=MAX_BOARD_SIZE).contains(&size));
        Self {
            size,
            stones: [Bitboard::new(); PLAYERS_NUM],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, action: Action) -> bool {
        action.row < self.size && action.col < self.size
    }

    pub(crate) fn idx(&self, action: Action) -> usize {
        assert!(self.contains(action));
        action.row * self.size + action.col
    }

    /// Color of the stone at `action`, `None` for an empty cell or a cell outside the board.
    pub fn get(&self, action: Action) -> Option<GameColor> {
        if !self.contains(action) {
            return None;
        }
        let idx = self.idx(action);
        if self.stones[GameColor::Player1.index()].get(idx) {
            return Some(GameColor::Player1);
        }
        if self.stones[GameColor::Player2.index()].get(idx) {
            return Some(GameColor::Player2);
        }
        None
    }

    pub fn has_stone(&self, action: Action, color: GameColor) -> bool {
        self.contains(action) && self.stones[color.index()].get(self.idx(action))
    }

    pub fn stones(&self, color: GameColor) -> &Bitboard {
        &self.stones[color.index()]
    }

    pub fn stone_count(&self, color: GameColor) -> usize {
        self.stones[color.index()].count()
    }

    pub fn occupied(&self) -> Bitboard {
        self.stones[0].union(&self.stones[1])
    }

    pub fn is_full(&self) -> bool {
        self.occupied().count() == self.size * self.size
    }

    pub(crate) fn place(&mut self, action: Action, color: GameColor) {
        let idx = self.idx(action);
        assert!(!self.occupied().get(idx), "cell {} is occupied", action);
        self.stones[color.index()].set(idx, true);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = (0..self.size).map(|c| (b'A' + c as u8) as char).join(" ");
        writeln!(f, "   {}", header)?;
        for r in 0..self.size {
            let row_characters = (0..self.size)
                .map(|c| match self.get(Action::new(r, c)) {
                    None => '.',
                    Some(GameColor::Player1) => 'O',
                    Some(GameColor::Player2) => 'X',
                })
                .join(" ");
            writeln!(f, "{:>2} {}", r, row_characters)?;
        }
        Ok(())
    }
}

/// The set of cells not occupied by either player.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Positions {
    size: usize,
    free: Bitboard,
}

impl Positions {
    pub fn full(size: usize) -> Self {
        Self {
            size,
            free: Bitboard::full(size * size),
        }
    }

    pub fn contains(&self, action: Action) -> bool {
        action.row < self.size
            && action.col < self.size
            && self.free.get(action.row * self.size + action.col)
    }

    pub fn len(&self) -> usize {
        self.free.count()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    /// Lexicographic (row, column) order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.free
            .iter_ones()
            .map(|idx| Action::new(idx / self.size, idx % self.size))
    }

    pub(crate) fn remove(&mut self, action: Action) -> bool {
        if !self.contains(action) {
            return false;
        }
        self.free.set(action.row * self.size + action.col, false);
        true
    }
}

/// An immutable snapshot of a game: the move history, the stones on the board, the remaining
/// legal positions and the player to move.
///
/// The board always holds exactly the stones of `id`, and `positions` its complement.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct State {
    id: Vec<Action>,
    board: Board,
    positions: Positions,
    /* None once the game is over */
    turn: Option<GameColor>,
    winner: Option<GameColor>,
}

impl State {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            id: Vec::new(),
            board: Board::new(size),
            positions: Positions::full(size),
            turn: Some(GameColor::Player1),
            winner: None,
        }
    }

    pub(crate) fn from_parts(
        id: Vec<Action>,
        board: Board,
        positions: Positions,
        turn: Option<GameColor>,
        winner: Option<GameColor>,
    ) -> Self {
        debug_assert_eq!(id.len() + positions.len(), board.size() * board.size());
        Self {
            id,
            board,
            positions,
            turn,
            winner,
        }
    }

    pub fn id(&self) -> &[Action] {
        &self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn turn(&self) -> Option<GameColor> {
        self.turn
    }

    pub fn last_action(&self) -> Option<Action> {
        self.id.last().copied()
    }

    pub fn status(&self) -> GameStatus {
        match self.turn {
            Some(_) => GameStatus::Ongoing,
            None => GameStatus::Finished(self.winner),
        }
    }
}
