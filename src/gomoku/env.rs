use itertools::Itertools;

use crate::error::{Error, Result};
use crate::game::{Environment, GameColor, GameStatus, Reward, PLAYERS_NUM};
use crate::gomoku::core::{Action, Board, Positions, State, MAX_BOARD_SIZE};
use crate::gomoku::rules::{self, Outcome};

pub const DEFAULT_BOARD_SIZE: usize = 19;
pub const DEFAULT_WIN_LENGTH: usize = 5;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GomokuConfig {
    pub board_size: usize,
    /// Number of stones in a line needed to win
    pub win_length: usize,
}

impl Default for GomokuConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl GomokuConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "board size {} is not in 1..={}",
                    self.board_size, MAX_BOARD_SIZE
                ),
            });
        }
        if !(1..=self.board_size).contains(&self.win_length) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "win length {} is not in 1..={}",
                    self.win_length, self.board_size
                ),
            });
        }
        Ok(())
    }
}

/// Freestyle gomoku rules engine.
///
/// The engine is a plain value holding only its configuration; all game data lives in [`State`]
/// values, which are never modified once returned.
#[derive(Copy, Clone, Default, Debug)]
pub struct Gomoku {
    config: GomokuConfig,
}

impl Gomoku {
    /// Player 1 stones, player 2 stones and the turn.
    pub const STATE_CHANNELS: usize = 3;
    pub const ACTION_CHANNELS: usize = 1;

    pub fn new(config: GomokuConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GomokuConfig {
        &self.config
    }

    /// An empty board with player 1 to move.
    pub fn reset(&self) -> State {
        State::new(self.config.board_size)
    }

    pub fn step(&self, state: &State, action: Action) -> Result<(State, Reward, bool)> {
        let player = state.turn().ok_or(Error::GameOver)?;
        if !state.positions().contains(action) {
            return Err(Error::InvalidMove { action });
        }

        let mut board = *state.board();
        board.place(action, player);

        let status = match rules::check_win(&board, player, action, self.config.win_length) {
            Outcome::Win => GameStatus::Finished(Some(player)),
            Outcome::Draw => GameStatus::Finished(None),
            Outcome::Continue => GameStatus::Ongoing,
        };
        let turn = match status {
            GameStatus::Ongoing => Some(player.opposite()),
            GameStatus::Finished(_) => None,
        };

        let mut positions = *state.positions();
        positions.remove(action);
        let mut id = Vec::with_capacity(state.id().len() + 1);
        id.extend_from_slice(state.id());
        id.push(action);

        let next_state = State::from_parts(id, board, positions, turn, status.winner());
        Ok((next_state, status.reward(), status.is_finished()))
    }

    /// The legal positions of `state`.
    ///
    /// Both players share the same set of empty cells, so `player` doesn't change the result.
    pub fn possible_actions<'a>(&self, state: &'a State, _player: GameColor) -> &'a Positions {
        state.positions()
    }

    pub fn player(&self, state: &State) -> Option<GameColor> {
        state.turn()
    }

    pub fn board<'a>(&self, state: &'a State) -> &'a Board {
        state.board()
    }

    pub fn id<'a>(&self, state: &'a State) -> &'a [Action] {
        state.id()
    }

    pub fn copy(&self, state: &State) -> State {
        state.clone()
    }

    pub fn fast_forward(
        &self,
        state: State,
        actions: impl IntoIterator<Item = Action>,
    ) -> Result<State> {
        Environment::fast_forward(self, state, actions)
    }

    pub fn stone_count(&self, state: &State, color: GameColor) -> usize {
        state.board().stone_count(color)
    }

    pub fn board_size(&self) -> usize {
        self.config.board_size
    }

    pub fn win_length(&self) -> usize {
        self.config.win_length
    }

    pub fn players_num(&self) -> usize {
        PLAYERS_NUM
    }

    pub fn state_channels(&self) -> usize {
        Self::STATE_CHANNELS
    }

    pub fn action_channels(&self) -> usize {
        Self::ACTION_CHANNELS
    }

    pub fn board_shape(&self) -> [usize; 3] {
        let size = self.config.board_size;
        [Self::STATE_CHANNELS, size, size]
    }

    pub fn action_shape(&self) -> [usize; 3] {
        let size = self.config.board_size;
        [Self::ACTION_CHANNELS, size, size]
    }
}

impl Environment for Gomoku {
    type State = State;
    type Action = Action;

    fn reset(&self) -> State {
        Gomoku::reset(self)
    }

    fn step(&self, state: &State, action: Action) -> Result<(State, Reward, bool)> {
        Gomoku::step(self, state, action)
    }

    fn legal_actions(&self, state: &State, player: GameColor) -> Vec<Action> {
        self.possible_actions(state, player).iter().collect_vec()
    }

    fn player(&self, state: &State) -> Option<GameColor> {
        state.turn()
    }

    fn status(&self, state: &State) -> GameStatus {
        state.status()
    }
}
