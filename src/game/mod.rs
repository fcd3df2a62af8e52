pub mod player;
pub mod self_play;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::Result;
use crate::game::player::GamePlayer;

pub const PLAYERS_NUM: usize = 2;

/// One entry per player, indexed by [`GameColor::index`].
pub type Reward = [f32; PLAYERS_NUM];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameColor {
    Player1,
    Player2,
}

impl GameColor {
    pub fn opposite(&self) -> GameColor {
        match self {
            GameColor::Player1 => GameColor::Player2,
            GameColor::Player2 => GameColor::Player1,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            GameColor::Player1 => 0,
            GameColor::Player2 => 1,
        }
    }

    pub fn from_index(idx: usize) -> Option<GameColor> {
        match idx {
            0 => Some(GameColor::Player1),
            1 => Some(GameColor::Player2),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameStatus {
    Ongoing,
    /// Finished with the winner, or `None` for a draw
    Finished(Option<GameColor>),
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }

    pub fn winner(&self) -> Option<GameColor> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Finished(winner) => *winner,
        }
    }

    /// +1 for the winner and -1 for the loser, all zero otherwise.
    pub fn reward(&self) -> Reward {
        let mut reward = [0.0; PLAYERS_NUM];
        if let Some(winner) = self.winner() {
            reward[winner.index()] = 1.0;
            reward[winner.opposite().index()] = -1.0;
        }
        reward
    }
}

/// A two player, turn based environment operating on immutable state values.
///
/// Implementations hold no mutable state of their own, so a single environment can be shared
/// between threads, each exploring its own states.
pub trait Environment: Sync {
    type State: Clone + Send;
    type Action: Copy + Eq + Ord + Hash + Display + Debug + Send;

    fn reset(&self) -> Self::State;

    /// Apply `action` to `state`, returning the next state, the reward vector and whether the
    /// game is over. `state` itself is never modified.
    fn step(
        &self,
        state: &Self::State,
        action: Self::Action,
    ) -> Result<(Self::State, Reward, bool)>;

    fn legal_actions(&self, state: &Self::State, player: GameColor) -> Vec<Self::Action>;

    /// The player to move, or `None` once the game is over.
    fn player(&self, state: &Self::State) -> Option<GameColor>;

    fn status(&self, state: &Self::State) -> GameStatus;

    /// Apply a sequence of actions, keeping only the final state.
    fn fast_forward<I>(&self, state: Self::State, actions: I) -> Result<Self::State>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Action>,
    {
        actions.into_iter().try_fold(state, |state, action| {
            let (next_state, _reward, _done) = self.step(&state, action)?;
            Ok(next_state)
        })
    }

    /// Let the two players alternate until the game is over or the player to move gives up by
    /// returning no action.
    fn play_until_over(
        &self,
        mut state: Self::State,
        player1: &mut dyn GamePlayer<Self>,
        player2: &mut dyn GamePlayer<Self>,
    ) -> Result<(Self::State, GameStatus)>
    where
        Self: Sized,
    {
        while let Some(color) = self.player(&state) {
            let player: &mut dyn GamePlayer<Self> = match color {
                GameColor::Player1 => &mut *player1,
                GameColor::Player2 => &mut *player2,
            };
            let Some(action) = player.next_action(self, &state) else {
                break;
            };
            state = self.step(&state, action)?.0;
        }
        let status = self.status(&state);
        Ok((state, status))
    }
}
