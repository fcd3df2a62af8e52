use rand::prelude::*;

use crate::game::Environment;

pub trait GamePlayer<Env: Environment> {
    fn next_action(&mut self, env: &Env, state: &Env::State) -> Option<Env::Action>;
}

/// Plays a uniformly random legal action.
pub struct PlayerRand {
    rand: StdRng,
}
impl Default for PlayerRand {
    fn default() -> Self {
        Self::new()
    }
}
impl PlayerRand {
    pub fn new() -> Self {
        Self::from_seed(rand::rng().random())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rand: StdRng::seed_from_u64(seed),
        }
    }
}

impl<Env: Environment> GamePlayer<Env> for PlayerRand {
    fn next_action(&mut self, env: &Env, state: &Env::State) -> Option<Env::Action> {
        let player = env.player(state)?;
        let actions = env.legal_actions(state, player);
        if actions.is_empty() {
            None
        } else {
            Some(actions[self.rand.random_range(0..actions.len())])
        }
    }
}
