use itertools::Itertools;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;

use crate::error::Result;
use crate::game::player::PlayerRand;
use crate::game::{Environment, GameColor};

#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct GamesResults {
    pub w1: u32,
    pub w2: u32,
    pub d: u32,
}

impl GamesResults {
    pub fn total(&self) -> u32 {
        self.w1 + self.w2 + self.d
    }
}

/// Plays random games against itself, spreading the games over several threads.
///
/// Games are seeded by their index, so the results depend only on the seed and not on the number
/// of threads. Odd games swap the colors of the two players.
pub struct SelfPlayRunner {
    thread_num: usize,
    seed: u64,
}

impl SelfPlayRunner {
    pub fn new(thread_num: u32, seed: u64) -> Self {
        assert!(thread_num > 0);
        Self {
            thread_num: thread_num as usize,
            seed,
        }
    }

    pub fn run<Env: Environment>(&self, env: &Env, games_num: usize) -> Result<GamesResults> {
        let games_counter = AtomicUsize::new(0);
        let results = Mutex::new(GamesResults::default());

        let worker = SelfPlayWorker {
            env,
            seed: self.seed,
            results: &results,
            games_queue: &games_counter,
            games_num,
        };

        thread::scope(|s| {
            /* Spawn thread_num-1 to jobs [1..thread_num-1] */
            let threads = (1..self.thread_num)
                .map(|_| s.spawn(|| worker.play_games()))
                .collect_vec();

            /* Use current thread to do job 0 */
            worker.play_games()?;

            for t in threads {
                t.join().expect("self play worker panicked")?;
            }
            Ok::<_, crate::Error>(())
        })?;

        let res = *results.lock().expect("results lock poisoned");
        log::info!(
            "Self play done: {} games, player1 won {}, player2 won {}, {} draws",
            res.total(),
            res.w1,
            res.w2,
            res.d
        );
        Ok(res)
    }
}

struct SelfPlayWorker<'a, Env: Environment> {
    env: &'a Env,
    seed: u64,
    results: &'a Mutex<GamesResults>,
    games_queue: &'a AtomicUsize,
    games_num: usize,
}

impl<Env: Environment> SelfPlayWorker<'_, Env> {
    fn play_games(&self) -> Result<()> {
        loop {
            let game_idx = self.games_queue.fetch_add(1, Ordering::SeqCst);
            if game_idx >= self.games_num {
                break;
            }

            let game_seed = self.seed ^ (game_idx as u64).wrapping_mul(0x9e3779b97f4a7c15);
            let mut player1 = PlayerRand::from_seed(game_seed);
            let mut player2 = PlayerRand::from_seed(game_seed ^ 0xe4655449311aee87);
            let players_switch = game_idx % 2 == 1;

            let (_state, status) = if players_switch {
                self.env
                    .play_until_over(self.env.reset(), &mut player2, &mut player1)?
            } else {
                self.env
                    .play_until_over(self.env.reset(), &mut player1, &mut player2)?
            };

            /* Update winning counters */
            {
                let mut results = self.results.lock().expect("results lock poisoned");
                let counter = match status.winner() {
                    None => &mut results.d,
                    Some(mut player) => {
                        if players_switch {
                            player = player.opposite();
                        }
                        match player {
                            GameColor::Player1 => &mut results.w1,
                            GameColor::Player2 => &mut results.w2,
                        }
                    }
                };
                *counter += 1;
            }

            log::debug!("Game {} done: {:?}", game_idx, status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gomoku::{Gomoku, GomokuConfig};

    #[test]
    fn results_dont_depend_on_threads() {
        let env = Gomoku::new(GomokuConfig {
            board_size: 6,
            win_length: 4,
        })
        .unwrap();
        let games_num = 40;

        let single = SelfPlayRunner::new(1, 0x5eed).run(&env, games_num).unwrap();
        let multi = SelfPlayRunner::new(4, 0x5eed).run(&env, games_num).unwrap();
        assert_eq!(single.total(), games_num as u32);
        assert_eq!(single, multi);
    }

    #[test]
    fn three_by_three_win_length_one() {
        /* Every first move wins, and colors are swapped on odd games */
        let env = Gomoku::new(GomokuConfig {
            board_size: 3,
            win_length: 1,
        })
        .unwrap();
        let results = SelfPlayRunner::new(2, 7).run(&env, 10).unwrap();
        assert_eq!(
            results,
            GamesResults {
                w1: 5,
                w2: 5,
                d: 0
            }
        );
    }
}
