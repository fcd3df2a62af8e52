use clap::Parser;
use gomoku_env::game::player::{GamePlayer, PlayerRand};
use gomoku_env::game::{Environment, GameStatus};
use gomoku_env::gomoku::cli::{self, GomokuPlayerCmd};
use gomoku_env::gomoku::core::color_to_str;
use gomoku_env::gomoku::{Gomoku, GomokuConfig, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH};
use gomoku_env::util;

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    #[clap(long, default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: usize,
    #[clap(long, default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,
    /// Moves to play before the game starts, such as "4E,5E,4F"
    #[clap(long, default_value = "")]
    moves: String,
    /// Let a random player take the second seat
    #[clap(long)]
    vs_random: bool,
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> gomoku_env::Result<()> {
    util::init_globals();

    let args = Args::parse();
    let env = Gomoku::new(GomokuConfig {
        board_size: args.board_size,
        win_length: args.win_length,
    })?;

    let moves = cli::parse_actions(&args.moves, env.board_size())?;
    let state = env.fast_forward(env.reset(), moves)?;
    log::info!("Starting from {} moves", state.id().len());

    let mut player1 = GomokuPlayerCmd;
    let mut player2: Box<dyn GamePlayer<Gomoku>> = if args.vs_random {
        Box::new(match args.seed {
            Some(seed) => PlayerRand::from_seed(seed),
            None => PlayerRand::new(),
        })
    } else {
        Box::new(GomokuPlayerCmd)
    };

    let (final_state, status) = env.play_until_over(state, &mut player1, player2.as_mut())?;
    match status {
        GameStatus::Ongoing => println!("Game abandoned after {} moves", final_state.id().len()),
        GameStatus::Finished(winner) => {
            let reward = status.reward();
            println!(
                "Game finished. Winner: {}, reward: {},{}",
                color_to_str(winner),
                reward[0],
                reward[1]
            );
        }
    }
    cli::cli_print_board(&final_state);
    Ok(())
}
