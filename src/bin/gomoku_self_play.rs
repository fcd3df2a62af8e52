use clap::Parser;
use gomoku_env::game::self_play::SelfPlayRunner;
use gomoku_env::gomoku::{Gomoku, GomokuConfig, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH};
use gomoku_env::util;

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    #[clap(long, default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: usize,
    #[clap(long, default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,
    #[clap(long, default_value = "100")]
    games_num: usize,
    #[clap(long, default_value = "1")]
    threads: u32,
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

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "Playing {} random games on a {}x{} board, seed {}",
        args.games_num,
        env.board_size(),
        env.board_size(),
        seed
    );

    let runner = SelfPlayRunner::new(args.threads.max(1), seed);
    let results = runner.run(&env, args.games_num)?;
    println!(
        "player1 wins: {}, player2 wins: {}, draws: {}",
        results.w1, results.w2, results.d
    );
    Ok(())
}
