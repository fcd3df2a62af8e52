use clap::Parser;
use gomoku_env::gomoku::cli;
use gomoku_env::gomoku::net;
use gomoku_env::gomoku::{Gomoku, GomokuConfig, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    #[clap(long, default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: usize,
    #[clap(long, default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,
    /// Move history of the position, such as "4E,5E,4F"
    #[clap(long)]
    moves: String,
    #[clap(long)]
    outfile: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let env = Gomoku::new(GomokuConfig {
        board_size: args.board_size,
        win_length: args.win_length,
    })?;

    let moves = cli::parse_actions(&args.moves, env.board_size())?;
    let state = env.fast_forward(env.reset(), moves)?;
    let tensor = net::state_to_tensor(&state);

    fs::write(
        &args.outfile,
        json::object! {
            shape: tensor.shape().to_vec(),
            data: tensor.into_raw_vec(),
            done: state.status().is_finished(),
        }
        .dump(),
    )?;
    Ok(())
}
