//! Encoding of states and actions as arrays, for search and training pipelines

use ndarray::{s, Array3, Array4, Axis};

use crate::game::GameColor;
use crate::gomoku::core::{Action, Positions, State};

pub const PLANES_NUM: usize = 3;
const TURN_PLANE: usize = 2;

/// Turn plane value once the game is over.
pub const TURN_SENTINEL: i32 = 255;

/// A (3, N, N) tensor: player 1 stones, player 2 stones, and a plane filled with the index of
/// the player to move or [`TURN_SENTINEL`].
pub fn state_to_tensor(state: &State) -> Array3<i32> {
    let board = state.board();
    let size = board.size();
    let mut tensor = Array3::<i32>::zeros((PLANES_NUM, size, size));
    for color in [GameColor::Player1, GameColor::Player2] {
        for idx in board.stones(color).iter_ones() {
            tensor[(color.index(), idx / size, idx % size)] = 1;
        }
    }
    let turn = state
        .turn()
        .map_or(TURN_SENTINEL, |color| color.index() as i32);
    tensor.index_axis_mut(Axis(0), TURN_PLANE).fill(turn);
    tensor
}

/// Stack the tensors of several states of the same board size into a (B, 3, N, N) batch.
pub fn states_to_batch(states: &[State]) -> Array4<f32> {
    let size = states.first().map_or(0, |s| s.board().size());
    let mut batch = Array4::<f32>::zeros((states.len(), PLANES_NUM, size, size));
    for (b, state) in states.iter().enumerate() {
        assert_eq!(state.board().size(), size, "mixed board sizes in batch");
        batch
            .slice_mut(s![b, .., .., ..])
            .assign(&state_to_tensor(state).mapv(|v| v as f32));
    }
    batch
}

/// A (1, N, N) mask with ones on the legal positions.
pub fn positions_to_mask(positions: &Positions, size: usize) -> Array3<f32> {
    let mut mask = Array3::<f32>::zeros((1, size, size));
    for action in positions.iter() {
        mask[(0, action.row, action.col)] = 1.0;
    }
    mask
}

/// Player to move encoded in the turn plane of a [`state_to_tensor`] tensor, `None` once the
/// game is over.
pub fn tensor_turn(tensor: &Array3<i32>) -> Option<GameColor> {
    let turn = *tensor.get((TURN_PLANE, 0, 0))?;
    usize::try_from(turn).ok().and_then(GameColor::from_index)
}

pub fn action_to_index(action: Action, size: usize) -> Option<usize> {
    if action.row < size && action.col < size {
        Some(action.row * size + action.col)
    } else {
        None
    }
}

pub fn index_to_action(idx: usize, size: usize) -> Option<Action> {
    if idx < size * size {
        Some(Action::new(idx / size, idx % size))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gomoku::Gomoku;

    #[test]
    fn tensor_planes() {
        let env = Gomoku::default();
        let state = env
            .fast_forward(env.reset(), [Action::new(4, 4), Action::new(5, 6)])
            .unwrap();
        let tensor = state_to_tensor(&state);

        assert_eq!(tensor.shape(), &env.board_shape());
        assert_eq!(tensor[(0, 4, 4)], 1);
        assert_eq!(tensor[(1, 5, 6)], 1);
        assert_eq!(tensor.index_axis(Axis(0), 0).sum(), 1);
        assert_eq!(tensor.index_axis(Axis(0), 1).sum(), 1);
        /* Player 1 to move again */
        assert!(tensor.index_axis(Axis(0), 2).iter().all(|&v| v == 0));
        assert_eq!(tensor_turn(&tensor), Some(GameColor::Player1));

        let (state, _, _) = env.step(&state, Action::new(0, 0)).unwrap();
        let tensor = state_to_tensor(&state);
        assert!(tensor.index_axis(Axis(0), 2).iter().all(|&v| v == 1));
        assert_eq!(tensor_turn(&tensor), Some(GameColor::Player2));
    }

    #[test]
    fn finished_game_turn_plane_is_sentinel() {
        let env = Gomoku::default();
        let moves = [(4, 4), (5, 4), (4, 5), (5, 5), (4, 6), (5, 6), (4, 7), (5, 7), (4, 8)]
            .map(|(r, c)| Action::new(r, c));
        let state = env.fast_forward(env.reset(), moves).unwrap();
        let tensor = state_to_tensor(&state);
        assert!(tensor
            .index_axis(Axis(0), 2)
            .iter()
            .all(|&v| v == TURN_SENTINEL));
        assert_eq!(tensor_turn(&tensor), None);
    }

    #[test]
    fn batch_and_mask() {
        let env = Gomoku::default();
        let s0 = env.reset();
        let (s1, _, _) = env.step(&s0, Action::new(9, 9)).unwrap();

        let batch = states_to_batch(&[s0.clone(), s1.clone()]);
        assert_eq!(batch.shape(), &[2, PLANES_NUM, 19, 19]);
        assert_eq!(batch[(0, 0, 9, 9)], 0.0);
        assert_eq!(batch[(1, 0, 9, 9)], 1.0);
        assert_eq!(batch[(1, 2, 0, 0)], 1.0);

        let mask = positions_to_mask(s1.positions(), env.board_size());
        assert_eq!(mask.shape(), &env.action_shape());
        assert_eq!(mask.sum(), (19 * 19 - 1) as f32);
        assert_eq!(mask[(0, 9, 9)], 0.0);
    }

    #[test]
    fn action_index_mapping() {
        let action = Action::new(3, 17);
        let idx = action_to_index(action, 19).unwrap();
        assert_eq!(idx, 3 * 19 + 17);
        assert_eq!(index_to_action(idx, 19), Some(action));
        assert_eq!(action_to_index(Action::new(19, 0), 19), None);
        assert_eq!(action_to_index(Action::new(0, 19), 19), None);
        assert_eq!(index_to_action(19 * 19, 19), None);
    }
}
