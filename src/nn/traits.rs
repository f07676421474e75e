//! Encoding interface between the engine and learning code.
//!
//! Trainers (typically in Python via PyO3) consume flat `f32` tensors and
//! index their policy output by action id.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId};

/// Encoded game state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g., [features]).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Borrow a contiguous run of features.
    ///
    /// Returns `None` if the range runs past the end.
    #[must_use]
    pub fn slice(&self, start: usize, len: usize) -> Option<&[f32]> {
        self.tensor.get(start..start.checked_add(len)?)
    }

    /// Consume into the flat tensor.
    #[must_use]
    pub fn into_vec(self) -> Vec<f32> {
        self.tensor
    }
}

/// Encodes game state into tensors for neural network input.
///
/// Each encoder defines:
/// - How to convert state to a tensor from a player's perspective
/// - The shape of the output tensor
/// - The size of the action space
pub trait StateEncoder: Send + Sync {
    /// Encode the game state from a player's perspective.
    fn encode(&self, state: &GameState, perspective: PlayerId) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    ///
    /// This defines the size of the policy output vector.
    fn action_space_size(&self) -> usize;
}
