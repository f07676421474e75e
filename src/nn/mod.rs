//! Neural network integration: observations and the action space.
//!
//! ## Overview
//!
//! - **Traits**: `StateEncoder`, `EncodedState`
//! - **Encoding**: `PoisonEncoder` with full or partial visibility
//!
//! ## Usage
//!
//! ```rust
//! use poison_engine::core::PlayerId;
//! use poison_engine::games::poison::PoisonGameBuilder;
//! use poison_engine::nn::{PoisonEncoder, StateEncoder, OBSERVATION_SIZE};
//!
//! let (_game, state) = PoisonGameBuilder::new().player_count(4).build(42).unwrap();
//!
//! let encoder = PoisonEncoder::partial();
//! let encoded = encoder.encode(&state, PlayerId::new(0));
//! assert_eq!(encoded.len(), OBSERVATION_SIZE);
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{ObservationMode, PoisonEncoder, OBSERVATION_SIZE};
pub use traits::{EncodedState, StateEncoder};
