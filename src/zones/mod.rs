//! Card containers: bounded piles and the shared cauldrons.
//!
//! ## Key Types
//!
//! - `CardPile`: Ordered, capacity-checked sequence (hands, collected piles)
//! - `Cauldron`: Shared pot with a running total and a committed color

pub mod cauldron;
pub mod pile;

pub use cauldron::{Cauldron, Overflow};
pub use pile::CardPile;
