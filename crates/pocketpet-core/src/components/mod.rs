//! Creature data components.
//!
//! Components are pure data - parameters, species tables, action
//! definitions, and the creature aggregate. Behavior lives in systems.

mod actions;
mod creature;
mod kind;
mod params;

pub use actions::*;
pub use creature::*;
pub use kind::*;
pub use params::*;
