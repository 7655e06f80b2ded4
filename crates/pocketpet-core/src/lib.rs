//! Pocketpet Core - Virtual Creature Life-Simulation Engine
//!
//! Simulates a single virtual creature whose bounded well-being parameters
//! decay and recover over time, who matures through life stages, and whose
//! state is reconstructed after the controlling application has been closed
//! for an arbitrary real-world interval.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`components`] | Parameters, species tables, actions, the creature aggregate |
//! | [`systems`] | Scheduler, player gate, growth, and the offline catch-up replay |
//! | [`engine`] | The owned live-creature engine the presentation layer drives |
//! | [`catalog`] | Built-in species definitions and lookup |
//! | [`persistence`] | Snapshot capture/restore and the save/load error taxonomy |
//! | [`config`] | Timing knobs: tick cadences, catch-up compression, ceilings |
//!
//! # Example
//!
//! ```rust
//! use pocketpet_core::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let kind = catalog.get("cat").unwrap().clone();
//! let mut engine = CreatureEngine::new(kind, "Misha", SimConfig::default());
//!
//! // One automatic tick, as the UI timer would fire it.
//! let report = engine.live_tick().unwrap();
//! assert_eq!(report.asset, "cat.png");
//! ```

pub mod catalog;
pub mod components;
pub mod config;
pub mod engine;
pub mod persistence;
pub mod systems;

/// Commonly used types for convenient importing.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::components::{Creature, Kind, Maturity, ParameterKind};
    pub use crate::config::SimConfig;
    pub use crate::engine::{CreatureEngine, TickReport};
    pub use crate::persistence::{SaveError, Snapshot};
    pub use crate::systems::{CatchUpError, CatchUpReport};
}
