//! Species descriptors: parameter tables, growth thresholds, action sets.

use serde::{Deserialize, Serialize};

use super::actions::{AutomaticAction, PlayerAction};
use super::creature::Maturity;
use super::params::ParamSpec;

/// Age threshold: the age in days at which the stage after `stage` begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthThreshold {
    pub stage: Maturity,
    pub next_at_days: u32,
}

/// Immutable species descriptor: identity, growth table, parameter table,
/// and the behavior tables every creature of this species carries.
///
/// The asset field is an opaque handle; the presentation layer resolves it
/// to an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kind {
    pub name: String,
    pub asset: String,
    pub params: Vec<ParamSpec>,
    /// Ordered, one entry per non-terminal stage.
    pub growth: Vec<GrowthThreshold>,
    pub automatic_actions: Vec<AutomaticAction>,
    pub player_actions: Vec<PlayerAction>,
}

impl Kind {
    /// Age at which the stage after `stage` begins; `None` for the terminal
    /// stage or a stage the table does not cover.
    pub fn next_stage_at(&self, stage: Maturity) -> Option<u32> {
        self.growth
            .iter()
            .find(|t| t.stage == stage)
            .map(|t| t.next_at_days)
    }
}
