//! The creature aggregate: identity, age, maturity, and the live parameter store.

use serde::{Deserialize, Serialize};

use super::actions::{AutomaticAction, PlayerAction};
use super::kind::Kind;
use super::params::ParameterStore;

/// Life stage, totally ordered; `Adult` is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Maturity {
    Baby,
    Child,
    Teen,
    Adult,
}

impl Maturity {
    /// The next-higher stage; `None` at the terminal stage.
    pub fn next(self) -> Option<Self> {
        match self {
            Maturity::Baby => Some(Maturity::Child),
            Maturity::Child => Some(Maturity::Teen),
            Maturity::Teen => Some(Maturity::Adult),
            Maturity::Adult => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Integer stage code used in persisted snapshots.
    pub fn code(self) -> u8 {
        match self {
            Maturity::Baby => 0,
            Maturity::Child => 1,
            Maturity::Teen => 2,
            Maturity::Adult => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Maturity::Baby),
            1 => Some(Maturity::Child),
            2 => Some(Maturity::Teen),
            3 => Some(Maturity::Adult),
            _ => None,
        }
    }
}

/// The single live creature. Owns the only mutable parameter store in the
/// process; every component receives it by reference, never through a global.
#[derive(Debug, Clone)]
pub struct Creature {
    pub kind: Kind,
    pub name: String,
    /// Age in whole days.
    pub age: u32,
    pub maturity: Maturity,
    pub params: ParameterStore,
}

impl Creature {
    /// New creature of the given species with every parameter at its default.
    pub fn new(kind: Kind, name: impl Into<String>) -> Self {
        let params = ParameterStore::from_specs(&kind.params);
        Self {
            kind,
            name: name.into(),
            age: 0,
            maturity: Maturity::Baby,
            params,
        }
    }

    pub fn add_age(&mut self, days: u32) {
        self.age += days;
    }

    /// The species' automatic behavior rotation, in fixed order.
    pub fn automatic_actions(&self) -> &[AutomaticAction] {
        &self.kind.automatic_actions
    }

    /// The species' player actions, in fixed order.
    pub fn player_actions(&self) -> &[PlayerAction] {
        &self.kind.player_actions
    }
}
