//! Creature engine - main entry point for driving the simulation.
//!
//! Owns the single live creature, the scheduler cursor, and the timing
//! config. An explicitly owned state object: the presentation layer holds
//! one and calls into it on its timer cadences, and tests drive the same
//! calls synchronously.

use std::io::{Read, Write};

use crate::catalog::Catalog;
use crate::components::{Creature, Kind, Maturity, ParameterKind, UnknownParameter};
use crate::config::SimConfig;
use crate::persistence::{self, SaveError, Snapshot};
use crate::systems::{
    self, ActionCursor, ActionError, ActionView, CatchUpReport,
};

/// What the presentation layer receives from one automatic tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Opaque display asset reference from the species.
    pub asset: String,
    /// Announcement from the action that fired, if any.
    pub message: Option<String>,
}

/// One day-journal entry, recorded at each daily rollover.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub age: u32,
    pub maturity: Maturity,
    pub params: Vec<(ParameterKind, f32)>,
}

/// The live-creature engine.
#[derive(Debug)]
pub struct CreatureEngine {
    creature: Creature,
    cursor: ActionCursor,
    config: SimConfig,
    journal: Vec<DayRecord>,
}

impl CreatureEngine {
    /// Start a new game: a fresh creature of the chosen species.
    pub fn new(kind: Kind, name: impl Into<String>, config: SimConfig) -> Self {
        let creature = Creature::new(kind, name);
        log::info!("adopted {} the {}", creature.name, creature.kind.name);
        Self {
            creature,
            cursor: ActionCursor::new(),
            config,
            journal: Vec::new(),
        }
    }

    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Recorded daily states, oldest first, capped at `config.journal_cap`.
    pub fn journal(&self) -> &[DayRecord] {
        &self.journal
    }

    /// Fire the next automatic action in rotation.
    ///
    /// The presentation layer calls this once per game hour
    /// (`config.game_hour_secs`). The rotation resumes where it left off.
    pub fn live_tick(&mut self) -> Result<TickReport, UnknownParameter> {
        let len = self.creature.kind.automatic_actions.len();
        let message = match self.cursor.advance(len) {
            Some(index) => systems::tick_action(&mut self.creature, index)?,
            None => None,
        };
        Ok(TickReport {
            asset: self.creature.kind.asset.clone(),
            message,
        })
    }

    /// Daily rollover: one day of age, a growth check, a journal entry.
    ///
    /// The presentation layer calls this once per game day
    /// (`config.game_day_secs()`).
    pub fn advance_day(&mut self) -> Option<Maturity> {
        self.creature.add_age(1);
        let grown = systems::check_and_advance(&mut self.creature);
        self.record_day();
        grown
    }

    fn record_day(&mut self) {
        self.journal.push(DayRecord {
            age: self.creature.age,
            maturity: self.creature.maturity,
            params: self
                .creature
                .params
                .iter()
                .map(|(kind, p)| (kind, p.value))
                .collect(),
        });
        if self.journal.len() > self.config.journal_cap {
            let excess = self.journal.len() - self.config.journal_cap;
            self.journal.drain(..excess);
        }
    }

    /// Player actions in fixed order with freshly computed enablement.
    pub fn player_actions(&self) -> Result<Vec<ActionView>, ActionError> {
        systems::action_views(&self.creature)
    }

    /// Trigger the player action at `index`; returns its result message.
    pub fn trigger_player_action(&mut self, index: usize) -> Result<String, ActionError> {
        systems::trigger(&mut self.creature, index)
    }

    /// Capture a snapshot at the given real-world instant (seconds since
    /// the Unix epoch). The caller supplies the clock.
    pub fn snapshot(&self, now_secs: f64) -> Snapshot {
        persistence::capture(&self.creature, now_secs)
    }

    /// Capture and write a snapshot.
    pub fn save<W: Write>(&self, writer: W, now_secs: f64) -> Result<(), SaveError> {
        persistence::write_snapshot(writer, &self.snapshot(now_secs))
    }

    /// Load a snapshot and run catch-up across the elapsed gap, before any
    /// live interaction.
    ///
    /// All-or-nothing: a catch-up overrun fails the restore and nothing of
    /// the partially advanced state is observable here. A caller that wants
    /// to accept partial state instead composes
    /// [`persistence::creature_from_snapshot`] with
    /// [`systems::run_catch_up`] directly.
    pub fn restore<R: Read>(
        reader: R,
        catalog: &Catalog,
        config: SimConfig,
        now_secs: f64,
    ) -> Result<(Self, CatchUpReport), SaveError> {
        let snapshot = persistence::read_snapshot(reader)?;
        let mut creature = persistence::creature_from_snapshot(&snapshot, catalog)?;
        let elapsed_secs = now_secs - snapshot.timestamp;
        let report = systems::run_catch_up(&mut creature, elapsed_secs, &config)?;
        Ok((
            Self {
                creature,
                cursor: ActionCursor::new(),
                config,
                journal: Vec::new(),
            },
            report,
        ))
    }
}
