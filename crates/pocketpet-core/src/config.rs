//! Simulation timing configuration.
//!
//! The core computes no cadences itself; the presentation layer reads these
//! knobs and drives ticks on them. The catch-up compression ratio and its
//! defensive ceiling live here too.

use serde::{Deserialize, Serialize};

/// Timing knobs for the live loop and the offline catch-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Real seconds per in-game hour; the presentation layer fires one
    /// automatic tick per game hour.
    pub game_hour_secs: u64,
    /// In-game days one real hour represents while the application is
    /// closed. Species-independent.
    pub game_days_per_real_hour: f64,
    /// Defensive bound on catch-up sweeps; a zero-period action would
    /// otherwise never converge.
    pub max_catchup_sweeps: u32,
    /// Periodic autosave cadence in real seconds; zero disables autosave.
    pub autosave_interval_secs: u64,
    /// Retained day-journal entries.
    pub journal_cap: usize,
}

impl SimConfig {
    /// Real seconds per in-game day; the daily age-increment cadence.
    pub fn game_day_secs(&self) -> u64 {
        self.game_hour_secs * 24
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            game_hour_secs: 60,
            // One in-game day per two real hours of downtime.
            game_days_per_real_hour: 0.5,
            max_catchup_sweeps: 10_000,
            autosave_interval_secs: 300,
            journal_cap: 30,
        }
    }
}
