//! Offline catch-up: compress elapsed real time into an in-game budget and
//! replay the automatic-action rotation until the budget is exhausted.
//!
//! Runs once, synchronously, at load time, before any live interaction.
//! The replay is a pure function of the budget and the fixed action
//! sequence, so identical snapshots and identical elapsed time always
//! reconstruct identical creature state.

use serde::{Deserialize, Serialize};

use crate::components::{Creature, UnknownParameter};
use crate::config::SimConfig;
use crate::systems::growth;

/// Summary of one replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CatchUpReport {
    /// Sweeps over the action sequence, including the final empty one.
    pub sweeps: u32,
    pub actions_applied: u32,
    pub days_gained: u32,
    pub stages_advanced: u32,
    /// In-game hours left unspent when the replay converged.
    pub budget_left_hours: f64,
}

/// Errors from a catch-up run.
#[derive(Debug)]
pub enum CatchUpError {
    /// The defensive sweep ceiling fired before the replay converged
    /// (for example, a zero-period action would otherwise loop forever).
    /// The creature holds the partially advanced state; the caller decides
    /// whether to accept or discard it.
    Overrun(CatchUpReport),
    /// An action effect references a parameter the species does not define.
    Param(UnknownParameter),
}

impl std::fmt::Display for CatchUpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatchUpError::Overrun(report) => write!(
                f,
                "catch-up hit the sweep ceiling after {} sweeps ({} actions applied)",
                report.sweeps, report.actions_applied
            ),
            CatchUpError::Param(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CatchUpError {}

impl From<UnknownParameter> for CatchUpError {
    fn from(e: UnknownParameter) -> Self {
        CatchUpError::Param(e)
    }
}

/// Replay the creature's automatic behaviors across an elapsed real-world gap.
///
/// `elapsed_real_secs` is `now - snapshot.timestamp`. The budget is the
/// elapsed time compressed through `config.game_days_per_real_hour`. Each
/// sweep walks the action sequence in order; an action whose period fits the
/// remaining budget fires, pays its period out of the budget, accrues that
/// period toward the age counter (whole days only), and is followed by one
/// growth check. The first sweep that fires nothing ends the replay.
pub fn run_catch_up(
    creature: &mut Creature,
    elapsed_real_secs: f64,
    config: &SimConfig,
) -> Result<CatchUpReport, CatchUpError> {
    let elapsed_hours = elapsed_real_secs.max(0.0) / 3600.0;
    let mut budget = elapsed_hours * config.game_days_per_real_hour;
    let mut accrued_hours = 0.0f64;
    let mut report = CatchUpReport::default();

    loop {
        if report.sweeps >= config.max_catchup_sweeps {
            log::warn!(
                "catch-up for {} overran the {}-sweep ceiling, budget left {:.2}h",
                creature.name,
                config.max_catchup_sweeps,
                budget
            );
            report.budget_left_hours = budget;
            return Err(CatchUpError::Overrun(report));
        }
        report.sweeps += 1;

        let mut applied_this_sweep = false;
        for index in 0..creature.kind.automatic_actions.len() {
            let period_hours = creature.kind.automatic_actions[index].period_hours();
            if period_hours >= budget {
                continue;
            }

            let action = &creature.kind.automatic_actions[index];
            for d in &action.effect.deltas {
                creature.params.adjust_by(d.kind, d.delta)?;
            }
            budget -= period_hours;
            accrued_hours += period_hours;
            report.actions_applied += 1;
            applied_this_sweep = true;

            // Age advances in whole-day increments as the accrual crosses
            // integer boundaries, not by per-action truncation.
            let whole_days = accrued_hours.floor() as u32;
            if whole_days > 0 {
                accrued_hours -= whole_days as f64;
                creature.add_age(whole_days);
                report.days_gained += whole_days;
            }
            if growth::check_and_advance(creature).is_some() {
                report.stages_advanced += 1;
            }
        }

        if !applied_this_sweep {
            break;
        }
        log::debug!(
            "catch-up sweep {}: {} applied so far, budget {:.2}h",
            report.sweeps,
            report.actions_applied,
            budget
        );
    }

    report.budget_left_hours = budget;
    log::info!(
        "catch-up for {}: {} actions over {} sweeps, +{} days, +{} stages",
        creature.name,
        report.actions_applied,
        report.sweeps,
        report.days_gained,
        report.stages_advanced
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{
        AutomaticAction, Effect, GrowthThreshold, Kind, Maturity, ParamSpec, ParameterKind,
    };

    fn single_action_creature(period_minutes: u32) -> Creature {
        let kind = Kind {
            name: "test".into(),
            asset: "test.png".into(),
            params: vec![ParamSpec::new(ParameterKind::Satiety, 100.0, 100.0)],
            growth: vec![GrowthThreshold {
                stage: Maturity::Baby,
                next_at_days: 5,
            }],
            automatic_actions: vec![AutomaticAction::new(
                "hunger",
                period_minutes,
                Effect::new([(ParameterKind::Satiety, -10.0)]),
                None,
            )],
            player_actions: Vec::new(),
        };
        Creature::new(kind, "Sam")
    }

    /// 5 real hours at a 1:1 compression is a 5-hour budget; a 2-hour action
    /// fires twice (cost 4h) and is skipped with 1h remaining.
    #[test]
    fn test_two_hour_action_five_hour_budget() {
        let mut c = single_action_creature(120);
        let config = SimConfig {
            game_days_per_real_hour: 1.0,
            ..SimConfig::default()
        };
        let report = run_catch_up(&mut c, 5.0 * 3600.0, &config).unwrap();
        assert_eq!(report.actions_applied, 2);
        assert!((report.budget_left_hours - 1.0).abs() < 1e-9);
        assert_eq!(c.params.get(ParameterKind::Satiety).unwrap(), 80.0);
    }

    #[test]
    fn test_zero_elapsed_is_idempotent() {
        let mut c = single_action_creature(120);
        let before = c.params.get(ParameterKind::Satiety).unwrap();
        let report = run_catch_up(&mut c, 0.0, &SimConfig::default()).unwrap();
        assert_eq!(report.actions_applied, 0);
        assert_eq!(report.days_gained, 0);
        assert_eq!(report.stages_advanced, 0);
        assert_eq!(c.params.get(ParameterKind::Satiety).unwrap(), before);
        assert_eq!(c.age, 0);
    }

    #[test]
    fn test_determinism() {
        let config = SimConfig::default();
        let mut a = single_action_creature(90);
        let mut b = single_action_creature(90);
        let ra = run_catch_up(&mut a, 7.25 * 3600.0, &config).unwrap();
        let rb = run_catch_up(&mut b, 7.25 * 3600.0, &config).unwrap();
        assert_eq!(ra, rb);
        assert_eq!(a.age, b.age);
        assert_eq!(a.maturity, b.maturity);
        assert_eq!(
            a.params.get(ParameterKind::Satiety).unwrap(),
            b.params.get(ParameterKind::Satiety).unwrap()
        );
    }

    #[test]
    fn test_age_accrues_across_actions() {
        // 30-minute period: two firings accrue one whole day.
        let mut c = single_action_creature(30);
        let config = SimConfig {
            game_days_per_real_hour: 1.0,
            ..SimConfig::default()
        };
        let report = run_catch_up(&mut c, 2.1 * 3600.0, &config).unwrap();
        assert_eq!(report.actions_applied, 4);
        assert_eq!(report.days_gained, 2);
        assert_eq!(c.age, 2);
    }

    #[test]
    fn test_zero_period_action_hits_ceiling() {
        let mut c = single_action_creature(0);
        let config = SimConfig {
            game_days_per_real_hour: 1.0,
            max_catchup_sweeps: 50,
            ..SimConfig::default()
        };
        let err = run_catch_up(&mut c, 3600.0, &config).unwrap_err();
        match err {
            CatchUpError::Overrun(report) => assert_eq!(report.sweeps, 50),
            other => panic!("expected overrun, got {:?}", other),
        }
    }

    #[test]
    fn test_growth_triggered_by_replay() {
        let mut c = single_action_creature(6 * 60);
        let config = SimConfig {
            game_days_per_real_hour: 1.0,
            ..SimConfig::default()
        };
        // 6h period against a 37h budget: six firings, 36 accrued hours,
        // 36 whole days of age. Growth fires once (single Baby threshold).
        let report = run_catch_up(&mut c, 37.0 * 3600.0, &config).unwrap();
        assert_eq!(report.actions_applied, 6);
        assert_eq!(report.days_gained, 36);
        assert_eq!(c.age, 36);
        assert_eq!(c.maturity, Maturity::Child);
        assert_eq!(report.stages_advanced, 1);
    }
}
