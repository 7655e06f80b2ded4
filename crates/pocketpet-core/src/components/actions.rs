//! Action definitions: parameter effects, automatic behaviors, player behaviors.

use serde::{Deserialize, Serialize};

use super::params::{ParameterKind, ParameterStore, UnknownParameter};

/// One parameter delta within an effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamDelta {
    pub kind: ParameterKind,
    pub delta: f32,
}

/// The ordered parameter deltas an action applies when it fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub deltas: Vec<ParamDelta>,
}

impl Effect {
    pub fn new(deltas: impl IntoIterator<Item = (ParameterKind, f32)>) -> Self {
        Self {
            deltas: deltas
                .into_iter()
                .map(|(kind, delta)| ParamDelta { kind, delta })
                .collect(),
        }
    }

    /// Apply every delta through the store, in order.
    pub fn apply(&self, store: &mut ParameterStore) -> Result<(), UnknownParameter> {
        for d in &self.deltas {
            store.adjust_by(d.kind, d.delta)?;
        }
        Ok(())
    }
}

/// Timer-driven behavior applied without player input, cycled in fixed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomaticAction {
    pub name: String,
    /// In-game minutes between firings.
    pub period_minutes: u32,
    pub effect: Effect,
    /// Announced to the presentation layer when the action fires.
    /// `{name}` expands to the creature's name.
    pub message: Option<String>,
}

impl AutomaticAction {
    pub fn new(
        name: impl Into<String>,
        period_minutes: u32,
        effect: Effect,
        message: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            period_minutes,
            effect,
            message: message.map(String::from),
        }
    }

    /// Period converted to in-game hours, the unit the catch-up budget uses.
    pub fn period_hours(&self) -> f64 {
        self.period_minutes as f64 / 60.0
    }
}

/// Guard over current parameter values deciding whether a player action
/// may be triggered right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Precondition {
    Always,
    /// The parameter has room left below its maximum.
    BelowMax(ParameterKind),
    AtLeast(ParameterKind, f32),
    AtMost(ParameterKind, f32),
    All(Vec<Precondition>),
}

impl Precondition {
    /// Evaluate against current values. Never cached; derived state only.
    pub fn holds(&self, store: &ParameterStore) -> Result<bool, UnknownParameter> {
        match self {
            Precondition::Always => Ok(true),
            Precondition::BelowMax(kind) => Ok(!store.is_full(*kind)?),
            Precondition::AtLeast(kind, v) => Ok(store.get(*kind)? >= *v),
            Precondition::AtMost(kind, v) => Ok(store.get(*kind)? <= *v),
            Precondition::All(parts) => {
                for p in parts {
                    if !p.holds(store)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }
}

/// Manually triggered behavior gated by a precondition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerAction {
    pub name: String,
    pub precondition: Precondition,
    pub effect: Effect,
    /// Result template; `{name}` expands to the creature's name.
    pub message: String,
}

impl PlayerAction {
    pub fn new(
        name: impl Into<String>,
        precondition: Precondition,
        effect: Effect,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            precondition,
            effect,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::params::ParamSpec;

    fn store() -> ParameterStore {
        ParameterStore::from_specs(&[
            ParamSpec::new(ParameterKind::Satiety, 100.0, 100.0),
            ParamSpec::new(ParameterKind::Energy, 100.0, 40.0),
        ])
    }

    #[test]
    fn test_effect_applies_in_order() {
        let mut s = store();
        let effect = Effect::new([
            (ParameterKind::Satiety, -30.0),
            (ParameterKind::Energy, 10.0),
        ]);
        effect.apply(&mut s).unwrap();
        assert_eq!(s.get(ParameterKind::Satiety).unwrap(), 70.0);
        assert_eq!(s.get(ParameterKind::Energy).unwrap(), 50.0);
    }

    #[test]
    fn test_below_max_precondition() {
        let s = store();
        assert!(!Precondition::BelowMax(ParameterKind::Satiety)
            .holds(&s)
            .unwrap());
        assert!(Precondition::BelowMax(ParameterKind::Energy)
            .holds(&s)
            .unwrap());
    }

    #[test]
    fn test_all_precondition_short_circuits_false() {
        let s = store();
        let pre = Precondition::All(vec![
            Precondition::AtLeast(ParameterKind::Energy, 20.0),
            Precondition::BelowMax(ParameterKind::Satiety),
        ]);
        assert!(!pre.holds(&s).unwrap());
    }

    #[test]
    fn test_precondition_unknown_parameter_is_error() {
        let s = store();
        assert!(Precondition::BelowMax(ParameterKind::Mood).holds(&s).is_err());
    }

    #[test]
    fn test_period_hours() {
        let a = AutomaticAction::new("doze", 120, Effect::new([]), None);
        assert_eq!(a.period_hours(), 2.0);
    }
}
