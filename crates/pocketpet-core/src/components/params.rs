//! Bounded creature parameters and the store that owns them.
//!
//! Every parameter mutation funnels through [`ParameterStore::adjust_by`],
//! which clamps the result into `[0, max]`. Out-of-range deltas truncate,
//! they never error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identity tag for a creature parameter.
///
/// An explicit enum rather than a name string, so the parameter set is
/// statically enumerable and save/load matching cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    Satiety,
    Hydration,
    Mood,
    Energy,
}

impl ParameterKind {
    /// Every kind the core knows about, in display order.
    pub const ALL: [ParameterKind; 4] = [
        ParameterKind::Satiety,
        ParameterKind::Hydration,
        ParameterKind::Mood,
        ParameterKind::Energy,
    ];

    /// Stable identifier used in persisted snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterKind::Satiety => "satiety",
            ParameterKind::Hydration => "hydration",
            ParameterKind::Mood => "mood",
            ParameterKind::Energy => "energy",
        }
    }

    /// Inverse of [`as_str`](Self::as_str); `None` for unrecognized identifiers.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }
}

/// A bounded numeric attribute: `0 <= value <= max` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub value: f32,
    pub max: f32,
}

impl Parameter {
    pub fn new(value: f32, max: f32) -> Self {
        Self {
            value: value.clamp(0.0, max),
            max,
        }
    }

    pub fn is_full(&self) -> bool {
        self.value >= self.max
    }
}

/// Per-species parameter definition: which kind, its cap, and its starting value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParamSpec {
    pub kind: ParameterKind,
    pub max: f32,
    pub initial: f32,
}

impl ParamSpec {
    pub fn new(kind: ParameterKind, max: f32, initial: f32) -> Self {
        Self { kind, max, initial }
    }
}

/// A parameter kind was queried or adjusted that the owning species
/// does not define. Contract violation, not a recoverable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownParameter {
    pub kind: ParameterKind,
}

impl std::fmt::Display for UnknownParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "parameter {:?} is not defined for this species",
            self.kind
        )
    }
}

impl std::error::Error for UnknownParameter {}

/// The creature's parameter store: one entry per kind the species defines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterStore {
    params: BTreeMap<ParameterKind, Parameter>,
}

impl ParameterStore {
    /// Build a store from species parameter specs, all values at their defaults.
    pub fn from_specs(specs: &[ParamSpec]) -> Self {
        let params = specs
            .iter()
            .map(|s| (s.kind, Parameter::new(s.initial, s.max)))
            .collect();
        Self { params }
    }

    pub fn defines(&self, kind: ParameterKind) -> bool {
        self.params.contains_key(&kind)
    }

    pub fn get(&self, kind: ParameterKind) -> Result<f32, UnknownParameter> {
        self.params
            .get(&kind)
            .map(|p| p.value)
            .ok_or(UnknownParameter { kind })
    }

    pub fn max(&self, kind: ParameterKind) -> Result<f32, UnknownParameter> {
        self.params
            .get(&kind)
            .map(|p| p.max)
            .ok_or(UnknownParameter { kind })
    }

    pub fn is_full(&self, kind: ParameterKind) -> Result<bool, UnknownParameter> {
        self.params
            .get(&kind)
            .map(|p| p.is_full())
            .ok_or(UnknownParameter { kind })
    }

    /// Apply a delta, clamping the result into `[0, max]`. Returns the new value.
    ///
    /// This is the single point of truth for the bound invariant; no other
    /// component writes parameter values.
    pub fn adjust_by(&mut self, kind: ParameterKind, delta: f32) -> Result<f32, UnknownParameter> {
        let p = self.params.get_mut(&kind).ok_or(UnknownParameter { kind })?;
        p.value = (p.value + delta).clamp(0.0, p.max);
        Ok(p.value)
    }

    /// Overwrite a value from a persisted snapshot, clamped into `[0, max]`.
    pub(crate) fn restore(&mut self, kind: ParameterKind, value: f32) -> Result<f32, UnknownParameter> {
        let p = self.params.get_mut(&kind).ok_or(UnknownParameter { kind })?;
        p.value = value.clamp(0.0, p.max);
        Ok(p.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParameterKind, &Parameter)> {
        self.params.iter().map(|(k, p)| (*k, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ParameterStore {
        ParameterStore::from_specs(&[
            ParamSpec::new(ParameterKind::Satiety, 100.0, 70.0),
            ParamSpec::new(ParameterKind::Mood, 100.0, 90.0),
        ])
    }

    #[test]
    fn test_adjust_clamps_at_max() {
        let mut s = store();
        let v = s.adjust_by(ParameterKind::Satiety, 95.0).unwrap();
        assert_eq!(v, 100.0);
    }

    #[test]
    fn test_adjust_clamps_at_zero() {
        let mut s = store();
        let v = s.adjust_by(ParameterKind::Satiety, -500.0).unwrap();
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_overfill_from_95() {
        let mut s = ParameterStore::from_specs(&[ParamSpec::new(
            ParameterKind::Energy,
            100.0,
            95.0,
        )]);
        assert_eq!(s.adjust_by(ParameterKind::Energy, 20.0).unwrap(), 100.0);
    }

    #[test]
    fn test_unknown_parameter() {
        let mut s = store();
        assert!(s.get(ParameterKind::Energy).is_err());
        assert!(s.adjust_by(ParameterKind::Energy, 1.0).is_err());
    }

    #[test]
    fn test_bounds_hold_under_arbitrary_sequences() {
        let mut s = store();
        let deltas = [35.0, -120.0, 7.5, 999.0, -0.25, -999.0, 50.0];
        for d in deltas {
            let v = s.adjust_by(ParameterKind::Mood, d).unwrap();
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_kind_identifiers_roundtrip() {
        for k in ParameterKind::ALL {
            assert_eq!(ParameterKind::parse(k.as_str()), Some(k));
        }
        assert_eq!(ParameterKind::parse("charisma"), None);
    }
}
