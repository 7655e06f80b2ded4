//! Species catalog: the ordered set of available kinds.
//!
//! The core only needs lookup by identifier and enumeration for the
//! new-game choice. Two species ship built in; a file-backed source stays
//! an external collaborator and feeds kinds in through [`Catalog::new`].

use crate::components::{
    AutomaticAction, Effect, GrowthThreshold, Kind, Maturity, ParamSpec, ParameterKind,
    PlayerAction, Precondition,
};

/// Ordered collection of species definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
    kinds: Vec<Kind>,
}

impl Catalog {
    pub fn new(kinds: Vec<Kind>) -> Self {
        Self { kinds }
    }

    /// The built-in species set.
    pub fn builtin() -> Self {
        Self::new(vec![cat_kind(), dog_kind()])
    }

    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Lookup by species identifier, as stored in snapshots.
    pub fn get(&self, name: &str) -> Option<&Kind> {
        self.kinds.iter().find(|k| k.name == name)
    }

    /// All kinds, in catalog order, for the new-game choice.
    pub fn kinds(&self) -> &[Kind] {
        &self.kinds
    }
}

fn cat_kind() -> Kind {
    Kind {
        name: "cat".into(),
        asset: "cat.png".into(),
        params: vec![
            ParamSpec::new(ParameterKind::Satiety, 100.0, 70.0),
            ParamSpec::new(ParameterKind::Hydration, 100.0, 80.0),
            ParamSpec::new(ParameterKind::Mood, 100.0, 90.0),
            ParamSpec::new(ParameterKind::Energy, 100.0, 100.0),
        ],
        growth: vec![
            GrowthThreshold {
                stage: Maturity::Baby,
                next_at_days: 5,
            },
            GrowthThreshold {
                stage: Maturity::Child,
                next_at_days: 12,
            },
            GrowthThreshold {
                stage: Maturity::Teen,
                next_at_days: 25,
            },
        ],
        automatic_actions: vec![
            AutomaticAction::new(
                "hunger",
                90,
                Effect::new([(ParameterKind::Satiety, -8.0)]),
                None,
            ),
            AutomaticAction::new(
                "thirst",
                60,
                Effect::new([(ParameterKind::Hydration, -10.0)]),
                None,
            ),
            AutomaticAction::new(
                "loneliness",
                120,
                Effect::new([(ParameterKind::Mood, -6.0)]),
                None,
            ),
            AutomaticAction::new(
                "doze",
                180,
                Effect::new([(ParameterKind::Energy, 12.0)]),
                Some("{name} curls up for a nap."),
            ),
        ],
        player_actions: vec![
            PlayerAction::new(
                "feed",
                Precondition::BelowMax(ParameterKind::Satiety),
                Effect::new([(ParameterKind::Satiety, 25.0)]),
                "{name} purrs over the food bowl.",
            ),
            PlayerAction::new(
                "water",
                Precondition::BelowMax(ParameterKind::Hydration),
                Effect::new([(ParameterKind::Hydration, 30.0)]),
                "{name} laps up the fresh water.",
            ),
            PlayerAction::new(
                "pet",
                Precondition::Always,
                Effect::new([(ParameterKind::Mood, 10.0)]),
                "{name} leans into the petting.",
            ),
            PlayerAction::new(
                "play",
                Precondition::All(vec![
                    Precondition::AtLeast(ParameterKind::Energy, 20.0),
                    Precondition::BelowMax(ParameterKind::Mood),
                ]),
                Effect::new([
                    (ParameterKind::Mood, 15.0),
                    (ParameterKind::Energy, -20.0),
                    (ParameterKind::Satiety, -5.0),
                ]),
                "{name} chases the feather toy until worn out.",
            ),
        ],
    }
}

fn dog_kind() -> Kind {
    Kind {
        name: "dog".into(),
        asset: "dog.png".into(),
        params: vec![
            ParamSpec::new(ParameterKind::Satiety, 120.0, 80.0),
            ParamSpec::new(ParameterKind::Hydration, 100.0, 70.0),
            ParamSpec::new(ParameterKind::Mood, 100.0, 80.0),
            ParamSpec::new(ParameterKind::Energy, 120.0, 110.0),
        ],
        growth: vec![
            GrowthThreshold {
                stage: Maturity::Baby,
                next_at_days: 4,
            },
            GrowthThreshold {
                stage: Maturity::Child,
                next_at_days: 10,
            },
            GrowthThreshold {
                stage: Maturity::Teen,
                next_at_days: 22,
            },
        ],
        automatic_actions: vec![
            AutomaticAction::new(
                "hunger",
                60,
                Effect::new([(ParameterKind::Satiety, -10.0)]),
                None,
            ),
            AutomaticAction::new(
                "thirst",
                45,
                Effect::new([(ParameterKind::Hydration, -12.0)]),
                None,
            ),
            AutomaticAction::new(
                "loneliness",
                90,
                Effect::new([(ParameterKind::Mood, -10.0)]),
                Some("{name} whines at the door."),
            ),
            AutomaticAction::new(
                "doze",
                150,
                Effect::new([(ParameterKind::Energy, 15.0)]),
                None,
            ),
        ],
        player_actions: vec![
            PlayerAction::new(
                "feed",
                Precondition::BelowMax(ParameterKind::Satiety),
                Effect::new([
                    (ParameterKind::Satiety, 35.0),
                    (ParameterKind::Hydration, -5.0),
                ]),
                "{name} empties the bowl in seconds.",
            ),
            PlayerAction::new(
                "water",
                Precondition::BelowMax(ParameterKind::Hydration),
                Effect::new([(ParameterKind::Hydration, 35.0)]),
                "{name} splashes half the water on the floor.",
            ),
            PlayerAction::new(
                "pet",
                Precondition::Always,
                Effect::new([(ParameterKind::Mood, 12.0)]),
                "{name} rolls over for belly rubs.",
            ),
            PlayerAction::new(
                "play",
                Precondition::All(vec![
                    Precondition::AtLeast(ParameterKind::Energy, 30.0),
                    Precondition::BelowMax(ParameterKind::Mood),
                ]),
                Effect::new([
                    (ParameterKind::Mood, 20.0),
                    (ParameterKind::Energy, -30.0),
                    (ParameterKind::Satiety, -10.0),
                ]),
                "{name} fetches the ball until panting.",
            ),
        ],
    }
}
