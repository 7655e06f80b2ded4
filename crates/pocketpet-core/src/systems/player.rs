//! Player action gate: per-action enablement and gated triggering.

use crate::components::{Creature, UnknownParameter};

/// Errors from triggering a player action.
#[derive(Debug)]
pub enum ActionError {
    /// The action's precondition does not hold right now. Expected and
    /// recoverable; re-check enablement before retrying.
    Disabled { name: String },
    /// No player action at this index.
    UnknownAction { index: usize },
    /// The action references a parameter the species does not define.
    Param(UnknownParameter),
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::Disabled { name } => {
                write!(f, "action '{}' is currently disabled", name)
            }
            ActionError::UnknownAction { index } => {
                write!(f, "no player action at index {}", index)
            }
            ActionError::Param(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<UnknownParameter> for ActionError {
    fn from(e: UnknownParameter) -> Self {
        ActionError::Param(e)
    }
}

/// Freshly computed view of one player action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionView {
    pub index: usize,
    pub name: String,
    pub enabled: bool,
}

/// Whether the action at `index` may currently be triggered.
///
/// Derived from the precondition against live parameter values on every
/// call; never cached across mutations.
pub fn is_enabled(creature: &Creature, index: usize) -> Result<bool, ActionError> {
    let action = creature
        .kind
        .player_actions
        .get(index)
        .ok_or(ActionError::UnknownAction { index })?;
    Ok(action.precondition.holds(&creature.params)?)
}

/// All player actions in fixed order, with current enablement.
pub fn action_views(creature: &Creature) -> Result<Vec<ActionView>, ActionError> {
    creature
        .kind
        .player_actions
        .iter()
        .enumerate()
        .map(|(index, action)| {
            Ok(ActionView {
                index,
                name: action.name.clone(),
                enabled: action.precondition.holds(&creature.params)?,
            })
        })
        .collect()
}

/// Trigger the action at `index`: gate check, effect, result message.
pub fn trigger(creature: &mut Creature, index: usize) -> Result<String, ActionError> {
    if !is_enabled(creature, index)? {
        let name = creature.kind.player_actions[index].name.clone();
        return Err(ActionError::Disabled { name });
    }
    let action = &creature.kind.player_actions[index];
    for d in &action.effect.deltas {
        creature.params.adjust_by(d.kind, d.delta)?;
    }
    Ok(action.message.replace("{name}", &creature.name))
}
