//! Round-robin scheduling over the automatic-action rotation.
//!
//! The cursor is pure scheduling state with no time awareness; the live
//! driver and the catch-up simulator both supply their own timing.

use serde::{Deserialize, Serialize};

use crate::components::{Creature, UnknownParameter};

/// Cyclic cursor over the automatic-action sequence.
///
/// An explicit index with modulo wrap, so re-entering the cycle always
/// resumes from the position last left and never resets.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ActionCursor {
    next: usize,
}

impl ActionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next action in rotation, wrapping after the last.
    /// `None` when the rotation is empty.
    pub fn advance(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = self.next % len;
        self.next = (index + 1) % len;
        Some(index)
    }
}

/// Apply one automatic action's effect through the parameter store.
/// Returns the action's announcement, if it has one.
pub fn tick_action(
    creature: &mut Creature,
    index: usize,
) -> Result<Option<String>, UnknownParameter> {
    let action = &creature.kind.automatic_actions[index];
    for d in &action.effect.deltas {
        creature.params.adjust_by(d.kind, d.delta)?;
    }
    Ok(action
        .message
        .as_ref()
        .map(|m| m.replace("{name}", &creature.name)))
}
