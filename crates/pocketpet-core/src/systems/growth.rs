//! Age-driven maturity transitions.

use crate::components::{Creature, Maturity};

/// Advance at most one stage if `age` has reached the current stage's
/// threshold in the species growth table.
///
/// Monotonic and one-directional. A no-op at the terminal stage or when the
/// table has no entry for the current stage. When age overshoots several
/// thresholds in one step, the extra stages are caught one at a time on
/// subsequent calls, never as a multi-stage jump.
pub fn check_and_advance(creature: &mut Creature) -> Option<Maturity> {
    let next_at = creature.kind.next_stage_at(creature.maturity)?;
    if creature.age < next_at {
        return None;
    }
    let next = creature.maturity.next()?;
    creature.maturity = next;
    log::debug!(
        "{} grew to {:?} at age {} days",
        creature.name,
        next,
        creature.age
    );
    Some(next)
}
