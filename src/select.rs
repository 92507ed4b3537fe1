use chrono::{DateTime, Utc};

use crate::elements::{ElementSet, ElementStore};

/// Selects the element set whose epoch is closest in time to `target`.
///
/// The most recent set at or before the target and the earliest one
/// after it are compared by temporal distance; equidistant candidates
/// resolve to the future one. Temporal proximity wins over recency.
/// Returns `None` only when the store is empty.
pub fn select_closest<S: ElementStore + ?Sized>(
    store: &S,
    target: DateTime<Utc>,
) -> Option<&ElementSet> {
    let before = store.latest_at(target);
    let after = store.earliest_after(target);
    match (before, after) {
        (Some(before), None) => Some(before),
        (None, Some(after)) => Some(after),
        (Some(before), Some(after)) => {
            if target - before.epoch < after.epoch - target {
                Some(before)
            } else {
                Some(after)
            }
        },
        (None, None) => None,
    }
}
