//! Checked-state reconciliation after the catalog is rebuilt.
//!
//! Pure over its inputs: the previous catalog and checked-state are read-only
//! snapshots and a fresh checked-state is returned.

use super::catalog::{Catalog, CheckedState};
use std::collections::{HashMap, VecDeque};

/// How checked marks survive a catalog rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PreservationMode {
    /// Position i keeps whatever was at position i before. Marks can land on
    /// a different item when a kit shifts the list.
    #[default]
    Positional,
    /// An item keeps the mark of the previous item with the same label.
    ByLabel,
}

/// Build the checked-state for `new_catalog`.
///
/// Every zone of `new_catalog` gets exactly one flag per item. Zones that only
/// exist in `previous_checked` are carried over unchanged.
pub fn reconcile(
    previous_catalog: &Catalog,
    previous_checked: &CheckedState,
    new_catalog: &Catalog,
    mode: PreservationMode,
) -> CheckedState {
    let mut checked = previous_checked.clone();
    for (zone, items) in new_catalog {
        let old = previous_checked.get(zone).map(Vec::as_slice).unwrap_or(&[]);
        let flags = match mode {
            PreservationMode::Positional => positional(old, items.len()),
            PreservationMode::ByLabel => match previous_catalog.get(zone) {
                Some(old_items) => by_label(old_items, old, items),
                // Carried flags from a dropped zone line up with its kit list
                None => positional(old, items.len()),
            },
        };
        checked.insert(zone.clone(), flags);
    }
    checked
}

fn positional(old: &[bool], len: usize) -> Vec<bool> {
    (0..len).map(|i| old.get(i).copied().unwrap_or(false)).collect()
}

fn by_label(old_items: &[String], old: &[bool], items: &[String]) -> Vec<bool> {
    // k-th occurrence of a label inherits from the k-th old occurrence
    let mut marks: HashMap<&str, VecDeque<bool>> = HashMap::new();
    for (i, label) in old_items.iter().enumerate() {
        marks
            .entry(label.as_str())
            .or_default()
            .push_back(old.get(i).copied().unwrap_or(false));
    }
    items
        .iter()
        .map(|label| {
            marks
                .get_mut(label.as_str())
                .and_then(VecDeque::pop_front)
                .unwrap_or(false)
        })
        .collect()
}
