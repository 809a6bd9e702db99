//! Loadout state: zone/kit catalog, checked-state reconciliation and the
//! manager that ties them to storage and rendering.

pub mod catalog;
pub mod manager;
pub mod reconcile;

pub use catalog::*;
pub use manager::LoadoutManager;
pub use reconcile::{reconcile, PreservationMode};
