//! Loadout - vehicle loadout inspection checklist.
//!
//! The library holds the state manager and its collaborators; the binary
//! wires them to a terminal UI and a one-shot command line.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod loadout;
pub mod logging;
pub mod store;
pub mod ui;
pub mod view;

pub use error::{LoadoutError, Result};
pub use loadout::{LoadoutManager, PreservationMode};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use view::{LoadoutView, NullRenderer, Render, TextRenderer};
