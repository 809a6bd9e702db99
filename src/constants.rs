// Storage keys
pub const KEY_CHECKED_ITEMS: &str = "checked-items";
pub const KEY_ACTIVE_KITS: &str = "active-kits";
pub const KEY_LAST_SAVED: &str = "last-saved";

// Filesystem layout
pub const DATA_DIR_NAME: &str = ".loadout";
pub const STORE_FILE_EXTENSION: &str = "json";
pub const LOG_FILE_NAME: &str = "loadout.log";

// Environment overrides
pub const ENV_DATA_DIR: &str = "LOADOUT_DIR";
pub const ENV_PRESERVE: &str = "LOADOUT_PRESERVE";
pub const ENV_LOG_FILTER: &str = "LOADOUT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Terminal UI
pub const INPUT_POLL_MS: u64 = 100;
pub const LAST_SAVED_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
