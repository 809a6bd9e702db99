//! Compile-time build information, written by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line shown by `loadout --version`.
pub fn version_line() -> String {
    format!(
        "{} {} ({}, {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
