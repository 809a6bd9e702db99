//! Error type shared by the loadout manager, its stores and renderers.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadoutError {
    #[error("unknown zone '{0}'")]
    UnknownZone(String),

    #[error("item {index} is out of range for zone '{zone}' ({len} items)")]
    ItemOutOfRange {
        zone: String,
        index: usize,
        len: usize,
    },

    #[error("unknown kit '{0}'")]
    UnknownKit(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoadoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_zone_and_bounds() {
        let err = LoadoutError::ItemOutOfRange {
            zone: "engine".to_string(),
            index: 5,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "item 5 is out of range for zone 'engine' (2 items)"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let err: LoadoutError = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(err, LoadoutError::Io(_)));
    }
}
