//! Delivered-file records produced by the folder scan.

use serde::{Deserialize, Serialize};

/// One file found in the delivered folder.
///
/// `path` is relative to the scanned folder with `/`-joined segments; `name`
/// is the final segment. No uniqueness or ordering is guaranteed by
/// producers, and the list may contain arbitrary non-drawing noise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveredFile {
    pub path: String,
    pub name: String,
}

impl DeliveredFile {
    /// Builds a record from a relative path, deriving `name` from the final
    /// `/`-separated segment.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path
            .rsplit('/')
            .next()
            .unwrap_or(path.as_str())
            .to_string();
        Self { path, name }
    }
}
