//! Session configuration.
//!
//! # Responsibility
//! - Resolve data file and log locations from the working directory.
//!
//! # Invariants
//! - Paths are derived only from the given working directory; no environment
//!   variables or flags are consulted.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

/// Directory under the working directory holding all contact book files.
pub const DATA_DIR_NAME: &str = "ContactManager";
/// Persisted contacts file name.
pub const DATA_FILE_NAME: &str = "SaveFile.txt";
/// Log directory name under the data directory.
pub const LOG_DIR_NAME: &str = "logs";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub data_file: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl AppConfig {
    /// Builds the default layout `<dir>/ContactManager/{SaveFile.txt,logs/}`.
    pub fn from_working_dir(dir: impl AsRef<Path>) -> Self {
        let data_dir = dir.as_ref().join(DATA_DIR_NAME);
        Self {
            data_file: data_dir.join(DATA_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            data_dir,
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use std::path::Path;

    #[test]
    fn layout_is_rooted_under_contact_manager_dir() {
        let config = AppConfig::from_working_dir("/home/user");
        assert_eq!(config.data_dir, Path::new("/home/user/ContactManager"));
        assert_eq!(
            config.data_file,
            Path::new("/home/user/ContactManager/SaveFile.txt")
        );
        assert_eq!(config.log_dir, Path::new("/home/user/ContactManager/logs"));
    }
}
