//! Default on-disk location for the config file.
//!
//! Platform resolution goes through the `directories` crate (XDG on Linux,
//! `~/Library/Application Support` on macOS). Callers that manage their own
//! paths can ignore this module entirely; every constructor on
//! [`Config`](crate::Config) takes an explicit path.

use std::path::PathBuf;

/// File name of the config document inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// The platform-resolved path of the config file.
///
/// Returns `None` when no home directory can be determined.
pub fn config_file() -> Option<PathBuf> {
    let proj = directories::ProjectDirs::from("", "", "hostfig")?;
    Some(proj.config_dir().join(CONFIG_FILE_NAME))
}
