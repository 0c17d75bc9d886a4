use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// A launchable application, as read out of its `.desktop` entry by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppEntry {
    /// Desktop file id, e.g. `org.mozilla.firefox.desktop`. Also the seed
    /// for the isolation scope name.
    pub id: String,
    pub name: String,
    /// Raw `Exec=` line; may still contain field codes like `%u`.
    pub exec: String,
    /// `Terminal=true` in the desktop entry.
    pub terminal: bool,
    /// Keep the child inside the launcher's own scope instead of moving it
    /// to a transient one.
    pub inherit_scope: bool,
    /// Where the entry came from. Only used in log messages.
    pub path: PathBuf,
}
