use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::entry::AppEntry;
use crate::error::LaunchError;
use crate::exec::sanitize_exec;

/// Terminal-agnostic fallback used when a terminal app is requested but no
/// terminal command is configured.
const FALLBACK_LAUNCHER: &str = "gtk-launch";

/// Characters systemd rejects in slice names.
static SLICE_INVALID: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w.-]").unwrap());

/// How the child escapes (or doesn't) the launcher's cgroup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsolationDecision {
    /// systemd-run is not installed; the setsid detach in the spawner is the
    /// only separation the child gets.
    Unavailable,
    /// The entry asked to stay in the launcher's scope.
    Inherit,
    /// Move the child into a transient scope of its own, sliced under a
    /// name derived from the entry id when one survives cleanup.
    NewScope { slice: Option<String> },
}

impl IsolationDecision {
    pub fn for_entry(entry: &AppEntry, systemd_run: bool) -> Self {
        if !systemd_run {
            IsolationDecision::Unavailable
        } else if entry.inherit_scope {
            IsolationDecision::Inherit
        } else {
            IsolationDecision::NewScope {
                slice: slice_name(&entry.id),
            }
        }
    }

    /// Tokens prepended to the argv to enter the scope, if any.
    fn wrapper(&self) -> Vec<String> {
        match self {
            IsolationDecision::Unavailable | IsolationDecision::Inherit => Vec::new(),
            IsolationDecision::NewScope { slice } => {
                let mut argv = vec![
                    "systemd-run".to_string(),
                    "--user".to_string(),
                    "--scope".to_string(),
                ];
                if let Some(slice) = slice {
                    argv.push(format!("--slice={slice}"));
                }
                argv
            }
        }
    }
}

/// Derive a slice name from a desktop file id.
///
/// Slice names must not contain characters outside `[\w.-]` and must not
/// begin or end with a hyphen. Ids that leave nothing after cleanup get no
/// slice at all; the transient scope then keeps its generated name.
fn slice_name(id: &str) -> Option<String> {
    let cleaned = SLICE_INVALID.replace_all(id, "");
    let cleaned = cleaned.trim_matches('-');
    if cleaned.is_empty() {
        None
    } else {
        Some(format!("app-{cleaned}"))
    }
}

/// Resolve the final argv for an entry.
///
/// Terminal apps run inside the preferred terminal when one is configured,
/// with the whole app command passed as a single argument for the terminal
/// to re-split. Without a configured terminal the entry is handed to
/// `gtk-launch` by id. GUI apps are word-split with POSIX quoting rules.
pub fn resolve_argv(
    entry: &AppEntry,
    terminal_command: &str,
    isolation: &IsolationDecision,
) -> Result<Vec<String>, LaunchError> {
    let exec = sanitize_exec(&entry.exec)?;

    let inner = if entry.terminal {
        match shell_words::split(terminal_command) {
            Ok(terminal_argv) if !terminal_argv.is_empty() => {
                info!(terminal = %terminal_command, "running in preferred terminal");
                let mut argv = terminal_argv;
                argv.push(exec);
                argv
            }
            _ => vec![FALLBACK_LAUNCHER.to_string(), entry.id.clone()],
        }
    } else {
        let argv = shell_words::split(&exec).map_err(|_| LaunchError::NoExecutableCommand)?;
        if argv.is_empty() {
            return Err(LaunchError::NoExecutableCommand);
        }
        argv
    };

    let mut argv = isolation.wrapper();
    argv.extend(inner);
    Ok(argv)
}
