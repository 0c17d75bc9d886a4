use std::collections::HashMap;
use std::io;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::entry::AppEntry;
use crate::env::build_env;
use crate::error::LaunchError;
use crate::policy::{resolve_argv, IsolationDecision};

/// Checked once per process; whether systemd-run can wrap children in a
/// transient scope.
static HAS_SYSTEMD_RUN: Lazy<bool> = Lazy::new(|| which::which("systemd-run").is_ok());

/// Host-supplied launch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchOptions {
    /// Preferred terminal command, e.g. `"xterm -e"`. Empty means none is
    /// configured.
    pub terminal_command: String,
    /// Whether systemd-run is available for scope isolation. Public so
    /// hosts and tests can pin it instead of probing.
    pub systemd_run: bool,
}

impl LaunchOptions {
    /// Options with the systemd-run probe taken from PATH.
    pub fn new(terminal_command: impl Into<String>) -> Self {
        Self {
            terminal_command: terminal_command.into(),
            systemd_run: *HAS_SYSTEMD_RUN,
        }
    }
}

/// Launch an application, detached from this process.
///
/// Best effort: every failure is logged and absorbed here. A launch that
/// does not happen must not take the launcher down with it.
pub fn launch_app(entry: &AppEntry, opts: &LaunchOptions) {
    if let Err(err) = try_launch(entry, opts) {
        error!(
            app = %entry.name,
            path = %entry.path.display(),
            error = %err,
            "could not launch application"
        );
    }
}

fn try_launch(entry: &AppEntry, opts: &LaunchOptions) -> Result<(), LaunchError> {
    let isolation = IsolationDecision::for_entry(entry, opts.systemd_run);
    let argv = resolve_argv(entry, &opts.terminal_command, &isolation)?;
    let env = build_env(std::env::vars());

    info!(
        app = %entry.name,
        path = %entry.path.display(),
        exec = %entry.exec,
        "launching application"
    );
    spawn_detached(&argv, &env)?;
    Ok(())
}

/// Spawn without waiting, in a fresh session.
///
/// The child must keep running when the launcher exits: setsid cuts the
/// session-level signal path, and the systemd-run wrapper (when present in
/// the argv) moves it out of the launcher's cgroup on top of that.
pub(crate) fn spawn_detached(argv: &[String], env: &HashMap<String, String>) -> io::Result<()> {
    let Some((program, args)) = argv.split_first() else {
        return Err(io::Error::other("empty argv"));
    };

    let mut cmd = Command::new(program);
    cmd.args(args)
        .env_clear()
        .envs(env)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    unsafe {
        cmd.pre_exec(|| {
            libc::setsid();
            Ok(())
        });
    }

    cmd.spawn().map(|_| ())
}
