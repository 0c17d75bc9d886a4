use tracing::{error, info};

use crate::env::build_env;
use crate::error::LaunchError;
use crate::launch::spawn_detached;

/// Run an ad-hoc shell script detached from the launcher.
///
/// `args` is word-split with POSIX quoting rules and handed to the script as
/// `$1`, `$2`, ... Same best-effort policy as `launch_app`: failures are
/// logged and absorbed.
pub fn run_script(script: &str, args: &str) {
    if let Err(err) = try_run(script, args) {
        error!(error = %err, "could not run script");
    }
}

fn try_run(script: &str, args: &str) -> Result<(), LaunchError> {
    if script.trim().is_empty() {
        return Err(LaunchError::NoExecutableCommand);
    }

    let mut argv = vec![
        "sh".to_string(),
        "-c".to_string(),
        script.to_string(),
        "sh".to_string(),
    ];
    // An arg string sh itself couldn't split just means no positional
    // parameters; the script is still worth running.
    argv.extend(shell_words::split(args).unwrap_or_default());

    let env = build_env(std::env::vars());
    info!(script = %script, "running script");
    spawn_detached(&argv, &env)?;
    Ok(())
}
