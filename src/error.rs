use thiserror::Error;

/// Everything that can go wrong between an `Exec=` line and a running child.
///
/// Both variants are terminal for the launch request. `launch_app` absorbs
/// them after logging; the pure stages return them as ordinary `Result`s.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The exec line was empty, whitespace, or unusable once field codes
    /// were stripped and quoting was applied.
    #[error("no executable command")]
    NoExecutableCommand,

    /// The OS refused to create the child process.
    #[error("spawn failed: {0}")]
    SpawnFailure(#[from] std::io::Error),
}
