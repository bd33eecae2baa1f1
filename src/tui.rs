use anyhow::Result;

/// Runs the interactive editor against the backend configured for the
/// current directory.
pub fn run() -> Result<()> {
    crate::tui_shell::run()
}
