// ABOUTME: Shared logging setup for notehub binaries
// ABOUTME: Stderr logging for CLI runs, file logging for the TUI

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Log to stderr. Default level INFO, overridable with RUST_LOG.
/// Used by the non-interactive CLI subcommands, where stderr is free.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();
}

/// Where file logs go: `<config dir>/notehub/<app_name>.log`.
/// Returns None when the platform config directory cannot be resolved.
pub fn log_path(app_name: &str) -> Option<PathBuf> {
    Some(
        dirs::config_dir()?
            .join("notehub")
            .join(format!("{app_name}.log")),
    )
}

/// Log to a file so the alternate screen stays clean. Default level
/// INFO, overridable with RUST_LOG. A setup failure (unwritable config
/// dir, say) prints one warning and the app runs without logging.
pub fn init_file(app_name: &str) {
    if let Err(e) = try_init_file(app_name) {
        eprintln!("warning: file logging disabled: {e}");
    }
}

fn try_init_file(app_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = log_path(app_name).ok_or("no config directory on this platform")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}
