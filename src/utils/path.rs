//! Path utilities: resolve the config directory, expand ~ in user paths.

use std::path::PathBuf;

const APP_DIR: &str = ".rreserve";

/// `<home>/.rreserve`, falling back to the working directory when no home
/// directory can be determined.
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
