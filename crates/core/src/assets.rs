//! Application directories and the files embedded in the binary.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

const APP_DIR: &str = "leaderboard";

static PLATFORM_CONFIG_DIR: Lazy<PathBuf> = Lazy::new(|| {
    dirs::config_dir()
        .map(|p| p.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("~/.config").join(APP_DIR))
});

static PLATFORM_DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    dirs::data_local_dir()
        .map(|p| p.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("~/.local/share").join(APP_DIR))
});

// An XDG base directory overrides the platform default.
fn app_dir(xdg_home: Option<OsString>, platform: &Path) -> PathBuf {
    match xdg_home {
        Some(home) => PathBuf::from(home).join(APP_DIR),
        None => platform.to_path_buf(),
    }
}

/// Directory holding `leaderboard.yml`.
pub fn get_config_dir() -> PathBuf {
    app_dir(std::env::var_os("XDG_CONFIG_HOME"), &PLATFORM_CONFIG_DIR)
}

/// Directory for the log file, created when missing.
pub fn get_data_dir() -> std::io::Result<PathBuf> {
    let path = app_dir(std::env::var_os("XDG_DATA_HOME"), &PLATFORM_DATA_DIR);
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// Config written on first run.
pub fn get_default_config() -> String {
    include_str!("../data/config.yml").to_string()
}

pub(crate) fn get_page_template() -> &'static str {
    include_str!("../data/leaderboard.html")
}
