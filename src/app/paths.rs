// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for configuration and bundled assets.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--assets-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`SPEAKER_PAGE_CONFIG_DIR`, `SPEAKER_PAGE_ASSETS_DIR`)
//! 4. **Platform default** - via `dirs` crate for config, next to the executable for assets
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.assets_dir);
//! ```

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "SpeakerPage";

/// Directory name holding the hero clip and other media, relative to the executable.
const ASSETS_DIR_NAME: &str = "assets";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SPEAKER_PAGE_CONFIG_DIR";

/// Environment variable to override the assets directory.
pub const ENV_ASSETS_DIR: &str = "SPEAKER_PAGE_ASSETS_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_ASSETS_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and assets directories.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(config_dir: Option<String>, assets_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI config dir override already initialized");
    }
    if CLI_ASSETS_DIR.set(assets_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI assets dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_assets_dir() -> Option<PathBuf> {
    CLI_ASSETS_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/SpeakerPage/`
/// - macOS: `~/Library/Application Support/SpeakerPage/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\SpeakerPage\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory that page assets (the hero clip) are served from.
pub fn get_assets_dir() -> PathBuf {
    get_assets_dir_with_override(None)
}

/// Returns the assets directory with an optional override.
///
/// Falls back to `assets/` next to the executable, then to `assets/` in the
/// working directory when the executable path is unavailable.
pub fn get_assets_dir_with_override(override_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }

    if let Some(path) = get_cli_assets_dir() {
        return path;
    }

    if let Some(path) = non_empty_env(ENV_ASSETS_DIR) {
        return path;
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ASSETS_DIR_NAME)))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from(ASSETS_DIR_NAME))
}

/// Maps a site-rooted source such as `/hero-clip.mp4` onto a file inside `assets_dir`.
///
/// Leading slashes are stripped so the source never escapes to the filesystem root.
pub fn resolve_asset(assets_dir: &Path, source: &str) -> PathBuf {
    let relative = source.trim_start_matches(['/', '\\']);
    assets_dir.join(relative)
}
