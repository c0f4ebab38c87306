// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--data-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`HACKFOLIO_CONFIG_DIR`, `HACKFOLIO_DATA_DIR`)
//! 4. **Platform default** - via `dirs` crate, with [`APP_NAME`] appended
//!
//! The config directory holds `settings.toml`. The data directory receives
//! exported diagnostics reports.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "Hackfolio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "HACKFOLIO_CONFIG_DIR";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "HACKFOLIO_DATA_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` and `--data-dir` CLI arguments.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(config_dir: Option<String>, data_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI config dir override already initialized");
    }
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI data dir override already initialized");
    }
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory holding `settings.toml`.
///
/// Returns `None` if no platform config directory exists (rare edge case).
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}

#[must_use]
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the data directory, preferring `override_path` when given.
#[must_use]
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching process-wide env vars must not interleave.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME), "path should end with app name: {path:?}");
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let custom = PathBuf::from("/custom/config");
        assert_eq!(get_app_config_dir_with_override(Some(custom.clone())), Some(custom));
        let data = PathBuf::from("/custom/data");
        assert_eq!(get_app_data_dir_with_override(Some(data.clone())), Some(data));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/hackfolio-config");

        let path = get_app_config_dir();

        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(path, Some(PathBuf::from("/tmp/hackfolio-config")));
    }

    #[test]
    fn env_var_overrides_default_data_dir() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/tmp/hackfolio-data");

        let path = get_app_data_dir();

        std::env::remove_var(ENV_DATA_DIR);
        assert_eq!(path, Some(PathBuf::from("/tmp/hackfolio-data")));
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        let path = get_app_config_dir();

        std::env::remove_var(ENV_CONFIG_DIR);
        if let Some(path) = path {
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let custom = PathBuf::from("/override/path");
        let path = get_app_config_dir_with_override(Some(custom.clone()));

        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(path, Some(custom));
    }
}
