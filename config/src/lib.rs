//! Load configuration from XDG `config.toml` and project `.env`, then apply
//! it to the process environment with priority: **existing env > .env > XDG**.
//!
//! Plume reads its credential and settings from the environment only
//! (`OPENAI_API_KEY`, `OPENAI_BASE_URL`, `PLUME_MODEL`, `LOG_FILE`,
//! `RUST_LOG`); this crate is the single place that seeds those variables
//! for the duration of the process. Nothing is ever written back to disk.

mod dotenv;
mod xdg_toml;

use std::path::Path;

use thiserror::Error;

/// App name used for the XDG path `~/.config/plume/config.toml`.
pub const APP_NAME: &str = "plume";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Loads config from `$XDG_CONFIG_HOME/plume/config.toml` and an optional
/// project `.env`, then sets environment variables only for keys that are
/// **not** already set, so the existing environment always wins.
///
/// Order of precedence when a key is missing from the process environment:
/// 1. Value from project `.env` (current directory, or `override_dir` if given)
/// 2. Value from the XDG `config.toml` `[env]` table
///
/// * `override_dir`: if `Some`, look for `.env` in this directory instead of
///   `std::env::current_dir()`.
pub fn load_and_apply(override_dir: Option<&Path>) -> Result<(), LoadError> {
    let xdg_map = xdg_toml::load_env_map(APP_NAME)?;
    let dotenv_map = dotenv::load_env_map(override_dir).map_err(LoadError::DotenvRead)?;

    let mut keys: std::collections::HashSet<String> = xdg_map.keys().cloned().collect();
    keys.extend(dotenv_map.keys().cloned());

    for key in keys {
        if std::env::var(&key).is_ok() {
            continue; // existing env wins
        }
        let value = dotenv_map.get(&key).or_else(|| xdg_map.get(&key)).cloned();
        if let Some(v) = value {
            std::env::set_var(&key, v);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn restore_var(key: &str, prev: Option<String>) {
        match prev {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    #[test]
    fn existing_env_wins() {
        env::set_var("PLUME_CONFIG_TEST_EXISTING", "from_env");
        let _ = load_and_apply(None);
        assert_eq!(
            env::var("PLUME_CONFIG_TEST_EXISTING").as_deref(),
            Ok("from_env")
        );
        env::remove_var("PLUME_CONFIG_TEST_EXISTING");
    }

    #[test]
    fn load_and_apply_without_any_config_is_ok() {
        let empty = tempfile::tempdir().unwrap();
        let prev = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", empty.path());

        let result = load_and_apply(Some(empty.path()));
        restore_var("XDG_CONFIG_HOME", prev);

        assert!(result.is_ok());
    }

    #[test]
    fn dotenv_overrides_xdg() {
        let xdg_dir = tempfile::tempdir().unwrap();
        let app_dir = xdg_dir.path().join(APP_NAME);
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(
            app_dir.join("config.toml"),
            "[env]\nPLUME_CONFIG_TEST_PRIORITY = \"from_xdg\"\n",
        )
        .unwrap();

        let dotenv_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dotenv_dir.path().join(".env"),
            "PLUME_CONFIG_TEST_PRIORITY=from_dotenv\n",
        )
        .unwrap();

        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());
        env::remove_var("PLUME_CONFIG_TEST_PRIORITY");

        let _ = load_and_apply(Some(dotenv_dir.path()));
        let val = env::var("PLUME_CONFIG_TEST_PRIORITY").unwrap();
        env::remove_var("PLUME_CONFIG_TEST_PRIORITY");
        restore_var("XDG_CONFIG_HOME", prev_xdg);

        assert_eq!(val, "from_dotenv");
    }

    #[test]
    fn xdg_applied_when_no_dotenv() {
        let xdg_dir = tempfile::tempdir().unwrap();
        let app_dir = xdg_dir.path().join(APP_NAME);
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(
            app_dir.join("config.toml"),
            "[env]\nPLUME_CONFIG_TEST_XDG_ONLY = \"from_xdg\"\n",
        )
        .unwrap();

        let empty_dir = tempfile::tempdir().unwrap();

        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());
        env::remove_var("PLUME_CONFIG_TEST_XDG_ONLY");

        let _ = load_and_apply(Some(empty_dir.path()));
        let val = env::var("PLUME_CONFIG_TEST_XDG_ONLY").unwrap();
        env::remove_var("PLUME_CONFIG_TEST_XDG_ONLY");
        restore_var("XDG_CONFIG_HOME", prev_xdg);

        assert_eq!(val, "from_xdg");
    }

    #[test]
    fn invalid_xdg_toml_fails_with_parse_error() {
        let xdg_dir = tempfile::tempdir().unwrap();
        let app_dir = xdg_dir.path().join(APP_NAME);
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.toml"), "invalid [[[\n").unwrap();

        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());

        let result = load_and_apply(None);
        restore_var("XDG_CONFIG_HOME", prev_xdg);

        assert!(matches!(result, Err(LoadError::XdgParse(_))));
    }
}
