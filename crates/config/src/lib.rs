pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::path::PathBuf;
use std::env;


pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Resolve a directory: the environment variable wins, then the platform
/// strategy, then a folder under the temp dir.
pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(fallback_dir)
}

/// Same as [`resolve_dir`] for callers that could not build a strategy
/// (no home directory).
pub fn resolve_dir_without_strategy(env_key: &str) -> PathBuf {
    env::var_os(env_key)
        .map(PathBuf::from)
        .unwrap_or_else(fallback_dir)
}

fn fallback_dir() -> PathBuf {
    env::temp_dir().join(constants::APP_NAME)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fallback_dir_is_namespaced() {
        assert!(fallback_dir().ends_with(constants::APP_NAME));
    }

    #[test]
    fn test_unset_env_key_falls_back() {
        let dir = resolve_dir_without_strategy("DAWAH_SEARCH_TEST_SURELY_UNSET_KEY");
        assert_eq!(dir, fallback_dir());
    }
}
