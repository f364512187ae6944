use crate::error::{Result, WrapErr};
use config::{AppStrategy, constants, create_strategy, resolve_dir, resolve_dir_without_strategy};
use search_core::{SearchOptions, StaticIndex};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DATA_DIR_ENV: &str = "DAWAH_SEARCH_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    /// Where recent searches are kept
    pub data_dir: PathBuf,
    /// Custom index of `[[entry]]` tables; the built-in site index otherwise
    pub index_file: Option<PathBuf>,
    /// Number of recent searches remembered
    pub recent_limit: usize,
    /// Quiet period before a live search runs
    pub debounce_ms: u64,
    /// Cap on listed results
    pub max_results: Option<usize>,
}


fn default_config() -> Config {
    let data_dir = match create_strategy() {
        Ok(strategy) => resolve_dir(DATA_DIR_ENV, &strategy, |s| Some(s.data_dir())),
        Err(_) => resolve_dir_without_strategy(DATA_DIR_ENV),
    };

    Config {
        data_dir,
        index_file: None,
        recent_limit: constants::RECENT_SEARCHES_LIMIT,
        debounce_ms: constants::SEARCH_DEBOUNCE_MS,
        max_results: None,
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}


impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    /// Load `path` if given, otherwise the file in the platform config
    /// directory, which is created with commented defaults on first run.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        if let Some(path) = path {
            let user_config_str = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Cannot read configuration file {:?}", path))?;
            return Self::load_str(&user_config_str);
        }

        let strategy = match create_strategy() {
            Ok(strategy) => strategy,
            Err(e) => {
                tracing::warn!("No home directory ({}), using default configuration", e);
                return Ok(Config::default());
            }
        };
        let config_path = strategy.config_dir().join(constants::CLI_CONFIG_FILE_NAME);

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::create_example_config(&config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = r#"# dawah-search configuration
#
# Created on first run. Every key is optional.

# Number of recent searches kept for suggestions
# recent-limit = 6

# Quiet period (milliseconds) before a live search runs
# debounce-ms = 500

# List at most this many results
# max-results = 20

# Search a custom index of [[entry]] tables instead of the built-in one
# index-file = "/path/to/index.toml"

# Where recent searches are stored
# data-dir = "/custom/data/path"
"#;

        std::fs::write(config_path, example_config)?;
        tracing::info!("Created configuration file {:?}", config_path);
        Ok(())
    }

    pub fn recent_searches_path(&self) -> PathBuf {
        self.data_dir.join(constants::RECENT_SEARCHES_FILE_NAME)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_results: self.max_results,
        }
    }

    pub fn load_index(&self) -> Result<StaticIndex> {
        match &self.index_file {
            Some(path) => StaticIndex::load(path).wrap_err("Load index error"),
            None => Ok(StaticIndex::site()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let cfg = Config::load_str("").unwrap();
        assert_eq!(cfg.recent_limit, 6);
        assert_eq!(cfg.debounce(), Duration::from_millis(500));
        assert_eq!(cfg.index_file, None);
        assert_eq!(cfg.search_options(), SearchOptions::default());
    }

    #[test]
    fn test_kebab_case_keys() {
        let cfg = Config::load_str(
            "recent-limit = 3\ndebounce-ms = 250\nmax-results = 10\ndata-dir = \"/tmp/dawah\"\n",
        )
        .unwrap();
        assert_eq!(cfg.recent_limit, 3);
        assert_eq!(cfg.debounce_ms, 250);
        assert_eq!(cfg.max_results, Some(10));
        assert_eq!(cfg.recent_searches_path(), PathBuf::from("/tmp/dawah/recent-searches.json"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::load_str("recent_limit = 3").is_err());
    }

    #[test]
    fn test_example_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Config::create_example_config(&path).unwrap();

        let cfg = Config::load(Some(&path)).unwrap();
        assert_eq!(cfg.recent_limit, Config::default().recent_limit);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_custom_index_file() {
        let dir = tempfile::tempdir().unwrap();
        let index_path = dir.path().join("index.toml");
        std::fs::write(&index_path, "[[entry]]\ntitle = \"Zakat\"\nurl = \"zakat.html\"\n").unwrap();

        let cfg = Config {
            index_file: Some(index_path),
            ..Config::default()
        };
        assert_eq!(cfg.load_index().unwrap().len(), 1);
        assert!(Config::default().load_index().unwrap().len() > 1);
    }
}
