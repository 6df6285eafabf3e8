use crudgen::{DEFAULT_STATE_PATH, ModelRegistry, RawModel};
use serde::Deserialize;
use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "crudgen.toml";

/// Queries root used when neither the command line nor the config names one
pub const DEFAULT_QUERIES_DIR: &str = "src/queries";

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub state: StateConfig,
    /// Replaces the built-in model list when not empty
    pub models: Vec<ModelConfig>,
}

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub queries_dir: Option<PathBuf>,
}

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StateConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    pub key: String,
    pub plural: Option<String>,
    pub singular: Option<String>,
}

/// A parsed config together with the directory its relative paths start from
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub dir: Option<PathBuf>,
}

impl Config {
    pub fn parse(content: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(content)?)
    }

    /// The registry of the config, or the built-in one
    pub fn registry(&self) -> Result<ModelRegistry, Box<dyn Error>> {
        if self.models.is_empty() {
            return Ok(ModelRegistry::seed()?);
        }
        let raw = self.models.iter().map(|model| {
            (
                model.key.clone(),
                RawModel {
                    plural: model.plural.clone(),
                    singular: model.singular.clone(),
                },
            )
        });
        Ok(ModelRegistry::build(raw)?)
    }
}

impl LoadedConfig {
    /// Load `path` if given, else look for crudgen.toml next to the working
    /// directory. Having no config at all is fine.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match find_config_file(&std::env::current_dir()?) {
                Some(path) => path,
                None => {
                    debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
            },
        };
        debug!("Reading config from {}", path.display());
        let content = fs::read_to_string(&path)
            .map_err(|err| format!("Cannot read config file {}: {}", path.display(), err))?;
        Ok(Self {
            config: Config::parse(&content)?,
            dir: path.parent().map(Path::to_path_buf),
        })
    }

    /// Command line value, then config value, then the default
    pub fn queries_dir(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.unwrap_or_else(|| {
            self.resolve(self.config.output.queries_dir.as_deref(), DEFAULT_QUERIES_DIR)
        })
    }

    /// Command line value, then config value, then the default
    pub fn state_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.unwrap_or_else(|| self.resolve(self.config.state.path.as_deref(), DEFAULT_STATE_PATH))
    }

    fn resolve(&self, configured: Option<&Path>, default: &str) -> PathBuf {
        match (configured, &self.dir) {
            (Some(path), Some(dir)) if path.is_relative() => dir.join(path),
            (Some(path), _) => path.to_path_buf(),
            (None, _) => PathBuf::from(default),
        }
    }
}

/// The config file is expected to be in `dir` or its parent directory
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Some(config_path);
    }
    let config_path = dir.parent()?.join(CONFIG_FILE_NAME);
    config_path.exists().then_some(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            [output]
            queries_dir = "web/src/queries"

            [state]
            path = "web/.crudgen/state.json"

            [[models]]
            key = "Order"

            [[models]]
            key = "LeadStatus"
            plural = "LeadStatuses"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.output.queries_dir,
            Some(PathBuf::from("web/src/queries"))
        );
        assert_eq!(config.models.len(), 2);

        let registry = config.registry().unwrap();
        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(keys, ["Order", "LeadStatus"]);
        assert_eq!(registry.get("LeadStatus").unwrap().plural, "LeadStatuses");
        assert_eq!(registry.get("Order").unwrap().plural, "Orders");
    }

    #[test]
    fn test_empty_config_uses_seed() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.registry().unwrap(), ModelRegistry::seed().unwrap());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Config::parse("[output]\nqueries = \"src\"").is_err());
    }

    #[test]
    fn test_bad_model_name_is_rejected() {
        let config = Config::parse("[[models]]\nkey = \"Order Item\"").unwrap();
        assert!(config.registry().is_err());
    }

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let loaded = LoadedConfig {
            config: Config::parse("[output]\nqueries_dir = \"src/queries\"").unwrap(),
            dir: Some(PathBuf::from("/work/app")),
        };

        assert_eq!(loaded.queries_dir(None), PathBuf::from("/work/app/src/queries"));
        assert_eq!(
            loaded.queries_dir(Some(PathBuf::from("out"))),
            PathBuf::from("out")
        );
        assert_eq!(loaded.state_path(None), PathBuf::from(DEFAULT_STATE_PATH));
    }

    #[test]
    fn test_find_config_file_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let child = root.join("child");
        fs::create_dir_all(&child).unwrap();

        assert_eq!(find_config_file(&child), None);

        fs::write(root.join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(find_config_file(&child), Some(root.join(CONFIG_FILE_NAME)));

        fs::write(child.join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(find_config_file(&child), Some(child.join(CONFIG_FILE_NAME)));
    }
}
