mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            parser: ParserConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from `path` if given, else from `ideacheck.yaml` when it exists,
    /// else fall back to defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let implicit = default_config_path();
        if implicit.exists() {
            tracing::debug!("Using config file {:?}", implicit);
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != default_version() {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }

        if self.parser.snippet_limit == 0 {
            return Err(ConfigError::ZeroSnippetLimit);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_report_page() {
        let config = Config::default();
        assert_eq!(config.parser.snippet_limit, 200);
        assert_eq!(config.parser.ellipsis, "...");
        assert_eq!(config.parser.untitled_title, "Untitled Finding");
        assert_eq!(config.parser.default_link_text, "Read more");
        assert_eq!(config.parser.default_link_url, "#");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "parser:\n  snippet_limit: 80\noutput:\n  format: html\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.parser.snippet_limit, 80);
        assert_eq!(config.parser.untitled_title, "Untitled Finding");
        assert_eq!(config.output.format, OutputFormat::Html);
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let mut config = Config::default();
        config.parser.snippet_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroSnippetLimit)
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_version() {
        let config = Config {
            version: 7,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedVersion(7))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output:\n  format: json").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/ideacheck.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
