//! Configuration management for the CLI.
//!
//! This module loads value object definitions from `vogen.toml` files
//! and merges command-line overrides into them.

use crate::error::{CliResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use vogen::{CommandFormatter, Options, ValueObject};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "vogen.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output file and package.
    pub output: Options,

    /// External formatter settings.
    pub format: FormatConfig,

    /// Value object definitions, in generation order.
    pub value_objects: Vec<ValueObject>,
}

/// Formatter configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Formatter command line, e.g. `["gofmt"]`. Empty disables formatting.
    pub command: Vec<String>,
}

impl FormatConfig {
    /// Formatter described by `command`, if any.
    pub fn formatter(&self) -> Option<CommandFormatter> {
        CommandFormatter::from_command(&self.command)
    }
}

/// Command-line overrides.
#[derive(Debug, Default, Clone)]
pub struct CliArgs {
    /// Output file path override.
    pub output: Option<PathBuf>,

    /// Package name override.
    pub package: Option<String>,

    /// Disable the configured formatter.
    pub no_format: bool,
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, loads `vogen.toml` from the current directory.
    /// A missing file is an error since it holds the definitions. A relative
    /// `output.file_path` is resolved against the file's directory.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            return Err(ConfigError::not_found(config_path).into());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let mut config = Self::parse(&config_path, &content)?;
        if let Some(base) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.output = Self::resolve_output(config.output, base);
        }
        debug!(
            path = %config_path.display(),
            value_objects = config.value_objects.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration text; `path` is only used in error messages.
    pub fn parse(path: &Path, content: &str) -> CliResult<Config> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ConfigError::invalid_toml(path.to_path_buf(), e.to_string()))?;

        if config.format.command.iter().any(|word| word.trim().is_empty()) {
            return Err(ConfigError::invalid_value(
                "format.command",
                "command words must not be empty",
            )
            .into());
        }

        Ok(config)
    }

    /// Make a relative output path relative to `base`.
    fn resolve_output(output: Options, base: &Path) -> Options {
        if output.file_path().is_absolute() {
            return output;
        }
        let file_path = base.join(output.file_path());
        output.with_file_path(file_path)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output = config.output.with_file_path(output.clone());
        }

        if let Some(ref package) = args.package {
            config.output = config.output.with_package_name(package.clone());
        }

        if args.no_format {
            config.format.command.clear();
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# vogen configuration file

[output]
# Path of the generated Go file
file_path = "vo/value_object.go"

# Package clause of the generated file
package_name = "vo"

[format]
# Optional formatter run over the generated source (reads stdin, writes
# stdout), e.g. ["goimports"]. The generated source is already gofmt
# formatted and only imports what it uses, so this can stay empty.
command = []

# Each [[value_objects]] table becomes one immutable struct with a
# NewX constructor, one accessor per field and an Equal method.
[[value_objects]]
name = "Person"
comments = ["Person is a Value Object to describe the feature of vogen."]

[[value_objects.fields]]
name = "Name"
type = "string"
comments = ["Name is the name of the person."]
validators = [{ rule = "string_length", min = 1, max = 64 }]

[[value_objects.fields]]
name = "Age"
type = "int"
comments = ["Age is the age of the person."]
# Rules: positive_value, negative_value, max_value, min_value,
# range_value, string_length and custom.
validators = [{ rule = "range_value", min = 0, max = 150 }]

[[value_objects]]
name = "Address"
comments = ["Address represent a address of the person."]

[[value_objects.fields]]
name = "City"
type = "string"
comments = ["City is the city of the address."]
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use vogen::Validator;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output, Options::default());
        assert!(config.format.formatter().is_none());
        assert!(config.value_objects.is_empty());
    }

    #[test]
    fn test_parse_default_config_content() {
        let config =
            ConfigManager::parse(Path::new(CONFIG_FILENAME), ConfigManager::default_config_content())
                .unwrap();

        assert_eq!(config.output.file_path(), Path::new("vo/value_object.go"));
        assert_eq!(config.output.package_name(), "vo");
        assert!(config.format.command.is_empty());
        assert_eq!(config.value_objects.len(), 2);

        let person = &config.value_objects[0];
        assert_eq!(person.name, "Person");
        assert_eq!(person.fields.len(), 2);
        assert_eq!(person.fields[1].ty, "int");
        assert_eq!(person.fields[1].validators, vec![Validator::range_value(0, 150)]);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[output]
package_name = "domain"

[[value_objects]]
name = "Money"

[[value_objects.fields]]
name = "Amount"
type = "int64"
validators = [{ rule = "positive_value" }]
"#;
        let config = ConfigManager::parse(Path::new("partial.toml"), toml).unwrap();
        assert_eq!(config.output.file_path(), Path::new(vogen::options::DEFAULT_FILE_PATH));
        assert_eq!(config.output.package_name(), "domain");
        assert_eq!(
            config.value_objects[0].fields[0].validators,
            vec![Validator::PositiveValue]
        );
    }

    #[test]
    fn test_parse_formatter_command() {
        let toml = r#"
[format]
command = ["goimports", "-local", "example.com"]
"#;
        let config = ConfigManager::parse(Path::new("fmt.toml"), toml).unwrap();
        let formatter = config.format.formatter().unwrap();
        assert_eq!(formatter.program(), "goimports");
    }

    #[test]
    fn test_parse_rejects_blank_command_word() {
        let toml = r#"
[format]
command = ["gofmt", " "]
"#;
        let err = ConfigManager::parse(Path::new("fmt.toml"), toml).unwrap_err();
        assert!(err.to_string().contains("format.command"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = ConfigManager::parse(Path::new("bad.toml"), "[output\n").unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_parse_unknown_rule() {
        let toml = r#"
[[value_objects]]
name = "Money"

[[value_objects.fields]]
name = "Amount"
type = "int"
validators = [{ rule = "even_value" }]
"#;
        assert!(ConfigManager::parse(Path::new("rule.toml"), toml).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ConfigManager::load(Some(&dir.path().join(CONFIG_FILENAME))).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CliError::Config(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, ConfigManager::default_config_content()).unwrap();

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config.value_objects.len(), 2);
    }

    #[test]
    fn test_load_resolves_output_next_to_config() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        let path = sub.join(CONFIG_FILENAME);
        std::fs::write(&path, ConfigManager::default_config_content()).unwrap();

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config.output.file_path(), sub.join("vo/value_object.go"));
    }

    #[test]
    fn test_load_keeps_absolute_output() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("elsewhere/out.go");
        let path = dir.path().join(CONFIG_FILENAME);
        let toml = format!("[output]\nfile_path = {:?}\n", target.to_string_lossy());
        std::fs::write(&path, toml).unwrap();

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config.output.file_path(), target.as_path());
    }

    #[test]
    fn test_merge_cli_args() {
        let config = Config {
            format: FormatConfig {
                command: vec!["gofmt".to_string()],
            },
            ..Default::default()
        };
        let args = CliArgs {
            output: Some(PathBuf::from("out/model.go")),
            package: Some("model".to_string()),
            no_format: true,
        };

        let merged = ConfigManager::merge_cli_args(config, &args);
        assert_eq!(merged.output.file_path(), Path::new("out/model.go"));
        assert_eq!(merged.output.package_name(), "model");
        assert!(merged.format.formatter().is_none());
    }

    #[test]
    fn test_merge_without_overrides_keeps_config() {
        let config = Config::default();
        let merged = ConfigManager::merge_cli_args(config.clone(), &CliArgs::default());
        assert_eq!(merged.output, config.output);
    }
}
