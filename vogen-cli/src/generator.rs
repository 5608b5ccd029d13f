//! Value object generation for the CLI.
//!
//! [`ValueObjectGenerator`] turns a loaded [`Config`] into a [`Vogen`]
//! engine and drives it against the file system.

use tracing::{debug, info};
use vogen::{FileSink, Vogen, WriteResult};

use crate::config::Config;
use crate::error::{CliError, CliResult};

/// Generator for the value objects of one configuration.
pub struct ValueObjectGenerator {
    config: Config,
}

impl ValueObjectGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build an engine holding every configured value object.
    pub fn build(&self) -> CliResult<Vogen> {
        let mut vogen = Vogen::new(self.config.output.clone())?;
        vogen.append_value_objects(self.config.value_objects.iter().cloned())?;
        Ok(vogen)
    }

    /// Generate the output file, or preview it when `dry_run` is set.
    pub fn generate(&self, dry_run: bool) -> CliResult<WriteResult> {
        let vogen = self.build()?;
        let mut sink = self.sink(dry_run);
        let result = vogen.generate(&mut sink)?;
        info!(
            path = %result.path().display(),
            value_objects = vogen.len(),
            dry_run,
            "Generated value objects"
        );
        Ok(result)
    }

    /// Content `generate` would write, formatter included.
    pub fn expected_content(&self) -> CliResult<String> {
        match self.generate(true)? {
            WriteResult::DryRun { content, .. } => Ok(content),
            WriteResult::Written { path, .. } => Err(CliError::Validation(format!(
                "unexpected write to {} during validation",
                path.display()
            ))),
        }
    }

    /// Check that the file on disk matches what would be generated.
    ///
    /// Leading and trailing whitespace is ignored.
    pub fn validate(&self) -> CliResult<()> {
        let path = self.config.output.file_path();
        if !path.exists() {
            return Err(CliError::Validation(format!(
                "Generated file not found: {}",
                path.display()
            )));
        }

        let existing = std::fs::read_to_string(path)?;
        let expected = self.expected_content()?;

        if existing.trim() == expected.trim() {
            debug!(path = %path.display(), "Generated file is up to date");
            Ok(())
        } else {
            Err(CliError::Validation(format!(
                "{} is out of date",
                path.display()
            )))
        }
    }

    fn sink(&self, dry_run: bool) -> FileSink {
        let sink = FileSink::new(dry_run);
        match self.config.format.formatter() {
            Some(formatter) => sink.with_formatter(formatter),
            None => sink,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormatConfig;
    use tempfile::TempDir;
    use vogen::{Field, Options, ValueObject, VogenError};

    fn config_in(dir: &TempDir) -> Config {
        Config {
            output: Options::new(dir.path().join("vo/value_object.go"), "vo"),
            value_objects: vec![ValueObject::new("Person").with_field(Field::new("Name", "string"))],
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_then_validate() {
        let dir = TempDir::new().unwrap();
        let generator = ValueObjectGenerator::new(config_in(&dir));

        assert!(matches!(generator.validate(), Err(CliError::Validation(_))));

        let result = generator.generate(false).unwrap();
        assert!(result.was_written());
        generator.validate().unwrap();
    }

    #[test]
    fn test_validate_detects_stale_file() {
        let dir = TempDir::new().unwrap();
        let generator = ValueObjectGenerator::new(config_in(&dir));
        generator.generate(false).unwrap();

        let mut config = config_in(&dir);
        config.value_objects[0] = config.value_objects[0]
            .clone()
            .with_field(Field::new("Age", "int"));
        let err = ValueObjectGenerator::new(config).validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let generator = ValueObjectGenerator::new(config_in(&dir));

        let result = generator.generate(true).unwrap();
        assert!(!result.was_written());
        assert!(!generator.config().output.file_path().exists());
    }

    #[test]
    fn test_invalid_definition_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.value_objects.push(ValueObject::new("Empty"));

        let err = ValueObjectGenerator::new(config).generate(false).unwrap_err();
        assert!(matches!(
            err,
            CliError::Generate(VogenError::InvalidField { .. })
        ));
        assert!(!dir.path().join("vo").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_formatter_is_applied() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.format = FormatConfig {
            command: vec!["tr".to_string(), "a-z".to_string(), "A-Z".to_string()],
        };
        let generator = ValueObjectGenerator::new(config);

        let content = generator.expected_content().unwrap();
        assert!(content.starts_with("// CODE GENERATED BY VOGEN."));

        generator.generate(false).unwrap();
        generator.validate().unwrap();
    }
}
