//! Generator options.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

use crate::error::{VogenError, VogenResult};

/// Default output file.
pub const DEFAULT_FILE_PATH: &str = "value_object.go";

/// Default Go package name.
pub const DEFAULT_PACKAGE_NAME: &str = "vo";

/// Where generated code goes and which package it declares.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Destination handed to the output sink.
    pub file_path: PathBuf,

    /// Go package clause of the generated file.
    pub package_name: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
        }
    }
}

impl Options {
    /// Create options for the given destination and package.
    pub fn new(file_path: impl Into<PathBuf>, package_name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            package_name: package_name.into(),
        }
    }

    /// Override the output file path.
    #[must_use = "This method returns new Options and does not modify self"]
    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = file_path.into();
        trace!(file_path = %self.file_path.display(), "Setting output file path");
        self
    }

    /// Override the package name.
    #[must_use = "This method returns new Options and does not modify self"]
    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        trace!(package_name = %self.package_name, "Setting package name");
        self
    }

    /// Output file path.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Go package name.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Validate the options.
    pub fn validate(&self) -> VogenResult<()> {
        if self.file_path.as_os_str().is_empty() {
            warn!("Options validation failed: file path is empty");
            return Err(VogenError::InvalidFilePath);
        }
        if self.package_name.is_empty() {
            warn!("Options validation failed: package name is empty");
            return Err(VogenError::InvalidPackageName);
        }
        Ok(())
    }
}
