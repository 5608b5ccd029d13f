//! Error types for the generator.
//!
//! Configuration and definition errors are reported eagerly, at the call
//! that introduced the problem. Sink errors surface from
//! [`Vogen::generate`](crate::Vogen::generate) unchanged.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations.
pub type VogenResult<T> = Result<T, VogenError>;

/// Main error type for generator operations.
#[derive(Debug, Error)]
pub enum VogenError {
    /// The output file path is empty.
    #[error("vogen: file path is not set")]
    InvalidFilePath,

    /// The package name is empty.
    #[error("vogen: package name is not set")]
    InvalidPackageName,

    /// A value object has an empty struct name.
    #[error("vogen: ValueObject 'StructName' is not set (value object #{position})")]
    StructNameEmpty {
        /// Zero-based position of the value object within the appended batch.
        position: usize,
    },

    /// A value object declares no fields.
    #[error("vogen: ValueObject 'Field' is not set (struct '{struct_name}')")]
    InvalidField { struct_name: String },

    /// A field name is empty or cannot be turned into Go identifiers.
    #[error("vogen: ValueObject 'Field.Name' is not set or not a valid identifier (struct '{struct_name}', field #{position})")]
    InvalidFieldName {
        struct_name: String,
        /// Zero-based position of the field within the value object.
        position: usize,
    },

    /// A field has an empty type.
    #[error("vogen: ValueObject 'Field.Type' is not set (struct '{struct_name}', field '{field}')")]
    InvalidFieldType { struct_name: String, field: String },

    /// The output sink failed.
    #[error("vogen: failed to write output: {0}")]
    Sink(#[from] SinkError),
}

/// Error raised by an [`OutputSink`](crate::sink::OutputSink).
#[derive(Debug, Error)]
pub enum SinkError {
    /// Failed to create the parent directory of the output file.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external formatter could not be run.
    #[error("Failed to run formatter '{program}': {source}")]
    FormatterIo {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external formatter rejected the generated source.
    #[error("Formatter '{program}' failed for {path}: {stderr}")]
    Format {
        program: String,
        path: PathBuf,
        stderr: String,
    },
}

impl VogenError {
    /// Check if this error was caused by an invalid value object definition.
    pub fn is_definition_error(&self) -> bool {
        matches!(
            self,
            VogenError::StructNameEmpty { .. }
                | VogenError::InvalidField { .. }
                | VogenError::InvalidFieldName { .. }
                | VogenError::InvalidFieldType { .. }
        )
    }

    /// Check if this error was caused by invalid generator options.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            VogenError::InvalidFilePath | VogenError::InvalidPackageName
        )
    }
}
