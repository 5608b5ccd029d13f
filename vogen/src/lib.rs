//! # vogen
//!
//! Code generator for immutable Go value objects.
//!
//! A value object is described by a [`ValueObject`]: a struct name, fields
//! in declaration order, doc comments, and per-field [`Validator`] rules.
//! [`Vogen`] validates the definitions as they are appended and renders
//! them into one Go source file containing, for each value object, a
//! struct with unexported fields, a `NewX` constructor that enforces the
//! validators, one accessor per field and an `Equal` method.
//!
//! ## Architecture
//!
//! - [`model`] - Value object and field definitions
//! - [`validator`] - Validation rules and their guard clauses
//! - [`naming`] - Go identifier conversion
//! - [`options`] - Output file and package configuration
//! - [`emitter`] - Pure rendering of definitions into Go source
//! - [`engine`] - The [`Vogen`] generator
//! - [`sink`] - Output sinks (files, formatter, memory)
//! - [`error`] - Error types and handling
//!
//! ## Example
//!
//! ```rust,no_run
//! use vogen::{Field, FileSink, Options, Validator, ValueObject, Vogen};
//!
//! let mut vogen = Vogen::new(
//!     Options::default()
//!         .with_file_path("vo/value_object.go")
//!         .with_package_name("vo"),
//! )?;
//!
//! vogen.append_value_objects([
//!     ValueObject::new("Person")
//!         .with_comment("Person is a Value Object to describe the feature of vogen.")
//!         .with_field(Field::new("Name", "string").with_comment("Name is the name of the person."))
//!         .with_field(
//!             Field::new("Age", "int")
//!                 .with_comment("Age is the age of the person.")
//!                 .with_validator(Validator::range_value(0, 150)),
//!         ),
//!     ValueObject::new("Address").with_field(Field::new("City", "string")),
//! ])?;
//!
//! vogen.generate(&mut FileSink::new(false))?;
//! # Ok::<(), vogen::VogenError>(())
//! ```

pub mod emitter;
pub mod engine;
pub mod error;
pub mod model;
pub mod naming;
pub mod options;
pub mod sink;
pub mod validator;

// Re-export main types for convenience
pub use engine::Vogen;
pub use error::{SinkError, VogenError, VogenResult};
pub use model::{Field, ValueObject};
pub use options::Options;
pub use sink::{CommandFormatter, FileSink, MemorySink, OutputSink, WriteResult};
pub use validator::Validator;
