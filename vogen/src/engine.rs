//! The generation engine.
//!
//! [`Vogen`] collects validated value object definitions for one output
//! file and renders them on demand. Definitions are checked when they are
//! appended, so rendering itself cannot fail; only the sink can.

use tracing::{debug, warn};

use crate::emitter;
use crate::error::VogenResult;
use crate::model::ValueObject;
use crate::options::Options;
use crate::sink::{OutputSink, WriteResult};

/// Value object code generator for a single output file.
///
/// # Example
///
/// ```rust
/// use vogen::{Field, MemorySink, Options, Validator, ValueObject, Vogen};
///
/// let mut vogen = Vogen::new(Options::new("vo/person.go", "vo"))?;
/// vogen.append_value_objects([ValueObject::new("Person")
///     .with_field(Field::new("Name", "string"))
///     .with_field(Field::new("Age", "int").with_validator(Validator::range_value(0, 150)))])?;
///
/// let mut sink = MemorySink::new();
/// vogen.generate(&mut sink)?;
/// assert!(sink.last().unwrap().contains("func NewPerson(name string, age int) (Person, error) {"));
/// # Ok::<(), vogen::VogenError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Vogen {
    options: Options,
    value_objects: Vec<ValueObject>,
}

impl Vogen {
    /// Create a generator after validating `options`.
    pub fn new(options: Options) -> VogenResult<Self> {
        options.validate()?;
        debug!(
            file_path = %options.file_path().display(),
            package_name = %options.package_name(),
            "Created generator"
        );
        Ok(Self {
            options,
            value_objects: Vec::new(),
        })
    }

    /// Create a generator for `file_path` declaring `package_name`.
    pub fn with_target(
        file_path: impl Into<std::path::PathBuf>,
        package_name: impl Into<String>,
    ) -> VogenResult<Self> {
        Self::new(Options::new(file_path, package_name))
    }

    /// Validate and append value objects.
    ///
    /// Either every value object of the call is appended or, if any of them
    /// is invalid, none is and the first violation is returned.
    pub fn append_value_objects<I>(&mut self, value_objects: I) -> VogenResult<()>
    where
        I: IntoIterator<Item = ValueObject>,
    {
        let batch: Vec<ValueObject> = value_objects.into_iter().collect();

        for (position, vo) in batch.iter().enumerate() {
            if let Err(e) = vo.validate(position) {
                warn!(
                    position,
                    struct_name = %vo.name,
                    error = %e,
                    "Rejected value object batch"
                );
                return Err(e);
            }
        }

        debug!(
            appended = batch.len(),
            total = self.value_objects.len() + batch.len(),
            "Appended value objects"
        );
        self.value_objects.extend(batch);
        Ok(())
    }

    /// Render the Go source for everything appended so far.
    pub fn render(&self) -> String {
        emitter::render(self.options.package_name(), &self.value_objects)
    }

    /// Render and hand the source to `sink`.
    ///
    /// Sink errors are returned unchanged; the appended definitions are kept
    /// so the call can be retried.
    pub fn generate<S>(&self, sink: &mut S) -> VogenResult<WriteResult>
    where
        S: OutputSink + ?Sized,
    {
        let content = self.render();
        debug!(
            value_objects = self.value_objects.len(),
            bytes = content.len(),
            "Rendered value objects"
        );
        Ok(sink.write(self.options.file_path(), &content)?)
    }

    /// Generator options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Appended value objects, in append order.
    pub fn value_objects(&self) -> &[ValueObject] {
        &self.value_objects
    }

    /// Number of appended value objects.
    pub fn len(&self) -> usize {
        self.value_objects.len()
    }

    /// Check if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.value_objects.is_empty()
    }
}
