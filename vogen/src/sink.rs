//! Output sinks for generated code.
//!
//! The engine hands the finished text to an [`OutputSink`] exactly once per
//! [`Vogen::generate`](crate::Vogen::generate) call. [`FileSink`] writes to
//! disk, optionally piping the text through an external formatter first
//! and with dry-run support. [`MemorySink`] keeps everything in memory.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use crate::error::SinkError;

/// Destination for a finished source file.
pub trait OutputSink {
    /// Format and persist `content` under `path`.
    fn write(&mut self, path: &Path, content: &str) -> Result<WriteResult, SinkError>;
}

/// Result of a write operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written successfully.
    Written {
        /// Path to the written file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },
    /// Dry run - content was not written.
    DryRun {
        /// Content that would have been written.
        content: String,
        /// Path where content would have been written.
        path: PathBuf,
    },
}

impl WriteResult {
    /// Get the path associated with this result.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } => path,
            WriteResult::DryRun { path, .. } => path,
        }
    }

    /// Check if the write was successful (not dry-run).
    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }

    /// Get the number of bytes written (0 for dry-run).
    pub fn bytes(&self) -> usize {
        match self {
            WriteResult::Written { bytes, .. } => *bytes,
            WriteResult::DryRun { .. } => 0,
        }
    }
}

// =============================================================================
// Formatter
// =============================================================================

/// External source formatter such as `gofmt` or `goimports`.
///
/// The program receives the source on stdin and must print the formatted
/// source on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFormatter {
    program: String,
    args: Vec<String>,
}

impl CommandFormatter {
    /// Create a formatter running `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Build a formatter from a command line split into words.
    ///
    /// Returns `None` for an empty command.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Append an argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the formatter over `content`.
    pub fn format(&self, path: &Path, content: &str) -> Result<String, SinkError> {
        let io_error = |source: std::io::Error| SinkError::FormatterIo {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(io_error)?;

        // Feed stdin from another thread so a full stdout pipe cannot block us.
        let mut stdin = child.stdin.take().ok_or_else(|| {
            io_error(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "formatter stdin unavailable",
            ))
        })?;
        let input = content.to_owned();
        let feeder = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output().map_err(io_error)?;
        let fed = feeder
            .join()
            .unwrap_or_else(|_| Err(std::io::Error::other("formatter stdin writer panicked")));

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(program = %self.program, path = %path.display(), "Formatter failed");
            return Err(SinkError::Format {
                program: self.program.clone(),
                path: path.to_path_buf(),
                stderr,
            });
        }

        fed.map_err(io_error)?;

        String::from_utf8(output.stdout).map_err(|e| {
            io_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}

// =============================================================================
// File Sink
// =============================================================================

/// File sink with dry-run support.
#[derive(Debug, Default)]
pub struct FileSink {
    /// Whether to run in dry-run mode.
    dry_run: bool,

    /// Formatter applied before writing.
    formatter: Option<CommandFormatter>,
}

impl FileSink {
    /// Create a new file sink.
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            formatter: None,
        }
    }

    /// Format output with `formatter` before writing it.
    pub fn with_formatter(mut self, formatter: CommandFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Check if running in dry-run mode.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl OutputSink for FileSink {
    fn write(&mut self, path: &Path, content: &str) -> Result<WriteResult, SinkError> {
        let content = match &self.formatter {
            Some(formatter) => formatter.format(path, content)?,
            None => content.to_string(),
        };

        if self.dry_run {
            debug!(path = %path.display(), "Dry run, skipping write");
            return Ok(WriteResult::DryRun {
                content,
                path: path.to_path_buf(),
            });
        }

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| SinkError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, &content).map_err(|e| SinkError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "Wrote generated file");
        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }
}

// =============================================================================
// Memory Sink
// =============================================================================

/// Sink that records every write in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    files: Vec<(PathBuf, String)>,
}

impl MemorySink {
    /// Create an empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes, oldest first.
    pub fn files(&self) -> &[(PathBuf, String)] {
        &self.files
    }

    /// Content of the most recent write.
    pub fn last(&self) -> Option<&str> {
        self.files.last().map(|(_, content)| content.as_str())
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, path: &Path, content: &str) -> Result<WriteResult, SinkError> {
        self.files.push((path.to_path_buf(), content.to_string()));
        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }
}
