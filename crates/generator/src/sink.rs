//! Artifact output sinks
//!
//! Generation treats file output as an external collaborator: the driver
//! hands a named text artifact to a `FileSink` and never reads it back.

use std::fs;
use std::path::{Path, PathBuf};
use ts_model_generator_common::Result;

/// Destination for generated artifacts
#[cfg_attr(test, mockall::automock)]
pub trait FileSink {
    /// Write one named artifact, fully replacing any previous content
    fn write(&self, file_name: &str, contents: &str) -> Result<()>;
}

/// Sink writing artifacts into a fixed output directory
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Create the sink, creating the directory (and parents) if absent
    pub fn create<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The output directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSink for DirectorySink {
    fn write(&self, file_name: &str, contents: &str) -> Result<()> {
        fs::write(self.root.join(file_name), contents)?;
        Ok(())
    }
}
