//! Error type of the PhyloXML writer.

use std::io;
use std::path::PathBuf;

/// Errors that can occur when writing PhyloXML.
///
/// A serialization pass itself only fails with [PhyloXmlError::Write];
/// all missing or empty data is handled by omission.
#[derive(Debug, thiserror::Error)]
pub enum PhyloXmlError {
    /// The output stream did not accept written bytes.
    #[error("Failed to write PhyloXML output - {0}")]
    Write(#[from] io::Error),

    /// The output file could not be created.
    #[error("Failed to create output file {path:?} - {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A writer configuration could not be parsed.
    #[error("Invalid writer configuration - {0}")]
    Config(#[from] toml::de::Error),
}
