use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two build artifacts an operation was touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Script,
    Style,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Script => write!(f, "script"),
            ArtifactKind::Style => write!(f, "style"),
        }
    }
}

/// All errors produced while packaging or verifying a standalone document.
#[derive(Debug, Error)]
pub enum PackageError {
    /// An input artifact is missing or unreadable.
    #[error("cannot read {kind} artifact '{}': {source}", path.display())]
    ReadArtifact {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The standalone document could not be written.
    #[error("cannot write '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An existing standalone document could not be read back.
    #[error("cannot read document '{}': {source}", path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `flipcards.json` exists but is not valid.
    #[error("invalid config '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A document does not contain the expected inline region.
    #[error("document has no {region} region")]
    RegionMissing { region: ArtifactKind },
}

pub type Result<T> = std::result::Result<T, PackageError>;

impl PackageError {
    pub fn read_artifact(kind: ArtifactKind, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadArtifact {
            kind,
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
