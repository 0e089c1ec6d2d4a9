use std::{error::Error, fmt, io, path::PathBuf};

/// Errors occurring while opening a dataset directory.
///
/// None of these are recoverable: the engine never comes into existence
/// when any dataset file is missing, unreadable, malformed, or violates a
/// cross-file invariant.
#[derive(Debug)]
#[non_exhaustive]
pub enum LoadError {
    /// A dataset file could not be read.
    Io {
        /// Path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A dataset file exists but its content cannot be decoded (bad magic,
    /// failed FlatBuffers verification, unexpected dtype or shape).
    Format {
        /// Path of the file.
        path: PathBuf,
        /// What the decoder choked on.
        reason: String,
    },
    /// The files decoded individually but contradict each other (e.g. a
    /// zone id referencing a name past the end of the name table).
    Corrupt {
        /// Path of the file carrying the offending value.
        path: PathBuf,
        /// The violated invariant.
        reason: String,
    },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn corrupt(
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Corrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Io {
                ref path,
                ref source,
            } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Format {
                ref path,
                ref reason,
            } => {
                write!(f, "malformed file {}: {reason}", path.display())
            }
            Self::Corrupt {
                ref path,
                ref reason,
            } => {
                write!(f, "corrupt dataset ({}): {reason}", path.display())
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::Io { ref source, .. } => Some(source),
            Self::Format { .. } | Self::Corrupt { .. } => None,
        }
    }
}
