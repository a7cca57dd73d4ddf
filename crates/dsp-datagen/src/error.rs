use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatagenError {
    #[error("{}:{line}: expected '<number> <name>', found {text:?}", path.display())]
    MalformedLine {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        text: String,
    },

    #[error("{} and {} disagree: {mismatch}", primary.display(), secondary.display())]
    DataMismatch {
        primary: PathBuf,
        secondary: PathBuf,
        mismatch: Mismatch,
    },

    #[error("region '{region}': marker '{marker}' {problem}")]
    MarkerNotFound {
        region: String,
        marker: String,
        problem: MarkerProblem,
    },

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("'{name}' does not produce a valid identifier (got '{id}')")]
    InvalidIdentifier { name: String, id: String },

    #[error("{category}: '{first}' and '{second}' both map to identifier '{id}'")]
    IdentifierCollision {
        category: String,
        id: String,
        first: String,
        second: String,
    },

    #[error("{category}: number {number} is used by both '{first}' and '{second}'")]
    DuplicateNumber {
        category: String,
        number: u32,
        first: String,
        second: String,
    },

    #[error("IO error: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How two paired name lists disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mismatch {
    /// Lines at the same position carry different numbers.
    Number {
        line: usize,
        primary: u32,
        secondary: u32,
    },
    /// The lists have different lengths.
    LineCount { primary: usize, secondary: usize },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Number {
                line,
                primary,
                secondary,
            } => write!(f, "line {line} is numbered {primary} and {secondary}"),
            Mismatch::LineCount { primary, secondary } => {
                write!(f, "{primary} lines versus {secondary} lines")
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerProblem {
    Missing,
    Duplicated,
    /// The end marker comes before the start marker.
    OutOfOrder,
}

impl fmt::Display for MarkerProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MarkerProblem::Missing => "is missing",
            MarkerProblem::Duplicated => "appears more than once",
            MarkerProblem::OutOfOrder => "appears before the start marker",
        })
    }
}

impl DatagenError {
    /// Maps a read failure to [`DatagenError::FileNotFound`] when the path is absent.
    pub(crate) fn from_read(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            DatagenError::FileNotFound { path }
        } else {
            DatagenError::Io { path, source }
        }
    }
}
