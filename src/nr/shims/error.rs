use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering every way a profile regeneration can fail.
///
/// None of these are recovered from: the run stops at the first one and the
/// binary reports it before exiting with a non-zero status.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Raised when the profile's alias file cannot be read.
    #[error("cannot read alias file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when the alias file is not a JSON array of alias records.
    #[error("cannot parse alias file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Raised when an alias record has an empty `cmd`.
    #[error("alias #{index} in {path} has an empty command")]
    InvalidAlias { path: PathBuf, index: usize },

    /// Raised when the shim directory cannot be listed.
    #[error("cannot list shim directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a file in the shim directory cannot be opened for scanning.
    #[error("cannot open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a previously generated shim cannot be removed.
    #[error("cannot remove {path}: {source}")]
    FileDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when the installed-binary check fails for a reason other than
    /// the binary being absent.
    #[error("cannot stat {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a shim file cannot be created.
    #[error("cannot create {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when the shim template cannot be written out.
    #[error("cannot render shim {path}: {source}")]
    TemplateRender {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a shim cannot be made executable.
    #[error("cannot set permissions on {path}: {source}")]
    Permission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when the command line does not name exactly one profile.
    #[error("{0}")]
    Usage(String),

    /// Raised when the platform cannot tell us where the home directory is.
    #[error("cannot determine the home directory")]
    HomeNotFound,

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
