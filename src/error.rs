use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The source directory handed to [`crate::name()`] is missing,
    /// unreadable, or not a directory.
    #[error("source directory {}: {}", dir.display(), source)]
    SourceDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The import path could not be resolved to a usable package.
    #[error("importing {import_path}: {reason}")]
    Resolution { import_path: String, reason: String },

    /// The `go list` query failed. Recoverable inside [`crate::dir()`],
    /// which falls back to scanning the GOPATH roots.
    #[error("go list {import_path}: {reason}")]
    GoList { import_path: String, reason: String },

    /// No directory found for the import path after both the listing query
    /// and the GOPATH scan.
    #[error("no directory found for import path {0}")]
    DirNotFound(String),

    /// The directory is not under any search root's `src` tree.
    #[error("no import path found for directory {}", .0.display())]
    PathNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
