use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("{path}: not a recognized ignore file")]
    UnknownIgnoreFileType { path: PathBuf },

    #[error("no project root found")]
    NotFound,

    #[error("failed to compile ignore file {path}")]
    Compile {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("failed to stat {path}")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk project tree")]
    Walk(#[from] walkdir::Error),

    #[error("cannot express {path} relative to the project root")]
    RelativePath { path: PathBuf },
}
