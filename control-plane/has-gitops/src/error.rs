use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitopsError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Component document {0} has no metadata.name")]
    MissingName(usize),

    #[error("Component document {index} has unusable name {name:?}")]
    InvalidName { index: usize, name: String },
}

impl GitopsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GitopsError::Io {
            path: path.into(),
            source,
        }
    }
}
