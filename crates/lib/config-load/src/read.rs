//! Reading the first existing file of a list.

use std::path::{Path, PathBuf};

/// A value together with the file it came from.
#[derive(Debug)]
pub struct Located<T> {
    /// The value.
    pub value: T,

    /// The file.
    pub path: PathBuf,
}

/// Errors returned while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// None of the paths exists.
    #[error("no config file found in paths: {paths:?}")]
    NotFound {
        /// The paths that were tried.
        paths: Vec<PathBuf>,
    },

    /// An existing file could not be read.
    #[error("read config file {path}: {source}")]
    Read {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Read the first of `paths` that exists.
///
/// Missing files are skipped; any other read failure stops the search.
pub async fn read_first<P>(paths: &[P]) -> Result<Located<String>, ReadError>
where
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        match tokio::fs::read_to_string(path).await {
            Ok(value) => {
                return Ok(Located {
                    value,
                    path: path.to_path_buf(),
                });
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(config_path = %path.display(), "no config file here");
            }
            Err(source) => {
                return Err(ReadError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    Err(ReadError::NotFound {
        paths: paths.iter().map(|path| path.as_ref().to_path_buf()).collect(),
    })
}
