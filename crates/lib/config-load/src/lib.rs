//! Configuration loading for mailcount: find the file, read it, parse it.

mod read;

pub use read::*;

use std::path::PathBuf;

use config_core::Config;

/// Errors returned while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No file could be read.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// The file is not a valid configuration.
    #[error("parse config file {path}: {source}")]
    Parse {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying YAML parse error.
        #[source]
        source: serde_yaml_bw::Error,
    },
}

/// Parse the first existing file among `paths`.
pub async fn load<P>(paths: &[P]) -> Result<Located<Config>, LoadError>
where
    P: AsRef<std::path::Path>,
{
    let Located { value, path } = read_first(paths).await?;
    match config_yaml::parse_str(&value) {
        Ok(config) => {
            tracing::info!(config_path = %path.display(), "loaded config");
            Ok(Located {
                value: config,
                path,
            })
        }
        Err(source) => Err(LoadError::Parse { path, source }),
    }
}

/// Load configuration from `explicit` if given, or from the default paths.
pub async fn with(explicit: Option<PathBuf>) -> Result<Located<Config>, LoadError> {
    let paths: Vec<PathBuf> = config_paths::resolve(explicit).collect();
    load(&paths).await
}

/// Load configuration from the path in the `MAILCOUNT_CONFIG` environment
/// variable if it is set, or from the default paths.
#[cfg(feature = "env")]
pub async fn with_default_env_var() -> Result<Located<Config>, WithDefaultEnvVarError> {
    let explicit = envfury::maybe(config_paths::ENV_VAR).map_err(WithDefaultEnvVarError::Env)?;
    with(explicit).await.map_err(WithDefaultEnvVarError::Load)
}

/// Errors returned by [`with_default_env_var`].
#[cfg(feature = "env")]
#[derive(Debug, thiserror::Error)]
pub enum WithDefaultEnvVarError {
    /// The environment variable could not be read.
    #[error("config path env var: {0}")]
    Env(#[source] envfury::Error<envfury::ValueError<<PathBuf as std::str::FromStr>::Err>>),

    /// Loading failed.
    #[error(transparent)]
    Load(LoadError),
}
