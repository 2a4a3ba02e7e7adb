//! Where mailcount looks for its configuration file.

use std::path::PathBuf;

use either::Either;

/// Name of the environment variable overriding the config file location.
pub const ENV_VAR: &str = "MAILCOUNT_CONFIG";

/// Default configuration file paths, most preferred first:
/// the user config directory, then the home directory, then the system.
pub fn defaults() -> impl Iterator<Item = PathBuf> {
    let user_config = dirs::config_dir()
        .into_iter()
        .flat_map(|dir| [dir.join("mailcount/config.yaml"), dir.join("mailcount.yaml")]);
    let home = dirs::home_dir()
        .into_iter()
        .flat_map(|dir| [dir.join(".mailcount.yaml"), dir.join(".mailcount/config.yaml")]);
    let system = std::iter::once_with(|| PathBuf::from("/etc/mailcount/config.yaml"));

    user_config.chain(home).chain(system)
}

/// The paths to try: only `explicit` when given, the defaults otherwise.
pub fn resolve(explicit: Option<PathBuf>) -> impl Iterator<Item = PathBuf> {
    match explicit {
        Some(path) => Either::Left(std::iter::once(path)),
        None => Either::Right(defaults()),
    }
}
