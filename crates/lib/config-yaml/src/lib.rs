//! YAML configuration parsing for mailcount.

use config_core::Config;

/// Parse configuration from a YAML string.
pub fn parse_str(contents: &str) -> Result<Config, serde_yaml_bw::Error> {
    serde_yaml_bw::from_str(contents)
}
