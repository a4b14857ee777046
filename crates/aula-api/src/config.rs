use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_API_ADDR: &str = "0.0.0.0:3001";

/// Process configuration, read once at startup.
///
/// | variable                | default        |
/// |-------------------------|----------------|
/// | `AULA_API_ADDR`         | `0.0.0.0:3001` |
/// | `AULA_DATA_DIR`         | `.`            |
/// | `AULA_INIT_COLLECTIONS` | `true`         |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_addr: String,
    pub data_dir: PathBuf,
    /// Create an empty document for each collection missing on disk.
    pub init_collections: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_addr: DEFAULT_API_ADDR.to_string(),
            data_dir: PathBuf::from("."),
            init_collections: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_addr = lookup("AULA_API_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_addr);
        let data_dir = lookup("AULA_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let init_collections = match lookup("AULA_INIT_COLLECTIONS") {
            None => defaults.init_collections,
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "AULA_INIT_COLLECTIONS is not a boolean, using default");
                defaults.init_collections
            }),
        };

        Self {
            api_addr,
            data_dir,
            init_collections,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
        assert_eq!(Config::default().api_addr, "0.0.0.0:3001");
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("AULA_API_ADDR", "127.0.0.1:9000"),
            ("AULA_DATA_DIR", "/var/lib/aula"),
            ("AULA_INIT_COLLECTIONS", "off"),
        ]);
        assert_eq!(config.api_addr, "127.0.0.1:9000");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/aula"));
        assert!(!config.init_collections);
    }

    #[test]
    fn blank_values_fall_back() {
        let config = config_from(&[("AULA_API_ADDR", " "), ("AULA_DATA_DIR", "")]);
        assert_eq!(config.api_addr, DEFAULT_API_ADDR);
        assert_eq!(config.data_dir, PathBuf::from("."));
    }

    #[test]
    fn unparsable_flag_falls_back() {
        assert!(config_from(&[("AULA_INIT_COLLECTIONS", "maybe")]).init_collections);
        assert!(!config_from(&[("AULA_INIT_COLLECTIONS", " FALSE ")]).init_collections);
    }
}
