// crates/countrydb-core/src/config.rs

//! Runtime configuration.
//!
//! The host hands us a flat string map (from its own settings, or from the
//! environment via [`Config::from_env`]); unknown keys are ignored.
//!
//! | key           | env var                  | meaning                          |
//! |---------------|--------------------------|----------------------------------|
//! | `data_path`   | `COUNTRYDB_DATA_PATH`    | dataset file instead of bundled  |
//! | `theme`       | `COUNTRYDB_THEME`        | initial theme, `light` or `dark` |
//! | `trace_level` | `COUNTRYDB_TRACE_LEVEL`  | log filter, default `info`       |

use crate::error::Result;
use crate::theme::ThemeMode;
use std::collections::BTreeMap;
use std::path::PathBuf;

const ENV_KEYS: [(&str, &str); 3] = [
    ("COUNTRYDB_DATA_PATH", "data_path"),
    ("COUNTRYDB_THEME", "theme"),
    ("COUNTRYDB_TRACE_LEVEL", "trace_level"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Dataset file to load instead of the bundled one.
    pub data_path: Option<PathBuf>,
    /// Theme the app starts in.
    pub theme: ThemeMode,
    /// `tracing` filter directive (e.g. `"debug"`, `"countrydb_core=trace"`).
    /// Kept verbatim; the host that installs the subscriber parses it.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Empty values count as unset. An unknown theme name is an error.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use countrydb_core::config::Config;
    /// use countrydb_core::theme::ThemeMode;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "dark".to_string());
    /// let config = Config::from_map(&map).unwrap();
    /// assert_eq!(config.theme, ThemeMode::Dark);
    /// assert!(config.data_path.is_none());
    /// ```
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let get = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let theme = match get("theme") {
            Some(name) => name.parse()?,
            None => ThemeMode::default(),
        };

        Ok(Self {
            data_path: get("data_path").map(PathBuf::from),
            theme,
            trace_level: get("trace_level").map(String::from),
        })
    }

    /// Reads `COUNTRYDB_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let map = ENV_KEYS
            .iter()
            .filter_map(|(var, key)| std::env::var(var).ok().map(|v| (key.to_string(), v)))
            .collect();
        Self::from_map(&map)
    }

    /// The log filter directive, falling back to `"info"`.
    pub fn trace_directive(&self) -> &str {
        self.trace_level.as_deref().unwrap_or("info")
    }
}
