use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::{error::Result, view::SortKey};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON catalog to load; the sample catalog is used when absent.
    pub catalog: Option<PathBuf>,
    pub default_sort: SortKey,
    /// Observations covered by the chart's rolling low/high.
    pub chart_window: usize,
    pub toast_timeout_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            default_sort: SortKey::Name,
            chart_window: 7,
            toast_timeout_ms: 5_000,
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn with_catalog(mut self, value: impl Into<PathBuf>) -> Self {
        self.catalog = Some(value.into());
        self
    }

    pub fn with_default_sort(mut self, value: SortKey) -> Self {
        self.default_sort = value;
        self
    }

    pub fn with_chart_window(mut self, value: usize) -> Self {
        self.chart_window = value;
        self
    }

    pub fn toast_timeout(&self) -> Duration {
        Duration::from_millis(self.toast_timeout_ms)
    }
}
