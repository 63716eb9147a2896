use crate::domain::model::{MapCenter, RewriteRule};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Deployment configuration: default map view, fetch tuning and the
/// host-rewrite table. Every section is optional; an empty file yields the
/// built-in defaults with no rewrites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub map: Option<MapSection>,
    pub fetch: Option<FetchSection>,
    pub rewrite: Option<Vec<RewriteRule>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSection {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub zoom: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSection {
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl ConfigProvider for TomlConfig {
    fn rewrite_rules(&self) -> Vec<RewriteRule> {
        self.rewrite.clone().unwrap_or_default()
    }

    fn request_timeout(&self) -> Duration {
        let seconds = self
            .fetch
            .as_ref()
            .and_then(|f| f.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        Duration::from_secs(seconds)
    }

    fn map_center(&self) -> MapCenter {
        let defaults = MapCenter::default();
        match &self.map {
            Some(map) => MapCenter {
                latitude: map.latitude.unwrap_or(defaults.latitude),
                longitude: map.longitude.unwrap_or(defaults.longitude),
                zoom: map.zoom.unwrap_or(defaults.zoom),
            },
            None => defaults,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(map) = &self.map {
            if let Some(latitude) = map.latitude {
                validation::validate_range("map.latitude", latitude, -90.0, 90.0)?;
            }
            if let Some(longitude) = map.longitude {
                validation::validate_range("map.longitude", longitude, -180.0, 180.0)?;
            }
            if let Some(zoom) = map.zoom {
                validation::validate_range("map.zoom", zoom, 0, 28)?;
            }
        }

        if let Some(fetch) = &self.fetch {
            if let Some(seconds) = fetch.timeout_seconds {
                validation::validate_range("fetch.timeout_seconds", seconds, 1, 600)?;
            }
        }

        for rule in self.rewrite.as_deref().unwrap_or_default() {
            validation::validate_non_empty_string("rewrite.source", &rule.source)?;
            validation::validate_host_spec("rewrite.target", &rule.target)?;
        }

        Ok(())
    }
}
