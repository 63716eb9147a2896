pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::model::{MapCenter, RewriteRule};
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use std::time::Duration;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "webgis-client")]
    #[command(about = "Fetch attachment metadata for a web-GIS event view")]
    pub struct CliConfig {
        /// Attachment listing URL as reported by the event view
        #[arg(long)]
        pub attachments_url: Option<String>,

        /// Attachment count reported by the event view
        #[arg(long)]
        pub attachments_count: Option<u64>,

        /// Host rewrite pairs, e.g. "marum.example.org=erde.example.org:8088"
        #[arg(long, value_delimiter = ',')]
        pub rewrite: Vec<String>,

        /// TOML configuration file with [map], [fetch] and [[rewrite]] sections
        #[arg(long)]
        pub config: Option<String>,

        #[arg(long, default_value = "30")]
        pub timeout_seconds: u64,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        fn parse_pair(pair: &str) -> Option<RewriteRule> {
            pair.split_once('=').map(|(source, target)| RewriteRule {
                source: source.trim().to_string(),
                target: target.trim().to_string(),
            })
        }
    }

    impl ConfigProvider for CliConfig {
        fn rewrite_rules(&self) -> Vec<RewriteRule> {
            self.rewrite
                .iter()
                .filter_map(|p| Self::parse_pair(p))
                .collect()
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(self.timeout_seconds)
        }

        fn map_center(&self) -> MapCenter {
            MapCenter::default()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(url) = &self.attachments_url {
                validation::validate_url("attachments_url", url)?;
            }

            for pair in &self.rewrite {
                match Self::parse_pair(pair) {
                    Some(rule) => {
                        validation::validate_non_empty_string("rewrite.source", &rule.source)?;
                        validation::validate_host_spec("rewrite.target", &rule.target)?;
                    }
                    None => {
                        return Err(crate::utils::error::GisError::InvalidConfigValueError {
                            field: "rewrite".to_string(),
                            value: pair.clone(),
                            reason: "Expected 'source=target' pair".to_string(),
                        })
                    }
                }
            }

            validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn base() -> CliConfig {
            CliConfig::parse_from(["webgis-client"])
        }

        #[test]
        fn test_rewrite_pair_parsing() {
            let mut config = base();
            config.rewrite = vec!["a.example.org=b.example.org:8088".to_string()];
            let rules = config.rewrite_rules();
            assert_eq!(rules.len(), 1);
            assert_eq!(rules[0].source, "a.example.org");
            assert_eq!(rules[0].target, "b.example.org:8088");
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_malformed_pair_fails_validation() {
            let mut config = base();
            config.rewrite = vec!["no-equals-sign".to_string()];
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_bad_url_fails_validation() {
            let mut config = base();
            config.attachments_url = Some("not a url".to_string());
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_timeout_range() {
            let mut config = base();
            config.timeout_seconds = 0;
            assert!(config.validate().is_err());
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
