use crate::domain::model::RewriteRule;
use crate::utils::error::{GisError, Result};
use std::collections::HashMap;
use url::Url;

/// Parsed `host` or `host:port` rewrite target.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RewriteTarget {
    host: String,
    port: Option<u16>,
}

impl RewriteTarget {
    fn parse(field: &str, spec: &str) -> Result<Self> {
        let (host, port) = match spec.rsplit_once(':') {
            Some((host, port)) => {
                let port =
                    port.parse::<u16>()
                        .map_err(|_| GisError::InvalidConfigValueError {
                            field: field.to_string(),
                            value: spec.to_string(),
                            reason: format!("Invalid port number: {}", port),
                        })?;
                (host, Some(port))
            }
            None => (spec, None),
        };

        if host.is_empty() {
            return Err(GisError::InvalidConfigValueError {
                field: field.to_string(),
                value: spec.to_string(),
                reason: "Host part cannot be empty".to_string(),
            });
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

/// Source-host to target-host mapping applied to attachment URLs before the
/// fetch. Replaces the per-deployment hostname literals that used to be
/// hardcoded in the view layer; built once at startup from configuration.
#[derive(Debug, Clone, Default)]
pub struct HostRewriteMap {
    targets: HashMap<String, RewriteTarget>,
}

impl HostRewriteMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: &[RewriteRule]) -> Result<Self> {
        let mut map = Self::new();
        for rule in rules {
            map.insert(&rule.source, &rule.target)?;
        }
        Ok(map)
    }

    pub fn insert(&mut self, source_host: &str, target: &str) -> Result<()> {
        if source_host.is_empty() {
            return Err(GisError::InvalidConfigValueError {
                field: "rewrite.source".to_string(),
                value: source_host.to_string(),
                reason: "Host cannot be empty".to_string(),
            });
        }
        let target = RewriteTarget::parse("rewrite.target", target)?;
        // Url normalizes hosts to lowercase, so keys must match that form.
        self.targets
            .insert(source_host.to_ascii_lowercase(), target);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Applies the mapping to `url`. Matching is on the host component only;
    /// on a match the host and port are replaced by the target's (the source
    /// port is dropped when the target names none). Scheme, path, query and
    /// fragment pass through untouched. Unmatched hosts come back unchanged.
    pub fn rewrite(&self, url: &Url) -> Result<Url> {
        let target = match url.host_str().and_then(|h| self.targets.get(h)) {
            Some(target) => target,
            None => return Ok(url.clone()),
        };

        let mut rewritten = url.clone();
        rewritten.set_host(Some(&target.host))?;
        rewritten
            .set_port(target.port)
            .map_err(|_| GisError::InvalidConfigValueError {
                field: "rewrite.target".to_string(),
                value: target.host.clone(),
                reason: "URL does not accept a port".to_string(),
            })?;
        Ok(rewritten)
    }

    pub fn rewrite_str(&self, url: &str) -> Result<Url> {
        let url = Url::parse(url)?;
        self.rewrite(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(source: &str, target: &str) -> HostRewriteMap {
        let mut map = HostRewriteMap::new();
        map.insert(source, target).unwrap();
        map
    }

    #[test]
    fn test_rewrite_replaces_host_and_drops_source_port() {
        let map = single("sourceHost", "targetHost");
        let out = map.rewrite_str("https://sourceHost:8080/path?x=1").unwrap();
        assert_eq!(out.as_str(), "https://targethost/path?x=1");
        assert_eq!(out.host_str(), Some("targethost"));
        assert_eq!(out.port(), None);
        assert_eq!(out.path(), "/path");
        assert_eq!(out.query(), Some("x=1"));
    }

    #[test]
    fn test_rewrite_with_target_port() {
        let map = single(
            "marum.geophysik.uni-muenchen.de",
            "erde.geophysik.uni-muenchen.de:8088",
        );
        let out = map
            .rewrite_str("http://marum.geophysik.uni-muenchen.de/rest/document_indices/quakeml/1/attachments/?format=json")
            .unwrap();
        assert_eq!(out.host_str(), Some("erde.geophysik.uni-muenchen.de"));
        assert_eq!(out.port(), Some(8088));
        assert_eq!(out.path(), "/rest/document_indices/quakeml/1/attachments/");
        assert_eq!(out.query(), Some("format=json"));
    }

    #[test]
    fn test_unmatched_host_passes_through() {
        let map = single("a.example.org", "b.example.org");
        let input = "https://other.example.org/p?q=1";
        let out = map.rewrite_str(input).unwrap();
        assert_eq!(out.as_str(), input);
    }

    #[test]
    fn test_empty_map_is_identity() {
        let map = HostRewriteMap::new();
        let input = "https://anything.example.org:9999/x";
        assert_eq!(map.rewrite_str(input).unwrap().as_str(), input);
    }

    #[test]
    fn test_from_rules() {
        let rules = vec![
            RewriteRule {
                source: "a.example.org".to_string(),
                target: "b.example.org:8088".to_string(),
            },
            RewriteRule {
                source: "c.example.org".to_string(),
                target: "d.example.org".to_string(),
            },
        ];
        let map = HostRewriteMap::from_rules(&rules).unwrap();
        assert_eq!(map.len(), 2);
        let out = map.rewrite_str("https://a.example.org/p").unwrap();
        assert_eq!(out.host_str(), Some("b.example.org"));
        assert_eq!(out.port(), Some(8088));
    }

    #[test]
    fn test_invalid_target_port_rejected() {
        let mut map = HostRewriteMap::new();
        let err = map.insert("a.example.org", "b.example.org:notaport");
        assert!(matches!(
            err,
            Err(GisError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_empty_source_rejected() {
        let mut map = HostRewriteMap::new();
        assert!(map.insert("", "b.example.org").is_err());
    }
}
