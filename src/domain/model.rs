use serde::{Deserialize, Serialize};

/// State bag bound to one event-detail view. Handlers read the
/// `attachments_*` fields and write `attachments`; nothing here is persisted
/// beyond the lifetime of the modal that owns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewContext {
    pub attachments_count: Option<u64>,
    pub attachments_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<serde_json::Value>>,
}

impl ViewContext {
    pub fn new(attachments_count: Option<u64>, attachments_url: Option<String>) -> Self {
        Self {
            attachments_count,
            attachments_url,
            attachments: None,
        }
    }

    /// Trigger condition for the attachment fetch: a present, non-zero count.
    pub fn has_attachments(&self) -> bool {
        matches!(self.attachments_count, Some(n) if n > 0)
    }
}

/// Response shape of the attachment listing endpoint. Only `results` is
/// consumed; records themselves stay opaque JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentPage {
    pub results: Vec<serde_json::Value>,
}

impl AttachmentPage {
    /// Extracts the page from a response body, distinguishing a malformed
    /// body (no `results` array) from transport-level failures.
    pub fn from_value(body: serde_json::Value) -> crate::utils::error::Result<Self> {
        match body.get("results") {
            Some(serde_json::Value::Array(items)) => Ok(Self {
                results: items.clone(),
            }),
            Some(_) => Err(crate::utils::error::GisError::MalformedResponseError {
                message: "'results' is not an array".to_string(),
            }),
            None => Err(crate::utils::error::GisError::MalformedResponseError {
                message: "response body has no 'results' field".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl Default for MapCenter {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            zoom: 1,
        }
    }
}

/// Map-view parameters handed to the rendering layer at initialization.
/// Read-only from this crate's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    pub center: MapCenter,
}

/// One entry of the host-rewrite table. `target` may carry a `:port` suffix;
/// `source` is matched against the URL host only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub source: String,
    pub target: String,
}
