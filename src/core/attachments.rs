use crate::core::rewrite::HostRewriteMap;
use crate::domain::model::{AttachmentPage, ViewContext};
use crate::domain::ports::ViewEventHandler;
use crate::utils::error::{GisError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::task::JoinHandle;
use url::Url;

/// Loads attachment metadata for an event-detail view when its modal opens.
///
/// Activates only when the view reports a non-zero attachment count; issues
/// exactly one GET per modal open, with the URL host rewritten through the
/// configured mapping. No retry, no caching.
pub struct AttachmentFetcher {
    client: Client,
    rewrites: HostRewriteMap,
}

impl AttachmentFetcher {
    pub fn new(rewrites: HostRewriteMap) -> Self {
        Self {
            client: Client::new(),
            rewrites,
        }
    }

    pub fn with_timeout(rewrites: HostRewriteMap, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, rewrites })
    }

    /// Fetches the attachment list into `ctx.attachments`.
    ///
    /// Returns `Ok(false)` when the view has no attachments to fetch (the
    /// defined short-circuit: no network call, `attachments` untouched) and
    /// `Ok(true)` once the records are stored. Any failure leaves
    /// `ctx.attachments` unwritten.
    pub async fn load_attachments(&self, ctx: &mut ViewContext) -> Result<bool> {
        if !ctx.has_attachments() {
            tracing::debug!("view reports no attachments, skipping fetch");
            return Ok(false);
        }

        let url = self.resolve_url(ctx)?;
        let results = fetch_results(&self.client, url).await?;
        tracing::debug!("loaded {} attachment records", results.len());
        ctx.attachments = Some(results);
        Ok(true)
    }

    /// Spawned variant for modal lifecycles: the fetch runs on a background
    /// task so the caller can keep rendering, and the returned session can be
    /// closed to abort an in-flight request once the modal is discarded.
    pub fn open_modal(&self, ctx: &ViewContext) -> Result<Option<ModalSession>> {
        if !ctx.has_attachments() {
            return Ok(None);
        }

        let url = self.resolve_url(ctx)?;
        let client = self.client.clone();
        let handle = tokio::spawn(async move { fetch_results(&client, url).await });
        Ok(Some(ModalSession { handle }))
    }

    fn resolve_url(&self, ctx: &ViewContext) -> Result<Url> {
        let raw = ctx
            .attachments_url
            .as_deref()
            .ok_or_else(|| GisError::MissingConfigError {
                field: "attachments_url".to_string(),
            })?;
        self.rewrites.rewrite_str(raw)
    }
}

#[async_trait]
impl ViewEventHandler for AttachmentFetcher {
    async fn on_modal_open(&self, ctx: &mut ViewContext) -> Result<()> {
        self.load_attachments(ctx).await.map(|_| ())
    }
}

/// Handle to one in-flight attachment fetch, owned by the modal that opened
/// it. Dropping the session without resolving leaves the task running to
/// completion; `close` aborts it so a discarded view is never updated.
pub struct ModalSession {
    handle: JoinHandle<Result<Vec<serde_json::Value>>>,
}

impl ModalSession {
    /// Aborts the in-flight fetch. Safe to call after completion.
    pub fn close(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Awaits the fetched records. A session closed before the response
    /// arrived resolves to `FetchCancelled`.
    pub async fn resolve(self) -> Result<Vec<serde_json::Value>> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(GisError::FetchCancelled),
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
}

async fn fetch_results(client: &Client, url: Url) -> Result<Vec<serde_json::Value>> {
    tracing::debug!("GET {}", url);
    let response = client.get(url).send().await?.error_for_status()?;

    let body: serde_json::Value = response.json().await?;
    let page = AttachmentPage::from_value(body)?;
    Ok(page.results)
}
