use crate::domain::model::{MapCenter, RewriteRule, ViewContext};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn rewrite_rules(&self) -> Vec<RewriteRule>;
    fn request_timeout(&self) -> Duration;
    fn map_center(&self) -> MapCenter;
}

/// A handler bound to a view-lifecycle event, receiving the injected view
/// context. This is the framework-neutral seam where the hosting UI layer
/// plugs in its own dependency-injection mechanism.
#[async_trait]
pub trait ViewEventHandler: Send + Sync {
    async fn on_modal_open(&self, ctx: &mut ViewContext) -> Result<()>;
}
