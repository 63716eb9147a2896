pub mod attachments;
pub mod bootstrap;
pub mod lifecycle;
pub mod projection;
pub mod rewrite;

pub use crate::domain::model::{AttachmentPage, MapCenter, RewriteRule, ViewConfig, ViewContext};
pub use crate::domain::ports::{ConfigProvider, ViewEventHandler};
pub use crate::utils::error::Result;
