pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use core::attachments::{AttachmentFetcher, ModalSession};
pub use core::bootstrap::{map_defaults, LoadingBar, PageTiming};
pub use core::lifecycle::HandlerRegistry;
pub use core::projection::{to_geographic, to_projected, transform, Coordinate, Crs};
pub use core::rewrite::HostRewriteMap;
pub use domain::model::{MapCenter, RewriteRule, ViewConfig, ViewContext};
pub use domain::ports::{ConfigProvider, ViewEventHandler};
pub use utils::error::{GisError, Result};
