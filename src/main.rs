use clap::Parser;
use webgis_client::utils::{logger, validation::Validate};
use webgis_client::{
    AttachmentFetcher, CliConfig, ConfigProvider, HostRewriteMap, TomlConfig, ViewContext,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting webgis-client CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Rewrite rules come from the TOML file first, then inline CLI pairs on
    // top (later inserts win for the same source host).
    let mut rules = Vec::new();
    if let Some(path) = &config.config {
        let toml_config = TomlConfig::from_file(path)?;
        let center = toml_config.map_center();
        tracing::debug!(
            "default map center: ({}, {}) zoom {}",
            center.latitude,
            center.longitude,
            center.zoom
        );
        rules.extend(toml_config.rewrite_rules());
    }
    rules.extend(config.rewrite_rules());

    let rewrites = HostRewriteMap::from_rules(&rules)?;
    tracing::debug!("{} host rewrite rule(s) active", rewrites.len());

    let fetcher = AttachmentFetcher::with_timeout(rewrites, config.request_timeout())?;
    let mut ctx = ViewContext::new(config.attachments_count, config.attachments_url.clone());

    match fetcher.load_attachments(&mut ctx).await {
        Ok(true) => {
            let records = ctx.attachments.unwrap_or_default();
            tracing::info!("✅ Fetched {} attachment record(s)", records.len());
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Ok(false) => {
            tracing::info!("View reports no attachments; nothing fetched");
        }
        Err(e) => {
            tracing::error!("❌ Attachment fetch failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
