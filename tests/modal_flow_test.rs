use httpmock::prelude::*;
use std::sync::Arc;
use webgis_client::utils::validation::Validate;
use webgis_client::{
    AttachmentFetcher, ConfigProvider, HandlerRegistry, HostRewriteMap, TomlConfig, ViewContext,
};

fn config_for(server: &MockServer) -> TomlConfig {
    let toml = format!(
        r#"
[map]
latitude = 48.137
longitude = 11.576
zoom = 5

[fetch]
timeout_seconds = 5

[[rewrite]]
source = "marum.geophysik.uni-muenchen.de"
target = "127.0.0.1:{}"
"#,
        server.port()
    );
    TomlConfig::from_toml_str(&toml).unwrap()
}

#[tokio::test]
async fn test_modal_open_fetches_through_configured_rewrite() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/document_indices/quakeml/12/attachments/")
            .query_param("format", "json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "count": 2,
                "results": [
                    {"id": 1, "category": "Event Information"},
                    {"id": 2, "category": "Waveform Comparison"}
                ]
            }));
    });

    let config = config_for(&server);
    config.validate().unwrap();

    let rewrites = HostRewriteMap::from_rules(&config.rewrite_rules()).unwrap();
    let fetcher =
        AttachmentFetcher::with_timeout(rewrites, config.request_timeout()).unwrap();

    let ctx = ViewContext::new(
        Some(2),
        Some(
            "http://marum.geophysik.uni-muenchen.de/rest/document_indices/quakeml/12/attachments/?format=json"
                .to_string(),
        ),
    );

    let session = fetcher.open_modal(&ctx).unwrap().unwrap();
    let records = session.resolve().await.unwrap();

    mock.assert_hits(1);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["category"], "Event Information");
}

#[tokio::test]
async fn test_registry_drives_attachment_handler() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/attachments/");
        then.status(200)
            .json_body(serde_json::json!({"results": [{"id": 7}]}));
    });

    let mut rewrites = HostRewriteMap::new();
    rewrites
        .insert("upstream.example.org", &format!("127.0.0.1:{}", server.port()))
        .unwrap();

    let mut registry = HandlerRegistry::new();
    registry.register("event_info", Arc::new(AttachmentFetcher::new(rewrites)));

    let mut ctx = ViewContext::new(
        Some(1),
        Some("http://upstream.example.org/attachments/".to_string()),
    );

    assert!(registry.dispatch("event_info", &mut ctx).await.unwrap());
    assert_eq!(ctx.attachments.unwrap(), vec![serde_json::json!({"id": 7})]);
}

#[tokio::test]
async fn test_falsy_view_never_contacts_the_network() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let config = config_for(&server);
    let rewrites = HostRewriteMap::from_rules(&config.rewrite_rules()).unwrap();
    let fetcher = AttachmentFetcher::new(rewrites);

    let mut ctx = ViewContext::new(
        Some(0),
        Some("http://marum.geophysik.uni-muenchen.de/attachments/".to_string()),
    );
    assert!(!fetcher.load_attachments(&mut ctx).await.unwrap());
    assert!(fetcher.open_modal(&ctx).unwrap().is_none());

    mock.assert_hits(0);
    assert!(ctx.attachments.is_none());
}
