//! Integration tests for the jotter-web crate configuration.

use std::sync::Arc;

use jotter_core::Usecase;
use jotter_store::InMemoryStorage;
use jotter_web::{WebConfig, WebServer};

#[test]
fn web_config_defaults() {
    let config = WebConfig::default();
    assert_eq!(config.bind_addr, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.addr(), "127.0.0.1:8080");
}

#[test]
fn server_reports_configured_addr() {
    let config = WebConfig {
        bind_addr: "0.0.0.0".into(),
        port: 9000,
    };
    let server = WebServer::new(config, Usecase::new(Arc::new(InMemoryStorage::new())));
    assert_eq!(server.addr(), "0.0.0.0:9000");
}
