use std::net::{IpAddr, Ipv4Addr};

use super::{Config, default_log_filter};

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 3000);
    assert_eq!(config.verbosity, 0);
    assert!(!config.enable_docs);
}

#[test]
fn test_bind_addr_joins_host_and_port() {
    let config = Config {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 8080,
        ..Default::default()
    };
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn test_log_filter_by_verbosity() {
    assert_eq!(default_log_filter(0), "contacts=info,tower_http=warn");
    assert_eq!(default_log_filter(1), "contacts=debug,tower_http=debug");
    assert_eq!(default_log_filter(2), "trace");
    assert_eq!(default_log_filter(9), "trace");
}
