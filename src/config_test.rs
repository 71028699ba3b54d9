use std::collections::HashMap;

use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("   ")), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_trimmed_number() {
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn port_rejects_garbage_and_overflow() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

// =============================================================================
// parse_host
// =============================================================================

#[test]
fn host_defaults_to_unspecified() {
    assert_eq!(parse_host(None), Ok(DEFAULT_BIND_HOST));
}

#[test]
fn host_accepts_ipv4_and_ipv6() {
    assert_eq!(parse_host(Some("127.0.0.1")), Ok("127.0.0.1".parse().unwrap()));
    assert_eq!(parse_host(Some("::1")), Ok("::1".parse().unwrap()));
}

#[test]
fn host_rejects_names() {
    assert_eq!(parse_host(Some("localhost")), Err(ConfigError::InvalidHost("localhost".into())));
}

#[test]
fn error_messages_name_the_variable() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT: x");
    assert_eq!(ConfigError::InvalidHost("y".into()).to_string(), "invalid BIND_HOST: y");
}

// =============================================================================
// from_lookup
// =============================================================================

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_without_variables() {
    let config = ServerConfig::from_lookup(vars(&[])).unwrap();
    assert_eq!(config.bind_addr, SocketAddr::new(DEFAULT_BIND_HOST, DEFAULT_PORT));
}

#[test]
fn from_lookup_reads_host_and_port() {
    let config =
        ServerConfig::from_lookup(vars(&[("BIND_HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
    assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
}

#[test]
fn from_lookup_rejects_invalid_values() {
    assert_eq!(
        ServerConfig::from_lookup(vars(&[("PORT", "abc")])),
        Err(ConfigError::InvalidPort("abc".into()))
    );
    assert_eq!(
        ServerConfig::from_lookup(vars(&[("BIND_HOST", "nowhere"), ("PORT", "80")])),
        Err(ConfigError::InvalidHost("nowhere".into()))
    );
}
