use super::*;

fn configured() -> SocketAddr {
    "0.0.0.0:3000".parse().unwrap()
}

#[test]
fn bind_addr_keeps_configured_without_override() {
    assert_eq!(bind_addr(configured(), None).unwrap(), configured());
    assert_eq!(bind_addr(configured(), Some("  ")).unwrap(), configured());
}

#[test]
fn bind_addr_replaces_port_only() {
    let addr = bind_addr(configured(), Some(" 8080 ")).unwrap();
    assert_eq!(addr.port(), 8080);
    assert_eq!(addr.ip(), configured().ip());
}

#[test]
fn bind_addr_rejects_garbage_port() {
    let err = bind_addr(configured(), Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "eighty"));
    assert!(bind_addr(configured(), Some("70000")).is_err());
}
