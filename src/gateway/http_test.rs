use super::*;
use crate::config::Timeouts;

#[test]
fn new_accepts_default_config() {
    let gateway = HttpGateway::new(GatewayConfig::default()).unwrap();
    assert_eq!(gateway.config().api_url, "http://localhost:3001/api/v1");
}

#[test]
fn new_accepts_timeouts() {
    let config = GatewayConfig {
        timeouts: Timeouts { request_secs: Some(5), connect_secs: Some(1) },
        ..GatewayConfig::default()
    };
    assert!(HttpGateway::new(config).is_ok());
}

#[tokio::test]
async fn logout_without_endpoint_is_local_noop() {
    let gateway = HttpGateway::new(GatewayConfig::default()).unwrap();
    assert_eq!(gateway.logout(Some(&Credential::new("t"))).await, Ok(()));
}

#[tokio::test]
async fn unreachable_server_is_transport_failure() {
    // Port 9 (discard) on loopback is closed in test environments.
    let config = GatewayConfig {
        api_url: "http://127.0.0.1:9/api/v1".into(),
        timeouts: Timeouts { request_secs: Some(5), connect_secs: Some(2) },
        ..GatewayConfig::default()
    };
    let gateway = HttpGateway::new(config).unwrap();
    let err = gateway.login("a@b.com", "secret1").await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)));
}
