use super::*;

// =============================================================================
// endpoints
// =============================================================================

#[test]
fn login_url_appends_path() {
    assert_eq!(login_url("http://localhost:3001/api/v1"), "http://localhost:3001/api/v1/user/login");
}

#[test]
fn profile_url_appends_path() {
    assert_eq!(profile_url("http://h/api/v1"), "http://h/api/v1/user/profile");
}

#[test]
fn bearer_header_value() {
    assert_eq!(bearer(&Credential::new("abc")), "Bearer abc");
}

#[test]
fn login_request_serializes_fields() {
    let req = LoginRequest { email: "a@b.com", password: "secret1" };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "secret1" })
    );
}

// =============================================================================
// interpret_login
// =============================================================================

#[test]
fn login_success_yields_token() {
    let raw = r#"{"status":200,"message":"User successfully logged in","body":{"token":"tok-123"}}"#;
    assert_eq!(interpret_login(200, raw), Ok(Credential::new("tok-123")));
}

#[test]
fn login_http_400_with_message_is_invalid_credentials() {
    let raw = r#"{"status":400,"message":"Error: User not found!"}"#;
    assert_eq!(
        interpret_login(400, raw),
        Err(GatewayError::InvalidCredentials("Error: User not found!".into()))
    );
}

#[test]
fn login_http_200_with_error_status_is_invalid_credentials() {
    let raw = r#"{"status":400,"message":"Error: Password is invalid"}"#;
    assert_eq!(
        interpret_login(200, raw),
        Err(GatewayError::InvalidCredentials("Error: Password is invalid".into()))
    );
}

#[test]
fn login_error_status_without_message_uses_default() {
    let err = interpret_login(200, r#"{"status":401}"#).unwrap_err();
    assert_eq!(err, GatewayError::InvalidCredentials("The server rejected the request.".into()));
}

#[test]
fn login_http_500_is_transport() {
    let raw = r#"{"status":500,"message":"Internal Server Error"}"#;
    assert_eq!(interpret_login(500, raw), Err(GatewayError::Transport("status 500".into())));
}

#[test]
fn login_http_404_without_envelope_is_transport() {
    assert_eq!(interpret_login(404, "<html>nope</html>"), Err(GatewayError::Transport("status 404".into())));
}

#[test]
fn login_missing_body_is_malformed() {
    let err = interpret_login(200, r#"{"status":200,"message":"ok"}"#).unwrap_err();
    assert!(matches!(err, GatewayError::MalformedResponse(_)));
}

#[test]
fn login_body_without_token_is_malformed() {
    let err = interpret_login(200, r#"{"status":200,"body":{"user":"x"}}"#).unwrap_err();
    assert!(matches!(err, GatewayError::MalformedResponse(_)));
}

#[test]
fn login_empty_token_is_malformed() {
    let err = interpret_login(200, r#"{"status":200,"body":{"token":""}}"#).unwrap_err();
    assert_eq!(err, GatewayError::MalformedResponse("empty token".into()));
}

#[test]
fn login_non_json_success_is_malformed() {
    let err = interpret_login(200, "OK").unwrap_err();
    assert!(matches!(err, GatewayError::MalformedResponse(_)));
}

// =============================================================================
// interpret_response for profiles
// =============================================================================

#[test]
fn profile_success_decodes_body() {
    let raw = r#"{"status":200,"message":"Successfully got user profile data","body":{"email":"tony@stark.com","firstName":"Tony","lastName":"Stark","id":"1"}}"#;
    let profile: Profile = interpret_response(200, raw).unwrap();
    assert_eq!(profile, Profile::new("Tony", "Stark"));
}

#[test]
fn profile_unauthorized_is_invalid_credentials() {
    let raw = r#"{"status":401,"message":"Token is missing from header"}"#;
    let err = interpret_response::<Profile>(401, raw).unwrap_err();
    assert_eq!(err.to_string(), "Token is missing from header");
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_messages_are_human_readable() {
    assert_eq!(
        GatewayError::Transport("connection refused".into()).to_string(),
        "Unable to reach the server (connection refused)."
    );
    assert_eq!(
        GatewayError::MalformedResponse("missing body".into()).to_string(),
        "Unexpected response from the server (missing body)."
    );
}
