use super::*;

#[test]
fn auth_failure_renders_its_message_only() {
    let e = CliError::from(AuthFailure::new("Unable to reach the server (connection failed)."));
    let line = render_error(&e);
    assert_eq!(line, "error: Unable to reach the server (connection failed).");
    assert!(!line.contains("AuthFailure"));
    assert!(!line.contains("message:"));
}

#[test]
fn gateway_error_renders_user_text() {
    let e = CliError::from(GatewayError::Transport("status 502".into()));
    assert_eq!(render_error(&e), "error: Unable to reach the server (status 502).");
}

#[test]
fn field_errors_join_on_one_line() {
    let errors = LoginForm { email: "nope".into(), password: "1".into(), remember_me: false }
        .validate()
        .unwrap_err();
    let line = render_error(&CliError::Invalid(errors));
    assert!(line.starts_with("error: email: "));
    assert!(line.contains("; password: "));
    assert!(!line.contains('\n'));
}

#[test]
fn not_signed_in_names_the_redirect() {
    let line = render_error(&CliError::NotSignedIn(guard::LOGIN_PATH));
    assert!(line.contains("argent login"));
    assert!(line.ends_with("(would redirect to /login)"));
}

#[test]
fn config_error_is_readable() {
    let e = CliError::from(ConfigError::Parse("ARGENT_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got 'soon'".into()));
    assert_eq!(
        render_error(&e),
        "error: config parse failed: ARGENT_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got 'soon'"
    );
}
