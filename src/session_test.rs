use super::*;

fn tok(raw: &str) -> Credential {
    Credential::new(raw)
}

fn all_events() -> Vec<AuthEvent> {
    vec![
        AuthEvent::LoginStarted,
        AuthEvent::LoginSucceeded(tok("t-1")),
        AuthEvent::LoginFailed,
        AuthEvent::LogoutStarted,
        AuthEvent::LogoutSucceeded,
    ]
}

// =============================================================
// Credential
// =============================================================

#[test]
fn credential_debug_is_redacted() {
    let text = format!("{:?}", tok("super-secret"));
    assert!(!text.contains("super-secret"));
    assert_eq!(text, "Credential(<redacted>)");
}

#[test]
fn credential_serializes_as_bare_string() {
    let json = serde_json::to_string(&tok("tok-123")).unwrap();
    assert_eq!(json, "\"tok-123\"");
    let back: Credential = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_str(), "tok-123");
}

// =============================================================
// Session accessors
// =============================================================

#[test]
fn default_session_is_logged_out() {
    let s = Session::default();
    assert!(!s.is_logged_in());
    assert!(s.token().is_none());
}

#[test]
fn from_credential_some_is_logged_in() {
    let s = Session::from_credential(Some(tok("abc")));
    assert!(s.is_logged_in());
    assert_eq!(s.token().map(Credential::as_str), Some("abc"));
}

#[test]
fn from_credential_none_is_logged_out() {
    assert_eq!(Session::from_credential(None), Session::LoggedOut);
}

#[test]
fn pending_phases() {
    assert!(Session::LoggingIn.is_pending());
    assert!(Session::LoggingOut.is_pending());
    assert!(!Session::LoggedOut.is_pending());
    assert!(!Session::LoggedIn(tok("x")).is_pending());
}

// =============================================================
// Transition table
// =============================================================

#[test]
fn login_started_from_logged_out() {
    assert_eq!(Session::LoggedOut.apply(&AuthEvent::LoginStarted), Session::LoggingIn);
}

#[test]
fn login_succeeded_from_logging_in() {
    let next = Session::LoggingIn.apply(&AuthEvent::LoginSucceeded(tok("tok-123")));
    assert_eq!(next, Session::LoggedIn(tok("tok-123")));
}

#[test]
fn login_failed_clears_token() {
    let next = Session::LoggingIn.apply(&AuthEvent::LoginFailed);
    assert_eq!(next, Session::LoggedOut);
    assert!(next.token().is_none());
}

#[test]
fn logout_started_from_logged_in() {
    let next = Session::LoggedIn(tok("a")).apply(&AuthEvent::LogoutStarted);
    assert_eq!(next, Session::LoggingOut);
}

#[test]
fn logout_succeeded_from_logging_out() {
    assert_eq!(Session::LoggingOut.apply(&AuthEvent::LogoutSucceeded), Session::LoggedOut);
}

#[test]
fn late_login_success_overwrites_earlier_one() {
    let first = Session::LoggingIn.apply(&AuthEvent::LoginSucceeded(tok("first")));
    let second = first.apply(&AuthEvent::LoginSucceeded(tok("second")));
    assert_eq!(second.token().map(Credential::as_str), Some("second"));
}

#[test]
fn late_login_failure_overwrites_success() {
    let ok = Session::LoggingIn.apply(&AuthEvent::LoginSucceeded(tok("first")));
    assert_eq!(ok.apply(&AuthEvent::LoginFailed), Session::LoggedOut);
}

#[test]
fn nominal_pairs_match_table() {
    assert!(is_nominal(&Session::LoggedOut, &AuthEvent::LoginStarted));
    assert!(is_nominal(&Session::LoggingIn, &AuthEvent::LoginSucceeded(tok("t"))));
    assert!(is_nominal(&Session::LoggingIn, &AuthEvent::LoginFailed));
    assert!(is_nominal(&Session::LoggedIn(tok("t")), &AuthEvent::LogoutStarted));
    assert!(is_nominal(&Session::LoggingOut, &AuthEvent::LogoutSucceeded));
}

#[test]
fn off_table_pairs_are_not_nominal() {
    assert!(!is_nominal(&Session::LoggingIn, &AuthEvent::LoginStarted));
    assert!(!is_nominal(&Session::LoggedOut, &AuthEvent::LogoutSucceeded));
    assert!(!is_nominal(&Session::LoggedIn(tok("t")), &AuthEvent::LoginSucceeded(tok("u"))));
}

// =============================================================
// Invariant: logged in iff token present
// =============================================================

#[test]
fn invariant_holds_for_every_pair() {
    let states = vec![
        Session::LoggedOut,
        Session::LoggingIn,
        Session::LoggedIn(tok("s")),
        Session::LoggingOut,
    ];
    for state in &states {
        for event in all_events() {
            let next = state.apply(&event);
            assert_eq!(next.is_logged_in(), next.token().is_some(), "{state:?} + {event:?}");
        }
    }
}

#[test]
fn invariant_holds_along_long_sequences() {
    let events = all_events();
    let mut state = Session::default();
    // Walk a deterministic pseudo-random event sequence.
    let mut seed: usize = 7;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345) % 65_536;
        let event = &events[seed % events.len()];
        state = state.apply(event);
        assert_eq!(state.is_logged_in(), state.token().is_some());
    }
}

#[test]
fn phase_labels() {
    assert_eq!(Session::LoggedOut.phase(), "logged_out");
    assert_eq!(Session::LoggingIn.phase(), "logging_in");
    assert_eq!(Session::LoggedIn(tok("t")).phase(), "logged_in");
    assert_eq!(Session::LoggingOut.phase(), "logging_out");
}
