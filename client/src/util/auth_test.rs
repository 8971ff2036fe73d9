use super::*;
use argent::guard::{LOGIN_PATH, PROFILE_PATH};
use argent::profile::Profile;
use argent::session::{Credential, Session};

fn state(session: Session) -> AuthState {
    AuthState { session, profile: None }
}

fn logged_in() -> Session {
    Session::LoggedIn(Credential::new("t-1"))
}

#[test]
fn redirects_logged_out_to_login() {
    assert_eq!(should_redirect_unauth(&state(Session::LoggedOut)), Some(LOGIN_PATH));
}

#[test]
fn redirects_while_pending() {
    assert_eq!(should_redirect_unauth(&state(Session::LoggingIn)), Some(LOGIN_PATH));
    assert_eq!(should_redirect_unauth(&state(Session::LoggingOut)), Some(LOGIN_PATH));
}

#[test]
fn logged_in_renders_protected_view() {
    assert_eq!(should_redirect_unauth(&state(logged_in())), None);
}

#[test]
fn cached_profile_does_not_grant_access() {
    let s = AuthState { session: Session::LoggedOut, profile: Some(Profile::new("Tony", "Stark")) };
    assert_eq!(should_redirect_unauth(&s), Some(LOGIN_PATH));
}

#[test]
fn login_page_skipped_only_when_logged_in() {
    assert_eq!(should_skip_login(&state(logged_in())), Some(PROFILE_PATH));
    assert_eq!(should_skip_login(&state(Session::LoggedOut)), None);
    assert_eq!(should_skip_login(&state(Session::LoggingIn)), None);
}
