use super::*;
use argent::session::Credential;

fn logged_in() -> Session {
    Session::from_credential(Some(Credential::new("t-1")))
}

#[test]
fn default_is_logged_out_without_profile() {
    let state = AuthState::default();
    assert!(!state.is_logged_in());
    assert!(!state.busy());
    assert_eq!(state.first_name(), None);
}

#[test]
fn logged_in_session_reports_logged_in() {
    let state = AuthState { session: logged_in(), profile: None };
    assert!(state.is_logged_in());
}

#[test]
fn pending_phases_are_busy() {
    for session in [Session::LoggingIn, Session::LoggingOut] {
        let state = AuthState { session, profile: None };
        assert!(state.busy());
        assert!(!state.is_logged_in());
    }
}

#[test]
fn first_name_comes_from_profile() {
    let state = AuthState { session: logged_in(), profile: Some(Profile::new("Tony", "Stark")) };
    assert_eq!(state.first_name(), Some("Tony"));
}
