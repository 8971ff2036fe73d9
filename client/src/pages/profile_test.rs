use super::*;

#[test]
fn cached_profile_shown_while_fetching() {
    let cached = Profile::new("Tony", "Stark");
    assert_eq!(greeting(Some(&cached), true), "Tony Stark");
}

#[test]
fn loading_only_without_cache() {
    assert_eq!(greeting(None, true), "loading...");
}

#[test]
fn blank_when_fetch_finished_without_profile() {
    assert_eq!(greeting(None, false), "");
}
