use super::*;

fn login(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.into(), password: password.into(), remember_me: false }
}

fn fields(errors: &[FieldError]) -> Vec<&'static str> {
    errors.iter().map(|e| e.field).collect()
}

// =============================================================
// LoginForm
// =============================================================

#[test]
fn login_valid() {
    assert!(login("tony@stark.com", "password123").validate().is_ok());
}

#[test]
fn login_email_is_trimmed_before_check() {
    assert!(login("  a@b.com ", "secret1").validate().is_ok());
}

#[test]
fn login_rejects_bad_emails() {
    for email in ["", "tony", "tony@", "@stark.com", "tony@stark", "to ny@stark.com", "a@b@c.com", "a@.com", "a@b.c", "a@b..com", "a@b.com."] {
        let errors = login(email, "secret1").validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["email"], "{email}");
    }
}

#[test]
fn email_pattern_compiles() {
    assert!(EMAIL.is_some());
}

#[test]
fn login_accepts_subdomains_and_plus_tags() {
    for email in ["tony+bank@mail.stark.com", "steve.rogers@avengers.co.uk"] {
        assert!(login(email, "secret1").validate().is_ok(), "{email}");
    }
}

#[test]
fn login_short_password() {
    let errors = login("a@b.com", "12345").validate().unwrap_err();
    assert_eq!(fields(&errors), vec!["password"]);
    assert_eq!(errors[0].message, "Password must be at least 6 characters.");
}

#[test]
fn login_reports_every_failure() {
    let errors = login("nope", "1").validate().unwrap_err();
    assert_eq!(fields(&errors), vec!["email", "password"]);
}

// =============================================================
// ProfileForm
// =============================================================

#[test]
fn profile_valid_returns_trimmed_profile() {
    let form = ProfileForm { first_name: " Tony ".into(), last_name: "Stark".into() };
    assert_eq!(form.validate(), Ok(Profile::new("Tony", "Stark")));
}

#[test]
fn profile_short_names_rejected() {
    let form = ProfileForm { first_name: "T".into(), last_name: " ".into() };
    let errors = form.validate().unwrap_err();
    assert_eq!(fields(&errors), vec!["firstName", "lastName"]);
}

#[test]
fn profile_counts_characters_not_bytes() {
    let form = ProfileForm { first_name: "É".into(), last_name: "Lo".into() };
    assert_eq!(fields(&form.validate().unwrap_err()), vec!["firstName"]);
}

#[test]
fn profile_form_from_profile() {
    let form = ProfileForm::from_profile(&Profile::new("A", "B"));
    assert_eq!(form.first_name, "A");
    assert_eq!(form.last_name, "B");
}
