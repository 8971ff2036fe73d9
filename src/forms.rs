//! Form input checks run before anything reaches the pipeline.
//!
//! The pipeline forwards credentials untouched, so these are the only shape
//! checks on user input.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::profile::Profile;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;

/// `local@host.tld`: no whitespace, one `@`, dot-separated host labels, and a
/// top-level label of two or more characters.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)*\.[^\s@.]{2,}$";

static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        tracing::error!(error = %e, "email pattern failed to compile; every email will be rejected");
        None
    }
});

/// One failed field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Sign-in form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    /// Check email shape and password length, reporting every failure.
    ///
    /// # Errors
    ///
    /// Returns the list of failed fields.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if !is_email(self.email.trim()) {
            errors.push(FieldError::new("email", "Enter a valid email address."));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError::new(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters."),
            ));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Edit-name form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
}

impl ProfileForm {
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self { first_name: profile.first_name.clone(), last_name: profile.last_name.clone() }
    }

    /// Check both names and return the trimmed profile.
    ///
    /// # Errors
    ///
    /// Returns the list of failed fields.
    pub fn validate(&self) -> Result<Profile, Vec<FieldError>> {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        let mut errors = Vec::new();
        if first.chars().count() < MIN_NAME_LEN {
            errors.push(FieldError::new(
                "firstName",
                format!("First name must be at least {MIN_NAME_LEN} characters."),
            ));
        }
        if last.chars().count() < MIN_NAME_LEN {
            errors.push(FieldError::new(
                "lastName",
                format!("Last name must be at least {MIN_NAME_LEN} characters."),
            ));
        }
        if errors.is_empty() { Ok(Profile::new(first, last)) } else { Err(errors) }
    }
}

/// `local@domain.tld` with no whitespace and a dotted domain.
fn is_email(raw: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(raw))
}
