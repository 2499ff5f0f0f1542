//! Field Validation
//!
//! Client-side checks run before any network call. The first failing check
//! wins and its message is rendered inline as-is. The backend remains the
//! authority on final acceptance.

use std::sync::OnceLock;

use regex::Regex;

static LOGIN_EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static REGISTER_EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn login_email_re() -> &'static Regex {
    LOGIN_EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

// Looser than the login pattern: an unanchored search, as on the original form
fn register_email_re() -> &'static Regex {
    REGISTER_EMAIL_RE.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").unwrap())
}

fn username_re() -> &'static Regex {
    USERNAME_RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap())
}

/// Validate the login form
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required.".to_string());
    }
    if !login_email_re().is_match(email) {
        return Err("Please enter a valid email.".to_string());
    }
    if password.is_empty() {
        return Err("Password is required.".to_string());
    }
    Ok(())
}

/// Validate the registration form
pub fn validate_registration(username: &str, email: &str, password: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username is required".to_string());
    }
    let username_len = username.chars().count();
    if !(3..=50).contains(&username_len) {
        return Err("Username must be between 3 and 50 characters".to_string());
    }
    if !username_re().is_match(username) {
        return Err("Username must only contain letters and numbers".to_string());
    }

    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if !register_email_re().is_match(email) {
        return Err("Invalid email address".to_string());
    }

    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    let password_len = password.chars().count();
    if !(8..=72).contains(&password_len) {
        return Err("Password must be between 8 and 72 characters".to_string());
    }
    Ok(())
}

/// Validate a task draft before create/update
pub fn validate_task_draft(title: &str, description: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required.".to_string());
    }
    if title.chars().count() > 255 {
        return Err("Title must not exceed 255 characters.".to_string());
    }
    if description.chars().count() > 5000 {
        return Err("Description must not exceed 5000 characters.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_accepts_valid_input() {
        assert_eq!(validate_login("a@b.com", "secret1"), Ok(()));
    }

    #[test]
    fn test_login_rejections_in_order() {
        assert_eq!(validate_login("", "pw"), Err("Email is required.".to_string()));
        assert_eq!(
            validate_login("not-an-email", "pw"),
            Err("Please enter a valid email.".to_string())
        );
        assert_eq!(
            validate_login("a@b.com", ""),
            Err("Password is required.".to_string())
        );
        // Empty email reports the missing field, not the format
        assert_eq!(validate_login("", ""), Err("Email is required.".to_string()));
    }

    #[test]
    fn test_login_email_pattern_is_anchored() {
        // The login pattern must match the whole field
        assert!(validate_login("a b@c.d", "pw").is_err());
        assert!(validate_login("a@b@c.d", "pw").is_err());
        assert!(validate_login("a@b.c", "pw").is_ok());
    }

    #[test]
    fn test_registration_accepts_valid_input() {
        assert_eq!(
            validate_registration("user1", "a@b.com", "longenough"),
            Ok(())
        );
    }

    #[test]
    fn test_registration_username_bounds() {
        assert_eq!(
            validate_registration("", "a@b.com", "longenough"),
            Err("Username is required".to_string())
        );
        assert_eq!(
            validate_registration("ab", "a@b.com", "longenough"),
            Err("Username must be between 3 and 50 characters".to_string())
        );
        assert!(validate_registration("abc", "a@b.com", "longenough").is_ok());
        assert!(validate_registration(&"a".repeat(50), "a@b.com", "longenough").is_ok());
        assert_eq!(
            validate_registration(&"a".repeat(51), "a@b.com", "longenough"),
            Err("Username must be between 3 and 50 characters".to_string())
        );
    }

    #[test]
    fn test_registration_username_alphanumeric_only() {
        assert_eq!(
            validate_registration("user_1", "a@b.com", "longenough"),
            Err("Username must only contain letters and numbers".to_string())
        );
        assert!(validate_registration("User1", "a@b.com", "longenough").is_ok());
    }

    #[test]
    fn test_registration_email_pattern_is_a_search() {
        assert_eq!(
            validate_registration("user1", "", "longenough"),
            Err("Email is required".to_string())
        );
        assert_eq!(
            validate_registration("user1", "nope", "longenough"),
            Err("Invalid email address".to_string())
        );
        // Unlike the login pattern, a matching substring is enough here
        assert!(validate_registration("user1", "a b@c.d", "longenough").is_ok());
    }

    #[test]
    fn test_registration_password_bounds() {
        assert_eq!(
            validate_registration("user1", "a@b.com", ""),
            Err("Password is required".to_string())
        );
        assert_eq!(
            validate_registration("user1", "a@b.com", "short77"),
            Err("Password must be between 8 and 72 characters".to_string())
        );
        assert!(validate_registration("user1", "a@b.com", &"p".repeat(8)).is_ok());
        assert!(validate_registration("user1", "a@b.com", &"p".repeat(72)).is_ok());
        assert_eq!(
            validate_registration("user1", "a@b.com", &"p".repeat(73)),
            Err("Password must be between 8 and 72 characters".to_string())
        );
    }

    #[test]
    fn test_task_draft_title_required_after_trim() {
        assert_eq!(
            validate_task_draft("", ""),
            Err("Title is required.".to_string())
        );
        assert_eq!(
            validate_task_draft("   ", "whatever"),
            Err("Title is required.".to_string())
        );
        assert!(validate_task_draft("Buy milk", "").is_ok());
    }

    #[test]
    fn test_task_draft_length_limits() {
        assert!(validate_task_draft(&"t".repeat(255), "").is_ok());
        assert_eq!(
            validate_task_draft(&"t".repeat(256), ""),
            Err("Title must not exceed 255 characters.".to_string())
        );
        assert!(validate_task_draft("ok", &"d".repeat(5000)).is_ok());
        assert_eq!(
            validate_task_draft("ok", &"d".repeat(5001)),
            Err("Description must not exceed 5000 characters.".to_string())
        );
    }
}
