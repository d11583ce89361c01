//! Input validation for tournament and player data.
//!
//! All checks run before any database work, so an invalid request never
//! opens a transaction.

use super::errors::{RegistrationError, RegistrationResult};

/// Validate a tournament name: trimmed, 3-100 characters.
///
/// Returns the trimmed name.
pub fn validate_tournament_name(name: &str) -> RegistrationResult<String> {
    let name = name.trim();
    let len = name.chars().count();
    if len < 3 {
        return Err(RegistrationError::InvalidInput(
            "Tournament name must be at least 3 characters long".to_string(),
        ));
    }
    if len > 100 {
        return Err(RegistrationError::InvalidInput(
            "Tournament name cannot exceed 100 characters".to_string(),
        ));
    }
    Ok(name.to_string())
}

/// Validate a player name: trimmed, 2-100 characters.
///
/// Returns the trimmed name.
pub fn validate_player_name(name: &str) -> RegistrationResult<String> {
    let name = name.trim();
    let len = name.chars().count();
    if len < 2 {
        return Err(RegistrationError::InvalidInput(
            "Player name must be at least 2 characters long".to_string(),
        ));
    }
    if len > 100 {
        return Err(RegistrationError::InvalidInput(
            "Player name cannot exceed 100 characters".to_string(),
        ));
    }
    Ok(name.to_string())
}

/// Validate email syntax and normalize to lowercase.
///
/// The returned form is what gets stored and what the per-tournament
/// uniqueness constraint is defined on, so `Alice@X.com` and `alice@x.com`
/// collide.
pub fn normalize_email(email: &str) -> RegistrationResult<String> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(RegistrationError::InvalidInput(format!(
            "Invalid email address: {email}"
        )));
    }
    Ok(email.to_lowercase())
}

/// Basic email syntax validation: exactly one `@`, non-empty local and
/// domain parts, a dotted domain, and a conservative character set.
fn is_valid_email(email: &str) -> bool {
    if email.len() < 3 || email.len() > 255 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    // Domain must be dotted, with non-empty labels
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return false;
    }

    let valid_local = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-' | '+' | '_');
    let valid_domain = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-');

    local.chars().all(valid_local) && domain.chars().all(valid_domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tournament_name_trimmed() {
        assert_eq!(
            validate_tournament_name("  Weekend Cup  ").unwrap(),
            "Weekend Cup"
        );
    }

    #[test]
    fn test_tournament_name_too_short() {
        assert!(validate_tournament_name("ab").is_err());
        // Whitespace doesn't count toward the minimum
        assert!(validate_tournament_name("  ab   ").is_err());
        assert!(validate_tournament_name("abc").is_ok());
    }

    #[test]
    fn test_tournament_name_too_long() {
        assert!(validate_tournament_name(&"x".repeat(100)).is_ok());
        assert!(validate_tournament_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_player_name_bounds() {
        assert!(validate_player_name("A").is_err());
        assert_eq!(validate_player_name(" Al ").unwrap(), "Al");
        assert!(validate_player_name(&"x".repeat(100)).is_ok());
        assert!(validate_player_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@subdomain.example.com"));
        assert!(is_valid_email("user-name@example.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b")); // No dot in domain
        assert!(!is_valid_email(&format!("{}@example.com", "a".repeat(250))));
    }

    #[test]
    fn test_normalize_email_lowercases() {
        assert_eq!(
            normalize_email("Alice@X.Com").unwrap(),
            "alice@x.com".to_string()
        );
    }

    #[test]
    fn test_normalize_email_rejects_invalid() {
        assert!(normalize_email("not-an-email").is_err());
    }

    proptest! {
        #[test]
        fn prop_normalized_email_is_lowercase_and_idempotent(
            local in "[a-zA-Z0-9]{1,16}",
            domain in "[a-zA-Z0-9]{1,12}",
            tld in "[a-zA-Z]{2,6}",
        ) {
            let email = format!("{local}@{domain}.{tld}");
            let normalized = normalize_email(&email).unwrap();
            prop_assert_eq!(&normalized, &email.to_lowercase());
            prop_assert_eq!(normalize_email(&normalized).unwrap(), normalized);
        }

        #[test]
        fn prop_player_name_trims_surrounding_whitespace(
            name in "[a-zA-Z]{2,40}",
            left in " {0,4}",
            right in " {0,4}",
        ) {
            let padded = format!("{left}{name}{right}");
            prop_assert_eq!(validate_player_name(&padded).unwrap(), name);
        }
    }
}
