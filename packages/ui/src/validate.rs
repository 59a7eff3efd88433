//! Form checks run before any remote call. Each returns the message shown in
//! the page's alert region.

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn required(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{label} is required"));
    }
    Ok(())
}

pub fn email(value: &str) -> Result<(), String> {
    let value = value.trim();
    match value.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err("Please enter a valid email".to_string()),
    }
}

pub fn sign_in(email_value: &str, password: &str) -> Result<(), String> {
    email(email_value)?;
    required("Password", password)
}

pub fn sign_up(name: &str, email_value: &str, password: &str, confirm: &str) -> Result<(), String> {
    required("Name", name)?;
    email(email_value)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

/// A positive whole number, e.g. a section count.
pub fn positive_count(label: &str, value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{label} must be a positive number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(required("Name", "Rust").is_ok());
        assert_eq!(required("Name", "   "), Err("Name is required".to_string()));
    }

    #[test]
    fn test_email() {
        assert!(email("ada@example.com").is_ok());
        assert!(email("ada").is_err());
        assert!(email("@example.com").is_err());
        assert!(email("ada@").is_err());
    }

    #[test]
    fn test_sign_up_rules() {
        assert!(sign_up("Ada", "ada@example.com", "password1", "password1").is_ok());
        assert_eq!(
            sign_up("", "ada@example.com", "password1", "password1"),
            Err("Name is required".to_string())
        );
        assert_eq!(
            sign_up("Ada", "ada@example.com", "short", "short"),
            Err("Password must be at least 8 characters".to_string())
        );
        assert_eq!(
            sign_up("Ada", "ada@example.com", "password1", "password2"),
            Err("Passwords do not match".to_string())
        );
    }

    #[test]
    fn test_sign_in_needs_password() {
        assert_eq!(
            sign_in("ada@example.com", ""),
            Err("Password is required".to_string())
        );
    }

    #[test]
    fn test_positive_count() {
        assert_eq!(positive_count("Sections", " 12 "), Ok(12));
        assert!(positive_count("Sections", "0").is_err());
        assert!(positive_count("Sections", "-3").is_err());
        assert!(positive_count("Sections", "ten").is_err());
    }
}
