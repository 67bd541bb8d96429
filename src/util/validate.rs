//! Synchronous form checks, applied before any network call.
//!
//! ERROR HANDLING
//! ==============
//! Each check returns the cleaned-up values or a fixed message for inline
//! display. A failed check blocks submission entirely; the backend never
//! sees the request.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum password length for new accounts.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate the login form: both fields present, email trimmed.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Validate the registration form. Returns `(name, email, password)`.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

/// Validate the partner onboarding form. Returns
/// `(company_name, registration_number, phone)`.
pub fn validate_company_profile(
    company_name: &str,
    registration_number: &str,
    phone: &str,
) -> Result<(String, String, String), &'static str> {
    let company_name = company_name.trim();
    if company_name.is_empty() {
        return Err("Enter your company name.");
    }
    let registration_number = registration_number.trim();
    if registration_number.is_empty() {
        return Err("Enter your company registration number.");
    }
    Ok((
        company_name.to_owned(),
        registration_number.to_owned(),
        phone.trim().to_owned(),
    ))
}
