//! Mock sign-in against a fixed credential table.

use thiserror::Error;

/// Simulated round trip before the credential check resolves.
pub const LOGIN_DELAY_MS: u64 = 2_000;

const CREDENTIALS: [(&str, &str, AccountRole); 3] = [
    ("landlord@propertyconnect.com", "landlord123", AccountRole::Landlord),
    ("tenant@propertyconnect.com", "tenant123", AccountRole::Tenant),
    ("admin@propertyconnect.com", "admin123", AccountRole::Admin),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    Landlord,
    Tenant,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Invalid credentials. Please check your email and password.")]
    InvalidCredentials,
}

/// Checks that run before the simulated delay.
pub fn validate_form(email: &str, password: &str) -> Result<(), LoginError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(LoginError::MissingFields);
    }
    Ok(())
}

pub fn authenticate(email: &str, password: &str) -> Result<AccountRole, LoginError> {
    validate_form(email, password)?;
    let email = email.trim();
    CREDENTIALS
        .iter()
        .find(|(known_email, known_password, _)| *known_email == email && *known_password == password)
        .map(|(_, _, role)| *role)
        .ok_or(LoginError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_accounts_sign_in() {
        assert_eq!(
            authenticate("tenant@propertyconnect.com", "tenant123"),
            Ok(AccountRole::Tenant)
        );
        assert_eq!(
            authenticate("  landlord@propertyconnect.com ", "landlord123"),
            Ok(AccountRole::Landlord)
        );
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert_eq!(
            authenticate("admin@propertyconnect.com", "tenant123"),
            Err(LoginError::InvalidCredentials)
        );
        assert_eq!(
            authenticate("someone@else.com", "admin123"),
            Err(LoginError::InvalidCredentials)
        );
    }

    #[test]
    fn empty_fields_fail_fast() {
        assert_eq!(validate_form("", "x"), Err(LoginError::MissingFields));
        assert_eq!(validate_form("a@b.c", ""), Err(LoginError::MissingFields));
        assert_eq!(
            LoginError::MissingFields.to_string(),
            "Please fill in all fields"
        );
    }
}
