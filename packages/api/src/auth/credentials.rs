//! Email + password form validation shared by the login and registration views.

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Invalid Email")]
    InvalidEmail,
    #[error("Password Too Short")]
    PasswordTooShort,
}

/// Validated credentials. The email is trimmed and lowercased.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn parse(email: &str, password: &str) -> Result<Self, CredentialsError> {
        let email = email.trim().to_lowercase();
        if !looks_like_email(&email) {
            return Err(CredentialsError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialsError::PasswordTooShort);
        }
        Ok(Self {
            email,
            password: password.to_string(),
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
