use std::{fmt, str::FromStr};
use thiserror::Error;

/// A bcrypt hashed password.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Password(String);

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The password must be at least {} characters", Password::min_len())]
    TooShort,
    #[error("The password must contain an uppercase letter")]
    MissingUppercase,
    #[error("The password must contain a lowercase letter")]
    MissingLowercase,
    #[error("The password must contain a number")]
    MissingDigit,
    #[error("The password must contain a non alphanumeric character")]
    MissingSymbol,
    #[error(transparent)]
    Hash(#[from] pwhash::error::Error),
}

impl Password {
    pub const fn min_len() -> usize {
        6
    }

    pub fn verify(&self, password: &str) -> bool {
        pwhash::bcrypt::verify(password, &self.0)
    }

    fn check_rules(password: &str) -> Result<(), ParseError> {
        if password.chars().count() < Self::min_len() {
            return Err(ParseError::TooShort);
        }
        if !password.chars().any(char::is_uppercase) {
            return Err(ParseError::MissingUppercase);
        }
        if !password.chars().any(char::is_lowercase) {
            return Err(ParseError::MissingLowercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(ParseError::MissingDigit);
        }
        if password.chars().all(char::is_alphanumeric) {
            return Err(ParseError::MissingSymbol);
        }
        Ok(())
    }
}

// Hashes are loaded from the database as they are.
impl From<String> for Password {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Password {
    type Err = ParseError;

    fn from_str(password: &str) -> Result<Self, Self::Err> {
        Self::check_rules(password)?;
        let res = Self(pwhash::bcrypt::hash(password)?);
        debug_assert!(res.verify(password));
        Ok(res)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}
