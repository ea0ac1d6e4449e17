use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self(address)
    }
    pub fn into_string(self) -> String {
        self.0
    }
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid E-Mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        // Display names like `"Bob" <bob@example.com>` are stripped off,
        // only the plain address is kept as the login name.
        let info = mailparse::addrparse(s)
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        Ok(Self(info.addr.to_lowercase()))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_and_named_addresses() {
        let email = "bob@test.com".parse::<EmailAddress>().unwrap();
        assert_eq!("bob@test.com", email.as_str());
        let email = r#""Bob" <Bob@Test.com>"#.parse::<EmailAddress>().unwrap();
        assert_eq!("bob@test.com", email.as_str());
    }

    #[test]
    fn reject_garbage() {
        assert!("".parse::<EmailAddress>().is_err());
        assert!("a@b.c, d@e.f".parse::<EmailAddress>().is_err());
    }
}
