/// Address a reviewer left with their review. Never shown on the site and only
/// checked for presence.
#[derive(Debug, Clone)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("must not be empty".to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ContactEmail> for String {
    fn from(email: ContactEmail) -> Self {
        email.0
    }
}
