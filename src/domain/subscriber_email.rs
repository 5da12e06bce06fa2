use validator::validate_email;

/// Address on the mailing list. Unlike the contact address on a review this one
/// gets mail sent to it, so it has to look like a real address.
#[derive(Debug, Clone)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("must not be empty".to_string());
        }
        if validate_email(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err("must be a valid email address".to_string())
        }
    }

    /// Two addresses differing only in letter case reach the same inbox.
    pub fn uniqueness_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
