use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct SubscriberName(String);

impl SubscriberName {
    /// An absent or blank name is not an error: the subscriber simply has none.
    pub fn parse(s: Option<String>) -> Result<Option<Self>, String> {
        let s = match s {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Ok(None),
        };
        if s.graphemes(true).count() > 256 {
            Err("must be at most 256 characters long".to_string())
        } else {
            Ok(Some(Self(s)))
        }
    }
}

impl AsRef<str> for SubscriberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SubscriberName> for String {
    fn from(name: SubscriberName) -> Self {
        name.0
    }
}
