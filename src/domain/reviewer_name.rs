use unicode_segmentation::UnicodeSegmentation;

const MAX_GRAPHEMES: usize = 256;

/// Display name printed next to a review. "Anonymous" is a perfectly good one.
#[derive(Debug, Clone)]
pub struct ReviewerName(String);

impl ReviewerName {
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("must not be empty".to_string());
        }
        if s.graphemes(true).count() > MAX_GRAPHEMES {
            return Err(format!("must be at most {} characters long", MAX_GRAPHEMES));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ReviewerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ReviewerName> for String {
    fn from(name: ReviewerName) -> Self {
        name.0
    }
}
