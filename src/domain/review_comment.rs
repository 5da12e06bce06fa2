#[derive(Debug, Clone)]
pub struct ReviewComment(String);

impl ReviewComment {
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            Err("must not be empty".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ReviewComment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ReviewComment> for String {
    fn from(comment: ReviewComment) -> Self {
        comment.0
    }
}
