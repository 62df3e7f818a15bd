use chrono::{DateTime, Utc};

/// Visible text of one article teaser on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teaser {
    pub text: String,
}

impl Teaser {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One entry of an Atom or RSS feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub published: Option<DateTime<Utc>>,
}
