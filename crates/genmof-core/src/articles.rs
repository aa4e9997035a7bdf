//! Literature attached to a playground session.
//!
//! Only descriptors are kept (name, byte size, MIME type); file contents are
//! never parsed or stored.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleInfo {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl ArticleInfo {
    /// Size in kB rounded to one decimal, as shown on the article card.
    pub fn size_kb(&self) -> f64 {
        (self.size as f64 / 1024.0 * 10.0).round() / 10.0
    }
}

/// Ordered, append-only list of uploads for one session.
/// Two uploads with the same name and size count as the same article.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticleStore {
    articles: Vec<ArticleInfo>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when an article with the same (name, size) is already listed.
    pub fn add(&mut self, name: &str, size: u64, mime_type: &str) -> bool {
        if self.contains(name, size) {
            return false;
        }
        self.articles.push(ArticleInfo {
            name: name.to_string(),
            size,
            mime_type: mime_type.to_string(),
        });
        true
    }

    pub fn contains(&self, name: &str, size: u64) -> bool {
        self.articles.iter().any(|a| a.name == name && a.size == size)
    }

    pub fn list(&self) -> &[ArticleInfo] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Fallback MIME type for uploads whose client sent none.
pub fn guess_mime_type(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
