//! Tag catalog file loading
//!
//! A catalog is a JSON snapshot of tags and article tag strings:
//!
//! ```json
//! {
//!   "tags": ["draft"],
//!   "articles": [
//!     { "id": 1, "tags": "PHP, Web" },
//!     { "id": 2, "tags": ["Python", "Web"] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::index::{ArticleId, TagIndex};
use crate::error::TagError;

#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    /// Tags known without any article
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub articles: Vec<CatalogArticle>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogArticle {
    pub id: ArticleId,
    pub tags: ArticleTags,
}

/// Article tags as typed into the form, or already split
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ArticleTags {
    Joined(String),
    List(Vec<String>),
}

impl CatalogFile {
    pub fn into_index(self) -> TagIndex {
        let mut index = TagIndex::new();
        for tag in &self.tags {
            index.insert_tag(tag);
        }
        for article in self.articles {
            match article.tags {
                ArticleTags::Joined(joined) => {
                    index.process_tags(article.id, &joined);
                }
                ArticleTags::List(list) => index.set_article_tags(article.id, &list),
            }
        }
        index
    }
}

pub fn parse_catalog(content: &str) -> Result<TagIndex, TagError> {
    let catalog: CatalogFile =
        serde_json::from_str(content).map_err(|e| TagError::Catalog(e.to_string()))?;
    Ok(catalog.into_index())
}

pub fn load_catalog(path: &Path) -> Result<TagIndex, TagError> {
    let content = fs::read_to_string(path)
        .map_err(|e| TagError::Catalog(format!("{}: {}", path.display(), e)))?;
    parse_catalog(&content)
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
