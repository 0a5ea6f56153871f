//! In-memory tag index with usage-ranked queries
//!
//! Tags are linked to articles; a tag's usage count is the number of articles
//! linked to it. Tags stay in the index when their usage drops to zero.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::future::{self, Future};

use super::{FetchError, SuggestionService};
use crate::autocomplete::DEFAULT_MAX_SUGGESTIONS;
use crate::tokenizer::parse_tags;

pub type ArticleId = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    /// Tag name to usage count
    usage: BTreeMap<String, usize>,
    /// Article to linked tag names
    articles: HashMap<ArticleId, BTreeSet<String>>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.usage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usage.is_empty()
    }

    /// Number of articles linked to `name` (0 for unknown tags)
    pub fn usage(&self, name: &str) -> usize {
        self.usage.get(name).copied().unwrap_or(0)
    }

    /// Tags linked to `article_id`, in name order
    pub fn article_tags(&self, article_id: ArticleId) -> Vec<&str> {
        self.articles
            .get(&article_id)
            .map(|tags| tags.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Register a tag without linking it to any article
    ///
    /// Returns false for blank names and tags already present.
    pub fn insert_tag(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.usage.contains_key(name) {
            return false;
        }
        self.usage.insert(name.to_string(), 0);
        true
    }

    /// Replace an article's tag links with the tags in `tags_string`
    ///
    /// The string is split on `,`, trimmed and emptied of blanks. Unknown tags
    /// are created; each tag is linked once. Returns the linked tags in input
    /// order.
    pub fn process_tags(&mut self, article_id: ArticleId, tags_string: &str) -> Vec<String> {
        let tags = parse_tags(tags_string);
        log::debug!("article {}: linking tags {:?}", article_id, tags);
        self.set_article_tags(article_id, &tags);
        tags
    }

    /// Replace an article's tag links with `tags`
    pub fn set_article_tags<S: AsRef<str>>(&mut self, article_id: ArticleId, tags: &[S]) {
        self.remove_article(article_id);

        let linked: BTreeSet<String> = tags
            .iter()
            .map(|tag| tag.as_ref().trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        if linked.is_empty() {
            return;
        }

        for tag in &linked {
            *self.usage.entry(tag.clone()).or_insert(0) += 1;
        }
        self.articles.insert(article_id, linked);
    }

    /// Drop every tag link of `article_id`
    ///
    /// Returns false when the article had no links.
    pub fn remove_article(&mut self, article_id: ArticleId) -> bool {
        let Some(old) = self.articles.remove(&article_id) else {
            return false;
        };
        for tag in old {
            if let Some(count) = self.usage.get_mut(&tag) {
                *count = count.saturating_sub(1);
            }
        }
        true
    }

    /// Ranked tag names for `keyword`, at most `limit` of them
    ///
    /// The keyword is trimmed. Empty matches every tag; otherwise a tag
    /// matches when it contains the keyword, ignoring case. Results are
    /// ordered by usage descending, then name ascending.
    pub fn query(&self, keyword: &str, limit: usize) -> Vec<String> {
        let keyword = keyword.trim().to_lowercase();

        let mut ranked: Vec<(&String, usize)> = self
            .usage
            .iter()
            .filter(|(name, _)| keyword.is_empty() || name.to_lowercase().contains(&keyword))
            .map(|(name, count)| (name, *count))
            .collect();

        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        ranked
            .into_iter()
            .take(limit)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// [`TagIndex`] served as a suggestion source
#[derive(Debug, Clone)]
pub struct LocalSuggestions {
    index: TagIndex,
    limit: usize,
}

impl LocalSuggestions {
    pub fn new(index: TagIndex, limit: usize) -> Self {
        Self { index, limit }
    }

    pub fn query(&self, keyword: &str) -> Vec<String> {
        self.index.query(keyword, self.limit)
    }
}

impl From<TagIndex> for LocalSuggestions {
    fn from(index: TagIndex) -> Self {
        Self::new(index, DEFAULT_MAX_SUGGESTIONS)
    }
}

impl SuggestionService for LocalSuggestions {
    fn suggest(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send {
        future::ready(Ok(self.query(keyword)))
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod index_tests;
