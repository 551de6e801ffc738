//! Defines the [`Article`], [`TimelineYear`], and [`Timeline`] types along
//! with the article lookup. Articles are grouped by publication year, and
//! the year buckets keep the order they were declared in — the lookup and
//! the flattened iteration both depend on that order being stable.

use crate::markdown;
use chrono::NaiveDate;
use serde::Deserialize;

/// A single blog article. Everything here is hand-authored fixture data;
/// in particular the optional fields really are absent (rather than empty)
/// for some records, and ids are *not* unique across year buckets.
#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub create_time: NaiveDate,
    pub update_time: NaiveDate,
    pub views: u32,

    /// Cover image path, resolved by the static-asset server. Never
    /// validated here.
    pub cover: String,

    /// The article body as markdown. May be empty.
    pub content: String,

    pub description: Option<String>,
    pub ai_summary: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
}

impl Article {
    /// Renders the markdown body to HTML. The raw markdown stays available
    /// in [`Article::content`] for consumers that run their own renderer.
    pub fn content_html(&self) -> String {
        markdown::to_html(&self.content)
    }
}

/// The on-disk form of an [`Article`]. The body is either inline
/// (`content`) or a relative path to a markdown file (`content_file`)
/// which the loader resolves against the content directory. When both are
/// missing the body is empty — the source data contains an intentionally
/// empty article.
#[derive(Clone, Deserialize)]
pub struct ArticleSource {
    pub id: u64,
    pub title: String,
    pub create_time: NaiveDate,
    pub update_time: NaiveDate,
    pub views: u32,
    pub cover: String,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub content_file: Option<String>,

    pub description: Option<String>,
    pub ai_summary: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
}

impl ArticleSource {
    /// Finishes loading by attaching the resolved body.
    pub fn into_article(self, content: String) -> Article {
        Article {
            id: self.id,
            title: self.title,
            create_time: self.create_time,
            update_time: self.update_time,
            views: self.views,
            cover: self.cover,
            content,
            description: self.description,
            ai_summary: self.ai_summary,
            tags: self.tags,
            category: self.category,
            author: self.author,
            license: self.license,
        }
    }
}

/// A year label paired with the articles published that year, in declared
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineYear {
    pub year: String,
    pub articles: Vec<Article>,
}

/// The on-disk form of a [`TimelineYear`].
#[derive(Clone, Deserialize)]
pub struct TimelineYearSource {
    pub year: String,
    pub articles: Vec<ArticleSource>,
}

/// The ordered sequence of year buckets. This is the only collection in
/// the store with an operation beyond field access: [`Timeline::article_by_id`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    years: Vec<TimelineYear>,
}

impl Timeline {
    pub fn new(years: Vec<TimelineYear>) -> Timeline {
        Timeline { years }
    }

    /// The year buckets in stored order.
    pub fn years(&self) -> &[TimelineYear] {
        &self.years
    }

    /// Iterates every article in (bucket order, within-bucket order). For
    /// a fixed timeline the order never changes, since nothing mutates the
    /// store after construction.
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.years.iter().flat_map(|year| year.articles.iter())
    }

    /// Returns the first article whose id equals `id`, scanning year
    /// buckets in stored order and articles within each bucket in stored
    /// order. Duplicate ids exist in the sample data, so "first match" is
    /// part of the contract, not an implementation detail. A missing id is
    /// an ordinary outcome for caller-supplied ids and comes back as
    /// `None`, never as an error.
    pub fn article_by_id(&self, id: u64) -> Option<&Article> {
        self.articles().find(|article| article.id == id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn article(id: u64, title: &str) -> Article {
        Article {
            id,
            title: title.to_owned(),
            create_time: NaiveDate::from_ymd(2025, 1, 14),
            update_time: NaiveDate::from_ymd(2025, 1, 14),
            views: 0,
            cover: String::from("/articles/cover/1.jpg"),
            content: String::new(),
            description: None,
            ai_summary: None,
            tags: None,
            category: None,
            author: None,
            license: None,
        }
    }

    fn fixture() -> Timeline {
        Timeline::new(vec![
            TimelineYear {
                year: String::from("2025"),
                articles: vec![
                    article(1, "one"),
                    article(2, "two"),
                    article(12, "Markdown语法测试集合"),
                ],
            },
            TimelineYear {
                year: String::from("2024"),
                articles: vec![article(12, "older twelve"), article(3, "three")],
            },
        ])
    }

    #[test]
    fn test_article_by_id_present() {
        let timeline = fixture();
        for id in &[1, 2, 3, 12] {
            assert_eq!(timeline.article_by_id(*id).unwrap().id, *id);
        }
    }

    #[test]
    fn test_article_by_id_absent() {
        assert!(fixture().article_by_id(99).is_none());
    }

    #[test]
    fn test_article_by_id_first_match() {
        // Id 12 appears in both the 2025 and 2024 buckets; the 2025 record
        // is declared first and must win.
        let timeline = fixture();
        let found = timeline.article_by_id(12).unwrap();
        assert_eq!(found.title, "Markdown语法测试集合");
    }

    #[test]
    fn test_articles_order_stable() {
        let timeline = fixture();
        let first: Vec<u64> = timeline.articles().map(|a| a.id).collect();
        let second: Vec<u64> = timeline.articles().map(|a| a.id).collect();
        assert_eq!(first, vec![1, 2, 12, 12, 3]);
        assert_eq!(first, second);
    }
}
