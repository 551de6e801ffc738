//! Defines the [`Tag`] type and the tag → articles index. Article tags
//! are free-form labels in the content files; the index groups them under
//! slugified names so e.g. `CSS` and `css` resolve to the same tag page.

use crate::article::{Article, Timeline};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// A slugified article tag. The original label is kept for display; the
/// slug identifies the tag everywhere else.
#[derive(Clone, Debug)]
pub struct Tag {
    /// The label exactly as written in the content file.
    pub label: String,

    /// The slugified name. Comparisons, hashing, and ordering all go
    /// through this field, so two labels that slugify identically are the
    /// same tag.
    pub slug: String,
}

impl Tag {
    pub fn new(label: &str) -> Tag {
        Tag {
            label: label.to_owned(),
            slug: slug::slugify(label),
        }
    }
}

impl Hash for Tag {
    /// Implements [`Hash`] for [`Tag`] by delegating directly to the
    /// `slug` field.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slug.hash(state)
    }
}

impl PartialEq for Tag {
    /// Implements [`PartialEq`] and [`Eq`] for [`Tag`] by delegating
    /// directly to the `slug` field.
    fn eq(&self, other: &Self) -> bool {
        self.slug == other.slug
    }
}
impl Eq for Tag {}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    /// Implements [`Ord`] for [`Tag`] by delegating directly to the
    /// `slug` field, consistent with [`PartialEq`].
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.slug.cmp(&other.slug)
    }
}

/// Groups every tagged article by tag. Within a tag, articles keep the
/// timeline's stored order (bucket order, then within-bucket order);
/// across tags the index iterates in slug order, so the result is
/// deterministic for a fixed timeline. Untagged articles (tags absent or
/// empty — the data distinguishes the two, this index doesn't need to)
/// simply appear in no group.
pub fn index_articles(timeline: &Timeline) -> BTreeMap<Tag, Vec<&Article>> {
    let mut index: BTreeMap<Tag, Vec<&Article>> = BTreeMap::new();
    for article in timeline.articles() {
        if let Some(tags) = &article.tags {
            for label in tags {
                index.entry(Tag::new(label)).or_default().push(article);
            }
        }
    }
    index
}
