//! Defines the [`FriendLink`] directory entry and its closed [`Category`]
//! enum. The directory page groups links by category and also offers an
//! "all" filter, so the display labels live here alongside the variants.

use serde::Deserialize;
use url::Url;

/// The label for the directory's "show everything" filter, which isn't a
/// category any entry can carry.
pub const ALL_LABEL: &str = "全部";

/// Relationship tag on a friend link. Closed on purpose: an entry outside
/// this set is a fixture mistake and fails deserialization instead of
/// falling back to some default bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bigshot,
    Close,
    Friend,
    Tech,
}

impl Category {
    /// Every category, in the order the directory page shows them.
    pub const ALL: [Category; 4] = [
        Category::Bigshot,
        Category::Close,
        Category::Friend,
        Category::Tech,
    ];

    /// The display label for the category heading.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Bigshot => "大佬",
            Category::Close => "密友",
            Category::Friend => "普通朋友",
            Category::Tech => "官方技术博客",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FriendLink {
    pub avatar: String,
    pub cover: String,
    pub name: String,
    pub description: String,

    /// The link target. Unlike the asset paths this is a real absolute
    /// URL, so it gets parsed as one.
    pub url: Url,

    /// Entrance-animation delay label (e.g. `10ms`), passed through to the
    /// page as-is.
    pub delay: Option<String>,

    pub category: Category,
}
