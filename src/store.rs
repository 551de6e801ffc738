//! Defines the [`Store`] type and the logic for loading the fixture
//! collections from the content directory into memory. The store is built
//! once, up front, and handed to the presentation layer as a read-only
//! context object; nothing mutates it afterwards, so it can be shared
//! freely.
//!
//! Loading is type-checked but deliberately nothing more: the sample data
//! contains copy-paste duplicates (repeated albums, article ids reused
//! across years, a doubled gallery image) and they are preserved exactly
//! as declared. Deduplication would be a data-curation step outside this
//! crate.

use std::{fmt, fs, path::Path};

use serde::de::DeserializeOwned;

use crate::{
    album::{Album, Gallery},
    article::{Article, Timeline, TimelineYear, TimelineYearSource},
    comment::Comment,
    essay::Essay,
    friend::FriendLink,
};

/// The names of the six content documents, one per collection.
const ARTICLES: &str = "articles.yaml";
const ALBUMS: &str = "albums.yaml";
const ALBUM_IMAGES: &str = "album_images.yaml";
const COMMENTS: &str = "comments.yaml";
const ESSAYS: &str = "essays.yaml";
const FRIENDS: &str = "friends.yaml";

/// The immutable content store: every collection the presentation layer
/// reads, loaded from one content directory.
#[derive(Clone, Debug, Default)]
pub struct Store {
    /// Articles grouped into year buckets, most things flow through this.
    pub timeline: Timeline,

    /// The album cards, in declared order (duplicates included).
    pub albums: Vec<Album>,

    /// Album id → image list.
    pub gallery: Gallery,

    /// Top-level guestbook comments in floor order, replies nested.
    pub comments: Vec<Comment>,

    /// Diary-style essays, in declared order.
    pub essays: Vec<Essay>,

    /// The friend-link directory.
    pub friends: Vec<FriendLink>,
}

impl Store {
    /// Loads every collection from `content_directory`. Construction is
    /// the only fallible moment in the store's life; afterwards all access
    /// is infallible field reads.
    pub fn load(content_directory: &Path) -> Result<Store> {
        let years: Vec<TimelineYearSource> =
            read_document(content_directory, ARTICLES)?;
        Ok(Store {
            timeline: resolve_timeline(content_directory, years)?,
            albums: read_document(content_directory, ALBUMS)?,
            gallery: read_document(content_directory, ALBUM_IMAGES)?,
            comments: read_document(content_directory, COMMENTS)?,
            essays: read_document(content_directory, ESSAYS)?,
            friends: read_document(content_directory, FRIENDS)?,
        })
    }

    /// See [`Timeline::article_by_id`].
    pub fn article_by_id(&self, id: u64) -> Option<&Article> {
        self.timeline.article_by_id(id)
    }
}

/// Reads and deserializes one YAML content document, annotating any
/// failure with the document name.
fn read_document<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<T> {
    match _read_document(dir, file_name) {
        Ok(document) => Ok(document),
        Err(e) => Err(Error::Annotated(
            format!("loading content document `{}`", file_name),
            Box::new(e),
        )),
    }
}

fn _read_document<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<T> {
    Ok(serde_yaml::from_str(&fs::read_to_string(
        dir.join(file_name),
    )?)?)
}

/// Attaches article bodies: inline bodies pass through, `content_file`
/// references are read from the content directory. The year and article
/// order of the source document is preserved as-is.
fn resolve_timeline(
    dir: &Path,
    years: Vec<TimelineYearSource>,
) -> Result<Timeline> {
    let mut resolved = Vec::with_capacity(years.len());
    for year in years {
        let mut articles = Vec::with_capacity(year.articles.len());
        for source in year.articles {
            let content = match &source.content_file {
                Some(file) => fs::read_to_string(dir.join(file)).map_err(|e| {
                    Error::Annotated(
                        format!("loading article body `{}`", file),
                        Box::new(Error::Io(e)),
                    )
                })?,
                None => source.content.clone().unwrap_or_default(),
            };
            articles.push(source.into_article(content));
        }
        resolved.push(TimelineYear {
            year: year.year,
            articles,
        });
    }
    Ok(Timeline::new(resolved))
}

/// Represents the result of a store-loading operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading the content directory.
#[derive(Debug)]
pub enum Error {
    /// Returned when there was an error parsing a document as YAML.
    DeserializeYaml(serde_yaml::Error),

    /// Returned for I/O errors reading documents or article bodies.
    Io(std::io::Error),

    /// An error with an annotation.
    Annotated(String, Box<Error>),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DeserializeYaml(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
            Error::Annotated(annotation, err) => {
                write!(f, "{}: {}", &annotation, err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DeserializeYaml(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Annotated(_, err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts a [`serde_yaml::Error`] into an [`Error`]. It allows us to
    /// use the `?` operator for [`serde_yaml`] deserialization functions.
    fn from(err: serde_yaml::Error) -> Error {
        Error::DeserializeYaml(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts a [`std::io::Error`] into an [`Error`]. It allows us to
    /// use the `?` operator for fallible I/O functions.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_testdata() -> Result<()> {
        let store = Store::load(Path::new("./testdata/content/"))?;

        // The duplicate album entries must survive loading untouched.
        assert_eq!(store.albums.len(), 3);
        assert_eq!(store.albums[1], store.albums[2]);

        assert_eq!(store.gallery.len(), 2);
        assert_eq!(store.comments.len(), 2);
        assert_eq!(store.essays.len(), 2);
        assert_eq!(store.friends.len(), 4);

        // First-match semantics across the year buckets: id 12 exists in
        // 2025 and 2024, and the 2025 record wins.
        assert_eq!(
            store.article_by_id(12).unwrap().title,
            "Markdown语法测试集合"
        );
        assert!(store.article_by_id(99).is_none());
        Ok(())
    }

    #[test]
    fn test_load_resolves_content_file() -> Result<()> {
        let store = Store::load(Path::new("./testdata/content/"))?;
        let article = store.article_by_id(12).unwrap();
        assert!(article.content.contains("# Markdown"));

        // The inline body and the empty body load as written.
        assert!(store.article_by_id(1).unwrap().content.contains("云服务"));
        assert_eq!(store.article_by_id(3).unwrap().content, "");
        Ok(())
    }

    #[test]
    fn test_load_missing_directory() {
        let result = Store::load(Path::new("./testdata/no-such-content/"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_shipped_content() -> Result<()> {
        let store = Store::load(Path::new("./content/"))?;

        // The documented copy-paste duplicates in the shipped data.
        assert_eq!(store.albums.len(), 11);
        assert!(store
            .albums
            .iter()
            .skip(1)
            .all(|album| album.id == "urban"));
        let nature = store.gallery.get("nature").unwrap();
        assert_eq!(nature.images[0], nature.images[1]);

        // The concrete lookup scenario from the fixtures: the 2025 bucket
        // declares id 12 before the 2024 bucket does.
        assert_eq!(
            store.article_by_id(12).unwrap().title,
            "Markdown语法测试集合"
        );

        // Replies share their parent's floor. This is a property of the
        // data, not the types, so verify rather than assume.
        for comment in &store.comments {
            for reply in comment.replies() {
                assert_eq!(reply.floor, comment.floor);
            }
        }

        assert_eq!(store.comments.len(), 20);
        assert_eq!(store.essays.len(), 10);
        assert_eq!(store.friends.len(), 20);
        Ok(())
    }
}
