//! Support for creating an Atom feed from the article timeline.

use crate::article::{Article, Timeline};
use crate::config::Author;
use atom_syndication::{Entry, Error as AtomError, Feed, Link, Person};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::fmt;
use std::io::Write;
use url::Url;

/// Bundled configuration for creating a feed.
pub struct FeedConfig {
    pub title: String,
    pub id: String,
    pub author: Option<Author>,
    pub home_page: Url,
}

/// Creates a feed from some configuration ([`FeedConfig`]) and the
/// [`Timeline`] and writes the result to a [`std::io::Write`]. This
/// function takes ownership of the provided [`FeedConfig`]. Entries come
/// out in the timeline's stored order, one per article — including the
/// duplicate-id records, which are distinct entries as far as the feed is
/// concerned.
pub fn write_feed<W: Write>(config: FeedConfig, timeline: &Timeline, w: W) -> Result<()> {
    feed(config, timeline)?.write_to(w)?;
    Ok(())
}

fn feed(config: FeedConfig, timeline: &Timeline) -> Result<Feed> {
    Ok(Feed {
        entries: feed_entries(&config, timeline)?,
        title: config.title.into(),
        id: config.id,
        updated: FixedOffset::east(0).from_utc_datetime(&Utc::now().naive_utc()),
        authors: author_to_people(config.author),
        categories: Vec::new(),
        contributors: Vec::new(),
        generator: None,
        icon: None,
        logo: None,
        rights: None,
        subtitle: None,
        base: None,
        lang: None,
        extensions: Default::default(),
        namespaces: Default::default(),
        links: vec![Link {
            href: config.home_page.to_string(),
            rel: "alternate".to_string(),
            title: None,
            hreflang: None,
            mime_type: None,
            length: None,
        }],
    })
}

fn feed_entries(config: &FeedConfig, timeline: &Timeline) -> Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = Vec::new();

    for article in timeline.articles() {
        let url = article_url(&config.home_page, article)?;

        entries.push(Entry {
            id: url.to_string(),
            title: article.title.clone().into(),
            updated: date_to_utc(article.update_time),
            authors: author_to_people(config.author.clone()),
            links: vec![Link {
                href: url.to_string(),
                rel: "alternate".to_owned(),
                title: None,
                mime_type: None,
                hreflang: None,
                length: None,
            }],
            rights: article.license.clone().map(Into::into),
            summary: article
                .description
                .clone()
                .or_else(|| article.ai_summary.clone())
                .map(Into::into),
            categories: Vec::new(),
            contributors: Vec::new(),
            published: Some(date_to_utc(article.create_time)),
            source: None,
            content: None,
            extensions: Default::default(),
        })
    }
    Ok(entries)
}

/// The canonical page URL for an article, `{home_page}articles/{id}.html`.
/// Duplicate ids collapse to the same URL, faithfully mirroring the site,
/// where the later records are unreachable.
fn article_url(home_page: &Url, article: &Article) -> Result<Url> {
    Ok(home_page.join(&format!("articles/{}.html", article.id))?)
}

/// Fixture dates carry no time or zone, so entries get midnight UTC. The
/// chrono ceremony mirrors the precision we actually have; anything
/// fancier would be inventing data.
fn date_to_utc(date: NaiveDate) -> DateTime<FixedOffset> {
    let naive_date_time = NaiveDateTime::new(date, NaiveTime::from_hms(0, 0, 0));
    FixedOffset::east(0).from_utc_datetime(&naive_date_time)
}

fn author_to_people(author: Option<Author>) -> Vec<Person> {
    match author {
        Some(author) => vec![Person {
            name: author.name,
            email: author.email,
            uri: None,
        }],
        None => Vec::new(),
    }
}

type Result<T> = std::result::Result<T, Error>;

/// Represents a problem creating a feed. Variants include I/O, Atom, and
/// URL-joining issues.
#[derive(Debug)]
pub enum Error {
    /// Returned when there is a generic I/O error.
    Io(std::io::Error),

    /// Returned when there is an Atom-related error.
    Atom(AtomError),

    /// Returned when an article URL can't be joined onto the home page.
    UrlParse(url::ParseError),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => err.fmt(f),
            Error::Atom(err) => err.fmt(f),
            Error::UrlParse(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Atom(err) => Some(err),
            Error::UrlParse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator in fallible feed operations.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<AtomError> for Error {
    /// Converts [`AtomError`]s into [`Error`]. This allows us to use the
    /// `?` operator in fallible feed operations.
    fn from(err: AtomError) -> Error {
        Error::Atom(err)
    }
}

impl From<url::ParseError> for Error {
    /// Converts [`url::ParseError`]s into [`Error`]. This allows us to use
    /// the `?` operator when joining article URLs.
    fn from(err: url::ParseError) -> Error {
        Error::UrlParse(err)
    }
}
