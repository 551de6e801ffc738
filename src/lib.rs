//! The library code for `inkstone`, the content core of my personal blog.
//! The architecture can be generally broken down into two distinct steps:
//!
//! 1. Loading the fixture collections from content files on disk
//!    ([`crate::store`])
//! 2. Reading the loaded collections from the presentation layer (plain
//!    field access plus the article lookup on
//!    [`crate::article::Timeline`])
//!
//! Of the two, the first step is the more involved. The content directory
//! holds one YAML document per collection (articles grouped into timeline
//! years, albums, the album image galleries, guestbook comments, essays,
//! and friend links), and long article bodies live in standalone markdown
//! files referenced from the article document.
//!
//! The second step is deliberately thin: the store is populated once and
//! never mutated, so readers share references into it without any
//! coordination. The only operation beyond field access is
//! [`crate::article::Timeline::article_by_id`], a first-match scan in
//! stored order.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod album;
pub mod article;
pub mod comment;
pub mod config;
pub mod essay;
pub mod feed;
pub mod friend;
pub mod markdown;
pub mod store;
pub mod tag;
