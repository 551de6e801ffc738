//! Defines the [`Album`] collection records and the keyed [`Gallery`] of
//! album images. Albums are a flat list; the gallery maps an album id to
//! its images. Album ids are not unique — the sample data repeats the
//! `urban` entry — and the gallery's image lists likewise keep whatever
//! duplicates the source declares.

use serde::Deserialize;
use std::collections::HashMap;

/// An album card as shown on the albums page. `date` is a year-month
/// label, not a parsed date.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover_url: String,
    pub count: u32,
    pub date: String,
}

/// A single photo inside an album. Title and description are optional in
/// the source data.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AlbumImage {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// The images of one album, keyed by the album id in [`Gallery`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AlbumEntry {
    pub title: String,
    pub description: String,
    pub images: Vec<AlbumImage>,
}

/// Album id → images mapping.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Gallery(HashMap<String, AlbumEntry>);

impl Gallery {
    pub fn get(&self, id: &str) -> Option<&AlbumEntry> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const GALLERY: &str = "
nature:
  title: Nature's Whisper
  description: Collection of natural landscapes
  images:
    - url: /albums/nature/1.jpg
      title: Mountain Lake
      description: A serene mountain lake at sunrise
    - url: /albums/nature/1.jpg
      title: Mountain Lake
      description: A serene mountain lake at sunrise
    - url: /albums/nature/2.jpg
urban:
  title: Urban Stories
  description: City life and architecture
  images:
    - url: /albums/urban/1.jpg
      title: City Lights
";

    #[test]
    fn test_gallery_lookup() -> Result<(), serde_yaml::Error> {
        let gallery: Gallery = serde_yaml::from_str(GALLERY)?;
        assert_eq!(gallery.len(), 2);
        let nature = gallery.get("nature").unwrap();
        assert_eq!(nature.title, "Nature's Whisper");
        // The repeated first image is fixture data, not an error; it must
        // survive loading untouched.
        assert_eq!(nature.images.len(), 3);
        assert_eq!(nature.images[0], nature.images[1]);
        assert_eq!(nature.images[2].title, None);
        assert!(gallery.get("portrait").is_none());
        Ok(())
    }
}
