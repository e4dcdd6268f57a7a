//! Media-related data models.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Media kind as reported by the multi-search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Tv => write!(f, "tv"),
        }
    }
}

/// One raw multi-search hit, discriminated by its `media_type` tag.
///
/// Decode order is fixed: a hit is a person, a movie or a tv show, and
/// anything else fails to decode. Movies and shows name their fields
/// differently on the wire, so each gets its own payload struct.
#[derive(Debug, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum SearchHit {
    Person,
    Movie(MovieHit),
    Tv(TvHit),
}

/// Movie payload of a multi-search hit.
#[derive(Debug, Deserialize)]
pub struct MovieHit {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    pub overview: String,
    pub poster_path: Option<String>,
}

/// TV show payload of a multi-search hit.
#[derive(Debug, Deserialize)]
pub struct TvHit {
    pub id: u64,
    pub name: String,
    pub first_air_date: Option<String>,
    pub overview: String,
    pub poster_path: Option<String>,
}

/// A search hit that passed field validation and is ready for the year check.
#[derive(Debug, Clone)]
pub struct MediaCandidate {
    pub tmdb_id: u64,
    pub kind: MediaKind,
    pub title: String,
    pub release_date: NaiveDate,
    pub overview: String,
    pub poster_path: Option<String>,
}

impl MediaCandidate {
    /// Validate a decoded hit into a candidate.
    ///
    /// Returns `None` for person hits, hits without a parseable release
    /// date, and hits whose poster path doesn't look like an image file.
    /// The caller moves on to the next hit in the result list.
    pub fn from_hit(hit: SearchHit) -> Option<Self> {
        let (tmdb_id, kind, title, date, overview, poster_path) = match hit {
            SearchHit::Person => return None,
            SearchHit::Movie(m) => (
                m.id,
                MediaKind::Movie,
                m.title,
                m.release_date,
                m.overview,
                m.poster_path,
            ),
            SearchHit::Tv(t) => (
                t.id,
                MediaKind::Tv,
                t.name,
                t.first_air_date,
                t.overview,
                t.poster_path,
            ),
        };

        let date = date.as_deref().unwrap_or("");
        let release_date = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                tracing::debug!(%title, date, "skipping hit without a usable release date");
                return None;
            }
        };

        if let Some(ref poster) = poster_path {
            if !is_image_path(poster) {
                tracing::debug!(%title, %poster, "skipping hit with a malformed poster path");
                return None;
            }
        }

        Some(Self {
            tmdb_id,
            kind,
            title,
            release_date,
            overview,
            poster_path,
        })
    }

    /// Release year.
    pub fn year(&self) -> i32 {
        self.release_date.year()
    }
}

/// Check that a poster path is a plain image file reference.
fn is_image_path(path: &str) -> bool {
    if let Ok(re) = regex::Regex::new(r"^/[a-zA-Z0-9]+\.((jpg)|(jpeg)|(png)|(gif)|(bmp))$") {
        return re.is_match(path);
    }
    false
}

/// The single accepted candidate of a resolution attempt.
#[derive(Debug, Clone)]
pub struct ResolvedMedia {
    pub tmdb_id: u64,
    pub kind: MediaKind,
    pub title: String,
    pub release_date: NaiveDate,
    pub overview: String,
    pub poster_path: Option<String>,
    /// Filled in during enrichment for movies; empty for shows.
    pub director: String,
}

impl From<MediaCandidate> for ResolvedMedia {
    fn from(c: MediaCandidate) -> Self {
        Self {
            tmdb_id: c.tmdb_id,
            kind: c.kind,
            title: c.title,
            release_date: c.release_date,
            overview: c.overview,
            poster_path: c.poster_path,
            director: String::new(),
        }
    }
}

impl ResolvedMedia {
    /// Release year.
    pub fn year(&self) -> i32 {
        self.release_date.year()
    }
}

/// Row shape of the local `media` table.
#[derive(Debug, Clone, Serialize)]
pub struct LocalRecord {
    pub id: u64,
    pub media_type: MediaKind,
    pub title: String,
    pub year: i32,
    pub overview: String,
    pub director: String,
    #[serde(skip_serializing)]
    pub poster: Option<Vec<u8>>,
    pub path: String,
}

impl LocalRecord {
    /// Build the row for a resolved media, to be stored at `path`.
    pub fn new(media: &ResolvedMedia, poster: Option<Vec<u8>>, path: String) -> Self {
        Self {
            id: media.tmdb_id,
            media_type: media.kind,
            title: media.title.clone(),
            year: media.year(),
            overview: media.overview.clone(),
            director: media.director.clone(),
            poster,
            path,
        }
    }
}
