use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a song in the repertoire file.
///
/// The setlist frontend has historically sent ids both as JSON numbers and as
/// strings, and stored files contain a mix of the two. The as-written form is
/// kept so the file round-trips unchanged, but equality is always on the
/// canonical string form: `1` and `"1"` name the same song.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SongId {
    Number(i64),
    Text(String),
}

impl SongId {
    /// The string form used for all id comparisons.
    pub fn canonical(&self) -> String {
        match self {
            SongId::Number(n) => n.to_string(),
            SongId::Text(s) => s.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SongId::Text(s) if s.trim().is_empty())
    }
}

impl PartialEq for SongId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for SongId {}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl From<&str> for SongId {
    fn from(s: &str) -> Self {
        SongId::Text(s.to_string())
    }
}

impl From<String> for SongId {
    fn from(s: String) -> Self {
        SongId::Text(s)
    }
}

/// A single entry of the repertoire: a song and the key it is played in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub key: String,
}

/// Incoming payload for creating a song. The caller supplies the id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSong {
    pub id: Option<SongId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub key: String,
}

/// Incoming payload for updating a song. The id is immutable and comes from
/// the request path, never from the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SongUpdate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub key: String,
}
