//! Validation for incoming song payloads.
//!
//! Ensures every required field is present and non-empty before anything
//! is written to the repertoire file.

use super::error::StoreError;
use super::models::{NewSong, Song, SongUpdate};

fn non_empty(value: String, field: &'static str) -> Result<String, StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::MissingField { field });
    }
    Ok(value)
}

/// Validate a creation payload and turn it into a storable song.
pub fn validate_new_song(draft: NewSong) -> Result<Song, StoreError> {
    let id = match draft.id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(StoreError::MissingField { field: "id" }),
    };
    Ok(Song {
        id,
        title: non_empty(draft.title, "title")?,
        artist: non_empty(draft.artist, "artist")?,
        key: non_empty(draft.key, "key")?,
    })
}

/// Validate an update payload. The id is not part of it.
pub fn validate_song_update(update: SongUpdate) -> Result<SongUpdate, StoreError> {
    Ok(SongUpdate {
        title: non_empty(update.title, "title")?,
        artist: non_empty(update.artist, "artist")?,
        key: non_empty(update.key, "key")?,
    })
}
