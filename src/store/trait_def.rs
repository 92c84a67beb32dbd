//! SongStore trait definition.
//!
//! This trait abstracts song storage so the server can be exercised against
//! an in-memory implementation in tests while production uses the file-backed
//! `FileSongStore`.

use super::error::StoreError;
use super::models::{NewSong, Song, SongId, SongUpdate};

/// Trait for song storage backends.
///
/// The backing collection is an ordered sequence of songs with unique ids.
/// Every operation is a self-contained load/transform/persist cycle; nothing
/// is cached between calls.
pub trait SongStore: Send + Sync {
    /// Create the backing collection if it does not exist yet. Idempotent.
    fn initialize(&self) -> Result<(), StoreError>;

    /// Return all songs in insertion order.
    fn list(&self) -> Result<Vec<Song>, StoreError>;

    /// Append a new song. Fails if the id is already taken.
    fn insert(&self, draft: NewSong) -> Result<Song, StoreError>;

    /// Replace title/artist/key of the song with the given id, keeping its
    /// id and position. Returns the updated song.
    fn update(&self, id: &SongId, fields: SongUpdate) -> Result<Song, StoreError>;

    /// Remove the song with the given id and return it.
    fn delete(&self, id: &SongId) -> Result<Song, StoreError>;
}
