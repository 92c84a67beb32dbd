//! File-backed song store.
//!
//! The whole repertoire lives in a single pretty-printed JSON array so the
//! file stays human-editable and diffs cleanly. Every operation re-reads the
//! file and every mutation rewrites it in full; the file is the only source
//! of truth. The collection is a human-curated repertoire, so the O(n) cycle
//! per call is fine.

use super::error::StoreError;
use super::models::{NewSong, Song, SongId, SongUpdate};
use super::trait_def::SongStore;
use super::validation::{validate_new_song, validate_song_update};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

pub struct FileSongStore {
    file_path: PathBuf,
    // Serializes the load-mutate-persist cycle so two in-process writers
    // cannot lose each other's update.
    cycle_guard: Mutex<()>,
}

impl FileSongStore {
    pub fn new(file_path: impl Into<PathBuf>) -> FileSongStore {
        FileSongStore {
            file_path: file_path.into(),
            cycle_guard: Mutex::new(()),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Create the file containing an empty array if it is absent. Existing
    /// contents are never touched or validated here, only on read.
    fn ensure_store_file(&self) -> Result<(), StoreError> {
        if self.file_path.exists() {
            return Ok(());
        }
        self.persist(&[])
    }

    fn load(&self) -> Result<Vec<Song>, StoreError> {
        let content = std::fs::read_to_string(&self.file_path).map_err(StoreError::Read)?;
        serde_json::from_str(&content).map_err(StoreError::Corrupt)
    }

    /// Write the full collection to a temp file next to the target, then
    /// atomically rename it into place so readers never observe a partially
    /// written array.
    fn persist(&self, songs: &[Song]) -> Result<(), StoreError> {
        let json_string = serde_json::to_string_pretty(songs)
            .map_err(|err| StoreError::Write(err.into()))?;

        let dir = self.file_path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp_file = NamedTempFile::new_in(dir).map_err(StoreError::Write)?;
        tmp_file
            .write_all(json_string.as_bytes())
            .map_err(StoreError::Write)?;
        tmp_file
            .persist(&self.file_path)
            .map_err(|err| StoreError::Write(err.error))?;
        Ok(())
    }

    fn position_of(songs: &[Song], id: &SongId) -> Result<usize, StoreError> {
        songs
            .iter()
            .position(|song| song.id == *id)
            .ok_or_else(|| StoreError::NotFound { id: id.canonical() })
    }
}

impl SongStore for FileSongStore {
    fn initialize(&self) -> Result<(), StoreError> {
        let _guard = self.cycle_guard.lock().unwrap();
        self.ensure_store_file()
    }

    fn list(&self) -> Result<Vec<Song>, StoreError> {
        let _guard = self.cycle_guard.lock().unwrap();
        self.ensure_store_file()?;
        self.load()
    }

    fn insert(&self, draft: NewSong) -> Result<Song, StoreError> {
        let song = validate_new_song(draft)?;

        let _guard = self.cycle_guard.lock().unwrap();
        self.ensure_store_file()?;
        let mut songs = self.load()?;

        if songs.iter().any(|existing| existing.id == song.id) {
            return Err(StoreError::DuplicateId {
                id: song.id.canonical(),
            });
        }

        songs.push(song.clone());
        self.persist(&songs)?;
        Ok(song)
    }

    fn update(&self, id: &SongId, fields: SongUpdate) -> Result<Song, StoreError> {
        let fields = validate_song_update(fields)?;

        let _guard = self.cycle_guard.lock().unwrap();
        self.ensure_store_file()?;
        let mut songs = self.load()?;

        let index = Self::position_of(&songs, id)?;
        let song = &mut songs[index];
        song.title = fields.title;
        song.artist = fields.artist;
        song.key = fields.key;
        let updated = song.clone();

        self.persist(&songs)?;
        Ok(updated)
    }

    fn delete(&self, id: &SongId) -> Result<Song, StoreError> {
        let _guard = self.cycle_guard.lock().unwrap();
        self.ensure_store_file()?;
        let mut songs = self.load()?;

        let index = Self::position_of(&songs, id)?;
        let removed = songs.remove(index);

        self.persist(&songs)?;
        Ok(removed)
    }
}
