mod error;
mod models;
mod store;
mod trait_def;
mod validation;

pub use error::StoreError;
pub use models::{NewSong, Song, SongId, SongUpdate};
pub use store::FileSongStore;
pub use trait_def::SongStore;
pub use validation::{validate_new_song, validate_song_update};
