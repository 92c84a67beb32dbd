//! Setlist Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod server;
pub mod store;

// Re-export commonly used types for convenience
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
pub use store::{FileSongStore, Song, SongId, SongStore};
