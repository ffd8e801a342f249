//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Join-table helpers that run
//! inside a caller's transaction take `&mut PgConnection` instead.

pub mod artist_repo;
pub mod genre_repo;
pub mod genre_song_repo;
pub mod song_repo;

pub use artist_repo::ArtistRepo;
pub use genre_repo::GenreRepo;
pub use genre_song_repo::GenreSongRepo;
pub use song_repo::SongRepo;
