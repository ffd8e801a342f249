//! Link DTO for the `genre_song` join table.

use serde::{Deserialize, Serialize};
use tunapiano_core::types::DbId;

/// A (song, genre) pair, used as the body of `PATCH /songs/genre`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenreSongLink {
    #[serde(alias = "SongId")]
    pub song_id: DbId,
    #[serde(alias = "GenreId")]
    pub genre_id: DbId,
}
