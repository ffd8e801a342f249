//! Artist entity model, DTOs, and the composed detail view.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tunapiano_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::song::Song;

/// An artist row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub bio: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new artist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtist {
    #[serde(alias = "Name")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[serde(alias = "Age", default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub age: i32,
    #[serde(alias = "Bio")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub bio: String,
}

/// DTO for patching an artist. Omitted or `null` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateArtist {
    #[serde(alias = "Name")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[serde(alias = "Age")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub age: Option<i32>,
    #[serde(alias = "Bio")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub bio: Option<String>,
}

/// Artist fields embedded in a song's detail view.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub bio: String,
}

impl From<Artist> for ArtistSummary {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            age: artist.age,
            bio: artist.bio,
        }
    }
}

/// Song fields listed under an artist's detail view.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistSong {
    pub id: DbId,
    pub title: String,
    pub album: String,
    pub length: i32,
}

/// `GET /artists/{id}` response: the artist plus its songs.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub bio: String,
    pub song_count: usize,
    #[serde(rename = "song")]
    pub songs: Vec<ArtistSong>,
}

impl ArtistDetail {
    pub fn new(artist: Artist, songs: Vec<Song>) -> Self {
        let songs: Vec<ArtistSong> = songs
            .into_iter()
            .map(|s| ArtistSong {
                id: s.id,
                title: s.title,
                album: s.album,
                length: s.length,
            })
            .collect();
        Self {
            id: artist.id,
            name: artist.name,
            age: artist.age,
            bio: artist.bio,
            song_count: songs.len(),
            songs,
        }
    }
}
