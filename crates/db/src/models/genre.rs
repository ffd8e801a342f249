//! Genre entity model, DTOs, and the composed detail view.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tunapiano_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::song::{Song, SongSummary};

/// A genre row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGenre {
    #[serde(alias = "Description")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
}

/// DTO for patching a genre.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGenre {
    #[serde(alias = "Description")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,
}

/// Genre fields listed under a song's detail view.
#[derive(Debug, Clone, Serialize)]
pub struct GenreSummary {
    pub id: DbId,
    pub description: String,
}

impl From<Genre> for GenreSummary {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            description: genre.description,
        }
    }
}

/// `GET /genres/{id}` response: the genre plus the songs tagged with it.
#[derive(Debug, Clone, Serialize)]
pub struct GenreDetail {
    pub id: DbId,
    pub description: String,
    #[serde(rename = "song")]
    pub songs: Vec<SongSummary>,
}

impl GenreDetail {
    pub fn new(genre: Genre, songs: Vec<Song>) -> Self {
        Self {
            id: genre.id,
            description: genre.description,
            songs: songs.into_iter().map(SongSummary::from).collect(),
        }
    }
}
