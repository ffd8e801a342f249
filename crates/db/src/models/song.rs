//! Song entity model, DTOs, and the composed detail view.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tunapiano_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::artist::{Artist, ArtistSummary};
use crate::models::genre::{Genre, GenreSummary};

/// A song row from the `songs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Song {
    pub id: DbId,
    pub title: String,
    pub artist_id: DbId,
    pub album: String,
    /// Duration in seconds.
    pub length: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new song.
///
/// `genre_ids` is optional; when present the song is linked to every
/// existing genre in the list as part of the same transaction.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSong {
    #[serde(alias = "Title")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[serde(alias = "ArtistId")]
    pub artist_id: DbId,
    #[serde(alias = "Album")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub album: String,
    #[serde(alias = "Length", default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub length: i32,
    #[serde(alias = "GenreIds")]
    pub genre_ids: Option<Vec<DbId>>,
}

/// DTO for patching a song.
///
/// When `genre_ids` is supplied it replaces the whole genre set; an empty
/// list clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSong {
    #[serde(alias = "Title")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,
    #[serde(alias = "ArtistId")]
    pub artist_id: Option<DbId>,
    #[serde(alias = "Album")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub album: Option<String>,
    #[serde(alias = "Length")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub length: Option<i32>,
    #[serde(alias = "GenreIds")]
    pub genre_ids: Option<Vec<DbId>>,
}

/// Song fields listed under a genre's detail view.
#[derive(Debug, Clone, Serialize)]
pub struct SongSummary {
    pub id: DbId,
    pub title: String,
    pub artist_id: DbId,
    pub album: String,
    pub length: i32,
}

impl From<Song> for SongSummary {
    fn from(song: Song) -> Self {
        Self {
            id: song.id,
            title: song.title,
            artist_id: song.artist_id,
            album: song.album,
            length: song.length,
        }
    }
}

/// `GET /songs/{id}` response: the song with its artist and genres inlined.
#[derive(Debug, Clone, Serialize)]
pub struct SongDetail {
    pub id: DbId,
    pub title: String,
    pub artist: ArtistSummary,
    pub album: String,
    pub length: i32,
    pub genres: Vec<GenreSummary>,
}

impl SongDetail {
    pub fn new(song: Song, artist: Artist, genres: Vec<Genre>) -> Self {
        Self {
            id: song.id,
            title: song.title,
            artist: artist.into(),
            album: song.album,
            length: song.length,
            genres: genres.into_iter().map(GenreSummary::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_song_accepts_pascal_case_keys() {
        let input: CreateSong = serde_json::from_value(json!({
            "Title": "So What",
            "ArtistId": 4,
            "Album": "Kind of Blue",
            "Length": 562,
        }))
        .unwrap();
        assert_eq!(input.title, "So What");
        assert_eq!(input.artist_id, 4);
        assert_eq!(input.length, 562);
        assert!(input.genre_ids.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_song_distinguishes_omitted_from_supplied() {
        let input: UpdateSong = serde_json::from_value(json!({
            "title": "Freddie Freeloader",
            "length": 0,
            "genre_ids": [],
        }))
        .unwrap();
        assert_eq!(input.title.as_deref(), Some("Freddie Freeloader"));
        assert_eq!(input.length, Some(0));
        assert!(input.album.is_none());
        assert!(input.artist_id.is_none());
        assert_eq!(input.genre_ids, Some(vec![]));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_song_rejects_empty_title() {
        let input = UpdateSong {
            title: Some(String::new()),
            ..Default::default()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn create_song_rejects_negative_length() {
        let input = CreateSong {
            title: "Blue in Green".to_string(),
            artist_id: 1,
            album: "Kind of Blue".to_string(),
            length: -5,
            genre_ids: None,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("length"));
    }

    #[test]
    fn genre_detail_serializes_songs_under_song_key() {
        let now = chrono::Utc::now();
        let genre = Genre {
            id: 1,
            description: "Jazz".to_string(),
            created_at: now,
            updated_at: now,
        };
        let detail = crate::models::genre::GenreDetail::new(genre, Vec::new());
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["description"], "Jazz");
        assert_eq!(value["song"], json!([]));
    }
}
