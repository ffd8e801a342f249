//! Repository for the `songs` table.
//!
//! Song writes that also touch the genre set run in a single transaction
//! so a failed link never leaves a half-updated song behind.

use sqlx::PgPool;
use tunapiano_core::catalog::unique_ids;
use tunapiano_core::types::DbId;

use crate::models::song::{CreateSong, Song, UpdateSong};
use crate::repositories::GenreSongRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, artist_id, album, length, created_at, updated_at";

/// Provides CRUD operations for songs.
pub struct SongRepo;

impl SongRepo {
    /// Insert a new song, returning the created row.
    ///
    /// If `genre_ids` is supplied, the song is linked to every existing genre
    /// in the list before the transaction commits.
    pub async fn create(pool: &PgPool, input: &CreateSong) -> Result<Song, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO songs (title, artist_id, album, length)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let song = sqlx::query_as::<_, Song>(&query)
            .bind(&input.title)
            .bind(input.artist_id)
            .bind(&input.album)
            .bind(input.length)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(genre_ids) = &input.genre_ids {
            GenreSongRepo::replace_for_song(&mut *tx, song.id, &unique_ids(genre_ids)).await?;
        }

        tx.commit().await?;
        Ok(song)
    }

    /// Find a song by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE id = $1");
        sqlx::query_as::<_, Song>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all songs in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs ORDER BY id");
        sqlx::query_as::<_, Song>(&query).fetch_all(pool).await
    }

    /// List the songs owned by an artist.
    pub async fn list_by_artist(pool: &PgPool, artist_id: DbId) -> Result<Vec<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE artist_id = $1 ORDER BY id");
        sqlx::query_as::<_, Song>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    /// List the songs linked to a genre.
    pub async fn list_by_genre(pool: &PgPool, genre_id: DbId) -> Result<Vec<Song>, sqlx::Error> {
        sqlx::query_as::<_, Song>(
            "SELECT s.id, s.title, s.artist_id, s.album, s.length, s.created_at, s.updated_at \
             FROM songs s \
             JOIN genre_song gs ON gs.song_id = s.id \
             WHERE gs.genre_id = $1 \
             ORDER BY s.id",
        )
        .bind(genre_id)
        .fetch_all(pool)
        .await
    }

    /// Update a song. Only non-`None` fields in `input` are applied.
    ///
    /// A supplied `genre_ids` replaces the song's whole genre set.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSong,
    ) -> Result<Option<Song>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE songs SET
                title = COALESCE($2, title),
                artist_id = COALESCE($3, artist_id),
                album = COALESCE($4, album),
                length = COALESCE($5, length)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let song = sqlx::query_as::<_, Song>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.artist_id)
            .bind(&input.album)
            .bind(input.length)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(song) = song else {
            return Ok(None);
        };

        if let Some(genre_ids) = &input.genre_ids {
            let linked =
                GenreSongRepo::replace_for_song(&mut *tx, song.id, &unique_ids(genre_ids)).await?;
            tracing::debug!(song_id = song.id, linked, "Replaced song genre set");
        }

        tx.commit().await?;
        Ok(Some(song))
    }

    /// Delete a song by ID. Cascade deletes its `genre_song` links.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
