//! Repository for the `genre_song` join table.

use sqlx::{PgConnection, PgPool};
use tunapiano_core::types::DbId;

use crate::models::genre::Genre;

/// Provides link/unlink operations between songs and genres.
pub struct GenreSongRepo;

impl GenreSongRepo {
    /// Link a genre to a song. Idempotent: does nothing if already linked.
    ///
    /// Returns `true` if a new link was created.
    pub async fn attach(pool: &PgPool, genre_id: DbId, song_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO genre_song (genre_id, song_id) \
             VALUES ($1, $2) \
             ON CONFLICT (genre_id, song_id) DO NOTHING",
        )
        .bind(genre_id)
        .bind(song_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace a song's genre set with the existing genres among `genre_ids`.
    ///
    /// Ids with no matching genre are dropped. An empty slice leaves the song
    /// with no genres. Runs on the caller's connection so it can share a
    /// transaction with the song write. Returns the number of links created.
    pub async fn replace_for_song(
        conn: &mut PgConnection,
        song_id: DbId,
        genre_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        sqlx::query("DELETE FROM genre_song WHERE song_id = $1")
            .bind(song_id)
            .execute(&mut *conn)
            .await?;

        if genre_ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            "INSERT INTO genre_song (genre_id, song_id) \
             SELECT g.id, $1 FROM genres g WHERE g.id = ANY($2) \
             ON CONFLICT (genre_id, song_id) DO NOTHING",
        )
        .bind(song_id)
        .bind(genre_ids)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// List the genres linked to a song, ordered by genre id.
    pub async fn genres_for_song(pool: &PgPool, song_id: DbId) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "SELECT g.id, g.description, g.created_at, g.updated_at \
             FROM genres g \
             JOIN genre_song gs ON gs.genre_id = g.id \
             WHERE gs.song_id = $1 \
             ORDER BY g.id",
        )
        .bind(song_id)
        .fetch_all(pool)
        .await
    }
}
