//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - The composed read views returned by the detail endpoints

pub mod artist;
pub mod genre;
pub mod genre_song;
pub mod song;
