//! Catalog entity labels and request-validation helpers.
//!
//! The derive-based rules live on the DTOs in `tunapiano_db::models`; this
//! module holds the pieces shared between the DB and API layers: the
//! entity labels used in `NotFound` errors and the flattening of
//! `validator` errors into one readable string.

use validator::ValidationErrors;

use crate::types::DbId;

/* --------------------------------------------------------------------------
   Entity labels
   -------------------------------------------------------------------------- */

pub const ENTITY_ARTIST: &str = "Artist";
pub const ENTITY_GENRE: &str = "Genre";
pub const ENTITY_SONG: &str = "Song";

/* --------------------------------------------------------------------------
   Helpers
   -------------------------------------------------------------------------- */

/// Flatten field-level validation errors into `"field: message; ..."`.
///
/// Fields are sorted by name so the output is stable across runs.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            format!("{field}: {}", reasons.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Drop duplicate ids, keeping the first occurrence of each.
pub fn unique_ids(ids: &[DbId]) -> Vec<DbId> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
