//! Grouping step of the sort-merge search.
//!
//! The fast search issues three catalog queries, each ordered by movie id.
//! The director and actor streams arrive as one row per (movie, person)
//! pair, padded with null-name rows for movies that have no people
//! attached (the LEFT-preserving join keeps every matching movie in the
//! stream). This module collapses each stream into `movie id -> names` by
//! a single pass over consecutive same-id runs.

use std::collections::HashMap;

use crate::types::DbId;

/// One row of a director/actor result stream.
///
/// Both name fields are null when the movie matched the title filter but
/// has nobody attached on this stream.
#[derive(Debug, Clone)]
pub struct NameRow {
    pub movie_id: DbId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl NameRow {
    /// Display form of the name, or `None` for an all-null padding row.
    fn display(&self) -> Option<String> {
        display_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

/// Display form of a person name, or `None` when both parts are null.
///
/// A half-null name (dirty catalog data) keeps whichever part exists.
pub fn display_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    match (first, last) {
        (None, None) => None,
        (Some(f), None) => Some(f.to_string()),
        (None, Some(l)) => Some(l.to_string()),
        (Some(f), Some(l)) => Some(format!("{f} {l}")),
    }
}

/// Collapse a movie-id-ordered name stream into `movie id -> names`.
///
/// Rows are re-sorted by movie id before grouping; the store is asked for
/// ordered output but order preservation through an outer join is not a
/// guarantee worth trusting. Null padding rows register the movie with an
/// empty name list rather than being dropped, so a movie with zero
/// directors or actors still appears in the map.
pub fn group_by_movie(mut rows: Vec<NameRow>) -> HashMap<DbId, Vec<String>> {
    rows.sort_by_key(|r| r.movie_id);

    let mut groups: HashMap<DbId, Vec<String>> = HashMap::new();
    let mut current: Option<(DbId, Vec<String>)> = None;

    for row in rows {
        match &mut current {
            Some((mid, names)) if *mid == row.movie_id => {
                if let Some(name) = row.display() {
                    names.push(name);
                }
            }
            _ => {
                // Key changed: flush the finished run and start a new one.
                if let Some((mid, names)) = current.take() {
                    groups.insert(mid, names);
                }
                let mut names = Vec::new();
                if let Some(name) = row.display() {
                    names.push(name);
                }
                current = Some((row.movie_id, names));
            }
        }
    }
    if let Some((mid, names)) = current {
        groups.insert(mid, names);
    }

    groups
}

/// Names grouped for one movie, tolerating ids the stream never produced.
///
/// A missing id means "no directors" / "no actors", which is an empty
/// list, not an error.
pub fn names_for(groups: &HashMap<DbId, Vec<String>>, movie_id: DbId) -> Vec<String> {
    groups.get(&movie_id).cloned().unwrap_or_default()
}
