//! Per-column "already fetched" markers for the board.
//!
//! A column is loaded from the server at most once until its marker is
//! invalidated. Invalidation is how a confirmed move asks the next read to
//! resynchronise from the server. A failed load keeps a `Failed` marker, so
//! it is not retried until something invalidates it.

#[cfg(test)]
#[path = "fetch_cache_test.rs"]
mod fetch_cache_test;

use std::collections::HashMap;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFetch {
    InFlight,
    Fetched(DateTime<Utc>),
    Failed(DateTime<Utc>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchCache {
    markers: HashMap<String, ColumnFetch>,
}

impl FetchCache {
    pub fn is_fetched(&self, column_id: &str) -> bool {
        matches!(self.markers.get(column_id), Some(ColumnFetch::Fetched(_)))
    }

    pub fn is_in_flight(&self, column_id: &str) -> bool {
        matches!(self.markers.get(column_id), Some(ColumnFetch::InFlight))
    }

    pub fn is_failed(&self, column_id: &str) -> bool {
        matches!(self.markers.get(column_id), Some(ColumnFetch::Failed(_)))
    }

    /// No marker at all: the column has never been loaded or was invalidated.
    pub fn needs_load(&self, column_id: &str) -> bool {
        !self.markers.contains_key(column_id)
    }

    pub fn fetched_at(&self, column_id: &str) -> Option<DateTime<Utc>> {
        match self.markers.get(column_id) {
            Some(ColumnFetch::Fetched(at)) => Some(*at),
            _ => None,
        }
    }

    /// Marks a column as loading. Returns `false` if it already carries a
    /// marker, in which case the caller must not issue a request.
    pub fn claim(&mut self, column_id: &str) -> bool {
        if !self.needs_load(column_id) {
            return false;
        }
        self.markers.insert(column_id.to_string(), ColumnFetch::InFlight);
        true
    }

    /// Claims every column in `column_ids` that still needs a load.
    pub fn claim_missing<'a, I>(&mut self, column_ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        column_ids
            .into_iter()
            .filter(|id| self.claim(id))
            .map(str::to_string)
            .collect()
    }

    pub fn mark_fetched(&mut self, column_id: &str, at: DateTime<Utc>) {
        self.markers
            .insert(column_id.to_string(), ColumnFetch::Fetched(at));
    }

    /// Records a failed load. Only an in-flight claim is downgraded; a column
    /// fetched or invalidated meanwhile keeps its newer state.
    pub fn mark_failed(&mut self, column_id: &str, at: DateTime<Utc>) {
        if self.is_in_flight(column_id) {
            self.markers
                .insert(column_id.to_string(), ColumnFetch::Failed(at));
        }
    }

    pub fn invalidate(&mut self, column_id: &str) {
        self.markers.remove(column_id);
    }

    pub fn invalidate_all(&mut self) {
        self.markers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
