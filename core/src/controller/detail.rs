//! Detail resolver: slug in, zero-or-one record out.
//!
//! # Design
//! Every fetch is described by a `DetailTicket` carrying the slug and a
//! generation number. Only the ticket of the latest `begin` may commit, so a
//! slow response for an old slug can never overwrite the page for a newer
//! one, even when the user navigates A → B → A.

use crate::error::ApiError;
use crate::query::ListOptions;
use crate::store::{list_records, DataStore};
use crate::types::Slugged;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState<T> {
    Idle,
    Loading { slug: String },
    Found { slug: String, record: T },
    /// No record for the slug, or the fetch failed (already logged).
    NotFound { slug: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum DetailView<'a, T> {
    Loading,
    Found(&'a T),
    NotFound,
}

/// Identifies one in-flight detail fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    slug: String,
    generation: u64,
}

impl DetailTicket {
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The `list` options this fetch must be issued with.
    pub fn list_options(&self) -> ListOptions {
        ListOptions::new().filter_eq("slug", &self.slug)
    }
}

#[derive(Debug, Clone)]
pub struct DetailResolver<T> {
    state: DetailState<T>,
    generation: u64,
}

impl<T: Slugged> Default for DetailResolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Slugged> DetailResolver<T> {
    pub fn new() -> Self {
        Self {
            state: DetailState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &DetailState<T> {
        &self.state
    }

    pub fn active_slug(&self) -> Option<&str> {
        match &self.state {
            DetailState::Idle => None,
            DetailState::Loading { slug }
            | DetailState::Found { slug, .. }
            | DetailState::NotFound { slug } => Some(slug),
        }
    }

    /// Start resolving `slug`, superseding any fetch in flight. Returns
    /// `None` when `slug` is already the active one.
    pub fn begin(&mut self, slug: &str) -> Option<DetailTicket> {
        if self.active_slug() == Some(slug) {
            return None;
        }
        self.generation += 1;
        self.state = DetailState::Loading {
            slug: slug.to_string(),
        };
        Some(DetailTicket {
            slug: slug.to_string(),
            generation: self.generation,
        })
    }

    /// Apply the result of the fetch described by `ticket`. Returns `false`
    /// and leaves state untouched when the ticket has been superseded.
    pub fn commit(&mut self, ticket: DetailTicket, result: Result<Vec<T>, ApiError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(slug = %ticket.slug, "dropping stale detail response");
            return false;
        }
        let DetailTicket { slug, .. } = ticket;
        self.state = match result {
            Ok(records) => {
                if records.len() > 1 {
                    tracing::warn!(
                        collection = %T::COLLECTION,
                        slug = %slug,
                        count = records.len(),
                        "slug is not unique, using the first record"
                    );
                }
                match records.into_iter().next() {
                    Some(record) => DetailState::Found { slug, record },
                    None => DetailState::NotFound { slug },
                }
            }
            Err(err) => {
                tracing::warn!(
                    collection = %T::COLLECTION,
                    slug = %slug,
                    error = %err,
                    "failed to resolve record, showing not found"
                );
                DetailState::NotFound { slug }
            }
        };
        true
    }

    /// Resolve `slug` against `store`; no request when `slug` is already
    /// active.
    pub async fn resolve(&mut self, store: &dyn DataStore, slug: &str) {
        let Some(ticket) = self.begin(slug) else {
            return;
        };
        let result = list_records::<T>(store, &ticket.list_options()).await;
        self.commit(ticket, result);
    }

    pub fn record(&self) -> Option<&T> {
        match &self.state {
            DetailState::Found { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn view(&self) -> DetailView<'_, T> {
        match &self.state {
            DetailState::Idle | DetailState::Loading { .. } => DetailView::Loading,
            DetailState::Found { record, .. } => DetailView::Found(record),
            DetailState::NotFound { .. } => DetailView::NotFound,
        }
    }
}
