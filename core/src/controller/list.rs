//! Fetch-and-render controller: one `list` call per mount.

use crate::error::ApiError;
use crate::query::ListOptions;
use crate::store::{list_records, DataStore};
use crate::types::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    /// The cause has already been logged; the view treats this as empty.
    Failed,
}

/// What a list page should draw.
#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'a, T> {
    Loading,
    Empty,
    Items(&'a [T]),
}

#[derive(Debug, Clone)]
pub struct ListController<T> {
    options: ListOptions,
    state: ListState<T>,
}

impl<T: Record> ListController<T> {
    pub fn new(options: ListOptions) -> Self {
        Self {
            options,
            state: ListState::Idle,
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// Move `Idle → Loading`. Returns `false` when a fetch was already
    /// started, in which case the caller must not issue another request.
    pub fn begin(&mut self) -> bool {
        if !matches!(self.state, ListState::Idle) {
            return false;
        }
        self.state = ListState::Loading;
        true
    }

    /// Settle a fetch started by `begin`. Ignored unless `Loading`.
    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>) {
        if !matches!(self.state, ListState::Loading) {
            return;
        }
        self.state = match result {
            Ok(records) => ListState::Loaded(records),
            Err(err) => {
                tracing::warn!(
                    collection = %T::COLLECTION,
                    error = %err,
                    "failed to load records, showing empty state"
                );
                ListState::Failed
            }
        };
    }

    /// Run the whole lifecycle against `store`. A second call is a no-op.
    pub async fn load(&mut self, store: &dyn DataStore) {
        if !self.begin() {
            return;
        }
        let result = list_records::<T>(store, &self.options).await;
        self.finish(result);
    }

    /// Loaded records; empty in every other state.
    pub fn records(&self) -> &[T] {
        match &self.state {
            ListState::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn view(&self) -> ListView<'_, T> {
        match &self.state {
            ListState::Idle | ListState::Loading => ListView::Loading,
            ListState::Loaded(records) if !records.is_empty() => ListView::Items(records),
            ListState::Loaded(_) | ListState::Failed => ListView::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::query::{Collection, Direction};
    use crate::types::{BlogPost, Procedure};
    use serde_json::json;

    async fn blog_store() -> MemoryStore {
        let store = MemoryStore::new();
        for (slug, created_at) in [
            ("older", "2024-01-10T09:00:00Z"),
            ("newest", "2024-05-01T09:00:00Z"),
            ("middle", "2024-03-15T09:00:00Z"),
        ] {
            store
                .insert(
                    Collection::BlogPosts,
                    &json!({
                        "id": slug,
                        "title": slug,
                        "slug": slug,
                        "content": "...",
                        "author_name": "Dr. Donald",
                        "created_at": created_at,
                    }),
                )
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn load_issues_exactly_one_request_and_keeps_order() {
        let store = blog_store().await;
        let mut controller: ListController<BlogPost> =
            ListController::new(ListOptions::new().order_by("created_at", Direction::Desc));
        assert_eq!(controller.view(), ListView::Loading);

        controller.load(&store).await;
        controller.load(&store).await;

        assert_eq!(store.list_calls(), 1);
        let slugs: Vec<_> = controller.records().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["newest", "middle", "older"]);
        assert!(matches!(controller.view(), ListView::Items(items) if items.len() == 3));
    }

    #[tokio::test]
    async fn empty_blog_renders_empty_state_not_error() {
        let store = MemoryStore::new();
        let mut controller: ListController<BlogPost> = ListController::new(ListOptions::new());
        controller.load(&store).await;

        assert_eq!(controller.state(), &ListState::Loaded(Vec::new()));
        assert_eq!(controller.view(), ListView::Empty);
    }

    #[tokio::test]
    async fn failure_degrades_to_empty_view() {
        let store = MemoryStore::unreachable();
        let mut controller: ListController<Procedure> = ListController::new(ListOptions::new());
        controller.load(&store).await;

        assert_eq!(controller.state(), &ListState::Failed);
        assert_eq!(controller.view(), ListView::Empty);
        assert!(controller.records().is_empty());
    }

    #[tokio::test]
    async fn undecodable_record_fails_the_whole_load() {
        let store = MemoryStore::new();
        store
            .insert(Collection::Procedures, &json!({"id": "1", "title": "No slug"}))
            .await
            .unwrap();
        let mut controller: ListController<Procedure> = ListController::new(ListOptions::new());
        controller.load(&store).await;
        assert_eq!(controller.state(), &ListState::Failed);
    }

    #[test]
    fn finish_outside_loading_is_ignored() {
        let mut controller: ListController<Procedure> = ListController::new(ListOptions::new());
        controller.finish(Ok(Vec::new()));
        assert_eq!(controller.state(), &ListState::Idle);

        assert!(controller.begin());
        assert!(!controller.begin());
        controller.finish(Err(ApiError::NotFound));
        controller.finish(Ok(Vec::new()));
        assert_eq!(controller.state(), &ListState::Failed);
    }
}
