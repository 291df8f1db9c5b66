use contracts::shared::resource::Resource;
use leptos::prelude::*;

use super::collection::ResourceCollection;
use crate::shared::api;

/// Reactive handle to one entity's collection slice. Copy, like the
/// signal it wraps; pages pull the shared instance from context.
///
/// Operations race freely: nothing sequences overlapping calls, so the
/// last response to resolve owns the state. Callers get the outcome back
/// so forms can close on success; the failure message also lands in
/// `error` for the list banner.
pub struct ResourceStore<T: Resource> {
    state: RwSignal<ResourceCollection<T>>,
}

impl<T: Resource> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Resource> Copy for ResourceStore<T> {}

impl<T: Resource> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ResourceCollection::new()),
        }
    }

    /// Registers a fresh store in the current reactive owner.
    pub fn provide() {
        provide_context(Self::new());
    }

    pub fn expect_context() -> Self {
        use_context::<Self>().expect("ResourceStore not provided for this entity")
    }

    pub fn items(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    pub fn get(&self, id: i32) -> Option<T> {
        self.state
            .with_untracked(|s| s.items.iter().find(|i| i.id() == id).cloned())
    }

    pub async fn fetch_all(self) {
        self.state.update(|s| s.begin());
        let outcome = api::fetch_list::<T>().await.map_err(|e| e.to_string());
        self.state.update(|s| s.resolve_fetch(outcome));
    }

    pub async fn add(self, draft: T::Draft) -> Result<T, String> {
        self.state.update(|s| s.begin());
        let outcome = api::create::<T>(&draft).await.map_err(|e| e.to_string());
        self.state.update(|s| s.resolve_add(outcome.clone()));
        outcome
    }

    pub async fn update(self, record: T) -> Result<T, String> {
        self.state.update(|s| s.begin());
        let outcome = api::replace::<T>(&record).await.map_err(|e| e.to_string());
        self.state.update(|s| s.resolve_update(outcome.clone()));
        outcome
    }

    pub async fn remove(self, id: i32) -> Result<(), String> {
        self.state.update(|s| s.begin());
        let outcome = api::remove::<T>(id).await.map_err(|e| e.to_string());
        self.state
            .update(|s| s.resolve_remove(id, outcome.clone()));
        outcome
    }

    /// Multipart create used by documents that carry file attachments.
    pub async fn add_with_files(
        self,
        draft: T::Draft,
        files: Vec<web_sys::File>,
    ) -> Result<T, String> {
        self.state.update(|s| s.begin());
        let outcome = api::create_with_attachments::<T>(&draft, &files)
            .await
            .map_err(|e| e.to_string());
        self.state.update(|s| s.resolve_add(outcome.clone()));
        outcome
    }

    pub async fn update_with_files(
        self,
        id: i32,
        draft: T::Draft,
        files: Vec<web_sys::File>,
    ) -> Result<T, String> {
        self.state.update(|s| s.begin());
        let outcome = api::replace_with_attachments::<T>(id, &draft, &files)
            .await
            .map_err(|e| e.to_string());
        self.state.update(|s| s.resolve_update(outcome.clone()));
        outcome
    }
}
