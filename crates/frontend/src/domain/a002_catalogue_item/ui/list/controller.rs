//! Catalogue page controller
//!
//! Owns the page's UI state (item under edit, add form visibility) and
//! sequences the data-layer calls. Every successful mutation is followed by
//! a full refresh; nothing is patched locally.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use contracts::domain::a002_catalogue_item::aggregate::{CatalogueItem, CatalogueItemDto};

use crate::shared::error::ApiError;

/// Data layer behind the catalogue page
#[async_trait(?Send)]
pub trait CatalogueService {
    async fn add_item(&self, data: CatalogueItemDto) -> Result<(), ApiError>;
    async fn update_item(&self, id: &str, data: CatalogueItemDto) -> Result<(), ApiError>;
    async fn delete_item(&self, id: &str) -> Result<(), ApiError>;
    async fn refresh_items(&self) -> Result<(), ApiError>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CataloguePageState {
    pub editing_item: Option<CatalogueItem>,
    pub show_add_form: bool,
    /// A save or delete is in flight
    pub pending: bool,
}

type StateObserver = Rc<dyn Fn(&CataloguePageState)>;

pub struct CatalogueController<S> {
    service: S,
    state: RefCell<CataloguePageState>,
    observer: Option<StateObserver>,
}

impl<S: CatalogueService> CatalogueController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: RefCell::new(CataloguePageState::default()),
            observer: None,
        }
    }

    /// Call `observer` after every state change
    pub fn with_observer(mut self, observer: impl Fn(&CataloguePageState) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn state(&self) -> CataloguePageState {
        self.state.borrow().clone()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    fn update_state(&self, f: impl FnOnce(&mut CataloguePageState)) {
        f(&mut self.state.borrow_mut());
        if let Some(observer) = &self.observer {
            let snapshot = self.state();
            observer(&snapshot);
        }
    }

    pub fn start_edit(&self, item: CatalogueItem) {
        self.update_state(|s| s.editing_item = Some(item));
    }

    pub fn close_edit(&self) {
        self.update_state(|s| s.editing_item = None);
    }

    pub fn open_add_form(&self) {
        self.update_state(|s| s.show_add_form = true);
    }

    pub fn close_add_form(&self) {
        self.update_state(|s| s.show_add_form = false);
    }

    /// Update the item under edit, or create a new one when nothing is being edited.
    ///
    /// On success the corresponding panel is closed and the list refreshed.
    /// On failure the panel stays open and the error is returned as is.
    pub async fn save(&self, data: CatalogueItemDto) -> Result<(), ApiError> {
        let editing_id = self
            .state
            .borrow()
            .editing_item
            .as_ref()
            .map(|item| item.to_string_id());

        self.update_state(|s| s.pending = true);
        let result = match editing_id {
            Some(id) => self.service.update_item(&id, data).await.map(|()| {
                log::info!("Catalogue item {} updated", id);
                self.update_state(|s| s.editing_item = None);
            }),
            None => self.service.add_item(data).await.map(|()| {
                log::info!("Catalogue item created");
                self.update_state(|s| s.show_add_form = false);
            }),
        };
        self.update_state(|s| s.pending = false);

        result?;
        self.service.refresh_items().await
    }

    /// Delete an item, then refresh the list
    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.update_state(|s| s.pending = true);
        let result = self.service.delete_item(id).await;
        self.update_state(|s| s.pending = false);

        result?;
        log::info!("Catalogue item {} deleted", id);
        self.service.refresh_items().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Add(String),
        Update(String, String),
        Delete(String),
        Refresh,
    }

    #[derive(Default)]
    struct RecordingService {
        calls: RefCell<Vec<Call>>,
        fail_mutations: Cell<bool>,
    }

    impl RecordingService {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: Call) -> Result<(), ApiError> {
            let is_mutation = call != Call::Refresh;
            self.calls.borrow_mut().push(call);
            if is_mutation && self.fail_mutations.get() {
                return Err(ApiError::Http { status: 500, message: None });
            }
            Ok(())
        }
    }

    #[async_trait(?Send)]
    impl CatalogueService for RecordingService {
        async fn add_item(&self, data: CatalogueItemDto) -> Result<(), ApiError> {
            self.record(Call::Add(data.description))
        }

        async fn update_item(&self, id: &str, data: CatalogueItemDto) -> Result<(), ApiError> {
            self.record(Call::Update(id.to_string(), data.description))
        }

        async fn delete_item(&self, id: &str) -> Result<(), ApiError> {
            self.record(Call::Delete(id.to_string()))
        }

        async fn refresh_items(&self) -> Result<(), ApiError> {
            self.record(Call::Refresh)
        }
    }

    fn item() -> CatalogueItem {
        CatalogueItem::new("ART-001".into(), "Vis inox 4x40".into(), "Quincaillerie".into())
    }

    fn dto(description: &str) -> CatalogueItemDto {
        CatalogueItemDto {
            description: description.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_while_editing_updates_once_and_closes_panel() {
        let controller = CatalogueController::new(RecordingService::default());
        let item = item();
        let id = item.to_string_id();
        controller.start_edit(item);

        controller.save(dto("Vis inox 5x50")).await.unwrap();

        assert_eq!(
            controller.service().calls(),
            vec![Call::Update(id, "Vis inox 5x50".into()), Call::Refresh]
        );
        assert_eq!(controller.state(), CataloguePageState::default());
    }

    #[tokio::test]
    async fn test_save_without_edit_adds_and_closes_form() {
        let controller = CatalogueController::new(RecordingService::default());
        controller.open_add_form();
        assert!(controller.state().show_add_form);

        controller.save(dto("Cheville nylon")).await.unwrap();

        assert_eq!(
            controller.service().calls(),
            vec![Call::Add("Cheville nylon".into()), Call::Refresh]
        );
        assert!(!controller.state().show_add_form);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_panel_open_and_skips_refresh() {
        let service = RecordingService::default();
        service.fail_mutations.set(true);
        let controller = CatalogueController::new(service);
        controller.start_edit(item());

        let err = controller.save(dto("x")).await.unwrap_err();

        assert_eq!(err, ApiError::Http { status: 500, message: None });
        assert!(controller.state().editing_item.is_some());
        assert!(!controller.state().pending);
        assert!(!controller.service().calls().contains(&Call::Refresh));
    }

    #[tokio::test]
    async fn test_remove_refreshes_exactly_once_after_delete() {
        let controller = CatalogueController::new(RecordingService::default());

        controller.remove("abc").await.unwrap();

        assert_eq!(
            controller.service().calls(),
            vec![Call::Delete("abc".into()), Call::Refresh]
        );
    }

    #[tokio::test]
    async fn test_failed_remove_does_not_refresh() {
        let service = RecordingService::default();
        service.fail_mutations.set(true);
        let controller = CatalogueController::new(service);

        assert!(controller.remove("abc").await.is_err());
        assert_eq!(controller.service().calls(), vec![Call::Delete("abc".into())]);
    }

    #[test]
    fn test_edit_and_add_form_transitions() {
        let controller = CatalogueController::new(RecordingService::default());
        let item = item();

        controller.start_edit(item.clone());
        assert_eq!(controller.state().editing_item, Some(item));

        controller.close_edit();
        assert_eq!(controller.state().editing_item, None);

        controller.open_add_form();
        controller.close_add_form();
        assert!(!controller.state().show_add_form);
        assert!(controller.service().calls().is_empty());
    }

    #[tokio::test]
    async fn test_observer_sees_pending_then_closed_panel() {
        let seen = Rc::new(RefCell::new(Vec::<CataloguePageState>::new()));
        let sink = seen.clone();
        let controller = CatalogueController::new(RecordingService::default())
            .with_observer(move |s| sink.borrow_mut().push(s.clone()));
        controller.open_add_form();

        controller.save(dto("Rouleau")).await.unwrap();

        let seen = seen.borrow();
        assert!(seen.iter().any(|s| s.pending && s.show_add_form));
        let last = seen.last().unwrap();
        assert!(!last.pending);
        assert!(!last.show_add_form);
    }
}
