//! Catalogue data layer: item list, filters, pagination and CRUD calls

use async_trait::async_trait;
use contracts::domain::a002_catalogue_item::aggregate::{CatalogueItem, CatalogueItemDto};
use leptos::prelude::*;

use super::controller::CatalogueService;
use super::model;
use super::state::{clamp_page, distinct_categories, filter_items, page_slice, total_pages, CatalogueFilter};
use crate::shared::error::ApiError;

#[derive(Clone, Copy)]
pub struct CatalogueManagement {
    /// Every item returned by the last refresh
    pub items: RwSignal<Vec<CatalogueItem>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub filter: RwSignal<CatalogueFilter>,
    /// 1-based
    pub current_page: RwSignal<usize>,
    page_size: usize,
    filtered: Memo<Vec<CatalogueItem>>,
}

impl CatalogueManagement {
    pub fn new(page_size: usize) -> Self {
        let items = RwSignal::new(Vec::<CatalogueItem>::new());
        let filter = RwSignal::new(CatalogueFilter::default());
        let filtered = Memo::new(move |_| items.with(|items| filter.with(|f| filter_items(items, f))));

        Self {
            items,
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            filter,
            current_page: RwSignal::new(1),
            page_size,
            filtered,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filtered_items(&self) -> Signal<Vec<CatalogueItem>> {
        self.filtered.into()
    }

    pub fn total_pages(&self) -> Signal<usize> {
        let filtered = self.filtered;
        let page_size = self.page_size;
        Signal::derive(move || filtered.with(|items| total_pages(items.len(), page_size)))
    }

    /// Current page of the filtered items
    pub fn page_items(&self) -> Signal<Vec<CatalogueItem>> {
        let filtered = self.filtered;
        let current_page = self.current_page;
        let page_size = self.page_size;
        Signal::derive(move || filtered.with(|items| page_slice(items, current_page.get(), page_size)))
    }

    pub fn categories(&self) -> Signal<Vec<String>> {
        let items = self.items;
        Signal::derive(move || items.with(|items| distinct_categories(items)))
    }

    /// Apply a new filter and go back to the first page
    pub fn set_filter(&self, filter: CatalogueFilter) {
        self.filter.set(filter);
        self.current_page.set(1);
    }

    /// No-op once the page is unmounted
    pub fn handle_page_change(&self, page: usize) {
        let page_size = self.page_size;
        let Some(total) = self
            .filtered
            .try_with_untracked(|items| total_pages(items.len(), page_size))
        else {
            return;
        };
        let _ = self.current_page.try_set(clamp_page(page, total));
    }

    /// Store a fetch result. Runs after an await, so the signals may already be disposed.
    fn apply_refresh(&self, result: Result<Vec<CatalogueItem>, ApiError>) -> Result<(), ApiError> {
        if self.loading.try_set(false).is_some() {
            log::debug!("Catalogue page unmounted before the refresh completed");
            return result.map(|_| ());
        }

        match result {
            Ok(items) => {
                log::info!("Loaded {} catalogue items", items.len());
                let _ = self.items.try_set(items);
                let _ = self.error.try_set(None);
                if let Some(page) = self.current_page.try_get_untracked() {
                    self.handle_page_change(page);
                }
                Ok(())
            }
            Err(e) => {
                log::error!("Catalogue refresh failed: {}", e);
                let _ = self.error.try_set(Some(format!("Erreur de chargement : {}", e)));
                Err(e)
            }
        }
    }

    fn report(&self, action: &str, result: Result<(), ApiError>) -> Result<(), ApiError> {
        if let Err(e) = &result {
            log::error!("Catalogue {} failed: {}", action, e);
        }
        result
    }
}

#[async_trait(?Send)]
impl CatalogueService for CatalogueManagement {
    async fn add_item(&self, data: CatalogueItemDto) -> Result<(), ApiError> {
        self.report("create", model::create(&data).await)
    }

    async fn update_item(&self, id: &str, data: CatalogueItemDto) -> Result<(), ApiError> {
        self.report("update", model::update(id, &data).await)
    }

    async fn delete_item(&self, id: &str) -> Result<(), ApiError> {
        self.report("delete", model::delete(id).await)
    }

    async fn refresh_items(&self) -> Result<(), ApiError> {
        self.loading.set(true);
        let result = model::fetch_all().await;
        self.apply_refresh(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<CatalogueItem> {
        (0..count)
            .map(|i| CatalogueItem::new(format!("ART-{:03}", i), format!("Article {}", i), "Outillage".into()))
            .collect()
    }

    #[test]
    fn test_refresh_clamps_current_page() {
        let owner = Owner::new();
        owner.with(|| {
            let management = CatalogueManagement::new(2);
            management.current_page.set(5);
            management.loading.set(true);

            assert!(management.apply_refresh(Ok(items(3))).is_ok());
            assert!(!management.loading.get_untracked());
            assert_eq!(management.items.with_untracked(|items| items.len()), 3);
            assert_eq!(management.current_page.get_untracked(), 2);
            assert_eq!(management.page_items().get_untracked().len(), 1);
        });
    }

    #[test]
    fn test_refresh_error_is_kept_for_display() {
        let owner = Owner::new();
        owner.with(|| {
            let management = CatalogueManagement::new(10);
            let result = management.apply_refresh(Err(ApiError::Network("offline".into())));
            assert!(result.is_err());
            assert!(management.error.get_untracked().is_some());
            assert!(!management.loading.get_untracked());
        });
    }

    #[test]
    fn test_refresh_after_unmount_is_ignored() {
        let owner = Owner::new();
        let management = owner.with(|| CatalogueManagement::new(2));
        owner.cleanup();

        assert!(management.apply_refresh(Ok(items(3))).is_ok());
        assert!(management.apply_refresh(Err(ApiError::Network("offline".into()))).is_err());
        management.handle_page_change(3);
    }
}
