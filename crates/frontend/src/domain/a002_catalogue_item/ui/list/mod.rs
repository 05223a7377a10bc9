//! Catalogue administration page
//!
//! - state.rs: pure filtering and pagination helpers
//! - model.rs: REST calls
//! - management.rs: reactive data layer (`CatalogueService` implementation)
//! - controller.rs: page state machine on top of the data layer
//! - filters.rs / table.rs: presentational components

pub mod controller;
pub mod filters;
pub mod management;
mod model;
pub mod state;
pub mod table;

use std::rc::Rc;

use contracts::domain::a002_catalogue_item::aggregate::{CatalogueItem, CatalogueItemDto};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::controller::{CatalogueController, CataloguePageState, CatalogueService};
use self::filters::CatalogueFilters;
use self::management::CatalogueManagement;
use self::state::results_summary;
use self::table::CatalogueTable;
use super::details::CatalogueItemForm;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use crate::shared::responsive::use_is_mobile;

type PageController = Rc<CatalogueController<CatalogueManagement>>;

fn confirm_delete(item: &CatalogueItem) -> bool {
    let message = format!("Supprimer l'article « {} » ?", item.base.description);
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&message).ok())
        .unwrap_or(false)
}

#[component]
pub fn CataloguePage() -> impl IntoView {
    let config = use_app_config();
    let management = CatalogueManagement::new(config.catalogue.page_size);
    let is_mobile = use_is_mobile();

    let page_state = RwSignal::new(CataloguePageState::default());
    let action_error = RwSignal::new(None::<String>);

    let controller: PageController = Rc::new(
        CatalogueController::new(management).with_observer(move |s| page_state.set(s.clone())),
    );
    let controller = StoredValue::new_local(controller);

    let editing = Memo::new(move |_| page_state.with(|s| s.editing_item.clone()));
    let show_add_form = Memo::new(move |_| page_state.with(|s| s.show_add_form));
    let pending = Signal::derive(move || page_state.with(|s| s.pending));

    Effect::new(move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            // failures land in `management.error`
            let _ = controller.service().refresh_items().await;
        });
    });

    let on_save = Callback::new(move |dto: CatalogueItemDto| {
        let controller = controller.get_value();
        spawn_local(async move {
            match controller.save(dto).await {
                Ok(()) => action_error.set(None),
                Err(e) => action_error.set(Some(format!("Échec de l'enregistrement : {}", e))),
            }
        });
    });

    let on_delete = Callback::new(move |item: CatalogueItem| {
        if !confirm_delete(&item) {
            return;
        }
        let controller = controller.get_value();
        spawn_local(async move {
            match controller.remove(&item.to_string_id()).await {
                Ok(()) => action_error.set(None),
                Err(e) => action_error.set(Some(format!("Échec de la suppression : {}", e))),
            }
        });
    });

    let on_edit = Callback::new(move |item: CatalogueItem| {
        action_error.set(None);
        controller.with_value(|c| c.start_edit(item));
    });
    let on_cancel_edit = Callback::new(move |_| controller.with_value(|c| c.close_edit()));
    let on_cancel_add = Callback::new(move |_| controller.with_value(|c| c.close_add_form()));

    let open_add_form = move |_| {
        action_error.set(None);
        controller.with_value(|c| c.open_add_form());
    };

    let refresh = move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller.service().refresh_items().await;
        });
    };

    let filtered_items = management.filtered_items();
    let total_pages = management.total_pages();
    let summary = move || {
        results_summary(
            filtered_items.with(|items| items.len()),
            management.current_page.get(),
            total_pages.get(),
        )
    };

    view! {
        <div class="page catalogue-page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gestion du Catalogue"</h1>
                    <p class="page__subtitle">"Gérez vos articles, catégories et références"</p>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=refresh
                            disabled=Signal::derive(move || management.loading.get())
                        >
                            {icon("refresh")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=open_add_form
                            disabled=pending
                        >
                            {icon("plus")}
                            {move || if is_mobile.get() { "Ajouter" } else { "Nouvel Article" }}
                        </Button>
                    </Flex>
                </div>
            </div>

            <div class="page__content">
                <CatalogueFilters
                    initial=management.filter.get_untracked()
                    categories=management.categories()
                    on_change=Callback::new(move |filter| management.set_filter(filter))
                />

                {move || management.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}
                {move || action_error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">{CatalogueItem::list_name()}</h2>
                        <span class="card__subtitle">{summary}</span>
                        <Show when=move || management.loading.get()>
                            <span class="card__hint">"Chargement..."</span>
                        </Show>
                    </div>

                    <CatalogueTable
                        items=management.page_items()
                        on_edit=on_edit
                        on_delete=on_delete
                        disabled=pending
                    />

                    <PaginationControls
                        current_page=management.current_page
                        total_pages=total_pages
                        on_page_change=Callback::new(move |page| management.handle_page_change(page))
                    />
                </div>
            </div>

            {move || show_add_form.get().then(|| view! {
                <CatalogueItemForm on_save=on_save on_cancel=on_cancel_add pending=pending />
            })}
            {move || editing.get().map(|item| view! {
                <CatalogueItemForm item=item on_save=on_save on_cancel=on_cancel_edit pending=pending />
            })}
        </div>
    }
}
