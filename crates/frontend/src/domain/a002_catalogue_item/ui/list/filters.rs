use leptos::prelude::*;
use thaw::*;

use super::state::{active_filters_count, ActivityFilter, CatalogueFilter};
use crate::shared::icons::icon;

/// Build a filter from the raw form values; an empty category means every category
pub fn filter_from_inputs(search: String, category: String, activity_code: &str) -> CatalogueFilter {
    CatalogueFilter {
        search,
        category: Some(category).filter(|c| !c.is_empty()),
        activity: ActivityFilter::from_code(activity_code),
    }
}

/// Collapsible filter panel of the catalogue page
#[component]
pub fn CatalogueFilters(
    /// Filter currently applied, used to seed the inputs
    initial: CatalogueFilter,
    #[prop(into)] categories: Signal<Vec<String>>,
    on_change: Callback<CatalogueFilter>,
) -> impl IntoView {
    let (is_expanded, set_is_expanded) = signal(false);

    let search = RwSignal::new(initial.search.clone());
    let category = RwSignal::new(initial.category.clone().unwrap_or_default());
    let activity = RwSignal::new(initial.activity.code().to_string());

    let current = Memo::new(move |_| filter_from_inputs(search.get(), category.get(), &activity.get()));
    let active_count = Signal::derive(move || current.with(active_filters_count));

    Effect::new(move || {
        let filter = current.get();
        untrack(move || on_change.run(filter));
    });

    let reset = move |_| {
        search.set(String::new());
        category.set(String::new());
        activity.set(ActivityFilter::All.code().to_string());
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| set_is_expanded.update(|e| *e = !*e)
                >
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtres"</span>
                    {move || {
                        let count = active_count.get();
                        (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                    }}
                </div>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Recherche :"</Label>
                                <Input value=search placeholder="Référence, désignation, catégorie..." />
                            </Flex>
                        </div>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Catégorie :"</Label>
                            <Select value=category>
                                <option value="">"Toutes"</option>
                                {move || categories.get().into_iter().map(|c| {
                                    let value = c.clone();
                                    view! { <option value=value>{c}</option> }
                                }).collect_view()}
                            </Select>
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Statut :"</Label>
                            <Select value=activity>
                                {ActivityFilter::all().into_iter().map(|a| view! {
                                    <option value={a.code()}>{a.label()}</option>
                                }).collect_view()}
                            </Select>
                        </Flex>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=reset
                            disabled=Signal::derive(move || active_count.get() == 0)
                        >
                            "Réinitialiser"
                        </Button>
                    </Flex>
                </div>
            </Show>
        </div>
    }
}
