use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - first/previous/next/last page buttons
///
/// Pages are 1-based. Nothing is rendered when there is a single page.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_start = move || current_page.get() <= 1;
    let at_end = move || current_page.get() >= total_pages.get();

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(1)
                    disabled=at_start
                    title="Première page"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=at_start
                    title="Page précédente"
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-info">
                    {move || format!("{} / {}", current_page.get(), total_pages.get())}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=at_end
                    title="Page suivante"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(total_pages.get())
                    disabled=at_end
                    title="Dernière page"
                >
                    {icon("chevrons-right")}
                </button>
            </div>
        </Show>
    }
}
