use contracts::domain::a002_catalogue_item::aggregate::CatalogueItem;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::format::{format_price, format_timestamp};
use crate::shared::icons::icon;

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "—".to_string()
    } else {
        value.to_string()
    }
}

/// Row identity: the whole serialized item, so any edit rebuilds the row
fn row_key(item: &CatalogueItem) -> String {
    serde_json::to_string(item).unwrap_or_else(|_| item.to_string_id())
}

#[component]
pub fn CatalogueTable(
    #[prop(into)] items: Signal<Vec<CatalogueItem>>,
    on_edit: Callback<CatalogueItem>,
    on_delete: Callback<CatalogueItem>,
    /// Disable row actions (mutation in flight)
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%; min-width: 800px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Référence"</TableHeaderCell>
                        <TableHeaderCell min_width=220.0>"Désignation"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Catégorie"</TableHeaderCell>
                        <TableHeaderCell min_width=70.0>"Unité"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Prix unitaire"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Statut"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Modifié le"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>

                <TableBody>
                    <Show when=move || items.with(|items| items.is_empty())>
                        <TableRow>
                            <TableCell attr:colspan="8">
                                <TableCellLayout>
                                    <span class="table__empty">"Aucun article"</span>
                                </TableCellLayout>
                            </TableCell>
                        </TableRow>
                    </Show>
                    <For
                        each=move || items.get()
                        key=row_key
                        children=move |item| {
                            let for_link = item.clone();
                            let for_edit = item.clone();
                            let for_delete = item.clone();
                            let code = or_dash(&item.base.code);
                            let designation = item.base.description.clone();
                            let category = or_dash(&item.category);
                            let unit = or_dash(&item.unit);
                            let price = format_price(item.unit_price);
                            let updated = format_timestamp(item.base.metadata.updated_at);
                            let (status_variant, status_label) = if item.is_active {
                                (BadgeVariant::Success, "Actif")
                            } else {
                                (BadgeVariant::Neutral, "Inactif")
                            };

                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span style="font-family: monospace; font-size: var(--font-size-xs);">
                                                {code}
                                            </span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    on_edit.run(for_link.clone());
                                                }
                                            >
                                                {designation}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{category}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{unit}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class="table__number">{price}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge variant=status_variant>{status_label}</Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {updated}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| on_edit.run(for_edit.clone())
                                                    disabled=disabled
                                                    attr:title="Modifier"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| on_delete.run(for_delete.clone())
                                                    disabled=disabled
                                                    attr:title="Supprimer"
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </Flex>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(""), "—");
        assert_eq!(or_dash("  "), "—");
        assert_eq!(or_dash("kg"), "kg");
    }

    #[test]
    fn test_row_key_follows_content() {
        let item = CatalogueItem::new("ART-001".into(), "Vis inox 4x40".into(), "Quincaillerie".into());
        assert_eq!(row_key(&item), row_key(&item.clone()));

        let mut renamed = item.clone();
        renamed.base.description = "Vis inox 5x50".into();
        assert_eq!(renamed.base.metadata.version, item.base.metadata.version);
        assert_ne!(row_key(&item), row_key(&renamed));

        let mut deactivated = item.clone();
        deactivated.is_active = false;
        assert_ne!(row_key(&item), row_key(&deactivated));
    }
}
