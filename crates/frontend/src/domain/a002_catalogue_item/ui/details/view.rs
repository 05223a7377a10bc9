use contracts::domain::a002_catalogue_item::aggregate::{CatalogueItem, CatalogueItemDto};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use super::view_model::CatalogueItemFormVm;
use crate::shared::icons::icon;

/// "Modifier l'article" / "Nouvel article"
pub fn dialog_title(is_edit: bool) -> String {
    let element = CatalogueItem::element_name().to_lowercase();
    if is_edit {
        format!("Modifier l'{}", element)
    } else {
        format!("Nouvel {}", element)
    }
}

/// Add/edit dialog of a catalogue item
///
/// Creates an item when `item` is `None`, edits it otherwise. The dialog never
/// closes itself on save: the host closes it once the server accepted the change.
#[component]
pub fn CatalogueItemForm(
    #[prop(optional)] item: Option<CatalogueItem>,
    on_save: Callback<CatalogueItemDto>,
    on_cancel: Callback<()>,
    /// Save in flight
    #[prop(optional, into)]
    pending: MaybeProp<bool>,
) -> impl IntoView {
    let vm = CatalogueItemFormVm::new(item.as_ref());
    let is_edit = vm.is_edit_mode();
    let is_valid = vm.is_valid();
    let is_pending = Signal::derive(move || pending.get().unwrap_or(false));

    let open = RwSignal::new(true);
    Effect::new(move || {
        if !open.get() {
            untrack(move || on_cancel.run(()));
        }
    });

    let save = move |_| {
        if let Some(dto) = vm.submit() {
            on_save.run(dto);
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || dialog_title(is_edit.get())}
                    </DialogTitle>
                    <DialogContent>
                        {move || vm.error.get().map(|err| view! {
                            <div class="alert alert--error">{err}</div>
                        })}
                        <div class="details-grid--2col">
                            <div class="form__group">
                                <label class="form__label">"Référence"</label>
                                <Input value=vm.code placeholder="ART-001" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Désignation *"</label>
                                <Input value=vm.description placeholder="Nom de l'article" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Catégorie"</label>
                                <Input value=vm.category placeholder="Quincaillerie" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Unité"</label>
                                <Input value=vm.unit placeholder="pièce, kg, m..." />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Prix unitaire (€)"</label>
                                <Input value=vm.unit_price placeholder="0,00" />
                            </div>
                            <div class="form__group" style="display: flex; align-items: center; padding-top: 24px;">
                                <Checkbox checked=vm.is_active label="Article actif" />
                            </div>
                            <div class="form__group" style="grid-column: 1 / -1;">
                                <label class="form__label">"Commentaire"</label>
                                <Textarea value=vm.comment placeholder="Optionnel" attr:rows=3 />
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=save
                            disabled=Signal::derive(move || is_pending.get() || !is_valid.get())
                        >
                            {icon("save")}
                            {move || if is_pending.get() { "Enregistrement..." } else { "Enregistrer" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_cancel.run(())
                            disabled=is_pending
                        >
                            {icon("cancel")}
                            "Annuler"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_title() {
        assert_eq!(dialog_title(true), "Modifier l'article");
        assert_eq!(dialog_title(false), "Nouvel article");
    }
}
