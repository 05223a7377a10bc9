//! ViewModel for the catalogue item add/edit form

use contracts::domain::a002_catalogue_item::aggregate::{CatalogueItem, CatalogueItemDto};
use leptos::prelude::*;

use crate::shared::format::{format_number_with_decimals, parse_price};

/// Raw text of the form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogueItemFormInput {
    pub id: Option<String>,
    pub code: String,
    pub description: String,
    pub category: String,
    pub unit: String,
    pub unit_price: String,
    pub comment: String,
    pub is_active: bool,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl CatalogueItemFormInput {
    pub fn from_item(item: Option<&CatalogueItem>) -> Self {
        match item {
            Some(item) => {
                let dto = item.to_dto();
                Self {
                    id: dto.id,
                    code: dto.code.unwrap_or_default(),
                    description: dto.description,
                    category: dto.category,
                    unit: dto.unit,
                    unit_price: dto
                        .unit_price
                        .map(|p| format_number_with_decimals(p, 2))
                        .unwrap_or_default(),
                    comment: dto.comment.unwrap_or_default(),
                    is_active: dto.is_active,
                }
            }
            None => Self {
                is_active: true,
                ..Self::default()
            },
        }
    }

    /// Parse and validate into the payload sent to the server
    pub fn to_dto(&self) -> Result<CatalogueItemDto, String> {
        let dto = CatalogueItemDto {
            id: self.id.clone(),
            code: non_empty(&self.code),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            unit: self.unit.trim().to_string(),
            unit_price: parse_price(&self.unit_price)?,
            comment: non_empty(&self.comment),
            is_active: self.is_active,
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[derive(Clone, Copy)]
pub struct CatalogueItemFormVm {
    pub id: RwSignal<Option<String>>,
    pub code: RwSignal<String>,
    pub description: RwSignal<String>,
    pub category: RwSignal<String>,
    pub unit: RwSignal<String>,
    pub unit_price: RwSignal<String>,
    pub comment: RwSignal<String>,
    pub is_active: RwSignal<bool>,

    pub error: RwSignal<Option<String>>,
}

impl CatalogueItemFormVm {
    pub fn new(item: Option<&CatalogueItem>) -> Self {
        let input = CatalogueItemFormInput::from_item(item);
        Self {
            id: RwSignal::new(input.id),
            code: RwSignal::new(input.code),
            description: RwSignal::new(input.description),
            category: RwSignal::new(input.category),
            unit: RwSignal::new(input.unit),
            unit_price: RwSignal::new(input.unit_price),
            comment: RwSignal::new(input.comment),
            is_active: RwSignal::new(input.is_active),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let id = self.id;
        Signal::derive(move || id.get().is_some())
    }

    pub fn is_valid(&self) -> Signal<bool> {
        let description = self.description;
        Signal::derive(move || !description.get().trim().is_empty())
    }

    fn input(&self) -> CatalogueItemFormInput {
        CatalogueItemFormInput {
            id: self.id.get_untracked(),
            code: self.code.get_untracked(),
            description: self.description.get_untracked(),
            category: self.category.get_untracked(),
            unit: self.unit.get_untracked(),
            unit_price: self.unit_price.get_untracked(),
            comment: self.comment.get_untracked(),
            is_active: self.is_active.get_untracked(),
        }
    }

    /// Validated payload, or `None` with the message shown in the form
    pub fn submit(&self) -> Option<CatalogueItemDto> {
        match self.input().to_dto() {
            Ok(dto) => {
                self.error.set(None);
                Some(dto)
            }
            Err(msg) => {
                self.error.set(Some(msg));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_defaults_to_active() {
        let input = CatalogueItemFormInput::from_item(None);
        assert!(input.is_active);
        assert!(input.id.is_none());
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let mut item = CatalogueItem::new("ART-001".into(), "Vis inox 4x40".into(), "Quincaillerie".into());
        item.unit_price = Some(1234.5);
        let input = CatalogueItemFormInput::from_item(Some(&item));

        assert_eq!(input.id, Some(item.to_string_id()));
        assert_eq!(input.code, "ART-001");
        assert_eq!(input.unit_price, "1 234,50");
        assert_eq!(input.to_dto().unwrap().unit_price, Some(1234.5));
    }

    #[test]
    fn test_to_dto_trims_and_parses() {
        let input = CatalogueItemFormInput {
            code: "  ".into(),
            description: "  Cheville nylon ".into(),
            unit: "pièce".into(),
            unit_price: "0,35".into(),
            is_active: true,
            ..Default::default()
        };
        let dto = input.to_dto().unwrap();
        assert_eq!(dto.code, None);
        assert_eq!(dto.description, "Cheville nylon");
        assert_eq!(dto.unit_price, Some(0.35));
        assert_eq!(dto.comment, None);
    }

    #[test]
    fn test_to_dto_rejects_bad_input() {
        let missing_designation = CatalogueItemFormInput::default();
        assert!(missing_designation.to_dto().is_err());

        let bad_price = CatalogueItemFormInput {
            description: "Vis".into(),
            unit_price: "douze".into(),
            ..Default::default()
        };
        assert!(bad_price.to_dto().unwrap_err().contains("Prix invalide"));

        let negative = CatalogueItemFormInput {
            description: "Vis".into(),
            unit_price: "-3".into(),
            ..Default::default()
        };
        assert!(negative.to_dto().is_err());
    }
}
