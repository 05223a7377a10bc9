//! Filtering and pagination of the catalogue list (pure functions)

use contracts::domain::a002_catalogue_item::aggregate::CatalogueItem;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivityFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActivityFilter {
    pub fn code(&self) -> &'static str {
        match self {
            ActivityFilter::All => "all",
            ActivityFilter::Active => "active",
            ActivityFilter::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityFilter::All => "Tous",
            ActivityFilter::Active => "Actifs",
            ActivityFilter::Inactive => "Inactifs",
        }
    }

    pub fn all() -> [ActivityFilter; 3] {
        [ActivityFilter::All, ActivityFilter::Active, ActivityFilter::Inactive]
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "active" => ActivityFilter::Active,
            "inactive" => ActivityFilter::Inactive,
            _ => ActivityFilter::All,
        }
    }

    fn accepts(&self, item: &CatalogueItem) -> bool {
        match self {
            ActivityFilter::All => true,
            ActivityFilter::Active => item.is_active,
            ActivityFilter::Inactive => !item.is_active,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogueFilter {
    /// Free text over reference, designation and category
    pub search: String,
    /// Exact category, `None` = every category
    pub category: Option<String>,
    pub activity: ActivityFilter,
}

impl CatalogueFilter {
    pub fn matches(&self, item: &CatalogueItem) -> bool {
        item.matches_search(&self.search)
            && self.category.as_ref().map_or(true, |c| &item.category == c)
            && self.activity.accepts(item)
    }
}

pub fn filter_items(items: &[CatalogueItem], filter: &CatalogueFilter) -> Vec<CatalogueItem> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Number of pages for `count` items; at least 1
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Keep a 1-based page inside `1..=total_pages`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Items of the 1-based `page`
pub fn page_slice(items: &[CatalogueItem], page: usize, page_size: usize) -> Vec<CatalogueItem> {
    if page_size == 0 {
        return items.to_vec();
    }
    let page = clamp_page(page, total_pages(items.len(), page_size));
    items
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// Distinct non-empty categories, sorted
pub fn distinct_categories(items: &[CatalogueItem]) -> Vec<String> {
    let mut categories: Vec<String> = items
        .iter()
        .map(|item| item.category.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

pub fn active_filters_count(filter: &CatalogueFilter) -> usize {
    let mut count = 0;
    if !filter.search.trim().is_empty() {
        count += 1;
    }
    if filter.category.is_some() {
        count += 1;
    }
    if filter.activity != ActivityFilter::All {
        count += 1;
    }
    count
}

/// "3 articles trouvés • Page 1 sur 2"
pub fn results_summary(count: usize, current_page: usize, total_pages: usize) -> String {
    let plural = if count > 1 { "s" } else { "" };
    let mut summary = format!("{} article{} trouvé{}", count, plural, plural);
    if total_pages > 1 {
        summary.push_str(&format!(" • Page {} sur {}", current_page, total_pages));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(code: &str, name: &str, category: &str, active: bool) -> CatalogueItem {
        let mut item = CatalogueItem::new(code.into(), name.into(), category.into());
        item.is_active = active;
        item
    }

    fn sample() -> Vec<CatalogueItem> {
        vec![
            item("ART-001", "Vis inox 4x40", "Quincaillerie", true),
            item("ART-002", "Cheville nylon", "Quincaillerie", false),
            item("PNT-010", "Peinture blanche 10L", "Peinture", true),
            item("PNT-011", "Rouleau laqueur", "Peinture", true),
            item("OUT-100", "Perceuse visseuse", "Outillage", true),
        ]
    }

    fn codes(items: &[CatalogueItem]) -> Vec<&str> {
        items.iter().map(|i| i.base.code.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(filter_items(&sample(), &CatalogueFilter::default()).len(), 5);
    }

    #[test]
    fn test_search_category_and_activity_combine() {
        let items = sample();

        let by_search = CatalogueFilter { search: "vis".into(), ..Default::default() };
        assert_eq!(codes(&filter_items(&items, &by_search)), vec!["ART-001", "OUT-100"]);

        let by_category = CatalogueFilter {
            category: Some("Quincaillerie".into()),
            activity: ActivityFilter::Active,
            ..Default::default()
        };
        assert_eq!(codes(&filter_items(&items, &by_category)), vec!["ART-001"]);

        let inactive = CatalogueFilter { activity: ActivityFilter::Inactive, ..Default::default() };
        assert_eq!(codes(&filter_items(&items, &inactive)), vec!["ART-002"]);
    }

    #[test]
    fn test_pagination() {
        let items = sample();
        assert_eq!(total_pages(0, 2), 1);
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(4, 2), 2);

        assert_eq!(codes(&page_slice(&items, 1, 2)), vec!["ART-001", "ART-002"]);
        assert_eq!(codes(&page_slice(&items, 3, 2)), vec!["OUT-100"]);
        // out of range pages are clamped
        assert_eq!(codes(&page_slice(&items, 9, 2)), vec!["OUT-100"]);
        assert_eq!(codes(&page_slice(&items, 0, 2)), vec!["ART-001", "ART-002"]);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_distinct_categories() {
        assert_eq!(distinct_categories(&sample()), vec!["Outillage", "Peinture", "Quincaillerie"]);
    }

    #[test]
    fn test_active_filters_count() {
        assert_eq!(active_filters_count(&CatalogueFilter::default()), 0);
        let filter = CatalogueFilter {
            search: "vis".into(),
            category: Some("Outillage".into()),
            activity: ActivityFilter::Active,
        };
        assert_eq!(active_filters_count(&filter), 3);
    }

    #[test]
    fn test_results_summary() {
        assert_eq!(results_summary(0, 1, 1), "0 article trouvé");
        assert_eq!(results_summary(1, 1, 1), "1 article trouvé");
        assert_eq!(results_summary(42, 2, 3), "42 articles trouvés • Page 2 sur 3");
    }

    #[test]
    fn test_activity_codes() {
        for filter in ActivityFilter::all() {
            assert_eq!(ActivityFilter::from_code(filter.code()), filter);
        }
        assert_eq!(ActivityFilter::from_code("???"), ActivityFilter::All);
    }
}
