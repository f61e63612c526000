//! Search, sort, year filter and paging over an inventory list

use std::cmp::Ordering;
use std::collections::BTreeSet;

use assetdesk_domain::constants::ITEMS_PER_PAGE;
use assetdesk_domain::utils::parse_timestamp;
use assetdesk_domain::{InventoryItem, InventoryKind, SortDirection, SortField};
use serde::{Deserialize, Serialize};

/// What the list view currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryQuery {
    /// Case-insensitive substring; blank means no filter
    pub search: Option<String>,
    pub sort: SortField,
    pub direction: SortDirection,
    /// Buddhist-era year of `date_add`
    pub year: Option<i32>,
    /// 1-based page number
    pub page: usize,
}

impl Default for InventoryQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort: SortField::default(),
            direction: SortDirection::default(),
            year: None,
            page: 1,
        }
    }
}

impl InventoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn sorted_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort = field;
        self.direction = direction;
        self
    }

    pub fn in_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn on_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Whether `item` passes the search and year filters.
    pub fn matches(&self, kind: InventoryKind, item: &InventoryItem) -> bool {
        self.matches_year(item) && self.matches_search(kind, item)
    }

    fn matches_year(&self, item: &InventoryItem) -> bool {
        self.year.map_or(true, |year| item.buddhist_year() == Some(year))
    }

    fn matches_search(&self, kind: InventoryKind, item: &InventoryItem) -> bool {
        let needle = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => term.to_lowercase(),
            _ => return true,
        };
        let contains = |field: &str| field.to_lowercase().contains(&needle);

        if contains(item.equipment_name.as_str()) {
            return true;
        }
        kind.searches_all_fields()
            && (item.equipment_type.as_deref().is_some_and(contains)
                || item.spec.as_deref().is_some_and(contains)
                || item.location.as_deref().is_some_and(contains)
                || contains(item.equipment_id.as_str()))
    }

    /// Filtered and sorted items, before paging.
    pub fn select(&self, kind: InventoryKind, items: &[InventoryItem]) -> Vec<InventoryItem> {
        let mut selected: Vec<InventoryItem> = items
            .iter()
            .filter(|item| self.matches(kind, item))
            .cloned()
            .collect();
        selected.sort_by(|a, b| compare(self.sort, self.direction, a, b));
        selected
    }

    /// Filter, sort and cut out the requested page.
    pub fn apply(&self, kind: InventoryKind, items: &[InventoryItem]) -> Page<InventoryItem> {
        Page::slice(self.select(kind, items), self.page)
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    /// Cut page `page` (1-based, 0 read as 1) out of `items`.
    ///
    /// Pages past the end are empty but still report the totals.
    pub fn slice(items: Vec<T>, page: usize) -> Self {
        let page = page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(ITEMS_PER_PAGE);
        let start = (page - 1).saturating_mul(ITEMS_PER_PAGE);

        let items = items
            .into_iter()
            .skip(start)
            .take(ITEMS_PER_PAGE)
            .collect();
        Self {
            items,
            page,
            total_pages,
            total_items,
        }
    }

    /// 1-based position of the first item on this page (0 when empty).
    pub fn first_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * ITEMS_PER_PAGE + 1
        }
    }

    /// 1-based position of the last item on this page (0 when empty).
    pub fn last_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_position() + self.items.len() - 1
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Distinct Buddhist-era years present in `items`, ascending.
pub fn available_years(items: &[InventoryItem]) -> Vec<i32> {
    let years: BTreeSet<i32> = items
        .iter()
        .filter_map(InventoryItem::buddhist_year)
        .collect();
    years.into_iter().collect()
}

/* -------------------------------------------------------------------------- */
/* Ordering */
/* -------------------------------------------------------------------------- */

fn compare(
    field: SortField,
    direction: SortDirection,
    a: &InventoryItem,
    b: &InventoryItem,
) -> Ordering {
    match field {
        SortField::Name => directed(direction, lexical(&a.equipment_name, &b.equipment_name)),
        SortField::Id => directed(direction, lexical(&a.equipment_id, &b.equipment_id)),
        SortField::Type => {
            let order = optional_lexical(&a.equipment_type, &b.equipment_type);
            directed(direction, order)
        }
        SortField::Location => {
            let order = optional_lexical(&a.location, &b.location);
            directed(direction, order)
        }
        SortField::Price => missing_last(direction, a.price, b.price, f64::total_cmp),
        SortField::DateAdded => {
            let parse = |item: &InventoryItem| item.date_add.as_deref().and_then(parse_timestamp);
            missing_last(direction, parse(a), parse(b), |x, y| x.cmp(y))
        }
    }
}

fn lexical(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Missing text compares as empty.
fn optional_lexical(a: &Option<String>, b: &Option<String>) -> Ordering {
    let a = a.as_deref().unwrap_or_default();
    let b = b.as_deref().unwrap_or_default();
    lexical(a, b)
}

fn directed(direction: SortDirection, ordering: Ordering) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Items without a value go last in either direction.
fn missing_last<T, F>(direction: SortDirection, a: Option<T>, b: Option<T>, cmp: F) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => directed(direction, cmp(&a, &b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
