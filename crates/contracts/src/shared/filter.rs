//! Catalog filtering: free-text search, categorical selectors and toggles.
//!
//! All filters of a page are conjunctive and never reorder the catalog.

/// Select value reserved for "no filter".
pub const ALL_SENTINEL: &str = "all";

/// Case-insensitive free-text query. The empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    raw: String,
    needle: String,
}

impl TextQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Substring match against a single field.
    pub fn matches(&self, field: &str) -> bool {
        self.needle.is_empty() || field.to_lowercase().contains(&self.needle)
    }

    /// True when any of the designated fields contains the query.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        fields.into_iter().any(|field| self.matches(field))
    }
}

/// Records that expose the fields a text query is matched against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    fn matches_query(&self, query: &TextQuery) -> bool {
        query.matches_any(self.search_fields())
    }
}

/// Exact-equality selector with an "all" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> CategoryFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => expected == value,
        }
    }
}

impl<T> CategoryFilter<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Parses a select value. The sentinel and unknown values both mean "all".
    pub fn from_select_value(value: &str, parse: impl Fn(&str) -> Option<T>) -> Self {
        if value == ALL_SENTINEL {
            return CategoryFilter::All;
        }
        parse(value).map(CategoryFilter::Only).unwrap_or_default()
    }
}

impl CategoryFilter<String> {
    /// Selector over free-form category names (menu, inventory).
    pub fn from_category(value: &str) -> Self {
        Self::from_select_value(value, |v| (!v.is_empty()).then(|| v.to_string()))
    }
}

/// A page's complete filter state over one catalog.
pub trait CatalogFilter<T> {
    fn matches(&self, item: &T) -> bool;

    /// True when no filter deviates from its default.
    fn is_default(&self) -> bool;

    fn apply(&self, catalog: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        filter_catalog(catalog, |item| self.matches(item))
    }
}

/// Ordered subsequence of `catalog` satisfying `predicate`.
pub fn filter_catalog<T: Clone>(catalog: &[T], predicate: impl Fn(&T) -> bool) -> Vec<T> {
    catalog.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Why a filtered view is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The catalog itself has no records.
    NoRecords,
    /// Records exist but the active filters exclude all of them.
    NoMatches,
}

/// Classifies an empty result; `None` when there is something to show.
pub fn empty_state(visible: usize, filters_default: bool) -> Option<EmptyState> {
    if visible > 0 {
        None
    } else if filters_default {
        Some(EmptyState::NoRecords)
    } else {
        Some(EmptyState::NoMatches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        kind: u8,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Beach Resort", kind: 1 },
            Row { name: "Le Grand Hotel", kind: 2 },
            Row { name: "Mountain Inn", kind: 1 },
        ]
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = TextQuery::new("");
        let out = filter_catalog(&rows(), |r| r.matches_query(&query));
        assert_eq!(out, rows());
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let query = TextQuery::new("bEaCh");
        let out = filter_catalog(&rows(), |r| r.matches_query(&query));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Beach Resort");

        let query = TextQuery::new("o");
        let out = filter_catalog(&rows(), |r| r.matches_query(&query));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_results_keep_catalog_order() {
        let query = TextQuery::new("n");
        let names: Vec<_> = filter_catalog(&rows(), |r| r.matches_query(&query))
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Le Grand Hotel", "Mountain Inn"]);
    }

    #[test]
    fn test_category_sentinel_and_exact_match() {
        let parse = |v: &str| v.parse::<u8>().ok();
        let all = CategoryFilter::from_select_value("all", parse);
        assert!(all.is_all());
        assert_eq!(filter_catalog(&rows(), |r| all.matches(&r.kind)), rows());

        let one = CategoryFilter::from_select_value("1", parse);
        assert_eq!(one, CategoryFilter::Only(1));
        let out = filter_catalog(&rows(), |r| one.matches(&r.kind));
        assert!(out.iter().all(|r| r.kind == 1));
        assert_eq!(out.len(), 2);

        let unknown = CategoryFilter::from_select_value("x", parse);
        assert!(unknown.is_all());
    }

    #[test]
    fn test_empty_state_classification() {
        assert_eq!(empty_state(3, true), None);
        assert_eq!(empty_state(0, true), Some(EmptyState::NoRecords));
        assert_eq!(empty_state(0, false), Some(EmptyState::NoMatches));
    }
}
