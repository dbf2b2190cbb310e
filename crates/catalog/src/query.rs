use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::{ResourceCategory, ResourceRecord};

/// Category restriction for a query.
///
/// Parsing never fails: anything that is not a known category means `All`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeFilter {
    #[default]
    All,
    Only(ResourceCategory),
}

impl TypeFilter {
    pub fn parse(s: &str) -> Self {
        ResourceCategory::parse(s).map_or(TypeFilter::All, TypeFilter::Only)
    }

    pub fn allows(self, category: ResourceCategory) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(c) => c == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(c) => c.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TypeFilter::All => "جميع الموارد",
            TypeFilter::Only(c) => c.label(),
        }
    }
}

impl From<String> for TypeFilter {
    fn from(s: String) -> Self {
        TypeFilter::parse(&s)
    }
}

impl From<TypeFilter> for String {
    fn from(f: TypeFilter) -> Self {
        f.as_str().to_string()
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Ascending, case-folded.
    #[default]
    Name,
    /// Newest discovery first.
    Year,
}

impl SortKey {
    /// Unknown keys fall back to `Name`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" => SortKey::Year,
            _ => SortKey::Name,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Year => "year",
        }
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        SortKey::parse(&s)
    }
}

impl From<SortKey> for String {
    fn from(k: SortKey) -> Self {
        k.as_str().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub type_filter: TypeFilter,
    pub text_filter: String,
    pub sort_key: SortKey,
}

impl RecordQuery {
    pub fn with_type(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_filter = text.into();
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }
}

/// Lowercase folding used for both the search needle and the haystack.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Name ordering: case-folded comparison first, raw string as tie-breaker so
/// the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_case(a)
        .cmp(&fold_case(b))
        .then_with(|| a.cmp(b))
}

/// Filter and sort `records` into a new ordered view.
///
/// Ordering contract:
/// - `SortKey::Name`: ascending by `compare_names`.
/// - `SortKey::Year`: descending by `discovery_year`.
/// - Records with equal keys keep their input order.
pub fn query<'a>(records: &'a [ResourceRecord], q: &RecordQuery) -> Vec<&'a ResourceRecord> {
    let needle = fold_case(&q.text_filter);
    let mut out: Vec<&ResourceRecord> = records
        .iter()
        .filter(|r| q.type_filter.allows(r.category) && r.matches_folded_text(&needle))
        .collect();

    match q.sort_key {
        SortKey::Name => out.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::Year => out.sort_by(|a, b| b.discovery_year.cmp(&a.discovery_year)),
    }
    out
}

/// "Showing `shown` of `total` resources."
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySummary {
    pub shown: usize,
    pub total: usize,
}

impl QuerySummary {
    pub fn new(shown: usize, total: usize) -> Self {
        Self { shown, total }
    }
}

impl std::fmt::Display for QuerySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "عرض {} من أصل {} مورد طبيعي", self.shown, self.total)
    }
}
