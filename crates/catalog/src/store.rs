use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use foundation::ids::RecordId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::{MapSite, ResourceCategory, ResourceRecord};

const BUILTIN_DATASET: &str = include_str!("../data/resources.json");

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    DuplicateId(RecordId),
    PositionOutOfRange { id: RecordId, x: f64, y: f64 },
    Parse(String),
    Io(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::DuplicateId(id) => write!(f, "duplicate id: {id}"),
            CatalogError::PositionOutOfRange { id, x, y } => {
                write!(f, "map site {id}: position ({x}, {y}) outside 0..=100")
            }
            CatalogError::Parse(msg) => write!(f, "dataset parse error: {msg}"),
            CatalogError::Io(msg) => write!(f, "dataset read error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// On-disk dataset document: the database records and the map sites, each
/// in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub records: Vec<ResourceRecord>,
    #[serde(default)]
    pub map_sites: Vec<MapSite>,
}

/// Immutable, in-memory record store.
///
/// Records and map sites keep their dataset order. There are no mutation
/// methods: the store is built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ResourceRecord>,
    by_id: HashMap<RecordId, usize>,
    sites: Vec<MapSite>,
    site_by_id: HashMap<RecordId, usize>,
}

fn index_ids<'a>(
    ids: impl Iterator<Item = &'a RecordId>,
) -> Result<HashMap<RecordId, usize>, CatalogError> {
    let mut out = HashMap::new();
    for (idx, id) in ids.enumerate() {
        if out.insert(id.clone(), idx).is_some() {
            return Err(CatalogError::DuplicateId(id.clone()));
        }
    }
    Ok(out)
}

impl RecordStore {
    pub fn from_dataset(dataset: Dataset) -> Result<Self, CatalogError> {
        let Dataset { records, map_sites } = dataset;
        let by_id = index_ids(records.iter().map(|r| &r.id))?;
        if let Some(bad) = map_sites.iter().find(|s| !s.position.in_range()) {
            return Err(CatalogError::PositionOutOfRange {
                id: bad.id.clone(),
                x: bad.position.x,
                y: bad.position.y,
            });
        }
        let site_by_id = index_ids(map_sites.iter().map(|s| &s.id))?;
        debug!(
            records = records.len(),
            sites = map_sites.len(),
            "record store built"
        );
        Ok(Self {
            records,
            by_id,
            sites: map_sites,
            site_by_id,
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let dataset = serde_json::from_str::<Dataset>(raw)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_dataset(dataset)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loading dataset");
        Self::from_json_str(&raw)
    }

    /// The dataset shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&ResourceRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Map sites in dataset order.
    pub fn sites(&self) -> &[MapSite] {
        &self.sites
    }

    pub fn site(&self, id: &RecordId) -> Option<&MapSite> {
        self.site_by_id.get(id).map(|&idx| &self.sites[idx])
    }

    /// Number of database records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records per category, in category order. Categories with no
    /// records are reported as zero.
    pub fn category_counts(&self) -> BTreeMap<ResourceCategory, usize> {
        let mut out: BTreeMap<ResourceCategory, usize> =
            ResourceCategory::ALL.into_iter().map(|c| (c, 0)).collect();
        for r in &self.records {
            *out.entry(r.category).or_default() += 1;
        }
        out
    }
}
