use foundation::ids::RecordId;
use serde::{Deserialize, Serialize};

/// Closed set of resource categories shown by the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Oil,
    Gas,
    Water,
    Mining,
    Agriculture,
}

impl ResourceCategory {
    /// Display order used by filter bars and legends.
    pub const ALL: [ResourceCategory; 5] = [
        ResourceCategory::Oil,
        ResourceCategory::Gas,
        ResourceCategory::Water,
        ResourceCategory::Mining,
        ResourceCategory::Agriculture,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceCategory::Oil => "oil",
            ResourceCategory::Gas => "gas",
            ResourceCategory::Water => "water",
            ResourceCategory::Mining => "mining",
            ResourceCategory::Agriculture => "agriculture",
        }
    }

    /// Case-insensitive lookup by wire name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceCategory::Oil => "النفط",
            ResourceCategory::Gas => "الغاز الطبيعي",
            ResourceCategory::Water => "المياه الجوفية",
            ResourceCategory::Mining => "التعدين",
            ResourceCategory::Agriculture => "الزراعة",
        }
    }

    /// Marker fill color on the map.
    pub fn color(self) -> &'static str {
        match self {
            ResourceCategory::Oil => "#f97316",
            ResourceCategory::Gas => "#3b82f6",
            ResourceCategory::Water => "#06b6d4",
            ResourceCategory::Mining => "#4b5563",
            ResourceCategory::Agriculture => "#22c55e",
        }
    }
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Active,
    Inactive,
    Planned,
}

impl ResourceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceStatus::Active => "active",
            ResourceStatus::Inactive => "inactive",
            ResourceStatus::Planned => "planned",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceStatus::Active => "نشط",
            ResourceStatus::Inactive => "غير نشط",
            ResourceStatus::Planned => "مخطط",
        }
    }
}

/// Optional engineering attributes. Absent fields are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

impl TechnicalData {
    pub fn is_empty(&self) -> bool {
        self.depth.is_none()
            && self.quality.is_none()
            && self.extraction_method.is_none()
            && self.last_update.is_none()
    }

    /// Present attributes as `(label, value)` pairs, in display order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(v) = &self.depth {
            out.push(("العمق", v.as_str()));
        }
        if let Some(v) = &self.quality {
            out.push(("الجودة", v.as_str()));
        }
        if let Some(v) = &self.extraction_method {
            out.push(("طريقة الاستخراج", v.as_str()));
        }
        if let Some(v) = &self.last_update {
            out.push(("آخر تحديث", v.as_str()));
        }
        out
    }
}

/// Normalized map position, percent of the map container on each axis.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

impl MapPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn in_range(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// A marker on the resource map.
///
/// Sites are listed separately from the database records. A site may share
/// its id with a record, but does not need one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSite {
    pub id: RecordId,
    pub name: String,
    pub category: ResourceCategory,
    pub position: MapPosition,
    pub production: String,
    pub reserves: String,
    pub status: ResourceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: RecordId,
    pub name: String,
    pub category: ResourceCategory,
    pub location: String,
    pub discovery_year: i32,
    pub current_production: String,
    pub reserves: String,
    pub status: ResourceStatus,
    #[serde(default, skip_serializing_if = "TechnicalData::is_empty")]
    pub technical: TechnicalData,
}

impl ResourceRecord {
    /// `needle` must already be lowercased; see `query::fold_case`.
    pub(crate) fn matches_folded_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
    }
}
