use serde::{Deserialize, Serialize};

/// One labelled value with its display color.
///
/// Pie inputs are expected to be percentages that already sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}
