use serde::{Deserialize, Serialize};

/// Stable identifier of a resource record.
///
/// Ids are opaque strings supplied by the dataset ("1", "3", ...). They are
/// compared verbatim; no numeric interpretation is applied.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::new(s)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId(s)
    }
}

#[cfg(test)]
mod tests {
    use super::RecordId;

    #[test]
    fn serializes_as_plain_string() {
        let id = RecordId::new("3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"3\"");
        let back: RecordId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn display_is_verbatim() {
        assert_eq!(RecordId::from("07").to_string(), "07");
    }
}
