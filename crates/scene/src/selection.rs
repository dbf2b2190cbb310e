use foundation::ids::RecordId;
use serde::{Deserialize, Serialize};

/// Single-record selection.
///
/// At most one record is selected. Selecting replaces the previous selection;
/// selecting the current record again is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    selected: Option<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(id: RecordId) -> Self {
        Self { selected: Some(id) }
    }

    pub fn selected(&self) -> Option<&RecordId> {
        self.selected.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Selects `id`.
    ///
    /// Returns `true` if the selection changed.
    pub fn select(&mut self, id: RecordId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Clears the selection.
    ///
    /// Returns `true` if something was selected.
    pub fn dismiss(&mut self) -> bool {
        self.selected.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;
    use foundation::ids::RecordId;
    use pretty_assertions::assert_eq;

    fn id(s: &str) -> RecordId {
        RecordId::new(s)
    }

    #[test]
    fn select_is_idempotent() {
        let mut s = Selection::new();
        assert!(s.is_empty());
        assert!(s.select(id("3")));
        assert!(!s.select(id("3")));
        assert_eq!(s.selected(), Some(&id("3")));
    }

    #[test]
    fn select_replaces_previous() {
        let mut s = Selection::of(id("1"));
        assert!(s.select(id("4")));
        assert!(s.contains(&id("4")));
        assert!(!s.contains(&id("1")));
    }

    #[test]
    fn dismiss_clears_regardless_of_prior_id() {
        let mut s = Selection::of(id("6"));
        assert!(s.dismiss());
        assert!(s.is_empty());
        assert!(!s.dismiss());
    }

    #[test]
    fn serializes_as_nullable_id() {
        assert_eq!(serde_json::to_string(&Selection::new()).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Selection::of(id("3"))).unwrap(), "\"3\"");
    }
}
