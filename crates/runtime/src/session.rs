use catalog::RecordStore;
use charts::ChartError;
use foundation::ids::RecordId;
use foundation::math::Vec2;
use scene::picking::{pick_nearest, PickHit, PickOptions};
use scene::projection::{map_points, project_all};
use tracing::{debug, warn};

use crate::event_bus::{EventLog, LoggedEvent};
use crate::state::{reduce, NavTab, ViewEvent, ViewState};
use crate::view::{ViewConfig, ViewModel};

/// One user's dashboard: the store, the current view state and the
/// interaction log.
///
/// The store is read-only for the session's lifetime; the state only changes
/// through [`Session::dispatch`].
#[derive(Debug)]
pub struct Session {
    store: RecordStore,
    state: ViewState,
    log: EventLog,
    config: ViewConfig,
}

impl Session {
    pub fn new(store: RecordStore) -> Self {
        Self::with_config(store, ViewConfig::default())
    }

    pub fn with_config(store: RecordStore, config: ViewConfig) -> Self {
        Self {
            store,
            state: ViewState::default(),
            log: EventLog::new(),
            config,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Takes the interaction log recorded so far.
    pub fn take_log(&mut self) -> Vec<LoggedEvent> {
        self.log.drain()
    }

    /// Whether `id` can be selected on the current tab: map sites on the map,
    /// database records everywhere else.
    fn selectable(&self, id: &RecordId) -> bool {
        match self.state.nav_tab {
            NavTab::Map => self.store.site(id).is_some(),
            _ => self.store.contains(id),
        }
    }

    /// Applies `event` and records it.
    ///
    /// Selecting an id the current tab does not show leaves the state
    /// untouched. Returns `true` if the state changed.
    pub fn dispatch(&mut self, event: ViewEvent) -> bool {
        if let ViewEvent::SelectRecord(id) = &event {
            if !self.selectable(id) {
                warn!("ignoring selection of unknown record {id}");
                self.log.emit(event, false);
                return false;
            }
        }

        let next = reduce(&self.state, &event);
        let changed = next != self.state;
        if changed {
            debug!(?event, "view state changed");
            self.state = next;
        }
        self.log.emit(event, changed);
        changed
    }

    /// Dispatches `events` in order and returns how many changed the state.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = ViewEvent>) -> usize {
        events
            .into_iter()
            .map(|e| self.dispatch(e))
            .filter(|changed| *changed)
            .count()
    }

    /// Click on the map at `cursor` (container pixels).
    ///
    /// Picks among the markers the current filter shows and selects the hit.
    /// A miss, or a click while another tab is active, changes nothing.
    pub fn click_map(&mut self, cursor: Vec2, opts: PickOptions) -> Option<PickHit> {
        if self.state.nav_tab != NavTab::Map {
            return None;
        }
        let points = map_points(self.store.sites(), self.state.type_filter);
        let projected = project_all(&points, self.config.map_viewport);
        let hit = pick_nearest(&projected, cursor, opts)?;
        self.dispatch(ViewEvent::SelectRecord(hit.record_id.clone()));
        Some(hit)
    }

    pub fn view(&self) -> Result<ViewModel, ChartError> {
        ViewModel::derive(&self.store, &self.state, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::state::{NavTab, ViewEvent};
    use catalog::{RecordStore, ResourceCategory, TypeFilter};
    use foundation::ids::RecordId;
    use foundation::math::Vec2;
    use pretty_assertions::assert_eq;
    use scene::picking::PickOptions;

    fn session() -> Session {
        Session::new(RecordStore::builtin().unwrap())
    }

    #[test]
    fn unknown_selection_is_logged_but_ignored() {
        let mut s = session();
        assert!(!s.dispatch(ViewEvent::SelectRecord(RecordId::new("99"))));
        assert!(s.state().selected().is_none());
        assert_eq!(s.log().len(), 1);
        assert!(!s.log().events()[0].changed);
    }

    #[test]
    fn map_only_sites_are_selectable_on_the_map_only() {
        let mut s = session();
        assert!(!s.dispatch(ViewEvent::SelectRecord(RecordId::new("6"))));
        s.dispatch(ViewEvent::Navigate(NavTab::Map));
        assert!(s.dispatch(ViewEvent::SelectRecord(RecordId::new("6"))));
    }

    #[test]
    fn map_click_selects_the_hit_marker() {
        let mut s = session();
        s.dispatch(ViewEvent::Navigate(NavTab::Map));
        // Brega sits at (70%, 50%) of the default 896x384 container.
        let hit = s
            .click_map(Vec2::new(0.70 * 896.0 + 3.0, 192.0), PickOptions::default())
            .unwrap();
        assert_eq!(hit.record_id, RecordId::new("3"));
        assert_eq!(s.state().selected(), Some(&RecordId::new("3")));

        assert!(s.click_map(Vec2::new(5.0, 5.0), PickOptions::default()).is_none());
        assert_eq!(s.state().selected(), Some(&RecordId::new("3")));
    }

    #[test]
    fn map_click_ignores_filtered_out_markers() {
        let mut s = session();
        s.dispatch_all([
            ViewEvent::Navigate(NavTab::Map),
            ViewEvent::SetTypeFilter(TypeFilter::Only(ResourceCategory::Oil)),
        ]);
        let brega = Vec2::new(0.70 * 896.0, 192.0);
        assert!(s.click_map(brega, PickOptions::default()).is_none());
        assert!(s.state().selected().is_none());
    }

    #[test]
    fn map_click_outside_the_map_tab_does_nothing() {
        let mut s = session();
        let brega = Vec2::new(0.70 * 896.0, 192.0);
        assert!(s.click_map(brega, PickOptions::default()).is_none());
        assert!(s.log().is_empty());
    }

    #[test]
    fn take_log_empties_the_log() {
        let mut s = session();
        s.dispatch(ViewEvent::ToggleMenu);
        let taken = s.take_log();
        assert_eq!(taken.len(), 1);
        assert!(s.log().is_empty());
    }

    #[test]
    fn dispatch_reports_changes() {
        let mut s = session();
        assert!(s.dispatch(ViewEvent::SelectRecord(RecordId::new("3"))));
        assert!(!s.dispatch(ViewEvent::SelectRecord(RecordId::new("3"))));
        assert!(s.dispatch(ViewEvent::Dismiss));
        assert!(!s.dispatch(ViewEvent::Dismiss));
        let changed: Vec<bool> = s.log().events().iter().map(|e| e.changed).collect();
        assert_eq!(changed, vec![true, false, true, false]);
    }

    #[test]
    fn dispatch_all_counts_changes() {
        let mut s = session();
        let n = s.dispatch_all([
            ViewEvent::Navigate(NavTab::Map),
            ViewEvent::Navigate(NavTab::Map),
            ViewEvent::ToggleMenu,
        ]);
        assert_eq!(n, 2);
        assert_eq!(s.state().nav_tab, NavTab::Map);
        assert!(s.state().menu_open);
        assert_eq!(s.view().unwrap().tab, NavTab::Map);
    }
}
