use catalog::{RecordQuery, SortKey, TypeFilter};
use foundation::ids::RecordId;
use scene::selection::Selection;
use serde::{Deserialize, Serialize};

/// Top-level navigation sections.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NavTab {
    #[default]
    Overview,
    Map,
    Statistics,
    Resources,
    Agriculture,
}

impl NavTab {
    pub const ALL: [NavTab; 5] = [
        NavTab::Overview,
        NavTab::Map,
        NavTab::Statistics,
        NavTab::Resources,
        NavTab::Agriculture,
    ];

    /// Unknown names land on the overview.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NavTab::Overview => "overview",
            NavTab::Map => "map",
            NavTab::Statistics => "statistics",
            NavTab::Resources => "resources",
            NavTab::Agriculture => "agriculture",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTab::Overview => "نظرة عامة",
            NavTab::Map => "الخريطة التفاعلية",
            NavTab::Statistics => "الإحصائيات",
            NavTab::Resources => "قاعدة البيانات",
            NavTab::Agriculture => "الموارد الزراعية",
        }
    }
}

impl From<String> for NavTab {
    fn from(s: String) -> Self {
        NavTab::parse(&s)
    }
}

impl From<NavTab> for String {
    fn from(t: NavTab) -> Self {
        t.as_str().to_string()
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartMode {
    #[default]
    Pie,
    Line,
    Bar,
}

impl ChartMode {
    /// Unknown modes fall back to `Pie`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => ChartMode::Line,
            "bar" => ChartMode::Bar,
            _ => ChartMode::Pie,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartMode::Pie => "pie",
            ChartMode::Line => "line",
            ChartMode::Bar => "bar",
        }
    }
}

impl From<String> for ChartMode {
    fn from(s: String) -> Self {
        ChartMode::parse(&s)
    }
}

impl From<ChartMode> for String {
    fn from(m: ChartMode) -> Self {
        m.as_str().to_string()
    }
}

/// Everything the dashboard remembers during a session.
///
/// Chart mode, filters, search and sort belong to the page that shows them:
/// changing tab resets them to their defaults and clears the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub nav_tab: NavTab,
    pub chart_mode: ChartMode,
    pub type_filter: TypeFilter,
    pub search_text: String,
    pub sort_key: SortKey,
    pub selection: Selection,
    /// Collapsible header menu on narrow screens.
    pub menu_open: bool,
}

impl ViewState {
    pub fn selected(&self) -> Option<&RecordId> {
        self.selection.selected()
    }

    pub fn record_query(&self) -> RecordQuery {
        RecordQuery {
            type_filter: self.type_filter,
            text_filter: self.search_text.clone(),
            sort_key: self.sort_key,
        }
    }
}

/// User interactions. Nothing else changes `ViewState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ViewEvent {
    Navigate(NavTab),
    SetChartMode(ChartMode),
    SetTypeFilter(TypeFilter),
    SetSearchText(String),
    SetSortKey(SortKey),
    SelectRecord(RecordId),
    Dismiss,
    ToggleMenu,
}

/// Pure transition function: `(state, event) -> state`.
pub fn reduce(state: &ViewState, event: &ViewEvent) -> ViewState {
    let mut next = state.clone();
    match event {
        ViewEvent::Navigate(tab) => {
            if *tab != state.nav_tab {
                next = ViewState {
                    nav_tab: *tab,
                    ..ViewState::default()
                };
            }
            next.menu_open = false;
        }
        ViewEvent::SetChartMode(mode) => next.chart_mode = *mode,
        ViewEvent::SetTypeFilter(filter) => next.type_filter = *filter,
        ViewEvent::SetSearchText(text) => next.search_text = text.clone(),
        ViewEvent::SetSortKey(key) => next.sort_key = *key,
        ViewEvent::SelectRecord(id) => {
            next.selection.select(id.clone());
        }
        ViewEvent::Dismiss => {
            next.selection.dismiss();
        }
        ViewEvent::ToggleMenu => next.menu_open = !state.menu_open,
    }
    next
}
