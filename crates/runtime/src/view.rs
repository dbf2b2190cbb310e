//! Render primitives derived from the store and the current view state.
//!
//! Nothing here is cached: every call recomputes from its inputs, so the
//! view layer can simply re-derive after each state change.

use catalog::{query, MapSite, QuerySummary, RecordStore, ResourceCategory, ResourceRecord};
use charts::datasets::{self, Highlight, StatCard};
use charts::{
    bar_rects, line_paths, pie_slices, y_ticks, BarRect, CartesianLayout, ChartError, PieGeometry,
    Polyline, SeriesSet, Tick,
};
use foundation::ids::RecordId;
use foundation::math::Vec2;
use scene::projection::{map_points, project_all, MapViewport};
use serde::Serialize;

use crate::state::{ChartMode, NavTab, ViewState};

/// Number of value-axis gridlines above zero.
const TICK_COUNT: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewConfig {
    /// Outer radius of the statistics pie.
    pub pie_radius: f64,
    /// Inner radius of the statistics donut.
    pub pie_inner_radius: f64,
    /// Radius of the agriculture crop ring.
    pub crop_radius: f64,
    pub map_viewport: MapViewport,
    pub layout: CartesianLayout,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            pie_radius: 100.0,
            pie_inner_radius: 60.0,
            crop_radius: 16.0,
            map_viewport: MapViewport::default(),
            layout: CartesianLayout::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub record_id: RecordId,
    pub label: String,
    pub category: ResourceCategory,
    pub color: &'static str,
    pub pixel: Vec2,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ChartView {
    Pie {
        geometry: PieGeometry,
    },
    Line {
        set: SeriesSet,
        lines: Vec<Polyline>,
        ticks: Vec<Tick>,
    },
    Bar {
        set: SeriesSet,
        bars: Vec<BarRect>,
        ticks: Vec<Tick>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub enum ViewBody {
    Overview {
        stats: Vec<StatCard>,
        key_resources: Vec<Highlight>,
        achievements: Vec<Highlight>,
        economic_impact: Vec<StatCard>,
        category_counts: Vec<(ResourceCategory, usize)>,
    },
    Map {
        markers: Vec<MapMarker>,
        selected: Option<MapSite>,
    },
    Statistics {
        chart: ChartView,
        headline: Vec<StatCard>,
    },
    Resources {
        records: Vec<ResourceRecord>,
        summary: QuerySummary,
        selected: Option<ResourceRecord>,
    },
    Agriculture {
        stats: Vec<StatCard>,
        crops: PieGeometry,
        challenges: Vec<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub tab: NavTab,
    pub body: ViewBody,
}

impl ViewModel {
    pub fn derive(
        store: &RecordStore,
        state: &ViewState,
        config: &ViewConfig,
    ) -> Result<Self, ChartError> {
        let body = match state.nav_tab {
            NavTab::Overview => ViewBody::Overview {
                stats: datasets::overview_stats(),
                key_resources: datasets::key_resources(),
                achievements: datasets::achievements(),
                economic_impact: datasets::economic_impact(),
                category_counts: store.category_counts().into_iter().collect(),
            },
            NavTab::Map => ViewBody::Map {
                markers: map_markers(store, state, config.map_viewport),
                selected: state.selected().and_then(|id| store.site(id)).cloned(),
            },
            NavTab::Statistics => ViewBody::Statistics {
                chart: chart_view(state.chart_mode, config)?,
                headline: datasets::statistics_headline(),
            },
            NavTab::Resources => {
                let records: Vec<ResourceRecord> = query(store.records(), &state.record_query())
                    .into_iter()
                    .cloned()
                    .collect();
                let summary = QuerySummary::new(records.len(), store.len());
                ViewBody::Resources {
                    records,
                    summary,
                    selected: state.selected().and_then(|id| store.get(id)).cloned(),
                }
            }
            NavTab::Agriculture => ViewBody::Agriculture {
                stats: datasets::agriculture_stats(),
                crops: pie_slices(&datasets::crop_shares(), config.crop_radius),
                challenges: datasets::agriculture_challenges(),
            },
        };
        Ok(Self {
            tab: state.nav_tab,
            body,
        })
    }
}

/// Markers for map sites passing the type filter, projected into `viewport`.
pub fn map_markers(
    store: &RecordStore,
    state: &ViewState,
    viewport: MapViewport,
) -> Vec<MapMarker> {
    let points = map_points(store.sites(), state.type_filter);
    project_all(&points, viewport)
        .into_iter()
        .map(|p| MapMarker {
            label: store
                .site(&p.point.record_id)
                .map(|r| r.name.clone())
                .unwrap_or_default(),
            selected: state.selection.contains(&p.point.record_id),
            color: p.point.category.color(),
            category: p.point.category,
            record_id: p.point.record_id,
            pixel: p.pixel,
        })
        .collect()
}

pub fn chart_view(mode: ChartMode, config: &ViewConfig) -> Result<ChartView, ChartError> {
    Ok(match mode {
        ChartMode::Pie => ChartView::Pie {
            geometry: pie_slices(&datasets::production_share(), config.pie_radius),
        },
        ChartMode::Line => {
            let set = datasets::yearly_production()?;
            ChartView::Line {
                lines: line_paths(&set, &config.layout),
                ticks: y_ticks(&set, &config.layout, TICK_COUNT),
                set,
            }
        }
        ChartMode::Bar => {
            let set = datasets::regional_distribution()?;
            ChartView::Bar {
                bars: bar_rects(&set, &config.layout),
                ticks: y_ticks(&set, &config.layout, TICK_COUNT),
                set,
            }
        }
    })
}
