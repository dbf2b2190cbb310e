use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use catalog::{
    MapSite, QuerySummary, RecordQuery, RecordStore, ResourceRecord, SortKey, TypeFilter, query,
};
use charts::svg::{MarkerGlyph, bar_svg, donut_svg, line_svg, map_svg, pie_svg};
use charts::{CartesianLayout, datasets, pie_slices};
use clap::{Parser, Subcommand, ValueEnum};
use foundation::ids::RecordId;
use foundation::math::Vec2;
use runtime::{
    LoggedEvent, NavTab, Session, ViewConfig, ViewEvent, ViewModel, ViewState, map_markers,
};
use scene::{MapViewport, PickHit, PickOptions};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Inner radius of the statistics donut relative to its outer radius.
const DONUT_HOLE: f64 = 0.6;
/// Stroke width of the crop ring drawn at radius 16.
const CROP_STROKE: f64 = 3.5;

#[derive(Parser, Debug)]
#[command(author, version, about = "Libya natural resources atlas")]
struct Args {
    /// Resource dataset JSON (default: ATLAS_DATA, then the embedded dataset)
    #[arg(long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List resources, filtered and sorted
    List {
        /// Category: oil, gas, water, mining, agriculture or all
        #[arg(long = "type", default_value = "all")]
        type_filter: String,

        /// Case-insensitive match against name or location
        #[arg(long, default_value = "")]
        search: String,

        /// name or year
        #[arg(long, default_value = "name")]
        sort: String,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one resource with its technical data, or a map-only site
    Show { id: String },

    /// Render a dashboard chart as SVG
    Chart {
        kind: ChartKind,

        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Pie radius
        #[arg(long)]
        radius: Option<f64>,
    },

    /// Render the resource map as SVG
    Map {
        #[arg(long = "type", default_value = "all")]
        type_filter: String,

        #[arg(long, default_value_t = 896.0)]
        width: f64,

        #[arg(long, default_value_t = 384.0)]
        height: f64,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Resolve the marker under a pixel position
    Pick {
        x: f64,
        y: f64,

        /// Only markers of this category can be hit
        #[arg(long = "type", default_value = "all")]
        type_filter: String,

        #[arg(long, default_value_t = 896.0)]
        width: f64,

        #[arg(long, default_value_t = 384.0)]
        height: f64,

        /// Hit radius in pixels
        #[arg(long, default_value_t = 16.0)]
        radius: f64,
    },

    /// Apply a JSON list of view events and print the resulting view
    Replay { events: PathBuf },
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum ChartKind {
    Pie,
    Line,
    Bar,
    Crops,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let data = args
        .data
        .or_else(|| env::var("ATLAS_DATA").ok().map(PathBuf::from));
    let store = load_store(data.as_deref())?;

    match args.command {
        Command::List {
            type_filter,
            search,
            sort,
            json,
        } => {
            let q = RecordQuery::default()
                .with_type(TypeFilter::parse(&type_filter))
                .with_text(search)
                .with_sort(SortKey::parse(&sort));
            let rows = query(store.records(), &q);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", list_table(&rows, store.len()));
            }
        }
        Command::Show { id } => {
            let id = RecordId::new(id);
            let text = match (store.get(&id), store.site(&id)) {
                (Some(record), _) => detail(record),
                (None, Some(site)) => site_detail(site),
                (None, None) => return Err(format!("unknown resource id: {id}").into()),
            };
            print!("{text}");
        }
        Command::Chart { kind, out, radius } => {
            let svg = render_chart(kind, radius)?;
            emit(&svg, out.as_deref())?;
        }
        Command::Map {
            type_filter,
            width,
            height,
            out,
        } => {
            let svg = render_map(&store, TypeFilter::parse(&type_filter), width, height);
            emit(&svg, out.as_deref())?;
        }
        Command::Pick {
            x,
            y,
            type_filter,
            width,
            height,
            radius,
        } => {
            let mut session = map_session(store, TypeFilter::parse(&type_filter), width, height);
            let hit = session.click_map(Vec2::new(x, y), PickOptions { radius_px: radius });
            println!("{}", pick_line(&session, hit.as_ref(), radius));
        }
        Command::Replay { events } => {
            let raw = fs::read_to_string(&events)
                .map_err(|e| format!("read {}: {e}", events.display()))?;
            let events: Vec<ViewEvent> = serde_json::from_str(&raw)?;
            let report = replay(store, events)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn load_store(path: Option<&Path>) -> Result<RecordStore, Box<dyn std::error::Error>> {
    let store = match path {
        Some(p) => RecordStore::from_path(p)?,
        None => RecordStore::builtin()?,
    };
    info!(
        "loaded {} resources from {}",
        store.len(),
        path.map_or_else(|| "embedded dataset".to_string(), |p| p.display().to_string())
    );
    Ok(store)
}

fn emit(body: &str, out: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match out {
        Some(path) => {
            fs::write(path, body).map_err(|e| format!("write {}: {e}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => print!("{body}"),
    }
    Ok(())
}

fn list_table(rows: &[&ResourceRecord], total: usize) -> String {
    let mut out = String::new();
    for r in rows {
        let _ = writeln!(
            out,
            "{:>3}  {:<28}  {:<16}  {:<24}  {}  {}",
            r.id,
            r.name,
            r.category.label(),
            r.location,
            r.discovery_year,
            r.status.label()
        );
    }
    let _ = writeln!(out, "{}", QuerySummary::new(rows.len(), total));
    out
}

fn detail(r: &ResourceRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", r.name, r.id);
    let _ = writeln!(out, "  النوع: {}", r.category.label());
    let _ = writeln!(out, "  الموقع: {}", r.location);
    let _ = writeln!(out, "  سنة الاكتشاف: {}", r.discovery_year);
    let _ = writeln!(out, "  الإنتاج الحالي: {}", r.current_production);
    let _ = writeln!(out, "  الاحتياطي: {}", r.reserves);
    let _ = writeln!(out, "  الحالة: {}", r.status.label());
    for (label, value) in r.technical.fields() {
        let _ = writeln!(out, "  {label}: {value}");
    }
    out
}

fn site_detail(s: &MapSite) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", s.name, s.id);
    let _ = writeln!(out, "  النوع: {}", s.category.label());
    let _ = writeln!(out, "  الموقع على الخريطة: {:.0}%, {:.0}%", s.position.x, s.position.y);
    let _ = writeln!(out, "  الإنتاج: {}", s.production);
    let _ = writeln!(out, "  الاحتياطي: {}", s.reserves);
    let _ = writeln!(out, "  الحالة: {}", s.status.label());
    out
}

/// A session already on the map tab with `type_filter` applied.
fn map_session(store: RecordStore, type_filter: TypeFilter, width: f64, height: f64) -> Session {
    let config = ViewConfig {
        map_viewport: MapViewport::new(width, height),
        ..ViewConfig::default()
    };
    let mut session = Session::with_config(store, config);
    session.dispatch_all([
        ViewEvent::Navigate(NavTab::Map),
        ViewEvent::SetTypeFilter(type_filter),
    ]);
    session
}

fn pick_line(session: &Session, hit: Option<&PickHit>, radius: f64) -> String {
    match hit {
        Some(hit) => {
            let name = session
                .store()
                .site(&hit.record_id)
                .map_or("", |s| s.name.as_str());
            format!("{} {} ({:.1}px)", hit.record_id, name, hit.distance)
        }
        None => format!("no marker within {radius}px"),
    }
}

fn render_chart(kind: ChartKind, radius: Option<f64>) -> Result<String, charts::ChartError> {
    let layout = CartesianLayout::default();
    Ok(match kind {
        ChartKind::Pie => {
            let r = radius.unwrap_or(100.0);
            donut_svg(&pie_slices(&datasets::production_share(), r), r * DONUT_HOLE)
        }
        ChartKind::Crops => {
            let r = radius.unwrap_or(16.0);
            pie_svg(&pie_slices(&datasets::crop_shares(), r), CROP_STROKE)
        }
        ChartKind::Line => line_svg(&datasets::yearly_production()?, &layout),
        ChartKind::Bar => bar_svg(&datasets::regional_distribution()?, &layout),
    })
}

fn render_map(store: &RecordStore, type_filter: TypeFilter, width: f64, height: f64) -> String {
    let state = ViewState {
        type_filter,
        ..ViewState::default()
    };
    let glyphs: Vec<MarkerGlyph> = map_markers(store, &state, MapViewport::new(width, height))
        .into_iter()
        .map(|m| MarkerGlyph {
            position: m.pixel,
            color: m.color.to_string(),
            label: m.label,
            selected: m.selected,
        })
        .collect();
    map_svg(width, height, &glyphs)
}

#[derive(Serialize)]
struct ReplayReport {
    dispatched: usize,
    changed: usize,
    state: ViewState,
    view: ViewModel,
    log: Vec<LoggedEvent>,
}

fn replay(
    store: RecordStore,
    events: Vec<ViewEvent>,
) -> Result<ReplayReport, Box<dyn std::error::Error>> {
    let dispatched = events.len();
    let mut session = Session::new(store);
    let changed = session.dispatch_all(events);
    Ok(ReplayReport {
        dispatched,
        changed,
        state: session.state().clone(),
        view: session.view()?,
        log: session.take_log(),
    })
}

#[cfg(test)]
mod tests {
    use super::{
        ChartKind, detail, list_table, map_session, pick_line, render_chart, render_map, replay,
        site_detail,
    };
    use catalog::{RecordQuery, RecordStore, SortKey, TypeFilter, query};
    use foundation::ids::RecordId;
    use foundation::math::Vec2;
    use scene::PickOptions;
    use pretty_assertions::assert_eq;
    use runtime::{NavTab, ViewEvent};

    fn store() -> RecordStore {
        RecordStore::builtin().unwrap()
    }

    #[test]
    fn list_ends_with_summary() {
        let s = store();
        let q = RecordQuery::default().with_sort(SortKey::Year);
        let rows = query(s.records(), &q);
        let table = list_table(&rows, s.len());
        assert_eq!(table.lines().count(), 5);
        assert!(table.lines().next().unwrap().contains("حقل البريقة"));
        assert!(table.trim_end().ends_with("عرض 4 من أصل 4 مورد طبيعي"));
    }

    #[test]
    fn detail_includes_technical_fields() {
        let s = store();
        let text = detail(s.get(&RecordId::new("1")).unwrap());
        assert!(text.starts_with("حقل السرير [1]"));
        assert!(text.contains("العمق"));
    }

    #[test]
    fn map_only_site_has_its_own_detail() {
        let s = store();
        assert!(s.get(&RecordId::new("5")).is_none());
        let text = site_detail(s.site(&RecordId::new("5")).unwrap());
        assert!(text.starts_with("منطقة الجفارة [5]"));
        assert!(text.contains("500,000 هكتار"));
    }

    #[test]
    fn pick_selects_through_the_session() {
        let mut session = map_session(store(), TypeFilter::All, 800.0, 400.0);
        let hit = session.click_map(Vec2::new(560.0, 205.0), PickOptions::default());
        assert_eq!(pick_line(&session, hit.as_ref(), 16.0), "3 حقل البريقة (5.0px)");
        assert_eq!(session.state().selected(), Some(&RecordId::new("3")));
    }

    #[test]
    fn pick_respects_type_filter() {
        let mut session = map_session(store(), TypeFilter::parse("oil"), 800.0, 400.0);
        let hit = session.click_map(Vec2::new(560.0, 200.0), PickOptions::default());
        assert_eq!(pick_line(&session, hit.as_ref(), 16.0), "no marker within 16px");
        assert!(session.state().selected().is_none());
    }

    #[test]
    fn every_chart_kind_renders() {
        for kind in [ChartKind::Pie, ChartKind::Line, ChartKind::Bar, ChartKind::Crops] {
            let svg = render_chart(kind, None).unwrap();
            assert!(svg.starts_with("<svg"), "{kind:?}");
        }
    }

    #[test]
    fn map_respects_type_filter() {
        let svg = render_map(&store(), TypeFilter::parse("gas"), 800.0, 400.0);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains("cx=\"560.00\" cy=\"200.00\""));
    }

    #[test]
    fn replay_counts_changes() {
        let events = vec![
            ViewEvent::Navigate(NavTab::Resources),
            ViewEvent::SelectRecord(RecordId::new("4")),
            ViewEvent::SelectRecord(RecordId::new("4")),
            ViewEvent::SelectRecord(RecordId::new("missing")),
        ];
        let report = replay(store(), events).unwrap();
        assert_eq!(report.dispatched, 4);
        assert_eq!(report.changed, 2);
        assert_eq!(report.state.selected(), Some(&RecordId::new("4")));
        assert_eq!(report.view.tab, NavTab::Resources);
        assert_eq!(report.log.len(), 4);
        assert!(!report.log[3].changed);
    }
}
