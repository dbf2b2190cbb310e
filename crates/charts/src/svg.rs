//! Standalone SVG documents for the chart and map primitives.
//!
//! The output is plain markup assembled with `format!`; it carries no script
//! and no external references.

use std::fmt::Write as _;

use foundation::math::Vec2;

use crate::pie::{PieGeometry, donut_segment_path};
use crate::series::{CartesianLayout, SeriesSet, bar_rects, line_paths, y_ticks};

const FONT: &str = "font-family=\"sans-serif\"";
const GRID_COLOR: &str = "#e5e7eb";

/// Simplified country outline in percent coordinates.
const MAP_OUTLINE: &str = "M 10 30 Q 15 25 25 25 L 85 25 Q 90 30 90 35 \
    L 90 70 Q 85 75 80 75 L 15 75 Q 10 70 10 65 Z";

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn open(width: f64, height: f64) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\" direction=\"rtl\">\n"
    )
}

/// Pie drawn as dashed circle strokes, one circle per slice.
///
/// Each stroke is rotated so dashes start at 12 o'clock; `stroke-dashoffset`
/// places the slice after its predecessors.
pub fn pie_svg(pie: &PieGeometry, stroke_width: f64) -> String {
    let pad = stroke_width;
    let size = 2.0 * (pie.radius + pad);
    let c = size * 0.5;
    let mut svg = open(size, size);
    for s in &pie.slices {
        let _ = writeln!(
            svg,
            "  <circle cx=\"{c}\" cy=\"{c}\" r=\"{r}\" fill=\"transparent\" stroke=\"{color}\" \
             stroke-width=\"{stroke_width}\" stroke-dasharray=\"{dash:.4} {gap:.4}\" \
             stroke-dashoffset=\"{offset:.4}\" transform=\"rotate(-90 {c} {c})\">\
             <title>{label} ({pct}%)</title></circle>",
            r = pie.radius,
            color = escape_xml(&s.color),
            dash = s.dash_length,
            gap = s.gap_length,
            offset = s.dash_offset(pie.circumference),
            label = escape_xml(&s.label),
            pct = s.percent,
        );
    }
    svg.push_str("</svg>\n");
    svg
}

/// Donut with per-slice annular paths and percentage labels outside the ring.
pub fn donut_svg(pie: &PieGeometry, inner_radius: f64) -> String {
    let outer = pie.radius;
    let label_radius = outer * 1.25;
    let size = 2.0 * outer * 1.6;
    let center = Vec2::new(size * 0.5, size * 0.5);
    let mut svg = open(size, size);
    for s in &pie.slices {
        let d = donut_segment_path(s, center, outer, inner_radius);
        if d.is_empty() {
            continue;
        }
        let _ = writeln!(
            svg,
            "  <path d=\"{d}\" fill=\"{}\" fill-rule=\"evenodd\"/>",
            escape_xml(&s.color)
        );
        let at = s.label_anchor(center, label_radius);
        let anchor = if at.x >= center.x { "start" } else { "end" };
        let _ = writeln!(
            svg,
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{anchor}\" {FONT} \
             font-size=\"12\">{} ({:.0}%)</text>",
            at.x,
            at.y,
            escape_xml(&s.label),
            s.percent
        );
    }
    svg.push_str("</svg>\n");
    svg
}

fn frame_size(set: &SeriesSet, layout: &CartesianLayout) -> (f64, f64) {
    let n = set.categories().len().max(1);
    let width = layout.x_pixel(n - 1) + layout.group_width(set.series().len()) + layout.x_origin;
    let height = layout.baseline + 40.0;
    (width, height)
}

fn axes(svg: &mut String, set: &SeriesSet, layout: &CartesianLayout, width: f64) {
    for t in y_ticks(set, layout, 4) {
        let _ = writeln!(
            svg,
            "  <line x1=\"{x0}\" y1=\"{y:.2}\" x2=\"{width}\" y2=\"{y:.2}\" \
             stroke=\"{GRID_COLOR}\" stroke-dasharray=\"3 3\"/>\n  \
             <text x=\"{tx}\" y=\"{y:.2}\" text-anchor=\"end\" {FONT} font-size=\"11\">{v}</text>",
            x0 = layout.x_origin * 0.5,
            y = t.y,
            tx = layout.x_origin * 0.5 - 4.0,
            v = t.value.round(),
        );
    }
    for (i, c) in set.categories().iter().enumerate() {
        let _ = writeln!(
            svg,
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" {FONT} \
             font-size=\"12\">{}</text>",
            layout.x_pixel(i),
            layout.baseline + 20.0,
            escape_xml(c)
        );
    }
}

pub fn line_svg(set: &SeriesSet, layout: &CartesianLayout) -> String {
    let (width, height) = frame_size(set, layout);
    let mut svg = open(width, height);
    axes(&mut svg, set, layout, width);
    for line in line_paths(set, layout) {
        let points: Vec<String> = line
            .points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect();
        let _ = writeln!(
            svg,
            "  <polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"3\">\
             <title>{}</title></polyline>",
            points.join(" "),
            escape_xml(&line.color),
            escape_xml(&line.name)
        );
        for p in &line.points {
            let _ = writeln!(
                svg,
                "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"5\" fill=\"{}\"/>",
                p.x,
                p.y,
                escape_xml(&line.color)
            );
        }
    }
    svg.push_str("</svg>\n");
    svg
}

pub fn bar_svg(set: &SeriesSet, layout: &CartesianLayout) -> String {
    let (width, height) = frame_size(set, layout);
    let mut svg = open(width, height);
    axes(&mut svg, set, layout, width);
    for bar in bar_rects(set, layout) {
        let _ = writeln!(
            svg,
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"4\" \
             fill=\"{}\"><title>{} / {}</title></rect>",
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            escape_xml(&bar.color),
            escape_xml(&bar.category),
            escape_xml(&bar.series)
        );
    }
    svg.push_str("</svg>\n");
    svg
}

/// A map marker already projected to pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGlyph {
    pub position: Vec2,
    pub color: String,
    pub label: String,
    pub selected: bool,
}

/// Map container with the country outline and one circle per marker.
pub fn map_svg(width: f64, height: f64, markers: &[MarkerGlyph]) -> String {
    let mut svg = open(width, height);
    let _ = writeln!(
        svg,
        "  <rect width=\"{width}\" height=\"{height}\" fill=\"#fefce8\"/>\n  \
         <path d=\"{MAP_OUTLINE}\" transform=\"scale({sx} {sy})\" fill=\"none\" stroke=\"#16A085\" \
         stroke-width=\"0.5\" opacity=\"0.3\" vector-effect=\"non-scaling-stroke\"/>",
        sx = width / 100.0,
        sy = height / 100.0,
    );
    for m in markers {
        let ring = if m.selected {
            " stroke=\"#4ade80\" stroke-width=\"3\""
        } else {
            ""
        };
        let _ = writeln!(
            svg,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"16\" fill=\"{}\"{ring}>\
             <title>{}</title></circle>",
            m.position.x,
            m.position.y,
            escape_xml(&m.color),
            escape_xml(&m.label)
        );
    }
    svg.push_str("</svg>\n");
    svg
}
