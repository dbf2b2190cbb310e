use std::f64::consts::PI;

use foundation::math::{PIXEL_EPSILON, Vec2, approx_eq_f64};
use serde::Serialize;
use tracing::debug;

use crate::datum::ChartDatum;
use crate::statistics::Statistics;

/// Angle (degrees, clockwise from +x in screen space) where the first slice starts: 12 o'clock.
pub const ORIGIN_ANGLE_DEG: f64 = -90.0;

/// Pie values are percentages of this total.
pub const FULL_PERCENT: f64 = 100.0;

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Screen-space point on a circle. Angles grow clockwise because `y` points down.
pub fn polar_to_cartesian(center: Vec2, radius: f64, angle_deg: f64) -> Vec2 {
    let rad = angle_deg.to_radians();
    center + Vec2::new(rad.cos(), rad.sin()).scale(radius)
}

/// One arc of a pie, described as a dash on the circle's stroke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub color: String,
    pub percent: f64,
    /// Arc length covered by this slice.
    pub dash_length: f64,
    /// `circumference - dash_length`.
    pub gap_length: f64,
    /// Sum of all previous slices' `dash_length`.
    pub rotation_offset: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
}

impl PieSlice {
    pub fn sweep_deg(&self) -> f64 {
        self.end_angle_deg - self.start_angle_deg
    }

    pub fn mid_angle_deg(&self) -> f64 {
        (self.start_angle_deg + self.end_angle_deg) * 0.5
    }

    /// Where a label for this slice sits at distance `radius` from `center`.
    pub fn label_anchor(&self, center: Vec2, radius: f64) -> Vec2 {
        polar_to_cartesian(center, radius, self.mid_angle_deg())
    }

    /// SVG `stroke-dashoffset` that starts this slice's dash at `rotation_offset`
    /// along a circle of the given circumference.
    pub fn dash_offset(&self, circumference: f64) -> f64 {
        circumference - self.rotation_offset
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieGeometry {
    pub radius: f64,
    pub circumference: f64,
    pub slices: Vec<PieSlice>,
}

impl PieGeometry {
    /// Total arc length covered by all slices.
    pub fn covered_length(&self) -> f64 {
        self.slices.iter().map(|s| s.dash_length).sum()
    }

    /// Whether the slices tile the whole circle.
    pub fn is_closed(&self) -> bool {
        approx_eq_f64(self.covered_length(), self.circumference, PIXEL_EPSILON)
    }
}

/// Convert percentages into contiguous arcs around a circle of `radius`.
///
/// Values are used as given. If they do not sum to 100 the slices simply do
/// not tile the full circle (or overlap past it).
pub fn pie_slices(data: &[ChartDatum], radius: f64) -> PieGeometry {
    let circ = circumference(radius);
    let mut slices = Vec::with_capacity(data.len());
    let mut offset = 0.0;
    let mut percent_before = 0.0;
    for d in data {
        let dash = circ * d.value / FULL_PERCENT;
        let start = ORIGIN_ANGLE_DEG + percent_before / FULL_PERCENT * 360.0;
        let end = ORIGIN_ANGLE_DEG + (percent_before + d.value) / FULL_PERCENT * 360.0;
        slices.push(PieSlice {
            label: d.label.clone(),
            color: d.color.clone(),
            percent: d.value,
            dash_length: dash,
            gap_length: circ - dash,
            rotation_offset: offset,
            start_angle_deg: start,
            end_angle_deg: end,
        });
        offset += dash;
        percent_before += d.value;
    }

    let geometry = PieGeometry {
        radius,
        circumference: circ,
        slices,
    };
    if !geometry.is_closed() {
        let values: Vec<f64> = data.iter().map(|d| d.value).collect();
        let total = Statistics::total(&values);
        debug!(total, "pie input does not sum to 100; slices will not tile the circle");
    }
    geometry
}

/// SVG path for the annular sector of `slice` between `inner` and `outer` radii.
///
/// A slice covering the full circle is emitted as two half arcs, since a
/// single arc whose endpoints coincide renders nothing.
pub fn donut_segment_path(slice: &PieSlice, center: Vec2, outer: f64, inner: f64) -> String {
    let sweep = slice.sweep_deg();
    if sweep <= 0.0 {
        return String::new();
    }
    if sweep >= 360.0 {
        let a = slice.start_angle_deg;
        let b = a + 180.0;
        let (o0, o1) = (
            polar_to_cartesian(center, outer, a),
            polar_to_cartesian(center, outer, b),
        );
        let (i0, i1) = (
            polar_to_cartesian(center, inner, a),
            polar_to_cartesian(center, inner, b),
        );
        return format!(
            "M {:.3} {:.3} A {outer} {outer} 0 1 1 {:.3} {:.3} \
             A {outer} {outer} 0 1 1 {:.3} {:.3} \
             M {:.3} {:.3} A {inner} {inner} 0 1 0 {:.3} {:.3} \
             A {inner} {inner} 0 1 0 {:.3} {:.3} Z",
            o0.x, o0.y, o1.x, o1.y, o0.x, o0.y, i0.x, i0.y, i1.x, i1.y, i0.x, i0.y
        );
    }

    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    let os = polar_to_cartesian(center, outer, slice.start_angle_deg);
    let oe = polar_to_cartesian(center, outer, slice.end_angle_deg);
    let is = polar_to_cartesian(center, inner, slice.start_angle_deg);
    let ie = polar_to_cartesian(center, inner, slice.end_angle_deg);
    format!(
        "M {:.3} {:.3} A {outer} {outer} 0 {large_arc} 1 {:.3} {:.3} L {:.3} {:.3} \
         A {inner} {inner} 0 {large_arc} 0 {:.3} {:.3} Z",
        os.x, os.y, oe.x, oe.y, ie.x, ie.y, is.x, is.y
    )
}
