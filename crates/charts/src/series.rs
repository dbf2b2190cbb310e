use foundation::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::statistics::Statistics;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    LengthMismatch {
        series: String,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::LengthMismatch {
                series,
                expected,
                found,
            } => write!(
                f,
                "series {series:?} has {found} samples, expected one per category ({expected})"
            ),
        }
    }
}

impl std::error::Error for ChartError {}

/// A named sequence of samples, one per category of its `SeriesSet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
        }
    }
}

/// Several series sampled at the same ordered categories (years, regions).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSet {
    categories: Vec<String>,
    series: Vec<Series>,
}

impl SeriesSet {
    pub fn new(categories: Vec<String>, series: Vec<Series>) -> Result<Self, ChartError> {
        for s in &series {
            if s.values.len() != categories.len() {
                return Err(ChartError::LengthMismatch {
                    series: s.name.clone(),
                    expected: categories.len(),
                    found: s.values.len(),
                });
            }
        }
        Ok(Self { categories, series })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Maximum over every value of every series; 0 for an empty set.
    pub fn max_value(&self) -> f64 {
        Statistics::max_all(self.series.iter().map(|s| s.values.as_slice())).unwrap_or(0.0)
    }
}

/// Fixed plotting frame for line and bar charts, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CartesianLayout {
    /// X of the first category.
    pub x_origin: f64,
    /// Distance between consecutive categories.
    pub x_step: f64,
    /// Y of the value axis zero line.
    pub baseline: f64,
    /// Pixel height that the maximum value reaches above `baseline`.
    pub plot_height: f64,
    pub bar_width: f64,
    /// Space between side-by-side bars of one category.
    pub bar_gap: f64,
}

impl Default for CartesianLayout {
    fn default() -> Self {
        Self {
            x_origin: 60.0,
            x_step: 100.0,
            baseline: 260.0,
            plot_height: 220.0,
            bar_width: 18.0,
            bar_gap: 4.0,
        }
    }
}

impl CartesianLayout {
    pub fn x_pixel(&self, index: usize) -> f64 {
        self.x_origin + index as f64 * self.x_step
    }

    /// `baseline - value / max * plot_height`.
    ///
    /// A non-positive (or non-finite) `max` means there is nothing to scale
    /// against; every value then sits on the baseline.
    pub fn y_pixel(&self, value: f64, max: f64) -> f64 {
        if !(max > 0.0) || !max.is_finite() {
            return self.baseline;
        }
        self.baseline - (value / max) * self.plot_height
    }

    /// Horizontal offset of series `series_index` within a bar group.
    pub fn bar_offset(&self, series_index: usize) -> f64 {
        series_index as f64 * (self.bar_width + self.bar_gap)
    }

    /// Total width of a bar group holding `series_count` bars.
    pub fn group_width(&self, series_count: usize) -> f64 {
        if series_count == 0 {
            return 0.0;
        }
        self.bar_offset(series_count - 1) + self.bar_width
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub name: String,
    pub color: String,
    pub points: Vec<Vec2>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarRect {
    pub series: String,
    pub category: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

/// One polyline per series, in series order.
pub fn line_paths(set: &SeriesSet, layout: &CartesianLayout) -> Vec<Polyline> {
    let max = set.max_value();
    set.series()
        .iter()
        .map(|s| Polyline {
            name: s.name.clone(),
            color: s.color.clone(),
            points: s
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| Vec2::new(layout.x_pixel(i), layout.y_pixel(v, max)))
                .collect(),
        })
        .collect()
}

/// Grouped bars: for each category, one bar per series laid out left to right.
///
/// Ordering contract: category-major, then series order.
pub fn bar_rects(set: &SeriesSet, layout: &CartesianLayout) -> Vec<BarRect> {
    let max = set.max_value();
    let mut out = Vec::with_capacity(set.categories().len() * set.series().len());
    for (ci, category) in set.categories().iter().enumerate() {
        let group_x = layout.x_pixel(ci);
        for (si, s) in set.series().iter().enumerate() {
            let top = layout.y_pixel(s.values[ci], max);
            out.push(BarRect {
                series: s.name.clone(),
                category: category.clone(),
                color: s.color.clone(),
                x: group_x + layout.bar_offset(si),
                y: top.min(layout.baseline),
                width: layout.bar_width,
                height: (layout.baseline - top).abs(),
            });
        }
    }
    out
}

/// `count` equal steps from zero to the dataset maximum (inclusive).
///
/// An all-zero dataset yields a single tick on the baseline.
pub fn y_ticks(set: &SeriesSet, layout: &CartesianLayout, count: usize) -> Vec<Tick> {
    let max = set.max_value();
    if !(max > 0.0) || count == 0 {
        return vec![Tick {
            value: 0.0,
            y: layout.baseline,
        }];
    }
    (0..=count)
        .map(|i| {
            let value = max * i as f64 / count as f64;
            Tick {
                value,
                y: layout.y_pixel(value, max),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{CartesianLayout, ChartError, Series, SeriesSet, bar_rects, line_paths, y_ticks};
    use pretty_assertions::assert_eq;

    fn years() -> SeriesSet {
        SeriesSet::new(
            vec!["2019".into(), "2020".into(), "2021".into()],
            vec![
                Series::new("oil", "#F39C12", vec![1200.0, 950.0, 1400.0]),
                Series::new("gas", "#3498DB", vec![850.0, 780.0, 700.0]),
            ],
        )
        .unwrap()
    }

    fn layout() -> CartesianLayout {
        CartesianLayout {
            x_origin: 10.0,
            x_step: 50.0,
            baseline: 200.0,
            plot_height: 140.0,
            bar_width: 10.0,
            bar_gap: 2.0,
        }
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = SeriesSet::new(
            vec!["a".into(), "b".into()],
            vec![Series::new("s", "#000", vec![1.0])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ChartError::LengthMismatch {
                series: "s".into(),
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn max_is_taken_across_all_series() {
        assert_eq!(years().max_value(), 1400.0);
    }

    #[test]
    fn line_points_scale_against_global_max() {
        let lines = line_paths(&years(), &layout());
        assert_eq!(lines.len(), 2);
        let oil = &lines[0];
        assert_eq!(oil.points[0].x, 10.0);
        assert_eq!(oil.points[2].x, 110.0);
        // 1400 is the max: it reaches the top of the plot.
        assert_eq!(oil.points[2].y, 200.0 - 140.0);
        assert_eq!(oil.points[0].y, 200.0 - 1200.0 / 1400.0 * 140.0);
    }

    #[test]
    fn scaling_is_idempotent() {
        let a = line_paths(&years(), &layout());
        let b = line_paths(&years(), &layout());
        assert_eq!(a, b);
    }

    #[test]
    fn all_zero_dataset_stays_on_baseline() {
        let set = SeriesSet::new(
            vec!["east".into(), "west".into()],
            vec![
                Series::new("oil", "#000", vec![0.0, 0.0]),
                Series::new("gas", "#111", vec![0.0, 0.0]),
            ],
        )
        .unwrap();
        let l = layout();
        for line in line_paths(&set, &l) {
            assert!(line.points.iter().all(|p| p.y == l.baseline));
        }
        for bar in bar_rects(&set, &l) {
            assert_eq!(bar.height, 0.0);
            assert_eq!(bar.y, l.baseline);
        }
        assert_eq!(y_ticks(&set, &l, 4).len(), 1);
    }

    #[test]
    fn bars_sit_side_by_side_per_category() {
        let l = layout();
        let bars = bar_rects(&years(), &l);
        assert_eq!(bars.len(), 6);

        assert_eq!((bars[0].category.as_str(), bars[0].series.as_str()), ("2019", "oil"));
        assert_eq!((bars[1].category.as_str(), bars[1].series.as_str()), ("2019", "gas"));
        assert_eq!(bars[0].x, 10.0);
        assert_eq!(bars[1].x, 22.0);
        assert_eq!(bars[2].x, 60.0);

        let tallest = &bars[4];
        assert_eq!(tallest.series, "oil");
        assert_eq!(tallest.height, 140.0);
        assert_eq!(tallest.y + tallest.height, l.baseline);
        assert_eq!(l.group_width(2), 22.0);
    }

    #[test]
    fn ticks_span_zero_to_max() {
        let l = layout();
        let ticks = y_ticks(&years(), &l, 4);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0].value, 0.0);
        assert_eq!(ticks[0].y, l.baseline);
        assert_eq!(ticks[4].value, 1400.0);
        assert_eq!(ticks[4].y, l.baseline - l.plot_height);
    }

    #[test]
    fn empty_set_has_zero_max() {
        let set = SeriesSet::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!(set.max_value(), 0.0);
        assert!(bar_rects(&set, &layout()).is_empty());
    }
}
