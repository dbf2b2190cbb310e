pub struct Statistics;

impl Statistics {
    pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
        let first = *values.first()?;
        let mut min = first;
        let mut max = first;
        for &v in values.iter().skip(1) {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }

    pub fn total(values: &[f64]) -> f64 {
        let mut sum = 0.0;
        for &v in values {
            sum += v;
        }
        sum
    }

    /// Maximum over several value slices; `None` when every slice is empty.
    pub fn max_all<'a>(groups: impl IntoIterator<Item = &'a [f64]>) -> Option<f64> {
        groups
            .into_iter()
            .filter_map(|g| Self::min_max(g).map(|(_, max)| max))
            .reduce(f64::max)
    }
}
