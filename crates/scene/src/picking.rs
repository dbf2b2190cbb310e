use foundation::ids::RecordId;
use foundation::math::Vec2;
use foundation::math::precision::stable_total_cmp_f64;

use crate::projection::ProjectedPoint;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickOptions {
    /// Hit radius around each marker center, in pixels.
    pub radius_px: f64,
}

impl Default for PickOptions {
    /// Markers render as 32px circles.
    fn default() -> Self {
        Self { radius_px: 16.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    pub record_id: RecordId,
    pub index: usize,
    pub distance: f64,
    pub pixel: Vec2,
}

/// Deterministic marker picking.
///
/// Ordering contract:
/// - The closest marker center within `radius_px` wins.
/// - If several markers are at the same distance, the lower input index wins.
pub fn pick_nearest(points: &[ProjectedPoint], cursor: Vec2, opts: PickOptions) -> Option<PickHit> {
    let mut best: Option<(f64, usize)> = None;

    for (idx, p) in points.iter().enumerate() {
        let d = p.pixel.distance(cursor);
        if !(d <= opts.radius_px) {
            continue;
        }
        best = match best {
            None => Some((d, idx)),
            Some((bd, bi)) => {
                let ord = stable_total_cmp_f64(d, bd).then_with(|| idx.cmp(&bi));
                if ord.is_lt() {
                    Some((d, idx))
                } else {
                    Some((bd, bi))
                }
            }
        };
    }

    let (distance, index) = best?;
    let hit = &points[index];
    Some(PickHit {
        record_id: hit.point.record_id.clone(),
        index,
        distance,
        pixel: hit.pixel,
    })
}

#[cfg(test)]
mod tests {
    use super::{PickOptions, pick_nearest};
    use crate::projection::{MapPoint, MapViewport, project_all};
    use catalog::ResourceCategory;
    use foundation::ids::RecordId;
    use foundation::math::Vec2;
    use pretty_assertions::assert_eq;

    fn mp(id: &str, x: f64, y: f64) -> MapPoint {
        MapPoint {
            record_id: RecordId::new(id),
            x,
            y,
            category: ResourceCategory::Gas,
        }
    }

    #[test]
    fn picks_nearest_marker_in_radius() {
        let vp = MapViewport::new(100.0, 100.0);
        let pts = project_all(&[mp("a", 10.0, 10.0), mp("b", 20.0, 10.0)], vp);
        let hit = pick_nearest(&pts, Vec2::new(17.0, 10.0), PickOptions::default()).expect("hit");
        assert_eq!(hit.record_id, RecordId::new("b"));
        assert_eq!(hit.index, 1);
        assert_eq!(hit.distance, 3.0);
    }

    #[test]
    fn misses_outside_radius() {
        let vp = MapViewport::new(100.0, 100.0);
        let pts = project_all(&[mp("a", 10.0, 10.0)], vp);
        let opts = PickOptions { radius_px: 5.0 };
        assert!(pick_nearest(&pts, Vec2::new(30.0, 30.0), opts).is_none());
        assert!(pick_nearest(&[], Vec2::new(0.0, 0.0), opts).is_none());
    }

    #[test]
    fn tie_breaks_by_input_index() {
        let vp = MapViewport::new(100.0, 100.0);
        let pts = project_all(&[mp("left", 40.0, 50.0), mp("right", 60.0, 50.0)], vp);
        let hit = pick_nearest(&pts, Vec2::new(50.0, 50.0), PickOptions { radius_px: 10.0 })
            .expect("hit");
        assert_eq!(hit.record_id, RecordId::new("left"));
    }
}
