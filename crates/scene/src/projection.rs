use catalog::{MapSite, ResourceCategory, TypeFilter};
use foundation::ids::RecordId;
use foundation::math::Vec2;
use serde::{Deserialize, Serialize};

/// Map container size in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    pub width: f64,
    pub height: f64,
}

impl MapViewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for MapViewport {
    /// A 384px-high card at a common desktop content width.
    fn default() -> Self {
        Self {
            width: 896.0,
            height: 384.0,
        }
    }
}

/// A map site placed by normalized percentage coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub record_id: RecordId,
    /// Percent of container width, `0..=100`.
    pub x: f64,
    /// Percent of container height, `0..=100`.
    pub y: f64,
    pub category: ResourceCategory,
}

impl MapPoint {
    pub fn from_site(site: &MapSite) -> Self {
        Self {
            record_id: site.id.clone(),
            x: site.position.x,
            y: site.position.y,
            category: site.category,
        }
    }
}

/// Map points for `sites` that pass `filter`, in site order.
pub fn map_points<'a>(
    sites: impl IntoIterator<Item = &'a MapSite>,
    filter: TypeFilter,
) -> Vec<MapPoint> {
    sites
        .into_iter()
        .filter(|s| filter.allows(s.category))
        .map(MapPoint::from_site)
        .collect()
}

/// Percent-to-pixel projection: `left = x/100 * width`, `top = y/100 * height`.
pub fn project(point: &MapPoint, container_width_px: f64, container_height_px: f64) -> Vec2 {
    Vec2::new(
        point.x / 100.0 * container_width_px,
        point.y / 100.0 * container_height_px,
    )
}

/// A map point together with its projected pixel position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub point: MapPoint,
    pub pixel: Vec2,
}

pub fn project_all(points: &[MapPoint], viewport: MapViewport) -> Vec<ProjectedPoint> {
    points
        .iter()
        .map(|p| ProjectedPoint {
            point: p.clone(),
            pixel: project(p, viewport.width, viewport.height),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{MapPoint, MapViewport, map_points, project};
    use catalog::{RecordStore, ResourceCategory, TypeFilter};
    use foundation::ids::RecordId;
    use foundation::math::Vec2;
    use pretty_assertions::assert_eq;

    fn point(x: f64, y: f64) -> MapPoint {
        MapPoint {
            record_id: RecordId::new("p"),
            x,
            y,
            category: ResourceCategory::Oil,
        }
    }

    #[test]
    fn corners_map_to_corners() {
        assert_eq!(project(&point(0.0, 0.0), 800.0, 400.0), Vec2::new(0.0, 0.0));
        assert_eq!(project(&point(100.0, 100.0), 800.0, 400.0), Vec2::new(800.0, 400.0));
    }

    #[test]
    fn projection_is_linear() {
        assert_eq!(project(&point(65.0, 35.0), 200.0, 100.0), Vec2::new(130.0, 35.0));
        assert_eq!(project(&point(50.0, 50.0), 0.0, 0.0), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn builtin_points_follow_type_filter() {
        let store = RecordStore::builtin().unwrap();
        assert_eq!(map_points(store.sites(), TypeFilter::All).len(), 6);

        let oil = map_points(store.sites(), TypeFilter::Only(ResourceCategory::Oil));
        let ids: Vec<&str> = oil.iter().map(|p| p.record_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!((oil[0].x, oil[0].y), (65.0, 35.0));
    }
}
