use foundation::bounds::Aabb2;
use foundation::math::Vec2;

/// A camera fit target, in projected plane coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// An explicit bounding box.
    Bounds(Aabb2),
    /// A finite point set, reduced to its bounding box. Callers wanting
    /// largest-part behavior for multi-part geometries pass that part's
    /// points; part selection belongs to the geometry provider.
    Points(Vec<Vec2>),
    /// The whole projected world, resolved against the fit parameters'
    /// world bounds.
    World,
}

impl Region {
    /// Bounding box of the region, or `None` for an empty point set.
    pub fn resolve(&self, world_bounds: Aabb2) -> Option<Aabb2> {
        match self {
            Region::Bounds(bounds) => Some(*bounds),
            Region::Points(points) => Aabb2::from_points(points),
            Region::World => Some(world_bounds),
        }
    }
}
