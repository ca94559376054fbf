use std::collections::BTreeMap;

use catalog::EntityId;
use foundation::bounds::Aabb2;

use crate::region::Region;

/// Boundary to the (external) projection layer: per-entity plane regions
/// plus the projected bounds of the whole world.
pub trait GeometryProvider {
    /// Region for an entity, or `None` when the entity has no geometry
    /// (e.g. a grouping with no features of its own).
    fn region_of(&self, id: &EntityId) -> Option<Region>;

    fn world_bounds(&self) -> Aabb2;
}

/// Fixed region table. Test/CLI provider; real embedders wrap their
/// projection layer instead.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticGeometry {
    regions: BTreeMap<EntityId, Region>,
    world: Aabb2,
}

impl StaticGeometry {
    pub fn new(world: Aabb2) -> Self {
        Self {
            regions: BTreeMap::new(),
            world,
        }
    }

    pub fn with_region(mut self, id: impl Into<String>, region: Region) -> Self {
        self.regions.insert(EntityId::new(id), region);
        self
    }

    pub fn insert(&mut self, id: EntityId, region: Region) {
        self.regions.insert(id, region);
    }
}

impl GeometryProvider for StaticGeometry {
    fn region_of(&self, id: &EntityId) -> Option<Region> {
        self.regions.get(id).cloned()
    }

    fn world_bounds(&self) -> Aabb2 {
        self.world
    }
}

#[cfg(test)]
mod tests {
    use super::{GeometryProvider, StaticGeometry};
    use crate::region::Region;
    use catalog::EntityId;
    use foundation::bounds::Aabb2;
    use foundation::math::Vec2;

    #[test]
    fn lookup_hits_and_misses() {
        let world = Aabb2::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        let geometry = StaticGeometry::new(world).with_region(
            "FRA",
            Region::Bounds(Aabb2::new(Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.5))),
        );

        assert!(geometry.region_of(&EntityId::from("FRA")).is_some());
        assert_eq!(geometry.region_of(&EntityId::from("XXX")), None);
        assert_eq!(geometry.world_bounds(), world);
    }
}
