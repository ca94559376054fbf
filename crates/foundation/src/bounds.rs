use crate::math::Vec2;

/// Axis-aligned bounding box in projected plane coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb2 {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Aabb2 { min, max }
    }

    /// Tight bounds of a point set; `None` for an empty set.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let mut out = Aabb2::new(first, first);
        for &p in &points[1..] {
            out.expand(p);
        }
        Some(out)
    }

    /// Grows the box to include `point`.
    pub fn expand(&mut self, point: Vec2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    pub fn union(self, other: Self) -> Self {
        let mut out = self;
        out.expand(other.min);
        out.expand(other.max);
        out
    }

    pub fn center(&self) -> Vec2 {
        self.min.midpoint(self.max)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// True when the box has no extent on at least one axis.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
