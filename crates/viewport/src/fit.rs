use foundation::bounds::Aabb2;
use foundation::math::Vec2;

use crate::region::Region;

/// Hard clamp on the camera scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

impl ScaleRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        // The zoom extent used across the dashboard family.
        Self {
            min: 1.0,
            max: 20.0,
        }
    }
}

/// Inputs to [`fit`], independent of the target region.
#[derive(Debug, Clone, PartialEq)]
pub struct FitParams {
    /// Display area actually available; callers pass a sub-region's size
    /// when a side panel eats into the viewport.
    pub viewport: Vec2,
    /// Fractional shrink so the region does not touch the viewport edges.
    pub margin: f64,
    pub scale_range: ScaleRange,
    /// Viewport-space point the region center maps to; `None` means the
    /// viewport center.
    pub anchor: Option<Vec2>,
    /// Resolution of [`Region::World`], supplied by the geometry provider.
    pub world_bounds: Aabb2,
}

impl FitParams {
    pub fn new(viewport: Vec2, world_bounds: Aabb2) -> Self {
        Self {
            viewport,
            margin: 0.9,
            scale_range: ScaleRange::default(),
            anchor: None,
            world_bounds,
        }
    }

    /// Anchors the region at a quarter of the viewport width, leaving the
    /// right half free for a docked detail panel.
    pub fn with_panel_anchor(mut self) -> Self {
        self.anchor = Some(Vec2::new(self.viewport.x / 4.0, self.viewport.y / 2.0));
        self
    }

    fn anchor_point(&self) -> Vec2 {
        self.anchor.unwrap_or(self.viewport * 0.5)
    }
}

/// Camera transform: `point' = translate + scale * point`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub scale: f64,
    pub translate: Vec2,
}

impl Camera {
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.translate + point * self.scale
    }
}

/// Computes the camera that frames `region` inside the viewport.
///
/// Pure and deterministic: identical inputs produce bit-identical outputs,
/// which animated transitions and the tests both rely on.
///
/// Fallbacks, in order:
/// - An empty region (no points) falls back to the whole-world fit.
/// - A fully degenerate region (no extent on either axis) pins to the
///   maximum scale, centered on the point.
pub fn fit(region: &Region, params: &FitParams) -> Camera {
    let bounds = match region.resolve(params.world_bounds) {
        Some(bounds) => bounds,
        None => {
            tracing::debug!("empty fit region, falling back to world fit");
            params.world_bounds
        }
    };

    let scale = params.scale_range.clamp(raw_scale(bounds, params));
    let anchor = params.anchor_point();
    let translate = anchor - bounds.center() * scale;

    Camera { scale, translate }
}

fn raw_scale(bounds: Aabb2, params: &FitParams) -> f64 {
    let width = bounds.width();
    let height = bounds.height();

    // Per-axis fit ratios; an axis without extent imposes no constraint.
    let fit_x = if width > 0.0 {
        params.viewport.x / width
    } else {
        f64::INFINITY
    };
    let fit_y = if height > 0.0 {
        params.viewport.y / height
    } else {
        f64::INFINITY
    };

    let raw = params.margin * fit_x.min(fit_y);
    if raw.is_finite() { raw } else { params.scale_range.max }
}

#[cfg(test)]
mod tests {
    use super::{Camera, FitParams, ScaleRange, fit};
    use crate::region::Region;
    use foundation::bounds::Aabb2;
    use foundation::math::Vec2;

    fn params() -> FitParams {
        FitParams {
            viewport: Vec2::new(200.0, 200.0),
            margin: 0.9,
            scale_range: ScaleRange::new(0.5, 10.0),
            anchor: None,
            world_bounds: Aabb2::new(Vec2::new(-500.0, -250.0), Vec2::new(500.0, 250.0)),
        }
    }

    #[test]
    fn fits_region_and_centers_it() {
        let region = Region::Bounds(Aabb2::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 50.0)));
        let camera = fit(&region, &params());

        // 0.9 * min(200/100, 200/50) = 1.8, inside the clamp range.
        assert_eq!(camera.scale, 1.8);
        // The bbox midpoint [50, 25] lands on the viewport center [100, 100].
        assert_eq!(camera.apply(Vec2::new(50.0, 25.0)), Vec2::new(100.0, 100.0));
        assert_eq!(camera.translate, Vec2::new(10.0, 55.0));
    }

    #[test]
    fn scale_is_clamped_to_the_range() {
        let tiny = Region::Bounds(Aabb2::new(Vec2::new(0.0, 0.0), Vec2::new(0.1, 0.1)));
        assert_eq!(fit(&tiny, &params()).scale, 10.0);

        let huge = Region::Bounds(Aabb2::new(
            Vec2::new(-10_000.0, -10_000.0),
            Vec2::new(10_000.0, 10_000.0),
        ));
        assert_eq!(fit(&huge, &params()).scale, 0.5);
    }

    #[test]
    fn fit_is_pure() {
        let region = Region::Points(vec![Vec2::new(3.0, 4.0), Vec2::new(-7.0, 12.0)]);
        let a = fit(&region, &params());
        let b = fit(&region, &params());
        assert_eq!(a, b);
    }

    #[test]
    fn empty_points_fall_back_to_world_fit() {
        let empty = fit(&Region::Points(Vec::new()), &params());
        let world = fit(&Region::World, &params());
        assert_eq!(empty, world);
        assert!(empty.scale.is_finite());
        assert!(empty.translate.is_finite());
    }

    #[test]
    fn degenerate_point_region_pins_to_max_scale() {
        let point = Region::Bounds(Aabb2::new(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)));
        let camera = fit(&point, &params());
        assert_eq!(camera.scale, 10.0);
        // Still centered on the point.
        assert_eq!(camera.apply(Vec2::new(5.0, 5.0)), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn zero_width_region_fits_on_the_other_axis() {
        let line = Region::Bounds(Aabb2::new(Vec2::new(5.0, 0.0), Vec2::new(5.0, 100.0)));
        let camera = fit(&line, &params());
        assert_eq!(camera.scale, 0.9 * 2.0);
    }

    #[test]
    fn off_center_anchor_shifts_the_target() {
        let region = Region::Bounds(Aabb2::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 50.0)));
        let camera = fit(&region, &params().with_panel_anchor());
        assert_eq!(camera.apply(Vec2::new(50.0, 25.0)), Vec2::new(50.0, 100.0));
    }

    #[test]
    fn world_fit_respects_margin() {
        let camera = fit(&Region::World, &params());
        let Camera { scale, .. } = camera;
        // 0.9 * min(200/1000, 200/500) = 0.18, clamped up to 0.5.
        assert_eq!(scale, 0.5);
    }
}
