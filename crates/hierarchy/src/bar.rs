use catalog::EntityId;

use crate::tree::{Hierarchy, NodeId};

/// Stacked-bar geometry parameters.
///
/// `width_px` is the usable bar width (viewport width minus the bar's own
/// margins). `padding_px` is a fixed gap between adjacent leaf spans; it is
/// subtracted at render level only and never feeds back into the aggregate
/// math.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BarParams {
    pub width_px: f64,
    pub padding_px: f64,
}

impl Default for BarParams {
    fn default() -> Self {
        Self {
            width_px: 640.0,
            padding_px: 0.0,
        }
    }
}

/// One leaf segment of the stacked bar, plus the label metadata the
/// presentation layer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpan {
    pub id: EntityId,
    pub node: NodeId,
    pub start_px: f64,
    pub end_px: f64,
    /// Share of the total aggregate, in `[0, 1]`.
    pub fraction: f64,
    /// Whether the segment's midpoint sits in the left half of the bar.
    /// Labels anchor at the left edge when true, at the right edge otherwise,
    /// so they never run off the bar ends.
    pub left_justified: bool,
}

impl BarSpan {
    pub fn width_px(&self) -> f64 {
        self.end_px - self.start_px
    }

    /// Percentage label for the segment. Shares below one tenth of a percent
    /// collapse to a floor marker instead of rounding to a misleading 0.0%.
    pub fn percent_label(&self) -> String {
        if self.fraction < 0.001 {
            "\u{2264} 0.1%".to_string()
        } else {
            format!("{:.1}%", self.fraction * 100.0)
        }
    }
}

/// Maps leaf intervals to pixel spans, left to right.
///
/// Zero-aggregate leaves are skipped entirely (zero-width segments are not
/// drawable and not hoverable). When the catalog aggregates to zero there is
/// nothing to draw and the result is empty.
pub fn bar_spans(hierarchy: &Hierarchy, params: &BarParams) -> Vec<BarSpan> {
    let total = hierarchy.total_aggregate();
    if total <= 0.0 || params.width_px <= 0.0 {
        return Vec::new();
    }

    let px_per_unit = params.width_px / total;
    let inset = (params.padding_px * 0.5).max(0.0);
    let half_width = params.width_px * 0.5;

    let mut out = Vec::new();
    for node_id in hierarchy.leaves_in_layout_order() {
        let node = hierarchy.node(node_id);
        if node.aggregate_value <= 0.0 {
            continue;
        }
        let Some(id) = node.id() else { continue };

        let raw_start = node.interval.start * px_per_unit;
        let raw_end = node.interval.end * px_per_unit;
        let mid = (raw_start + raw_end) * 0.5;

        // Inset both edges by half the padding; a segment narrower than the
        // padding collapses to its midpoint rather than inverting.
        let start_px = (raw_start + inset).min(mid);
        let end_px = (raw_end - inset).max(mid);

        out.push(BarSpan {
            id: id.clone(),
            node: node_id,
            start_px,
            end_px,
            fraction: node.aggregate_value / total,
            left_justified: mid < half_width,
        });
    }
    out
}
