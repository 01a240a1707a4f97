//! Pure geometry: anchored-popup placement and option-grid sizing.
//!
//! Everything here is a function of viewport size, anchor point, and
//! option count, so placement is fully testable without a DOM.

/// A point in viewport-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

/// Horizontal gap between a hotspot and an anchored popup.
pub const GAP: f64 = 30.0;
/// Minimum clearance kept between a popup and the viewport edges.
pub const MARGIN: f64 = 10.0;
/// Viewport width at or below which the grid drops to two columns.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Place an anchored popup near its hotspot, preferring the right side.
///
/// Fallback order: right of the anchor, left of it, centered above, then
/// below. The final top coordinate is clamped so the popup is never fully
/// off-screen vertically; the left coordinate is floored at the margin.
pub fn place_anchored(anchor: Point, popup: Size, viewport: Size) -> Point {
    let mut top = anchor.y - popup.h / 2.0;
    let mut left = anchor.x + GAP;

    if left + popup.w > viewport.w - MARGIN {
        left = anchor.x - popup.w - GAP;
        if left < MARGIN {
            left = anchor.x - popup.w / 2.0;
            top = anchor.y - popup.h - MARGIN;
            if top < MARGIN {
                top = anchor.y + GAP;
            }
        }
    }

    let max_top = (viewport.h - popup.h - MARGIN).max(MARGIN);
    Point {
        x: left.max(MARGIN),
        y: top.clamp(MARGIN, max_top),
    }
}

// ── Option grid ─────────────────────────────────────────────────────────

const HEADER_HEIGHT: f64 = 52.0;
const LABEL_HEIGHT: f64 = 24.0;

/// Grid parameters for the selector popup at a given viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub columns: usize,
    pub cell: f64,
    pub gap: f64,
    pub padding: f64,
}

impl GridMetrics {
    pub fn for_viewport(viewport_width: f64) -> Self {
        if viewport_width <= MOBILE_BREAKPOINT {
            Self { columns: 2, cell: 70.0, gap: 6.0, padding: 20.0 }
        } else {
            Self { columns: 4, cell: 80.0, gap: 8.0, padding: 30.0 }
        }
    }

    /// Cells in the first row; this alone determines popup width, so
    /// added rows extend the popup downward without widening it.
    pub fn first_row(&self, count: usize) -> usize {
        count.min(self.columns).max(1)
    }

    pub fn rows(&self, count: usize) -> usize {
        count.max(1).div_ceil(self.columns)
    }

    /// Computed popup size for `count` options.
    pub fn popup_size(&self, count: usize) -> Size {
        let first_row = self.first_row(count) as f64;
        let rows = self.rows(count) as f64;
        let cell_h = self.cell + LABEL_HEIGHT;
        Size {
            w: first_row * self.cell + (first_row - 1.0) * self.gap + self.padding,
            h: HEADER_HEIGHT + rows * cell_h + (rows - 1.0) * self.gap + self.padding,
        }
    }
}
