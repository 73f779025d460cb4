use tracing::info;

use crate::config::CardConfig;
use crate::holes::{self, Hole, HoleCounts};
use crate::pattern::PatternGrid;

const OUTLINE_CORNER: f64 = 2.0;
const OUTLINE_EDGE: f64 = 1.0;
const NOTCH_START: f64 = 20.0;
const NOTCH_END: f64 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Physical card size and the grid counts it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardDimensions {
    pub rows: usize,
    pub stitches: usize,
    pub width: f64,
    pub height: f64,
}

impl CardDimensions {
    pub fn compute(grid: &PatternGrid, config: &CardConfig) -> Self {
        let rows = grid.rows();
        let stitches = grid.stitches();
        Self {
            rows,
            stitches,
            width: config.side_margin * 2.0 + stitches as f64 * config.stitch_width,
            height: (config.blank_rows * 2 + rows) as f64 * config.row_height,
        }
    }

    /// Pattern rows plus leader and trailer rows.
    pub fn total_rows(&self, config: &CardConfig) -> usize {
        self.rows + config.blank_rows * 2
    }
}

/// Closed 16-point outline: bevelled corners plus a notch on each long side.
pub fn outline(dims: &CardDimensions) -> Vec<Point> {
    let (w, h) = (dims.width, dims.height);
    let (c, e) = (OUTLINE_CORNER, OUTLINE_EDGE);
    vec![
        Point::new(c, 0.0),
        Point::new(w - c, 0.0),
        Point::new(w - e, e),
        Point::new(w - e, NOTCH_START),
        Point::new(w, NOTCH_END),
        Point::new(w, h - NOTCH_END),
        Point::new(w - e, h - NOTCH_START),
        Point::new(w - e, h - e),
        Point::new(w - c, h),
        Point::new(c, h),
        Point::new(e, h - e),
        Point::new(e, h - NOTCH_START),
        Point::new(0.0, h - NOTCH_END),
        Point::new(0.0, NOTCH_END),
        Point::new(e, NOTCH_START),
        Point::new(e, e),
    ]
}

/// Everything needed to write one card: size, outline and holes in cutting order.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDrawing {
    pub dimensions: CardDimensions,
    pub outline: Vec<Point>,
    pub holes: Vec<Hole>,
}

impl CardDrawing {
    pub fn build(grid: &PatternGrid, config: &CardConfig) -> Self {
        let dimensions = CardDimensions::compute(grid, config);
        info!(
            "pattern size: {} rows x {} stitches",
            dimensions.rows, dimensions.stitches
        );
        info!(
            "card size: {} mm x {} mm",
            dimensions.width, dimensions.height
        );

        info!("creating card...");
        let outline = outline(&dimensions);

        let mut all = Vec::new();
        all.extend(holes::pattern_holes(grid, &dimensions, config));
        all.extend(holes::blank_row_holes(&dimensions, config));
        all.extend(holes::clip_holes(&dimensions, config));
        all.extend(holes::sprocket_holes(&dimensions, config));
        holes::sort_for_cutting(&mut all);

        Self {
            dimensions,
            outline,
            holes: all,
        }
    }

    pub fn counts(&self) -> HoleCounts {
        HoleCounts::tally(&self.holes)
    }
}
