//! Hole placement for every hole category on a card, and the cutting order.

use std::fmt;

use tracing::{debug, info};

use crate::card::{CardDimensions, Point};
use crate::config::CardConfig;
use crate::pattern::PatternGrid;

/// Distance from the card top to the first pattern row.
const PATTERN_TOP_OFFSET: f64 = 10.0;
/// Clip holes sit this far outside the first and last stitch column.
const CLIP_HOLE_OUTSET: f64 = 6.0;
/// Sprocket holes sit this far in from each card edge.
const SPROCKET_HOLE_INSET: f64 = 6.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoleKind {
    Pattern,
    Blank,
    Clip,
    Sprocket,
}

impl fmt::Display for HoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoleKind::Pattern => write!(f, "pattern"),
            HoleKind::Blank => write!(f, "blank"),
            HoleKind::Clip => write!(f, "clip"),
            HoleKind::Sprocket => write!(f, "sprocket"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    pub center: Point,
    pub radius: f64,
    pub kind: HoleKind,
}

impl Hole {
    fn new(kind: HoleKind, x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
            kind,
        }
    }
}

fn stitch_x(config: &CardConfig, stitch: usize) -> f64 {
    config.side_margin + config.stitch_width / 2.0 + stitch as f64 * config.stitch_width
}

/// One hole per punched grid position.
pub fn pattern_holes(grid: &PatternGrid, dims: &CardDimensions, config: &CardConfig) -> Vec<Hole> {
    info!("drawing pattern...");
    let radius = config.pattern_hole_radius / 2.0;
    let top = PATTERN_TOP_OFFSET + config.row_height / 2.0;
    let mut holes = Vec::new();
    for row in 0..dims.rows {
        let y = top + row as f64 * config.row_height;
        for stitch in 0..dims.stitches {
            if grid.is_punched(row, stitch) {
                holes.push(Hole::new(HoleKind::Pattern, stitch_x(config, stitch), y, radius));
            }
        }
    }
    debug!("{} pattern holes", holes.len());
    holes
}

/// Fully punched leader rows at the top and trailer rows at the bottom.
pub fn blank_row_holes(dims: &CardDimensions, config: &CardConfig) -> Vec<Hole> {
    info!("drawing blank lines...");
    let radius = config.pattern_hole_radius / 2.0;
    let half = config.row_height / 2.0;
    let starts = [
        half,
        dims.height - config.blank_rows as f64 * config.row_height + half,
    ];
    let mut holes = Vec::with_capacity(2 * config.blank_rows * dims.stitches);
    for start in starts {
        for row in 0..config.blank_rows {
            let y = start + row as f64 * config.row_height;
            for stitch in 0..dims.stitches {
                holes.push(Hole::new(HoleKind::Blank, stitch_x(config, stitch), y, radius));
            }
        }
    }
    debug!("{} blank-row holes", holes.len());
    holes
}

/// A left/right pair on every row of the card, leader and trailer included.
pub fn clip_holes(dims: &CardDimensions, config: &CardConfig) -> Vec<Hole> {
    info!("drawing clip holes...");
    let radius = config.clip_hole_radius / 2.0;
    let left = config.side_margin + config.stitch_width / 2.0 - CLIP_HOLE_OUTSET;
    let right = dims.width - config.side_margin - config.stitch_width / 2.0 + CLIP_HOLE_OUTSET;
    let mut holes = Vec::new();
    for step in 0.. {
        let y = config.row_height / 2.0 + step as f64 * config.row_height;
        if y >= dims.height {
            break;
        }
        holes.push(Hole::new(HoleKind::Clip, left, y, radius));
        holes.push(Hole::new(HoleKind::Clip, right, y, radius));
    }
    debug!("{} clip holes", holes.len());
    holes
}

/// A left/right pair on every other row boundary. The pair count floors
/// `(rows + 2 * blank_rows) / 2`, so an odd total drops the last half pair.
pub fn sprocket_holes(dims: &CardDimensions, config: &CardConfig) -> Vec<Hole> {
    info!("drawing sprocket holes...");
    let radius = config.sprocket_hole_radius / 2.0;
    let right = dims.width - SPROCKET_HOLE_INSET;
    let pairs = dims.total_rows(config) / 2;
    let mut holes = Vec::with_capacity(pairs * 2);
    for pair in 0..pairs {
        let y = config.row_height + pair as f64 * 2.0 * config.row_height;
        holes.push(Hole::new(HoleKind::Sprocket, SPROCKET_HOLE_INSET, y, radius));
        holes.push(Hole::new(HoleKind::Sprocket, right, y, radius));
    }
    debug!("{} sprocket holes", holes.len());
    holes
}

/// Stable sort by y, then x, so the cutter works row by row, left to right.
pub fn sort_for_cutting(holes: &mut [Hole]) {
    holes.sort_by(|a, b| {
        a.center
            .y
            .total_cmp(&b.center.y)
            .then_with(|| a.center.x.total_cmp(&b.center.x))
    });
}

/// Per-category totals, used for the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoleCounts {
    pub pattern: usize,
    pub blank: usize,
    pub clip: usize,
    pub sprocket: usize,
}

impl HoleCounts {
    pub fn tally(holes: &[Hole]) -> Self {
        let mut counts = Self::default();
        for hole in holes {
            match hole.kind {
                HoleKind::Pattern => counts.pattern += 1,
                HoleKind::Blank => counts.blank += 1,
                HoleKind::Clip => counts.clip += 1,
                HoleKind::Sprocket => counts.sprocket += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.pattern + self.blank + self.clip + self.sprocket
    }
}

impl fmt::Display for HoleCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} holes ({} {}, {} {}, {} {}, {} {})",
            self.total(),
            self.pattern,
            HoleKind::Pattern,
            self.blank,
            HoleKind::Blank,
            self.clip,
            HoleKind::Clip,
            self.sprocket,
            HoleKind::Sprocket
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn setup(rows: &[&str]) -> (PatternGrid, CardDimensions, CardConfig) {
        let grid =
            PatternGrid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap();
        let config = CardConfig::default();
        let dims = CardDimensions::compute(&grid, &config);
        (grid, dims, config)
    }

    #[test]
    fn single_pattern_hole_position() {
        let (grid, dims, cfg) = setup(&["x"]);
        let holes = pattern_holes(&grid, &dims, &cfg);
        assert_eq!(holes.len(), 1);
        assert_eq!(holes[0].center, Point::new(19.25, 12.5));
        assert_eq!(holes[0].radius, 1.75);
    }

    #[test]
    fn pattern_holes_respect_first_row_bound() {
        let (grid, dims, cfg) = setup(&["x-x-", "xxxxxxxx", "x"]);
        let holes = pattern_holes(&grid, &dims, &cfg);
        assert_eq!(holes.len(), 2 + 4 + 1);
        let max_x = stitch_x(&cfg, 3);
        assert!(holes.iter().all(|h| h.center.x <= max_x));
    }

    #[test]
    fn unpunched_row_keeps_side_holes() {
        let (grid, dims, cfg) = setup(&["x-----------------------", "------------------------"]);
        let pattern = pattern_holes(&grid, &dims, &cfg);
        let second_row_y = PATTERN_TOP_OFFSET + cfg.row_height * 1.5;
        assert!(pattern.iter().all(|h| h.center.y != second_row_y));
        let clips = clip_holes(&dims, &cfg);
        assert_eq!(
            clips.iter().filter(|h| h.center.y == second_row_y).count(),
            2
        );
    }

    #[test]
    fn blank_rows_top_and_bottom() {
        let (_, dims, cfg) = setup(&["------", "------", "------"]);
        let holes = blank_row_holes(&dims, &cfg);
        assert_eq!(holes.len(), 2 * cfg.blank_rows * 6);
        let top = holes.iter().filter(|h| h.center.y < dims.height / 2.0).count();
        let bottom = holes.iter().filter(|h| h.center.y > dims.height / 2.0).count();
        assert_eq!(top, cfg.blank_rows * 6);
        assert_eq!(bottom, cfg.blank_rows * 6);
        assert_eq!(holes.last().unwrap().center.y, dims.height - 2.5);
        assert!(holes.iter().all(|h| h.radius == 1.75));
    }

    #[test]
    fn blank_first_line_yields_no_stitch_holes() {
        let (grid, dims, cfg) = setup(&["", "xx"]);
        assert_eq!(dims.stitches, 0);
        assert!(pattern_holes(&grid, &dims, &cfg).is_empty());
        assert!(blank_row_holes(&dims, &cfg).is_empty());
        // side holes still follow the card rows
        assert_eq!(clip_holes(&dims, &cfg).len(), 12);
        assert_eq!(sprocket_holes(&dims, &cfg).len(), 6);
    }

    #[test]
    fn clip_holes_cover_every_row() {
        let (_, dims, cfg) = setup(&["x"]);
        let holes = clip_holes(&dims, &cfg);
        // 1 pattern row + 4 blank rows
        assert_eq!(holes.len(), 10);
        assert_eq!(holes[0].center, Point::new(13.25, 2.5));
        assert_eq!(holes[1].center, Point::new(25.25, 2.5));
        assert_eq!(holes[9].center.y, 22.5);
        assert!(holes.iter().all(|h| h.radius == 1.5));
    }

    #[test]
    fn sprocket_count_floors_odd_totals() {
        // 1 + 4 = 5 rows -> 2 pairs
        let (_, dims, cfg) = setup(&["x"]);
        let holes = sprocket_holes(&dims, &cfg);
        assert_eq!(holes.len(), 4);
        assert_eq!(holes[0].center, Point::new(6.5, 5.0));
        assert_eq!(holes[1].center, Point::new(32.0, 5.0));
        assert_eq!(holes[2].center.y, 15.0);

        // 2 + 4 = 6 rows -> 3 pairs
        let (_, dims, cfg) = setup(&["x", "x"]);
        assert_eq!(sprocket_holes(&dims, &cfg).len(), 6);
    }

    #[test]
    fn sort_orders_rows_then_columns_and_is_stable() {
        let mut holes = vec![
            Hole::new(HoleKind::Clip, 5.0, 2.0, 1.0),
            Hole::new(HoleKind::Pattern, 1.0, 2.0, 1.0),
            Hole::new(HoleKind::Sprocket, 9.0, 1.0, 1.0),
            Hole::new(HoleKind::Blank, 1.0, 2.0, 2.0),
            Hole::new(HoleKind::Pattern, 10.0, 1.5, 1.0),
        ];
        sort_for_cutting(&mut holes);
        let kinds: Vec<HoleKind> = holes.iter().map(|h| h.kind).collect();
        assert_eq!(
            kinds,
            vec![
                HoleKind::Sprocket,
                HoleKind::Pattern,
                HoleKind::Pattern,
                HoleKind::Blank,
                HoleKind::Clip,
            ]
        );
        // numeric, not lexicographic: 10.0 sorts after 9.0
        let mut holes = vec![
            Hole::new(HoleKind::Pattern, 10.0, 1.0, 1.0),
            Hole::new(HoleKind::Pattern, 9.0, 1.0, 1.0),
        ];
        sort_for_cutting(&mut holes);
        assert_eq!(holes[0].center.x, 9.0);
    }

    #[test]
    fn counts_summary() {
        let (grid, dims, cfg) = setup(&["x"]);
        let mut holes = pattern_holes(&grid, &dims, &cfg);
        holes.extend(blank_row_holes(&dims, &cfg));
        holes.extend(clip_holes(&dims, &cfg));
        holes.extend(sprocket_holes(&dims, &cfg));
        let counts = HoleCounts::tally(&holes);
        assert_eq!(
            counts,
            HoleCounts {
                pattern: 1,
                blank: 4,
                clip: 10,
                sprocket: 4
            }
        );
        assert_eq!(
            counts.to_string(),
            "19 holes (1 pattern, 4 blank, 10 clip, 4 sprocket)"
        );
    }
}
