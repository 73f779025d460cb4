//! Core library for turning text punch patterns into SVG cutting drawings.

mod card;
mod config;
mod holes;
mod pattern;
mod svg;

pub use card::{CardDimensions, CardDrawing, Point, outline};
pub use config::{
    CardConfig, ConfigError, STANDARD_STITCH_WIDTH, Style, WIDE_STITCH_WIDTH,
};
pub use holes::{
    Hole, HoleCounts, HoleKind, blank_row_holes, clip_holes, pattern_holes, sort_for_cutting,
    sprocket_holes,
};
pub use pattern::{DEFAULT_OUTPUT, PUNCH_MARKER, PatternError, PatternGrid, PatternSource};
pub use svg::{SvgError, SvgWriter, render_svg};

/// Build the drawing for `grid` and render it to an SVG document.
pub fn pattern_to_svg(grid: &PatternGrid, config: &CardConfig) -> String {
    let drawing = CardDrawing::build(grid, config);
    render_svg(&drawing, config)
}
