//! SVG output for finished card drawings.

mod writer;

pub use writer::{SvgError, SvgWriter, render_svg};
