//! Shared clap helper types.

use clap::ValueEnum;
use punchpattern::{STANDARD_STITCH_WIDTH, WIDE_STITCH_WIDTH};

/// Card formats accepted by `--stitches`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StitchFormatArg {
    #[value(name = "24")]
    TwentyFour,
    #[value(name = "12")]
    Twelve,
}

impl StitchFormatArg {
    pub fn stitch_width(self) -> f64 {
        match self {
            StitchFormatArg::TwentyFour => STANDARD_STITCH_WIDTH,
            StitchFormatArg::Twelve => WIDE_STITCH_WIDTH,
        }
    }
}
