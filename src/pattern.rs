use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

/// Character that marks a punched position (matched case-insensitively).
pub const PUNCH_MARKER: char = 'x';
/// Output name used when no pattern file is given.
pub const DEFAULT_OUTPUT: &str = "punchcard.svg";

const DEFAULT_ROWS: usize = 48;
const DEFAULT_STITCHES: usize = 24;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to read pattern {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("pattern {path} has no rows")]
    Empty { path: PathBuf },
}

/// Rows of pattern characters. Never empty.
///
/// The first row fixes the stitch count; shorter rows leave their missing
/// positions unpunched and longer rows have their tail ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrid {
    rows: Vec<Vec<char>>,
}

impl PatternGrid {
    /// Build a grid from already split rows. Returns `None` for zero rows.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Option<Self> {
        if rows.is_empty() {
            None
        } else {
            Some(Self { rows })
        }
    }

    /// The built-in 48 x 24 fully punched pattern.
    pub fn default_pattern() -> Self {
        Self {
            rows: vec![vec!['X'; DEFAULT_STITCHES]; DEFAULT_ROWS],
        }
    }

    /// Parse one row per line, dropping trailing whitespace only.
    ///
    /// Bytes that are not valid UTF-8 decode to U+FFFD, which is simply an
    /// unpunched stitch.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Option<Self>> {
        let mut rows = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            rows.push(line.trim_end().chars().collect());
        }
        Ok(Self::from_rows(rows))
    }

    pub fn load(path: &Path) -> Result<Self, PatternError> {
        info!("reading {} ...", path.display());
        let io_err = |source: io::Error| PatternError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let grid = Self::from_reader(BufReader::new(file))
            .map_err(io_err)?
            .ok_or_else(|| PatternError::Empty {
                path: path.to_path_buf(),
            })?;
        if grid.stitches() == 0 {
            warn!(
                "first row of {} is blank; the card will have no stitch columns",
                path.display()
            );
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Stitch count, taken from the first row.
    pub fn stitches(&self) -> usize {
        self.rows[0].len()
    }

    /// Whether `(row, stitch)` is punched. Out of range positions are not.
    pub fn is_punched(&self, row: usize, stitch: usize) -> bool {
        if stitch >= self.stitches() {
            return false;
        }
        self.rows
            .get(row)
            .and_then(|r| r.get(stitch))
            .is_some_and(|ch| ch.eq_ignore_ascii_case(&PUNCH_MARKER))
    }

    /// Number of punched positions within the stitch bound.
    pub fn punch_count(&self) -> usize {
        (0..self.rows())
            .map(|r| (0..self.stitches()).filter(|&s| self.is_punched(r, s)).count())
            .sum()
    }
}

/// Where the pattern comes from, which also decides the output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSource {
    File(PathBuf),
    Default,
}

impl PatternSource {
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(PatternSource::Default, PatternSource::File)
    }

    pub fn load(&self) -> Result<PatternGrid, PatternError> {
        match self {
            PatternSource::File(path) => PatternGrid::load(path),
            PatternSource::Default => {
                info!("using default pattern...");
                Ok(PatternGrid::default_pattern())
            }
        }
    }

    /// `<input>.svg` for files (suffix appended to the full name), else `punchcard.svg`.
    pub fn output_path(&self) -> PathBuf {
        match self {
            PatternSource::File(path) => {
                let mut name = path.as_os_str().to_owned();
                name.push(".svg");
                PathBuf::from(name)
            }
            PatternSource::Default => PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
