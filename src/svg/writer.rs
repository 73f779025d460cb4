use std::fmt::Write;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::card::{CardDrawing, Point};
use crate::config::{CardConfig, Style};

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Renders a [`CardDrawing`] with the colours and stroke from a [`CardConfig`].
pub struct SvgWriter<'a> {
    style: Style<'a>,
}

impl<'a> SvgWriter<'a> {
    pub fn new(config: &'a CardConfig) -> Self {
        Self {
            style: config.style(),
        }
    }

    /// Build the whole document in memory. Outline first, then holes in
    /// the order they appear in the drawing.
    pub fn render(&self, drawing: &CardDrawing) -> String {
        let dims = &drawing.dimensions;
        let mut out = String::new();
        writeln!(&mut out, r#"<?xml version="1.0" encoding="utf-8" ?>"#).ok();
        writeln!(
            &mut out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}" preserveAspectRatio="none">"#,
            w = dims.width,
            h = dims.height
        )
        .ok();
        writeln!(
            &mut out,
            r#"  <polygon points="{}" {}/>"#,
            points_attr(&drawing.outline),
            self.paint()
        )
        .ok();
        for hole in &drawing.holes {
            writeln!(
                &mut out,
                r#"  <circle cx="{}" cy="{}" r="{}" {}/>"#,
                hole.center.x,
                hole.center.y,
                hole.radius,
                self.paint()
            )
            .ok();
        }
        out.push_str("</svg>\n");
        out
    }

    /// Render and write to `path` in one call.
    pub fn save(&self, drawing: &CardDrawing, path: &Path) -> Result<(), SvgError> {
        let document = self.render(drawing);
        fs::write(path, document).map_err(|source| SvgError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("saved {}", path.display());
        Ok(())
    }

    fn paint(&self) -> String {
        format!(
            r#"fill="{}" stroke="{}" stroke-width="{}""#,
            escape_attr(self.style.fill),
            escape_attr(self.style.stroke),
            self.style.stroke_width
        )
    }
}

/// Convenience wrapper around [`SvgWriter::render`].
pub fn render_svg(drawing: &CardDrawing, config: &CardConfig) -> String {
    SvgWriter::new(config).render(drawing)
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
