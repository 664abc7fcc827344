//! Flat CSV export for the active series.
//!
//! The format is fixed: graph title on line 1, a literal `X,Y` header on
//! line 2, then one `x,y` row per point in series order using default float
//! formatting (no fixed precision), so a re-parse reconstructs the data
//! exactly.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::Point;
use crate::error::GraphResult;

pub fn write_csv<W: Write>(writer: &mut W, title: &str, points: &[Point]) -> GraphResult<()> {
    writeln!(writer, "{title}")?;
    writeln!(writer, "X,Y")?;
    for point in points {
        writeln!(writer, "{},{}", point.x, point.y)?;
    }
    Ok(())
}

/// Writes `<title>.csv` under `dir` and returns the written path.
///
/// Destination directory policy (editor path vs. persistent storage) is the
/// host's concern; IO failures surface to the caller and are not retried.
pub fn export_csv(dir: &Path, title: &str, points: &[Point]) -> GraphResult<PathBuf> {
    let path = dir.join(format!("{title}.csv"));
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, title, points)?;
    writer.flush()?;
    debug!(path = %path.display(), rows = points.len(), "exported csv");
    Ok(path)
}
