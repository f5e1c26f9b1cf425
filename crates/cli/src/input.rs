//! CSV point tables via polars.
//!
//! Columns: `x`, `y` (required, planar meters); `year`, `weight`, `kind`
//! (optional). Rows whose coordinates are missing or non-finite are skipped.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use geoprofile::{EventKind, Point};
use polars::prelude::*;

fn optional_column(df: &DataFrame, name: &str, dtype: &DataType) -> Result<Option<Series>> {
    match df.column(name) {
        Ok(s) => Ok(Some(s.cast(dtype)?)),
        Err(_) => Ok(None),
    }
}

/// Read planar points from a CSV file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;

    let xs = df.column("x").context("missing column `x`")?.cast(&DataType::Float64)?;
    let ys = df.column("y").context("missing column `y`")?.cast(&DataType::Float64)?;
    let (xs, ys) = (xs.f64()?, ys.f64()?);
    let years = optional_column(&df, "year", &DataType::Int64)?;
    let years = years.as_ref().map(|s| s.i64()).transpose()?;
    let weights = optional_column(&df, "weight", &DataType::Float64)?;
    let weights = weights.as_ref().map(|s| s.f64()).transpose()?;
    let kinds = optional_column(&df, "kind", &DataType::String)?;
    let kinds = kinds.as_ref().map(|s| s.str()).transpose()?;

    let mut points = Vec::with_capacity(df.height());
    let mut skipped = 0usize;
    for row in 0..df.height() {
        let (Some(x), Some(y)) = (xs.get(row), ys.get(row)) else {
            skipped += 1;
            continue;
        };
        let mut p = Point::new(x, y);
        if !p.is_finite() {
            skipped += 1;
            continue;
        }
        p.year = years
            .and_then(|c| c.get(row))
            .and_then(|y| i32::try_from(y).ok());
        p.weight = weights.and_then(|c| c.get(row));
        if let Some(label) = kinds.and_then(|c| c.get(row)) {
            match EventKind::parse(label) {
                Some(k) => p.kind = k,
                None => bail!("row {row}: unknown kind {label:?}"),
            }
        }
        points.push(p);
    }
    if skipped > 0 {
        tracing::warn!(skipped, path = %path.display(), "rows without usable coordinates");
    }
    tracing::info!(rows = df.height(), points = points.len(), "points_loaded");
    Ok(points)
}

/// Write points as CSV with columns `x`, `y`, `year`, `weight`, `kind`.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let years: Vec<Option<i32>> = points.iter().map(|p| p.year).collect();
    let weights: Vec<Option<f64>> = points.iter().map(|p| p.weight).collect();
    let kinds: Vec<&str> = points.iter().map(|p| p.kind.label()).collect();
    let mut df = df!(
        "x" => xs,
        "y" => ys,
        "year" => years,
        "weight" => weights,
        "kind" => kinds,
    )?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_required_and_optional_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.csv");
        fs::write(
            &path,
            "x,y,year,weight,kind\n\
             0,0,2020,,offence\n\
             100.5,-20,,2.0,poi\n\
             ,5,2019,,\n\
             300,400,2018,0.5,collateral\n",
        )
        .unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], Point::new(0.0, 0.0).with_year(2020));
        assert_eq!(
            pts[1],
            Point::new(100.5, -20.0)
                .with_weight(2.0)
                .with_kind(EventKind::PointOfInterest)
        );
        assert_eq!(pts[2].kind, EventKind::Collateral);
        assert_eq!(pts[2].year, Some(2018));
    }

    #[test]
    fn coordinates_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("xy.csv");
        fs::write(&path, "x,y\n1,2\n3,4\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn rejects_unknown_kind_and_missing_x() {
        let dir = tempdir().unwrap();
        let bad_kind = dir.path().join("kind.csv");
        fs::write(&bad_kind, "x,y,kind\n1,2,burglary\n").unwrap();
        let err = read_points(&bad_kind).unwrap_err();
        assert!(err.to_string().contains("unknown kind"));

        let no_x = dir.path().join("nox.csv");
        fs::write(&no_x, "lon,y\n1,2\n").unwrap();
        assert!(read_points(&no_x).is_err());
    }

    #[test]
    fn write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out.csv");
        let pts = vec![
            Point::new(1.5, -2.0).with_year(2011),
            Point::new(3.0, 4.0).with_kind(EventKind::Collateral),
            Point::new(-7.25, 0.0).with_weight(0.75),
        ];
        write_points(&path, &pts).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }
}
