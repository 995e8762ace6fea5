//! Legacy VTK output (ASCII, structured points)
//!
//! One file per snapshot, readable by ParaView and VisIt.
//! Point data is written with x varying fastest.
use super::{create_dir, Snapshot, SnapshotWriter};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write snapshots to `<dir>/<prefix><step>.vtk`
#[derive(Debug, Clone)]
pub struct VtkWriter {
    dir: PathBuf,
    prefix: String,
}

impl VtkWriter {
    /// Writer with prefix "flow", creates `dir`
    ///
    /// # Errors
    /// Directory cannot be created.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        create_dir(&dir)?;
        Ok(Self {
            dir,
            prefix: "flow".to_string(),
        })
    }

    /// Replace file prefix
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// File of step
    #[must_use]
    pub fn filename(&self, step: usize) -> PathBuf {
        self.dir.join(format!("{}{:06}.vtk", self.prefix, step))
    }
}

fn write_vtk<W: Write>(out: &mut W, snapshot: &Snapshot) -> std::io::Result<()> {
    let grid = snapshot.grid;
    let (nx, ny) = (grid.nx, grid.ny);
    let [dx, dy] = grid.spacing();
    writeln!(out, "# vtk DataFile Version 3.0")?;
    writeln!(
        out,
        "vorticity2d step {} time {:.6}",
        snapshot.step, snapshot.time
    )?;
    writeln!(out, "ASCII")?;
    writeln!(out, "DATASET STRUCTURED_POINTS")?;
    writeln!(out, "DIMENSIONS {} {} 1", nx, ny)?;
    writeln!(out, "ORIGIN 0 0 0")?;
    writeln!(out, "SPACING {:e} {:e} 1", dx, dy)?;
    writeln!(out, "POINT_DATA {}", nx * ny)?;

    writeln!(out, "SCALARS vorticity double 1")?;
    writeln!(out, "LOOKUP_TABLE default")?;
    for j in 0..ny {
        for i in 0..nx {
            writeln!(out, "{:e}", snapshot.vort[[i, j]])?;
        }
    }

    writeln!(out, "VECTORS velocity double")?;
    for j in 0..ny {
        for i in 0..nx {
            writeln!(
                out,
                "{:e} {:e} 0",
                snapshot.ux[[i, j]],
                snapshot.uy[[i, j]]
            )?;
        }
    }
    out.flush()
}

impl SnapshotWriter for VtkWriter {
    fn write(&mut self, snapshot: &Snapshot) -> Result<()> {
        let shape = [snapshot.grid.nx, snapshot.grid.ny];
        for array in [snapshot.ux, snapshot.uy, snapshot.vort] {
            if array.shape() != shape {
                return Err(Error::shape(shape, array.shape()));
            }
        }
        let path = self.filename(snapshot.step);
        let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
        let mut out = BufWriter::new(file);
        write_vtk(&mut out, snapshot).map_err(|e| Error::io(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Grid;
    use ndarray::Array2;

    #[test]
    fn test_vtk_layout() {
        let dir = std::env::temp_dir().join(format!("vorticity2d_vtk_{}", std::process::id()));
        let mut writer = VtkWriter::new(&dir).unwrap().with_prefix("test");
        let grid = Grid::periodic(4, 2).unwrap();
        let vort = Array2::from_shape_fn((4, 2), |(i, j)| (10 * j + i) as f64);
        let ux = Array2::from_elem((4, 2), 1.);
        let uy = Array2::from_elem((4, 2), -2.);
        let snapshot = Snapshot {
            step: 12,
            time: 0.12,
            grid: &grid,
            ux: &ux,
            uy: &uy,
            vort: &vort,
        };
        writer.write(&snapshot).unwrap();

        let path = writer.filename(12);
        assert!(path.ends_with("test000012.vtk"));
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "# vtk DataFile Version 3.0");
        assert_eq!(lines[4], "DIMENSIONS 4 2 1");
        assert_eq!(lines[7], "POINT_DATA 8");
        assert_eq!(lines[8], "SCALARS vorticity double 1");
        // x varies fastest
        let values: Vec<f64> = lines[10..18].iter().map(|l| l.parse().unwrap()).collect();
        assert_eq!(values, vec![0., 1., 2., 3., 10., 11., 12., 13.]);
        assert_eq!(lines[18], "VECTORS velocity double");
        assert_eq!(lines.len(), 27);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_shape_mismatch() {
        let dir = std::env::temp_dir().join(format!("vorticity2d_vtk_bad_{}", std::process::id()));
        let mut writer = VtkWriter::new(&dir).unwrap();
        let grid = Grid::periodic(4, 4).unwrap();
        let good = Array2::zeros((4, 4));
        let bad = Array2::zeros((2, 4));
        let snapshot = Snapshot {
            step: 0,
            time: 0.,
            grid: &grid,
            ux: &good,
            uy: &bad,
            vort: &good,
        };
        assert!(matches!(writer.write(&snapshot), Err(Error::Shape { .. })));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
