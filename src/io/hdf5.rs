//! Write snapshots with hdf5
//!
//! Requires the system hdf5 library, enabled with the `hdf5` feature.
use super::{create_dir, Snapshot, SnapshotWriter};
use crate::error::Result;
use ndarray::arr0;
use std::path::{Path, PathBuf};

/// Write snapshots to `<dir>/flow<step>.h5`
///
/// Datasets: x, y, ux, uy, vort, time, step
#[derive(Debug, Clone)]
pub struct Hdf5Writer {
    dir: PathBuf,
}

impl Hdf5Writer {
    /// Creates `dir`
    ///
    /// # Errors
    /// Directory cannot be created.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        create_dir(&dir)?;
        Ok(Self { dir })
    }

    /// File of step
    #[must_use]
    pub fn filename(&self, step: usize) -> PathBuf {
        self.dir.join(format!("flow{:06}.h5", step))
    }
}

impl SnapshotWriter for Hdf5Writer {
    fn write(&mut self, snapshot: &Snapshot) -> Result<()> {
        let file = hdf5::File::create(self.filename(snapshot.step))?;
        let [x, y] = snapshot.grid.coords();
        file.new_dataset_builder().with_data(&x).create("x")?;
        file.new_dataset_builder().with_data(&y).create("y")?;
        file.new_dataset_builder()
            .with_data(snapshot.ux)
            .create("ux")?;
        file.new_dataset_builder()
            .with_data(snapshot.uy)
            .create("uy")?;
        file.new_dataset_builder()
            .with_data(snapshot.vort)
            .create("vort")?;
        file.new_dataset_builder()
            .with_data(&arr0(snapshot.time))
            .create("time")?;
        file.new_dataset_builder()
            .with_data(&arr0(snapshot.step as u64))
            .create("step")?;
        Ok(())
    }
}
