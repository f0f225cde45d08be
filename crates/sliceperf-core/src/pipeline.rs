//! The two generation pipelines: static baseline first, dynamic second.
//!
//! Driver logic lives here rather than in the binaries so the whole run —
//! including the all-or-nothing input validation of the dynamic pass — is
//! testable without spawning processes. The binaries only add console output
//! and exit codes.

use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::csv::{ReadError, SliceAggregate, write_metrics};
use crate::generate::{DeviceMetrics, generate_dynamic_with, generate_static_with};
use crate::slice::SliceType;

/// Result of generating and writing one slice's CSV.
#[derive(Debug, Clone)]
pub struct SliceRun {
    pub slice: SliceType,
    /// Devices written, in file order.
    pub devices: Vec<DeviceMetrics>,
    /// Static means the dynamic pass was derived from. `None` for static runs.
    pub baseline: Option<SliceAggregate>,
    /// Path of the CSV written.
    pub path: PathBuf,
}

impl SliceRun {
    /// Arithmetic mean of the written devices' metrics.
    pub fn means(&self) -> SliceAggregate {
        let n = self.devices.len() as f64;
        SliceAggregate {
            throughput: self.devices.iter().map(|d| d.throughput).sum::<f64>() / n,
            packet_loss: self.devices.iter().map(|d| d.packet_loss).sum::<f64>() / n,
            energy: self.devices.iter().map(|d| d.energy).sum::<f64>() / n,
        }
    }
}

// ---------------------------------------------------------------------------
// Static pipeline
// ---------------------------------------------------------------------------

/// Generate and write all three `<slice>_performance.csv` files under `dir`.
///
/// Existing files are overwritten in place. The only failure mode is output
/// I/O, which callers treat as fatal.
pub fn run_static<R: Rng + ?Sized>(dir: &Path, rng: &mut R) -> io::Result<Vec<SliceRun>> {
    let mut runs = Vec::with_capacity(SliceType::ALL.len());
    for slice in SliceType::ALL {
        let devices = generate_static_with(slice, rng);
        let path = dir.join(slice.performance_csv());
        write_metrics(&path, &devices)?;
        debug!("wrote {} static rows to {}", devices.len(), path.display());
        runs.push(SliceRun {
            slice,
            devices,
            baseline: None,
            path,
        });
    }
    Ok(runs)
}

// ---------------------------------------------------------------------------
// Dynamic pipeline
// ---------------------------------------------------------------------------

/// Failure of the dynamic pipeline.
#[derive(Debug, Error)]
pub enum DynamicError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("could not write {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read all three static CSVs under `dir`, then generate and write the three
/// `<slice>_dynamic.csv` files.
///
/// Input validation is all-or-nothing: every static file must open, parse,
/// and contain at least one data row before any dynamic file is written.
pub fn run_dynamic<R: Rng + ?Sized>(dir: &Path, rng: &mut R) -> Result<Vec<SliceRun>, DynamicError> {
    let mut baselines = Vec::with_capacity(SliceType::ALL.len());
    for slice in SliceType::ALL {
        let path = dir.join(slice.performance_csv());
        let baseline = SliceAggregate::from_csv(&path)?;
        debug!(
            "{slice} static means: {:.2} Mbps, {:.3}%, {:.2}J",
            baseline.throughput, baseline.packet_loss, baseline.energy
        );
        baselines.push(baseline);
    }

    let mut runs = Vec::with_capacity(SliceType::ALL.len());
    for (slice, baseline) in SliceType::ALL.into_iter().zip(baselines) {
        let devices = generate_dynamic_with(slice, &baseline, rng);
        let path = dir.join(slice.dynamic_csv());
        write_metrics(&path, &devices).map_err(|source| DynamicError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {} dynamic rows to {}", devices.len(), path.display());
        runs.push(SliceRun {
            slice,
            devices,
            baseline: Some(baseline),
            path,
        });
    }
    Ok(runs)
}
