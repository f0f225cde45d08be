//! CSV serialization and the static-file aggregator.
//!
//! # File format
//!
//! Every file this crate reads or writes has the same shape:
//!
//! ```text
//! Device,Throughput(Mbps),PacketLoss(%),Energy(J)
//! Industrial Robot,102.31,0.027,5.12
//! Autonomous Drone,96.80,0.033,4.95
//! ```
//!
//! Throughput and energy are formatted to 2 decimal places, packet loss to 3,
//! always fixed-point. Downstream tooling diffs and round-trips these files,
//! so the formatting is part of the contract.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::generate::DeviceMetrics;

/// Header row shared by every performance CSV.
pub const CSV_HEADER: &str = "Device,Throughput(Mbps),PacketLoss(%),Energy(J)";

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Write `devices` to `path`, overwriting any existing file.
pub fn write_metrics(path: &Path, devices: &[DeviceMetrics]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    writeln!(w, "{CSV_HEADER}")?;
    for d in devices {
        writeln!(
            w,
            "{},{:.2},{:.3},{:.2}",
            d.device, d.throughput, d.packet_loss, d.energy
        )?;
    }
    w.flush()
}

// ---------------------------------------------------------------------------
// Reader / aggregator
// ---------------------------------------------------------------------------

/// Failure reading or aggregating a static performance CSV.
///
/// Every variant is equally fatal to the dynamic pipeline: no partial output,
/// no retry.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("could not open {}: {}", path.display(), source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Header present, zero data rows. A mean over zero rows is meaningless,
    /// so this is a failure rather than a silent NaN.
    #[error("{} contains a header but no data rows", path.display())]
    Empty { path: PathBuf },

    #[error("{}:{}: expected 4 comma-separated fields", path.display(), line)]
    Malformed { path: PathBuf, line: usize },

    #[error("{}:{}: invalid numeric field {:?}", path.display(), line, field)]
    Parse {
        path: PathBuf,
        line: usize,
        field: String,
    },
}

/// Per-slice arithmetic means over all data rows of one static CSV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceAggregate {
    pub throughput: f64,
    pub packet_loss: f64,
    pub energy: f64,
}

impl SliceAggregate {
    /// Read `path`, skip the header, and average columns 2–4 across all rows.
    ///
    /// Rows must have exactly four comma-delimited fields; a numeric field
    /// that fails to parse fails the whole read rather than being skipped.
    pub fn from_csv(path: &Path) -> Result<Self, ReadError> {
        let file = File::open(path).map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        // Header row. A completely empty file has no data rows either.
        match lines.next() {
            Some(Ok(_)) => {}
            Some(Err(source)) => {
                return Err(ReadError::Open {
                    path: path.to_path_buf(),
                    source,
                });
            }
            None => {
                return Err(ReadError::Empty {
                    path: path.to_path_buf(),
                });
            }
        }

        let mut total_throughput = 0.0;
        let mut total_packet_loss = 0.0;
        let mut total_energy = 0.0;
        let mut count = 0usize;

        for (idx, line) in lines.enumerate() {
            let line = line.map_err(|source| ReadError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            let lineno = idx + 2; // 1-based, after the header

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 4 {
                return Err(ReadError::Malformed {
                    path: path.to_path_buf(),
                    line: lineno,
                });
            }

            total_throughput += parse_field(fields[1], path, lineno)?;
            total_packet_loss += parse_field(fields[2], path, lineno)?;
            total_energy += parse_field(fields[3], path, lineno)?;
            count += 1;
        }

        if count == 0 {
            return Err(ReadError::Empty {
                path: path.to_path_buf(),
            });
        }

        let n = count as f64;
        Ok(Self {
            throughput: total_throughput / n,
            packet_loss: total_packet_loss / n,
            energy: total_energy / n,
        })
    }
}

fn parse_field(raw: &str, path: &Path, line: usize) -> Result<f64, ReadError> {
    raw.trim().parse().map_err(|_| ReadError::Parse {
        path: path.to_path_buf(),
        line,
        field: raw.to_string(),
    })
}
