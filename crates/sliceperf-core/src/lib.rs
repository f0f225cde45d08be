//! # sliceperf-core
//!
//! Synthesize plausible per-device 5G network-slice performance metrics
//! (throughput, packet loss, energy) for three traffic classes — URLLC,
//! eMBB, mMTC — and write them to CSV.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sliceperf_core::{pipeline, wall_clock_rng};
//!
//! // Static baseline first: writes urllc/embb/mmtc_performance.csv.
//! let runs = pipeline::run_static(std::path::Path::new("."), &mut wall_clock_rng())?;
//! assert_eq!(runs.len(), 3);
//!
//! // Dynamic pass second: reads those files back, writes *_dynamic.csv.
//! let runs = pipeline::run_dynamic(std::path::Path::new("."), &mut wall_clock_rng())?;
//! assert_eq!(runs.len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! Constant tables → Generator (sample, scale, clamp) → CSV
//!
//! Two variation models share that shape:
//! - **Static**: each metric is a base constant times a wide uniform
//!   multiplier, clamped into a realistic range.
//! - **Dynamic**: each metric is the per-slice *mean* of the static output
//!   times a fixed ratio and a ±2% jitter, clamped into tighter bounds. The
//!   ratio table encodes a throughput-down/packet-loss-down tradeoff and is
//!   the contract — it is tabulated, never re-derived.
//!
//! Production runs reseed from the wall clock per call and are deliberately
//! not reproducible; every generation routine also has a `_with` variant
//! taking any [`rand::Rng`] so tests can pin a seed.

pub mod csv;
pub mod generate;
pub mod pipeline;
pub mod profile;
pub mod slice;

pub use csv::{CSV_HEADER, ReadError, SliceAggregate, write_metrics};
pub use generate::{
    DeviceMetrics, generate_dynamic, generate_dynamic_with, generate_static, generate_static_with,
    wall_clock_rng,
};
pub use pipeline::{DynamicError, SliceRun, run_dynamic, run_static};
pub use profile::{
    Bounds, DYNAMIC_JITTER, DynamicProfile, StaticProfile, VarRange, dynamic_profile,
    static_profile,
};
pub use slice::SliceType;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
