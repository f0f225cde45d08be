//! Per-device metric generation for both variation models.
//!
//! The static generator samples each metric independently around a fixed base
//! value; the dynamic generator scales measured static means by the fixed
//! ratio table plus a small jitter. Both clamp every result into its
//! slice-and-metric bound interval, always emit exactly two devices in fixed
//! order, and cannot fail.
//!
//! Production entry points reseed from the wall clock on every call — runs
//! are deliberately not reproducible. The `_with` variants take any
//! [`Rng`] so tests can inject a fixed seed.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::csv::SliceAggregate;
use crate::profile::{DYNAMIC_JITTER, dynamic_profile, static_profile};
use crate::slice::SliceType;

/// One device's synthesized performance figures.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceMetrics {
    pub device: String,
    /// Throughput in Mbps.
    pub throughput: f64,
    /// Packet loss in percent.
    pub packet_loss: f64,
    /// Energy per operation in Joules.
    pub energy: f64,
}

/// A fresh RNG seeded from the wall clock.
///
/// Sub-second precision means back-to-back calls still diverge.
pub fn wall_clock_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    StdRng::seed_from_u64(nanos)
}

// ---------------------------------------------------------------------------
// Static generator
// ---------------------------------------------------------------------------

/// Generate baseline metrics for every device of `slice` using `rng`.
///
/// Each metric draws its own uniform multiplier from the slice's variation
/// range, scales the base constant, and is clamped into the static bounds.
pub fn generate_static_with<R: Rng + ?Sized>(slice: SliceType, rng: &mut R) -> Vec<DeviceMetrics> {
    let profile = static_profile(slice);
    slice
        .static_devices()
        .iter()
        .map(|&device| DeviceMetrics {
            device: device.to_string(),
            throughput: profile
                .throughput_bounds
                .clamp(profile.base_throughput * profile.throughput_var.sample(rng)),
            packet_loss: profile
                .packet_loss_bounds
                .clamp(profile.base_packet_loss * profile.packet_loss_var.sample(rng)),
            energy: profile
                .energy_bounds
                .clamp(profile.base_energy * profile.energy_var.sample(rng)),
        })
        .collect()
}

/// Generate baseline metrics for `slice`, reseeding from the wall clock.
pub fn generate_static(slice: SliceType) -> Vec<DeviceMetrics> {
    generate_static_with(slice, &mut wall_clock_rng())
}

// ---------------------------------------------------------------------------
// Dynamic generator
// ---------------------------------------------------------------------------

/// Generate dynamic metrics for `slice` from measured static means.
///
/// Each metric is `static mean × tabulated ratio × jitter`, with jitter drawn
/// independently per metric from [`DYNAMIC_JITTER`], clamped into the dynamic
/// bounds.
pub fn generate_dynamic_with<R: Rng + ?Sized>(
    slice: SliceType,
    baseline: &SliceAggregate,
    rng: &mut R,
) -> Vec<DeviceMetrics> {
    let profile = dynamic_profile(slice);
    slice
        .dynamic_devices()
        .iter()
        .map(|&device| DeviceMetrics {
            device: device.to_string(),
            throughput: profile.throughput_bounds.clamp(
                baseline.throughput * profile.throughput_ratio * DYNAMIC_JITTER.sample(rng),
            ),
            packet_loss: profile.packet_loss_bounds.clamp(
                baseline.packet_loss * profile.packet_loss_ratio * DYNAMIC_JITTER.sample(rng),
            ),
            energy: profile
                .energy_bounds
                .clamp(baseline.energy * profile.energy_ratio * DYNAMIC_JITTER.sample(rng)),
        })
        .collect()
}

/// Generate dynamic metrics for `slice`, reseeding from the wall clock.
pub fn generate_dynamic(slice: SliceType, baseline: &SliceAggregate) -> Vec<DeviceMetrics> {
    generate_dynamic_with(slice, baseline, &mut wall_clock_rng())
}
