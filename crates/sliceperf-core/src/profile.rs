//! Fixed constant tables driving both generators.
//!
//! [`StaticProfile`] holds the baseline constants, uniform multiplier ranges,
//! and clamp bounds for the static generator. [`DynamicProfile`] holds the
//! dynamic/static ratio table and the (tighter) dynamic clamp bounds. Both
//! are `'static` read-only tables — immutable configuration, never mutated,
//! never re-derived at runtime.
//!
//! The ratio table encodes a deliberate qualitative tradeoff: in dynamic mode
//! every slice gives up throughput while packet loss improves proportionally
//! more. The tabulated values are the contract; do not recompute them.

use rand::Rng;

use crate::slice::SliceType;

// ---------------------------------------------------------------------------
// Interval primitives
// ---------------------------------------------------------------------------

/// Closed clamp interval `[min, max]` for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Force `value` into `[min, max]`.
    pub fn clamp(self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Whether `value` lies inside the interval (inclusive).
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Uniform sampling range for a random multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarRange {
    pub lo: f64,
    pub hi: f64,
}

impl VarRange {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Draw one multiplier uniformly from `[lo, hi]`.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        rng.random_range(self.lo..=self.hi)
    }
}

// ---------------------------------------------------------------------------
// Static generator tables
// ---------------------------------------------------------------------------

/// Baseline constants, multiplier ranges, and clamp bounds for one slice type.
#[derive(Debug, Clone, Copy)]
pub struct StaticProfile {
    pub base_throughput: f64,
    pub base_packet_loss: f64,
    pub base_energy: f64,
    pub throughput_var: VarRange,
    pub packet_loss_var: VarRange,
    pub energy_var: VarRange,
    pub throughput_bounds: Bounds,
    pub packet_loss_bounds: Bounds,
    pub energy_bounds: Bounds,
}

const URLLC_STATIC: StaticProfile = StaticProfile {
    base_throughput: 100.0,
    base_packet_loss: 0.03,
    base_energy: 5.2,
    throughput_var: VarRange::new(0.80, 1.15),
    packet_loss_var: VarRange::new(0.75, 1.30),
    energy_var: VarRange::new(0.85, 1.15),
    throughput_bounds: Bounds::new(70.0, 130.0),
    packet_loss_bounds: Bounds::new(0.008, 0.06),
    energy_bounds: Bounds::new(4.0, 6.5),
};

const EMBB_STATIC: StaticProfile = StaticProfile {
    base_throughput: 450.0,
    base_packet_loss: 0.2,
    base_energy: 2.8,
    throughput_var: VarRange::new(0.75, 1.20),
    packet_loss_var: VarRange::new(0.70, 1.35),
    energy_var: VarRange::new(0.80, 1.20),
    throughput_bounds: Bounds::new(250.0, 700.0),
    packet_loss_bounds: Bounds::new(0.08, 0.4),
    energy_bounds: Bounds::new(1.8, 4.0),
};

const MMTC_STATIC: StaticProfile = StaticProfile {
    base_throughput: 12.0,
    base_packet_loss: 3.0,
    base_energy: 0.3,
    throughput_var: VarRange::new(0.60, 1.40),
    packet_loss_var: VarRange::new(0.50, 1.60),
    energy_var: VarRange::new(0.70, 1.40),
    throughput_bounds: Bounds::new(3.0, 25.0),
    packet_loss_bounds: Bounds::new(0.8, 6.0),
    energy_bounds: Bounds::new(0.08, 0.6),
};

/// Static generator table for a slice type.
pub fn static_profile(slice: SliceType) -> &'static StaticProfile {
    match slice {
        SliceType::Urllc => &URLLC_STATIC,
        SliceType::Embb => &EMBB_STATIC,
        SliceType::Mmtc => &MMTC_STATIC,
    }
}

// ---------------------------------------------------------------------------
// Dynamic generator tables
// ---------------------------------------------------------------------------

/// Jitter multiplier range applied on top of every dynamic ratio.
pub const DYNAMIC_JITTER: VarRange = VarRange::new(0.98, 1.02);

/// Dynamic/static ratio constants and dynamic clamp bounds for one slice type.
#[derive(Debug, Clone, Copy)]
pub struct DynamicProfile {
    pub throughput_ratio: f64,
    pub packet_loss_ratio: f64,
    pub energy_ratio: f64,
    pub throughput_bounds: Bounds,
    pub packet_loss_bounds: Bounds,
    pub energy_bounds: Bounds,
}

const URLLC_DYNAMIC: DynamicProfile = DynamicProfile {
    throughput_ratio: 0.95,
    packet_loss_ratio: 0.60,
    energy_ratio: 1.04,
    throughput_bounds: Bounds::new(80.0, 120.0),
    packet_loss_bounds: Bounds::new(0.01, 0.06),
    energy_bounds: Bounds::new(4.0, 6.5),
};

const EMBB_DYNAMIC: DynamicProfile = DynamicProfile {
    throughput_ratio: 0.93,
    packet_loss_ratio: 0.80,
    energy_ratio: 0.94,
    throughput_bounds: Bounds::new(300.0, 550.0),
    packet_loss_bounds: Bounds::new(0.10, 0.35),
    energy_bounds: Bounds::new(2.0, 4.0),
};

const MMTC_DYNAMIC: DynamicProfile = DynamicProfile {
    throughput_ratio: 0.80,
    packet_loss_ratio: 0.86,
    energy_ratio: 0.86,
    throughput_bounds: Bounds::new(5.0, 20.0),
    packet_loss_bounds: Bounds::new(1.5, 5.0),
    energy_bounds: Bounds::new(0.15, 0.45),
};

/// Dynamic generator table for a slice type.
pub fn dynamic_profile(slice: SliceType) -> &'static DynamicProfile {
    match slice {
        SliceType::Urllc => &URLLC_DYNAMIC,
        SliceType::Embb => &EMBB_DYNAMIC,
        SliceType::Mmtc => &MMTC_DYNAMIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // -----------------------------------------------------------------------
    // Bounds tests
    // -----------------------------------------------------------------------

    #[test]
    fn clamp_passes_in_range_values_through() {
        let b = Bounds::new(70.0, 130.0);
        assert_eq!(b.clamp(100.0), 100.0);
        assert_eq!(b.clamp(70.0), 70.0);
        assert_eq!(b.clamp(130.0), 130.0);
    }

    #[test]
    fn clamp_forces_out_of_range_values_to_the_edge() {
        let b = Bounds::new(70.0, 130.0);
        assert_eq!(b.clamp(12.0), 70.0);
        assert_eq!(b.clamp(9999.0), 130.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let b = Bounds::new(0.01, 0.06);
        assert!(b.contains(0.01));
        assert!(b.contains(0.06));
        assert!(!b.contains(0.0099));
        assert!(!b.contains(0.0601));
    }

    // -----------------------------------------------------------------------
    // VarRange tests
    // -----------------------------------------------------------------------

    #[test]
    fn sample_stays_inside_the_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = VarRange::new(0.80, 1.15);
        for _ in 0..1000 {
            let v = range.sample(&mut rng);
            assert!((0.80..=1.15).contains(&v));
        }
    }

    // -----------------------------------------------------------------------
    // Table sanity tests
    // -----------------------------------------------------------------------

    #[test]
    fn static_base_values_lie_inside_their_bounds() {
        for slice in SliceType::ALL {
            let p = static_profile(slice);
            assert!(p.throughput_bounds.contains(p.base_throughput));
            assert!(p.packet_loss_bounds.contains(p.base_packet_loss));
            assert!(p.energy_bounds.contains(p.base_energy));
        }
    }

    #[test]
    fn all_bounds_are_well_formed() {
        for slice in SliceType::ALL {
            let s = static_profile(slice);
            let d = dynamic_profile(slice);
            for b in [
                s.throughput_bounds,
                s.packet_loss_bounds,
                s.energy_bounds,
                d.throughput_bounds,
                d.packet_loss_bounds,
                d.energy_bounds,
            ] {
                assert!(b.min < b.max);
            }
        }
    }

    #[test]
    fn ratio_table_keeps_the_throughput_loss_tradeoff() {
        // Dynamic mode never gains throughput and never worsens packet loss.
        for slice in SliceType::ALL {
            let d = dynamic_profile(slice);
            assert!(d.throughput_ratio < 1.0);
            assert!(d.packet_loss_ratio < 1.0);
        }
    }

    #[test]
    fn dynamic_jitter_is_a_two_percent_band() {
        assert_eq!(DYNAMIC_JITTER.lo, 0.98);
        assert_eq!(DYNAMIC_JITTER.hi, 1.02);
    }
}
