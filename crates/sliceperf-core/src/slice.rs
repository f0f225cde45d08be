//! The three 5G network-slice traffic classes and their fixed identities.
//!
//! Everything keyed by slice type — device names, CSV file names, base
//! constants, ratio tables, clamp bounds — dispatches through [`SliceType`],
//! so an unhandled fourth class cannot exist.

/// One of the three modeled 5G network-slice traffic classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceType {
    /// Ultra-reliable low-latency communication.
    Urllc,
    /// Enhanced mobile broadband.
    Embb,
    /// Massive machine-type communication.
    Mmtc,
}

impl SliceType {
    /// All slice types, in the fixed generation/output order.
    pub const ALL: [Self; 3] = [Self::Urllc, Self::Embb, Self::Mmtc];

    /// Lowercase form used to derive CSV file names.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Urllc => "urllc",
            Self::Embb => "embb",
            Self::Mmtc => "mmtc",
        }
    }

    /// File name of the baseline (static) CSV for this slice.
    pub fn performance_csv(self) -> String {
        format!("{}_performance.csv", self.file_stem())
    }

    /// File name of the dynamic CSV for this slice.
    pub fn dynamic_csv(self) -> String {
        format!("{}_dynamic.csv", self.file_stem())
    }

    /// Device names emitted by the static generator, in output order.
    pub fn static_devices(self) -> &'static [&'static str; 2] {
        match self {
            Self::Urllc => &["Industrial Robot", "Autonomous Drone"],
            Self::Embb => &["8K Video", "VR Headset"],
            Self::Mmtc => &["Smart Meter", "Weather Sensor"],
        }
    }

    /// Device names emitted by the dynamic generator, in output order.
    ///
    /// Deliberately distinct from the static set: each carries its slice tag
    /// in parentheses so the two CSV families stay distinguishable downstream.
    pub fn dynamic_devices(self) -> &'static [&'static str; 2] {
        match self {
            Self::Urllc => &["Robot (URLLC)", "Drone (URLLC)"],
            Self::Embb => &["8K Video (eMBB)", "VR (eMBB)"],
            Self::Mmtc => &["Smart Meter (mMTC)", "Sensor (mMTC)"],
        }
    }
}

impl std::fmt::Display for SliceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Urllc => write!(f, "URLLC"),
            Self::Embb => write!(f, "eMBB"),
            Self::Mmtc => write!(f, "mMTC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Display / file name tests
    // -----------------------------------------------------------------------

    #[test]
    fn display_uses_canonical_casing() {
        assert_eq!(SliceType::Urllc.to_string(), "URLLC");
        assert_eq!(SliceType::Embb.to_string(), "eMBB");
        assert_eq!(SliceType::Mmtc.to_string(), "mMTC");
    }

    #[test]
    fn file_stems_are_lowercase() {
        for slice in SliceType::ALL {
            let stem = slice.file_stem();
            assert_eq!(stem, stem.to_lowercase());
            assert_eq!(stem, slice.to_string().to_lowercase());
        }
    }

    #[test]
    fn csv_names_follow_stem_convention() {
        assert_eq!(SliceType::Urllc.performance_csv(), "urllc_performance.csv");
        assert_eq!(SliceType::Embb.performance_csv(), "embb_performance.csv");
        assert_eq!(SliceType::Mmtc.performance_csv(), "mmtc_performance.csv");
        assert_eq!(SliceType::Urllc.dynamic_csv(), "urllc_dynamic.csv");
        assert_eq!(SliceType::Embb.dynamic_csv(), "embb_dynamic.csv");
        assert_eq!(SliceType::Mmtc.dynamic_csv(), "mmtc_dynamic.csv");
    }

    // -----------------------------------------------------------------------
    // Device list tests
    // -----------------------------------------------------------------------

    #[test]
    fn all_order_is_urllc_embb_mmtc() {
        assert_eq!(
            SliceType::ALL,
            [SliceType::Urllc, SliceType::Embb, SliceType::Mmtc]
        );
    }

    #[test]
    fn static_device_lists_are_fixed() {
        assert_eq!(
            SliceType::Urllc.static_devices(),
            &["Industrial Robot", "Autonomous Drone"]
        );
        assert_eq!(SliceType::Embb.static_devices(), &["8K Video", "VR Headset"]);
        assert_eq!(
            SliceType::Mmtc.static_devices(),
            &["Smart Meter", "Weather Sensor"]
        );
    }

    #[test]
    fn dynamic_device_names_carry_slice_tag() {
        for slice in SliceType::ALL {
            let tag = format!("({slice})");
            for device in slice.dynamic_devices() {
                assert!(
                    device.ends_with(&tag),
                    "{device} should end with {tag}"
                );
            }
        }
    }

    #[test]
    fn static_and_dynamic_device_sets_are_disjoint() {
        for slice in SliceType::ALL {
            for device in slice.static_devices() {
                assert!(!slice.dynamic_devices().contains(device));
            }
        }
    }
}
