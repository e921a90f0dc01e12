//! Premixed Concrete Bags
//!
//! Bag sizes sold for small pours and their yield expressed as bags per
//! cubic yard of placed concrete.

use serde::{Deserialize, Serialize};

use crate::units::CubicYards;

/// 2^64, the first whole number a `u64` cannot hold
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Premixed concrete bag sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteBag {
    /// 60 lb bag
    #[serde(rename = "60lb")]
    Lb60,
    /// 80 lb bag
    #[serde(rename = "80lb")]
    Lb80,
}

impl ConcreteBag {
    /// All bag sizes, in the order they are listed in results
    pub const ALL: [ConcreteBag; 2] = [ConcreteBag::Lb60, ConcreteBag::Lb80];

    /// Bags needed per cubic yard of concrete
    pub fn bags_per_cubic_yard(&self) -> f64 {
        match self {
            ConcreteBag::Lb60 => 60.0,
            ConcreteBag::Lb80 => 45.0,
        }
    }

    /// Whole bags needed for a volume, rounded up.
    ///
    /// `ceil(yd³ * bags_per_cubic_yard)`. Never under-estimates. Returns
    /// `None` when the count is negative, not finite or too large for a `u64`.
    pub fn bags_for(&self, volume: CubicYards) -> Option<u64> {
        let count = (volume.0 * self.bags_per_cubic_yard()).ceil();
        if count.is_finite() && (0.0..U64_LIMIT).contains(&count) {
            Some(count as u64)
        } else {
            None
        }
    }

    /// Label used in result listings (e.g., "60lb Bags")
    pub fn display_name(&self) -> &'static str {
        match self {
            ConcreteBag::Lb60 => "60lb Bags",
            ConcreteBag::Lb80 => "80lb Bags",
        }
    }
}

impl std::fmt::Display for ConcreteBag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yield_factors() {
        assert_eq!(ConcreteBag::Lb60.bags_per_cubic_yard(), 60.0);
        assert_eq!(ConcreteBag::Lb80.bags_per_cubic_yard(), 45.0);
    }

    #[test]
    fn test_bags_round_up() {
        assert_eq!(ConcreteBag::Lb60.bags_for(CubicYards(1.0)), Some(60));
        assert_eq!(ConcreteBag::Lb60.bags_for(CubicYards(1.001)), Some(61));
        assert_eq!(ConcreteBag::Lb80.bags_for(CubicYards(0.01)), Some(1));
        assert_eq!(ConcreteBag::Lb80.bags_for(CubicYards(0.0)), Some(0));
    }

    #[test]
    fn test_unrepresentable_counts() {
        // 3.7e19 yd³ needs ~2.2e21 bags
        assert_eq!(ConcreteBag::Lb60.bags_for(CubicYards(3.7e19)), None);
        assert_eq!(ConcreteBag::Lb80.bags_for(CubicYards(f64::INFINITY)), None);
        assert_eq!(ConcreteBag::Lb80.bags_for(CubicYards(f64::NAN)), None);
        assert_eq!(ConcreteBag::Lb60.bags_for(CubicYards(-1.0)), None);
    }

    #[test]
    fn test_largest_counts_stay_exact() {
        // 1e17 yd³ * 60 = 6e18, still below 2^64
        assert_eq!(ConcreteBag::Lb60.bags_for(CubicYards(1e17)), Some(6_000_000_000_000_000_000));
    }

    #[test]
    fn test_heavier_bag_never_needs_more() {
        for i in 1..2000 {
            let yards = CubicYards(i as f64 * 0.0137);
            assert!(ConcreteBag::Lb60.bags_for(yards) >= ConcreteBag::Lb80.bags_for(yards));
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ConcreteBag::Lb80).unwrap();
        assert_eq!(json, "\"80lb\"");
        let roundtrip: ConcreteBag = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, ConcreteBag::Lb80);
    }
}
