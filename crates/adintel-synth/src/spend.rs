//! Spend-tier model: the creative format drives a tier distribution, the
//! tier maps to a daily INR range, and the reported min/max spread adds a
//! 10–30% variance on top of the base draw.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendTier {
    Low,
    Mid,
    High,
    Viral,
}

impl SpendTier {
    /// Estimated daily spend range in INR for this tier.
    #[must_use]
    pub const fn daily_range(self) -> (i64, i64) {
        match self {
            SpendTier::Low => (500, 3_000),
            SpendTier::Mid => (3_000, 15_000),
            SpendTier::High => (15_000, 60_000),
            SpendTier::Viral => (60_000, 200_000),
        }
    }
}

/// Draw a (min, max) spend estimate for a tier. The base is uniform within
/// the tier range; max adds a uniform 10–30% variance, mirroring how Meta
/// reports a spend band rather than a point estimate.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn draw_spend<R: Rng + ?Sized>(tier: SpendTier, rng: &mut R) -> (i64, i64) {
    let (lo, hi) = tier.daily_range();
    let base = rng.random_range(lo..=hi);
    let variance = (base as f64 * rng.random_range(0.1..0.3)) as i64;
    (base, base + variance)
}
