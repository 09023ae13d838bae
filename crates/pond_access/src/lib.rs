//! The stochastic access-permission check (`spec.md` §4.3).

#![warn(missing_docs)]

use pond_common::{Mt19937, Sense, LOGO_MASK};
use pond_grid::Cell;

/// Tests whether an interaction against `target` is permitted.
///
/// Draws a uniform 4-bit word from `rng` and compares it against the
/// Hamming distance between `target.logo` and `guess`. A target with no
/// parent (freshly seeded noise) is always accessible, regardless of the
/// draw.
pub fn access_allowed(target: &Cell, guess: u8, sense: Sense, rng: &mut Mt19937) -> bool {
    if target.parent_id == 0 {
        return true;
    }
    let h = ((target.logo ^ guess) & LOGO_MASK).count_ones();
    let r = (rng.next_word() & 0xf) as u32;
    match sense {
        Sense::Negative => r <= h,
        Sense::Positive => r >= h,
    }
}
