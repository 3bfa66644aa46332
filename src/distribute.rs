//! Main-axis space distribution under minimum/preferred constraints.
//!
//! Each item states a minimum and a preferred extent. The distributor hands
//! out available space in three regimes:
//!
//! - below the minimum sum, every item gets exactly its minimum and the
//!   result is flagged as overflowing (the caller must allow scrolling);
//! - above the preferred sum, the surplus past preferred is split equally;
//! - in between, every item grows by the same *fraction* of its own stretch
//!   room (`preferred - minimum`), so sizes sum exactly to the available
//!   space while items with more room absorb more of it.
//!
//! Fair-share, not equal-pixel: a `Pair` row with 60 units of stretch room
//! and a `Single` row with 20 grow 3:1 in the interpolated regime.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Result of distributing space across a sequence of items.
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
    /// True when the available space could not cover the minimum sizes.
    /// Sizes are then the minimums and the caller must scroll.
    pub overflowed: bool,
    /// Allocated extent per item, padding included. Same length and order
    /// as the input constraint slices.
    pub sizes: Vec<f32>,
}

impl Distribution {
    /// Total extent of all items. The content size of a scroll container
    /// when `overflowed`, otherwise equal to the available space given to
    /// [`distribute`] (up to rounding).
    pub fn total(&self) -> f32 {
        self.sizes.iter().sum()
    }
}

/// Distribute `available` space across items with the given minimum and
/// preferred extents, reserving `padding` on both sides of every item.
///
/// `minimums` and `preferreds` must be the same length with each minimum
/// strictly below its preferred; both hold for every topology this crate
/// produces. Returned sizes include each item's `2 * padding`.
pub fn distribute(
    minimums: &[f32],
    preferreds: &[f32],
    available: f32,
    padding: f32,
) -> Distribution {
    debug_assert_eq!(minimums.len(), preferreds.len());
    let n = minimums.len();
    if n == 0 {
        return Distribution {
            overflowed: false,
            sizes: Vec::new(),
        };
    }

    let pad_total = 2.0 * padding * n as f32;
    let usable = available - pad_total;
    let min_sum: f32 = minimums.iter().sum();
    let preferred_sum: f32 = preferreds.iter().sum();

    if usable < min_sum {
        // Clamp up to the minimums; content exceeds the viewport.
        let sizes = minimums.iter().map(|&m| m + 2.0 * padding).collect();
        return Distribution {
            overflowed: true,
            sizes,
        };
    }

    let sizes = if usable >= preferred_sum {
        // Past preferred: split the surplus equally.
        let share = (usable - preferred_sum) / n as f32;
        preferreds
            .iter()
            .map(|&p| p + share + 2.0 * padding)
            .collect()
    } else {
        // Between minimum and preferred: every item gets the same fraction
        // of its own stretch room.
        let x = (usable - min_sum) / (preferred_sum - min_sum);
        minimums
            .iter()
            .zip(preferreds)
            .map(|(&m, &p)| m + x * (p - m) + 2.0 * padding)
            .collect()
    };
    Distribution {
        overflowed: false,
        sizes,
    }
}
