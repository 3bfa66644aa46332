//! Seat row arrangements and the per-count topology table.
//!
//! A circular board is a stack of rows along a main axis; each row holds one
//! or two seats. Row metrics are authored vertical-first (rows stacking top to
//! bottom) and reused unchanged when the board orients horizontally — the
//! whole row stack rotates, so per-row metrics never change.

use crate::rotation::Rotation;

/// Minimum seat width in layout-independent units.
pub const SEAT_MIN_WIDTH: f32 = 150.0;
/// Minimum seat height.
pub const SEAT_MIN_HEIGHT: f32 = 150.0;
/// Preferred seat width.
pub const SEAT_PREFERRED_WIDTH: f32 = 210.0;
/// Preferred seat height.
pub const SEAT_PREFERRED_HEIGHT: f32 = 170.0;

/// Largest seat count with a structured circular topology.
///
/// A fixed policy constant (the table below ends at 8), not a derived bound.
/// Counts above it fall back to a free-wrapping layout.
pub const MAX_CIRCULAR_SEATS: usize = 8;

/// How one row of the circular board is occupied.
///
/// Metrics are derived from the per-seat constants above. `Pair` seats are
/// rotated a quarter turn, so the seat's *height* contributes to the row's
/// width and the seat's *width* becomes the row's thickness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotArrangement {
    /// Two seats facing each other across the row, rotated 90° and 270°.
    Pair,
    /// One unrotated seat.
    Single,
    /// One seat rotated 180°, facing the far edge of the table.
    InvertedSingle,
}

impl SlotArrangement {
    /// Number of seats in this row.
    pub const fn seat_count(self) -> usize {
        match self {
            Self::Pair => 2,
            Self::Single | Self::InvertedSingle => 1,
        }
    }

    /// Content rotation for each seat in the row, left to right.
    pub const fn rotations(self) -> &'static [Rotation] {
        match self {
            Self::Pair => &[Rotation::Quarter, Rotation::ThreeQuarter],
            Self::Single => &[Rotation::None],
            Self::InvertedSingle => &[Rotation::Half],
        }
    }

    /// Minimum row width (cross-axis extent in vertical-first terms).
    pub const fn min_width(self) -> f32 {
        match self {
            Self::Pair => 2.0 * SEAT_MIN_HEIGHT,
            Self::Single | Self::InvertedSingle => SEAT_MIN_WIDTH,
        }
    }

    /// Preferred row width.
    pub const fn preferred_width(self) -> f32 {
        match self {
            Self::Pair => 2.0 * SEAT_PREFERRED_HEIGHT,
            Self::Single | Self::InvertedSingle => SEAT_PREFERRED_WIDTH,
        }
    }

    /// Minimum row thickness (main-axis extent in vertical-first terms).
    pub const fn min_height(self) -> f32 {
        match self {
            Self::Pair => SEAT_MIN_WIDTH,
            Self::Single | Self::InvertedSingle => SEAT_MIN_HEIGHT,
        }
    }

    /// Preferred row thickness.
    pub const fn preferred_height(self) -> f32 {
        match self {
            Self::Pair => SEAT_PREFERRED_WIDTH,
            Self::Single | Self::InvertedSingle => SEAT_PREFERRED_HEIGHT,
        }
    }
}

/// Row sequence for each supported seat count, top row first.
///
/// Seats are added in a spiral so pairs face each other across the short
/// axis; odd counts get a trailing lone seat, inverted at count 2 so the two
/// players sit opposite one another.
pub fn topology_for(seat_count: usize) -> Option<&'static [SlotArrangement]> {
    use SlotArrangement::{InvertedSingle as I, Pair as P, Single as S};
    const TABLE: [&[SlotArrangement]; 8] = [
        &[S],
        &[I, S],
        &[P, S],
        &[P, P],
        &[P, P, S],
        &[P, P, P],
        &[P, P, P, S],
        &[P, P, P, P],
    ];
    if seat_count == 0 || seat_count > MAX_CIRCULAR_SEATS {
        None
    } else {
        Some(TABLE[seat_count - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_bounds() {
        assert!(topology_for(0).is_none());
        assert!(topology_for(9).is_none());
        assert!(topology_for(usize::MAX).is_none());
        for count in 1..=8 {
            assert!(topology_for(count).is_some(), "count {count}");
        }
    }

    #[test]
    fn table_seat_counts_add_up() {
        for count in 1..=8 {
            let topo = topology_for(count).unwrap();
            let total: usize = topo.iter().map(|a| a.seat_count()).sum();
            assert_eq!(total, count, "topology for {count} seats {topo:?}");
        }
    }

    #[test]
    fn table_exact_rows() {
        use SlotArrangement::{InvertedSingle as I, Pair as P, Single as S};
        assert_eq!(topology_for(1).unwrap(), &[S]);
        assert_eq!(topology_for(2).unwrap(), &[I, S]);
        assert_eq!(topology_for(3).unwrap(), &[P, S]);
        assert_eq!(topology_for(4).unwrap(), &[P, P]);
        assert_eq!(topology_for(5).unwrap(), &[P, P, S]);
        assert_eq!(topology_for(6).unwrap(), &[P, P, P]);
        assert_eq!(topology_for(7).unwrap(), &[P, P, P, S]);
        assert_eq!(topology_for(8).unwrap(), &[P, P, P, P]);
    }

    #[test]
    fn pair_metrics_use_rotated_seat_axes() {
        let p = SlotArrangement::Pair;
        assert_eq!(p.min_width(), 300.0);
        assert_eq!(p.preferred_width(), 340.0);
        assert_eq!(p.min_height(), 150.0);
        assert_eq!(p.preferred_height(), 210.0);
    }

    #[test]
    fn single_metrics_use_upright_seat_axes() {
        for a in [SlotArrangement::Single, SlotArrangement::InvertedSingle] {
            assert_eq!(a.min_width(), 150.0);
            assert_eq!(a.preferred_width(), 210.0);
            assert_eq!(a.min_height(), 150.0);
            assert_eq!(a.preferred_height(), 170.0);
        }
    }

    #[test]
    fn minimum_strictly_below_preferred() {
        // The distributor's interpolation divides by (preferred - minimum)
        // per row sum, so each row needs genuine stretch room.
        for a in [
            SlotArrangement::Pair,
            SlotArrangement::Single,
            SlotArrangement::InvertedSingle,
        ] {
            assert!(a.min_height() < a.preferred_height(), "{a:?}");
            assert!(a.min_width() < a.preferred_width(), "{a:?}");
        }
    }

    #[test]
    fn rotations_per_seat() {
        assert_eq!(
            SlotArrangement::Pair.rotations(),
            &[Rotation::Quarter, Rotation::ThreeQuarter]
        );
        assert_eq!(SlotArrangement::Single.rotations(), &[Rotation::None]);
        assert_eq!(SlotArrangement::InvertedSingle.rotations(), &[Rotation::Half]);
        for a in [
            SlotArrangement::Pair,
            SlotArrangement::Single,
            SlotArrangement::InvertedSingle,
        ] {
            assert_eq!(a.rotations().len(), a.seat_count(), "{a:?}");
        }
    }
}
