//! Upright grid layout: a non-rotated grid of seats, grown greedily.
//!
//! In always-upright mode every seat faces the same way, so the board is a
//! grid rather than a table. The grid starts at 1×1 and grows one column or
//! one row at a time until it has capacity for every seat, preferring the
//! move that avoids vertical overflow and tie-breaking on how close the
//! resulting slot aspect ratio lands to the preferred seat aspect.
//!
//! Deliberately a local greedy search, not a closed form: the tie-breaking
//! policy is a product heuristic, and the grid dimensions are small enough
//! that optimality is not worth the loss of the explicit policy.

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::topology::{
    SEAT_MIN_HEIGHT, SEAT_MIN_WIDTH, SEAT_PREFERRED_HEIGHT, SEAT_PREFERRED_WIDTH,
};

/// Grid layout for always-upright mode.
///
/// `row_count * items_per_row >= item_count` always holds; trailing cells in
/// the last row stay empty.
#[derive(Clone, Debug, PartialEq)]
pub struct UprightPlan {
    /// Number of seats the grid was planned for.
    pub item_count: usize,
    /// Seats per row.
    pub items_per_row: usize,
    /// Number of rows.
    pub row_count: usize,
    /// Height of each row, padding included.
    pub row_height: f32,
    /// True when the row height had to be clamped up to the seat minimum;
    /// the grid is taller than the viewport and must scroll.
    pub overflowed: bool,
}

impl UprightPlan {
    /// Total grid height, the content size of the scroll container when
    /// `overflowed`.
    pub fn total_height(&self) -> f32 {
        self.row_height * self.row_count as f32
    }
}

/// One evaluated `(rows, columns)` candidate.
struct GridState {
    /// Slot width net of padding.
    net_width: f32,
    /// Slot height net of padding, clamped up to the seat minimum.
    net_height: f32,
    overflowed: bool,
}

impl GridState {
    fn evaluate(
        items_per_row: usize,
        row_count: usize,
        max_width: f32,
        max_height: f32,
        padding: f32,
    ) -> Self {
        let net_width = max_width / items_per_row as f32 - 2.0 * padding;
        let raw_height = max_height / row_count as f32 - 2.0 * padding;
        let overflowed = raw_height < SEAT_MIN_HEIGHT;
        let net_height = if overflowed { SEAT_MIN_HEIGHT } else { raw_height };
        Self {
            net_width,
            net_height,
            overflowed,
        }
    }

    /// Distance between this slot's aspect ratio and the preferred seat
    /// aspect. `net_height` is clamped positive, so this is always finite.
    fn aspect_error(&self) -> f32 {
        const TARGET: f32 = SEAT_PREFERRED_WIDTH / SEAT_PREFERRED_HEIGHT;
        (self.net_width / self.net_height - TARGET).abs()
    }
}

/// Plan an upright grid for `item_count` seats.
///
/// Terminates for every input: each iteration either grows the grid by one
/// row or column, or jumps straight to the required row count and stops.
pub fn plan_upright(
    item_count: usize,
    max_width: f32,
    max_height: f32,
    padding: f32,
) -> UprightPlan {
    let mut items_per_row = 1usize;
    let mut row_count = 1usize;

    while row_count * items_per_row < item_count {
        let wider =
            GridState::evaluate(items_per_row + 1, row_count, max_width, max_height, padding);
        if wider.net_width < SEAT_MIN_WIDTH {
            // Columns can't shrink any further; take all remaining rows.
            row_count = item_count.div_ceil(items_per_row);
            break;
        }
        let taller =
            GridState::evaluate(items_per_row, row_count + 1, max_width, max_height, padding);
        let grow_columns = match (wider.overflowed, taller.overflowed) {
            (false, true) => true,
            (true, false) => false,
            _ => wider.aspect_error() <= taller.aspect_error(),
        };
        if grow_columns {
            items_per_row += 1;
        } else {
            row_count += 1;
        }
    }

    let chosen = GridState::evaluate(items_per_row, row_count, max_width, max_height, padding);
    UprightPlan {
        item_count,
        items_per_row,
        row_count,
        row_height: chosen.net_height + 2.0 * padding,
        overflowed: chosen.overflowed,
    }
}
