//! Board plans and the planners that produce them.
//!
//! A plan is purely derived data: recomputed from scratch on every viewport
//! or seat-count change, holding no identity and no mutable state. Planning
//! is total — every input maps to some [`BoardPlan`], with "cannot fit"
//! expressed as `overflowed` flags or [`BoardPlan::Fallback`] rather than an
//! error. Layout computation must never fail the render pass.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::distribute::distribute;
use crate::order::SeatingOrder;
use crate::topology::{self, SlotArrangement};
use crate::upright::{UprightPlan, plan_upright};

/// Main-axis direction of a circular board: the axis rows stack along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Rows stack left to right.
    Horizontal,
    /// Rows stack top to bottom.
    Vertical,
}

/// Seats arranged around a virtual table.
///
/// Rows follow `topology` in order along the main axis; `row_sizes` gives
/// each row's main-axis extent (padding included). Seat content rotations
/// come from each row's [`SlotArrangement::rotations`]; in horizontal
/// orientation the renderer rotates the whole row stack a quarter turn.
#[derive(Clone, Debug, PartialEq)]
pub struct CircularPlan {
    /// Axis the rows stack along.
    pub direction: Direction,
    /// Row arrangement, first row first.
    pub topology: &'static [SlotArrangement],
    /// Seat-to-slot permutation.
    pub order: SeatingOrder,
    /// Main-axis extent per row, same order as `topology`.
    pub row_sizes: Vec<f32>,
    /// True when the rows' minimum extents exceed the main axis; the board
    /// must render inside a scroll container sized to [`main_extent`](Self::main_extent).
    pub overflowed: bool,
}

impl CircularPlan {
    /// Number of seats on the board.
    pub fn seat_count(&self) -> usize {
        self.order.seat_count()
    }

    /// Total main-axis extent of all rows.
    pub fn main_extent(&self) -> f32 {
        self.row_sizes.iter().sum()
    }
}

/// Result of planning a board layout.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardPlan {
    /// Seats around a table, rotated to face their edge.
    Circular(CircularPlan),
    /// Non-rotated grid for always-upright mode.
    Upright(UprightPlan),
    /// No structured layout: let seats wrap freely. Used for zero seats and
    /// for counts past the circular topology table.
    Fallback,
}

/// Plan a circular board. `None` when `seat_count` has no topology
/// (zero, or past [`topology::MAX_CIRCULAR_SEATS`]).
pub fn plan_circular(
    seat_count: usize,
    max_width: f32,
    max_height: f32,
    padding: f32,
) -> Option<CircularPlan> {
    let topo = topology::topology_for(seat_count)?;
    let order = SeatingOrder::new(seat_count);

    // Orient along the larger dimension when the widest row's minimum fits
    // across the smaller one; otherwise the smaller dimension becomes the
    // main axis and the wide rows get the long way instead.
    let min_cross: f32 = topo.iter().map(|row| row.min_width()).fold(0.0, f32::max);
    let fits_across = min_cross <= max_width.min(max_height);
    let height_is_larger = max_height >= max_width;
    let (direction, main_len) = if fits_across == height_is_larger {
        (Direction::Vertical, max_height)
    } else {
        (Direction::Horizontal, max_width)
    };

    // Row metrics are authored vertical-first; height metrics drive the
    // main axis in both orientations.
    let minimums: Vec<f32> = topo.iter().map(|row| row.min_height()).collect();
    let preferreds: Vec<f32> = topo.iter().map(|row| row.preferred_height()).collect();
    let d = distribute(&minimums, &preferreds, main_len, padding);

    Some(CircularPlan {
        direction,
        topology: topo,
        order,
        row_sizes: d.sizes,
        overflowed: d.overflowed,
    })
}

/// Plan a board layout for any seat count and viewport.
///
/// Total function: zero seats or an unsupported circular count yields
/// [`BoardPlan::Fallback`]; degenerate geometry flows through distribution
/// and surfaces as `overflowed` inside a structured plan.
pub fn plan_board(
    always_upright: bool,
    seat_count: usize,
    max_width: f32,
    max_height: f32,
    padding: f32,
) -> BoardPlan {
    if seat_count == 0 {
        return BoardPlan::Fallback;
    }
    if always_upright {
        return BoardPlan::Upright(plan_upright(seat_count, max_width, max_height, padding));
    }
    match plan_circular(seat_count, max_width, max_height, padding) {
        Some(plan) => BoardPlan::Circular(plan),
        None => BoardPlan::Fallback,
    }
}
