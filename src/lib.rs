//! Board layout planning for multi-seat tabletop counter displays.
//!
//! Pure geometry — no rendering, no I/O, no shared state, `no_std`
//! compatible (with `alloc`). Given a seat count and a viewport, the planner
//! decides how to partition the viewport into per-seat slots, each with a
//! target size and a quarter-turn rotation so every player sees their
//! counter right-side-up from their edge of the table.
//!
//! # Modules
//!
//! - [`rotation`] — quarter-turn rotations (C4 group) for seat content
//! - [`topology`] — seat row arrangements and the per-count topology table
//! - [`order`] — seat-to-slot permutation around the table
//! - [`distribute`] — min/preferred space distribution along the main axis
//! - [`upright`] — greedy grid search for always-upright mode
//! - [`plan`] — plan types and the top-level planner
//!
//! # Example
//!
//! ```
//! use tableplan::{plan_board, BoardPlan, Direction};
//!
//! let plan = plan_board(false, 4, 400.0, 800.0, 8.0);
//! let BoardPlan::Circular(board) = plan else { unreachable!() };
//!
//! // Two facing pairs stacked down the long axis.
//! assert_eq!(board.direction, Direction::Vertical);
//! assert_eq!(board.row_sizes.len(), 2);
//! assert!(!board.overflowed);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod distribute;
#[cfg(feature = "alloc")]
pub mod order;
#[cfg(feature = "alloc")]
pub mod plan;
pub mod rotation;
#[cfg(feature = "svg")]
pub mod svg;
pub mod topology;
pub mod upright;

// Re-exports: the planner surface.
#[cfg(feature = "alloc")]
pub use distribute::{Distribution, distribute};
#[cfg(feature = "alloc")]
pub use order::SeatingOrder;
#[cfg(feature = "alloc")]
pub use plan::{BoardPlan, CircularPlan, Direction, plan_board, plan_circular};
pub use rotation::Rotation;
pub use topology::{
    MAX_CIRCULAR_SEATS, SEAT_MIN_HEIGHT, SEAT_MIN_WIDTH, SEAT_PREFERRED_HEIGHT,
    SEAT_PREFERRED_WIDTH, SlotArrangement, topology_for,
};
pub use upright::{UprightPlan, plan_upright};
