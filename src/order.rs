//! Seating-order permutation between logical seat indices and board slots.
//!
//! Walking around the table visits board slots top-left to bottom, but
//! players are numbered in joining order. Interleaving even indices down one
//! side and odd indices back up the other keeps consecutive player numbers
//! adjacent around the table edge rather than across it.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Bijection between seat indices and board slot positions.
///
/// `slot_order[i]` is the seat index rendered in slot `i`;
/// `layout_order[seat]` is the slot a given seat occupies. The two are
/// inverse permutations on `[0, seat_count)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeatingOrder {
    /// Slot index → seat index.
    pub slot_order: Vec<usize>,
    /// Seat index → slot index. Inverse of `slot_order`.
    pub layout_order: Vec<usize>,
}

impl SeatingOrder {
    /// Build the seating order for `seat_count` seats.
    ///
    /// Slots are visited even seats first (`0, 2, 4, ...`), then odd seats
    /// in reverse (`..., 5, 3, 1`), tracing one loop around the table.
    pub fn new(seat_count: usize) -> Self {
        let evens = (0..seat_count).step_by(2);
        let odds = (1..seat_count).step_by(2).rev();
        let slot_order: Vec<usize> = evens.chain(odds).collect();

        let mut layout_order = vec![0usize; seat_count];
        for (slot, &seat) in slot_order.iter().enumerate() {
            layout_order[seat] = slot;
        }
        Self {
            slot_order,
            layout_order,
        }
    }

    /// Number of seats covered by this permutation.
    pub fn seat_count(&self) -> usize {
        self.slot_order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invert a permutation: `inverse(seq)[seq[i]] == i`.
    fn inverse(seq: &[usize]) -> Vec<usize> {
        let mut inv = vec![0usize; seq.len()];
        for (i, &v) in seq.iter().enumerate() {
            inv[v] = i;
        }
        inv
    }

    #[test]
    fn known_good_orders() {
        // Hand-verified slot orders for small tables.
        assert_eq!(SeatingOrder::new(1).layout_order, inverse(&[0]));
        assert_eq!(SeatingOrder::new(2).layout_order, inverse(&[0, 1]));
        assert_eq!(SeatingOrder::new(3).layout_order, inverse(&[0, 2, 1]));
        assert_eq!(SeatingOrder::new(4).layout_order, inverse(&[0, 2, 3, 1]));
        assert_eq!(SeatingOrder::new(5).layout_order, inverse(&[0, 2, 4, 3, 1]));
    }

    #[test]
    fn slot_order_walks_evens_then_odds_reversed() {
        assert_eq!(SeatingOrder::new(6).slot_order, vec![0, 2, 4, 5, 3, 1]);
        assert_eq!(SeatingOrder::new(7).slot_order, vec![0, 2, 4, 6, 5, 3, 1]);
    }

    #[test]
    fn orders_are_inverse_bijections() {
        for count in 1..=8 {
            let order = SeatingOrder::new(count);
            assert_eq!(order.seat_count(), count);
            for i in 0..count {
                assert_eq!(
                    order.layout_order[order.slot_order[i]], i,
                    "count {count}, slot {i}"
                );
                assert_eq!(
                    order.slot_order[order.layout_order[i]], i,
                    "count {count}, seat {i}"
                );
            }
        }
    }

    #[test]
    fn empty_order() {
        let order = SeatingOrder::new(0);
        assert!(order.slot_order.is_empty());
        assert!(order.layout_order.is_empty());
    }
}
