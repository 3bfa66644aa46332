//! Quarter-turn rotations (the cyclic group C4) for seat content.
//!
//! Seats around a virtual table face different edges, so their content is
//! rotated in 90° steps to read right-side-up from that edge. Flips never
//! occur in board layouts, so the full dihedral group is not needed.

/// Clockwise quarter-turn rotation applied to a seat's content.
///
/// ```text
///     None           Quarter        Half           ThreeQuarter
///     ┌───┐          ┌────┐         ┌───┐          ┌────┐
///     │ F │          │  ᖷ │         │ Ⅎ │          │ F  │   (an "F" read
///     │   │          └────┘         │   │          └────┘    from each edge)
///     └───┘                         └───┘
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// No rotation. The seat faces the bottom edge.
    #[default]
    None,
    /// 90° clockwise. The seat faces the left edge.
    Quarter,
    /// 180°. The seat faces the top edge.
    Half,
    /// 270° clockwise (90° counter-clockwise). The seat faces the right edge.
    ThreeQuarter,
}

impl Rotation {
    /// All four rotations in clockwise order.
    pub const ALL: [Self; 4] = [Self::None, Self::Quarter, Self::Half, Self::ThreeQuarter];

    /// Rotation angle in degrees clockwise (0, 90, 180, or 270).
    pub const fn degrees(self) -> u16 {
        match self {
            Self::None => 0,
            Self::Quarter => 90,
            Self::Half => 180,
            Self::ThreeQuarter => 270,
        }
    }

    /// Number of clockwise quarter turns (0-3).
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Quarter => 1,
            Self::Half => 2,
            Self::ThreeQuarter => 3,
        }
    }

    /// Build from a quarter-turn count; any `u8` is accepted modulo 4.
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns & 3 {
            0 => Self::None,
            1 => Self::Quarter,
            2 => Self::Half,
            _ => Self::ThreeQuarter,
        }
    }

    /// Whether this rotation swaps a seat's width and height.
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::Quarter | Self::ThreeQuarter)
    }

    /// Compose two rotations: apply `self` first, then `other`.
    ///
    /// Renderers use this to stack a device orientation on top of the
    /// slot rotation the planner assigned.
    pub const fn compose(self, other: Self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    /// The inverse rotation: `self.compose(self.inverse()) == Rotation::None`.
    pub const fn inverse(self) -> Self {
        Self::from_quarter_turns(4 - self.quarter_turns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_match_turns() {
        for r in Rotation::ALL {
            assert_eq!(r.degrees() as u32, r.quarter_turns() as u32 * 90);
        }
    }

    #[test]
    fn from_turns_round_trip() {
        for r in Rotation::ALL {
            assert_eq!(Rotation::from_quarter_turns(r.quarter_turns()), r);
        }
        // Modulo behavior.
        assert_eq!(Rotation::from_quarter_turns(4), Rotation::None);
        assert_eq!(Rotation::from_quarter_turns(7), Rotation::ThreeQuarter);
    }

    #[test]
    fn swaps_axes() {
        assert!(!Rotation::None.swaps_axes());
        assert!(Rotation::Quarter.swaps_axes());
        assert!(!Rotation::Half.swaps_axes());
        assert!(Rotation::ThreeQuarter.swaps_axes());
    }

    #[test]
    fn compose_is_addition_mod_4() {
        for a in Rotation::ALL {
            for b in Rotation::ALL {
                let expected =
                    Rotation::from_quarter_turns(a.quarter_turns() + b.quarter_turns());
                assert_eq!(a.compose(b), expected, "{a:?} ∘ {b:?}");
            }
        }
    }

    #[test]
    fn inverse_all() {
        for r in Rotation::ALL {
            assert_eq!(r.compose(r.inverse()), Rotation::None, "{r:?}");
            assert_eq!(r.inverse().compose(r), Rotation::None, "{r:?}");
        }
    }

    #[test]
    fn identity_is_neutral() {
        for r in Rotation::ALL {
            assert_eq!(Rotation::None.compose(r), r);
            assert_eq!(r.compose(Rotation::None), r);
        }
    }
}
