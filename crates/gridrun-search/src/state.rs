//! Nodes of the augmented search space.

use std::fmt;

use gridrun_core::Coord;

/// The axis along which the mover's most recent run occurred.
///
/// Only the axis matters, not the compass direction: after a run along one
/// axis the only legal continuation is a perpendicular run, which excludes
/// both reversal and same-axis continuation by construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other axis.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// The two signed unit steps along this axis.
    #[inline]
    pub const fn unit_steps(self) -> [Coord; 2] {
        match self {
            Self::Horizontal => [Coord::new(1, 0), Coord::new(-1, 0)],
            Self::Vertical => [Coord::new(0, 1), Coord::new(0, -1)],
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "H"),
            Self::Vertical => write!(f, "V"),
        }
    }
}

/// A node of the derived search graph: a grid position plus the axis of the
/// run that reached it, or one of the two synthetic endpoint markers.
///
/// `Start` and `End` live outside the coordinate space so that the solver
/// has a single entry and a single exit regardless of which orientation is
/// optimal at the origin or destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    Start,
    Cell {
        pos: Coord,
        orientation: Orientation,
    },
    End,
}

impl State {
    /// Shorthand for a grid-cell state.
    #[inline]
    pub const fn cell(pos: Coord, orientation: Orientation) -> Self {
        Self::Cell { pos, orientation }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Cell { pos, orientation } => write!(f, "{pos} {orientation}"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_alternates() {
        assert_eq!(Orientation::Horizontal.flip(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.flip(), Orientation::Horizontal);
    }

    #[test]
    fn unit_steps_span_the_axis() {
        assert_eq!(
            Orientation::Horizontal.unit_steps(),
            [Coord::new(1, 0), Coord::new(-1, 0)]
        );
        assert_eq!(
            Orientation::Vertical.unit_steps(),
            [Coord::new(0, 1), Coord::new(0, -1)]
        );
    }

    #[test]
    fn structural_equality() {
        let a = State::cell(Coord::new(1, 2), Orientation::Horizontal);
        let b = State::cell(Coord::new(1, 2), Orientation::Horizontal);
        assert_eq!(a, b);
        assert_ne!(a, State::cell(Coord::new(1, 2), Orientation::Vertical));
        assert_ne!(State::Start, State::End);
    }
}
