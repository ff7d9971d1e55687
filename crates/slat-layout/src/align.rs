//! Orientation, alignment, and wrap mode.

use glam::Vec2;

/// Axis along which sibling boxes are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Boxes flow along x (a row)
    #[default]
    Horizontal,
    /// Boxes flow along y (a column)
    Vertical,
}

impl Orientation {
    /// The perpendicular axis.
    pub fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extract the component of a vector along this axis.
    pub fn component(self, v: Vec2) -> f32 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Build a vector from a component along this axis and one along the
    /// perpendicular axis.
    pub fn pack(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(main, cross),
            Self::Vertical => Vec2::new(cross, main),
        }
    }
}

/// Placement of children within the container on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Pack toward the container origin
    #[default]
    Start,
    /// Center in the leftover space
    Center,
    /// Pack toward the far edge
    End,
    /// Distribute leftover space into equal gaps (before, between, after)
    Justify,
}

/// Per-child cross-axis alignment override.
///
/// `Inherit` defers to the parent's cross alignment at compile time;
/// `Explicit` pins the child regardless of the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossAlign {
    #[default]
    Inherit,
    Explicit(Alignment),
}

impl CrossAlign {
    /// The effective alignment given the parent's cross alignment.
    pub fn resolve(self, parent: Alignment) -> Alignment {
        match self {
            Self::Inherit => parent,
            Self::Explicit(alignment) => alignment,
        }
    }
}

/// Line wrapping mode.
///
/// Only [`WrapMode::NoWrap`] is supported; requesting `Wrap` is rejected with
/// an error rather than silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapMode {
    #[default]
    NoWrap,
    Wrap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_component() {
        let v = Vec2::new(3.0, 7.0);
        assert!((Orientation::Horizontal.component(v) - 3.0).abs() < 0.001);
        assert!((Orientation::Vertical.component(v) - 7.0).abs() < 0.001);
    }

    #[test]
    fn test_orientation_pack_inverts_component() {
        let packed = Orientation::Vertical.pack(5.0, 2.0);
        assert_eq!(packed, Vec2::new(2.0, 5.0));
        assert!((Orientation::Vertical.component(packed) - 5.0).abs() < 0.001);
        assert!((Orientation::Vertical.flip().component(packed) - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_cross_align_resolve() {
        assert_eq!(CrossAlign::Inherit.resolve(Alignment::End), Alignment::End);
        assert_eq!(
            CrossAlign::Explicit(Alignment::Center).resolve(Alignment::End),
            Alignment::Center
        );
    }
}
