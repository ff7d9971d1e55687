//! Four-sided spacing around a box.

use glam::Vec2;

use crate::align::Orientation;

/// Spacing around a box. Margins shift a box's position and count toward the
/// space it occupies, but never inflate its visible rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margin {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Margin {
    /// No spacing on any side.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a margin from all four sides.
    pub const fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The same spacing on all four sides.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Spacing above only.
    pub const fn top(top: f32) -> Self {
        Self::new(top, 0.0, 0.0, 0.0)
    }

    /// Spacing below only.
    pub const fn bottom(bottom: f32) -> Self {
        Self::new(0.0, bottom, 0.0, 0.0)
    }

    /// Spacing to the left only.
    pub const fn left(left: f32) -> Self {
        Self::new(0.0, 0.0, left, 0.0)
    }

    /// Spacing to the right only.
    pub const fn right(right: f32) -> Self {
        Self::new(0.0, 0.0, 0.0, right)
    }

    /// Left and right spacing only.
    pub const fn horizontal(left: f32, right: f32) -> Self {
        Self::new(0.0, 0.0, left, right)
    }

    /// Top and bottom spacing only.
    pub const fn vertical(top: f32, bottom: f32) -> Self {
        Self::new(top, bottom, 0.0, 0.0)
    }

    /// Total horizontal spacing (left + right).
    pub fn width(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical spacing (top + bottom).
    pub fn height(&self) -> f32 {
        self.top + self.bottom
    }

    /// Total spacing per axis as a vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// The margin on the near side of the given axis (left or top).
    pub fn leading(&self, axis: Orientation) -> f32 {
        match axis {
            Orientation::Horizontal => self.left,
            Orientation::Vertical => self.top,
        }
    }

    /// The margin on the far side of the given axis (right or bottom).
    pub fn trailing(&self, axis: Orientation) -> f32 {
        match axis {
            Orientation::Horizontal => self.right,
            Orientation::Vertical => self.bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let margin = Margin::new(1.0, 2.0, 3.0, 4.0);
        assert!((margin.width() - 7.0).abs() < 0.001);
        assert!((margin.height() - 3.0).abs() < 0.001);
        assert_eq!(margin.size(), Vec2::new(7.0, 3.0));
    }

    #[test]
    fn test_leading_trailing() {
        let margin = Margin::new(1.0, 2.0, 3.0, 4.0);
        assert!((margin.leading(Orientation::Horizontal) - 3.0).abs() < 0.001);
        assert!((margin.trailing(Orientation::Horizontal) - 4.0).abs() < 0.001);
        assert!((margin.leading(Orientation::Vertical) - 1.0).abs() < 0.001);
        assert!((margin.trailing(Orientation::Vertical) - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_factories() {
        assert_eq!(Margin::horizontal(3.0, 4.0), Margin::new(0.0, 0.0, 3.0, 4.0));
        assert_eq!(Margin::vertical(1.0, 2.0), Margin::new(1.0, 2.0, 0.0, 0.0));
        assert_eq!(Margin::uniform(5.0), Margin::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(Margin::top(9.0).height(), 9.0);
    }
}
