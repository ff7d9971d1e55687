//! A single box participating in a layout.

use glam::Vec2;
use slat_core::Rect;

use crate::align::{CrossAlign, Orientation};
use crate::margin::Margin;
use crate::size::SizeSpec;

/// One box in a builder's child sequence: a sizing rule per axis, a margin,
/// and an optional cross-axis alignment override.
///
/// The resolved rectangle is scratch state owned by the builder during
/// compilation; it is meaningless before the first compile and is only
/// published through a compiled snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutChild {
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub margin: Margin,
    pub cross_align: CrossAlign,
    pub(crate) rect: Rect,
}

impl LayoutChild {
    /// Create a child with the given sizing rules, no margin, and inherited
    /// cross alignment.
    pub fn new(width: SizeSpec, height: SizeSpec) -> Self {
        Self {
            width,
            height,
            margin: Margin::ZERO,
            cross_align: CrossAlign::Inherit,
            rect: Rect::default(),
        }
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Override the parent's cross-axis alignment for this child.
    pub fn with_cross_align(mut self, cross_align: CrossAlign) -> Self {
        self.cross_align = cross_align;
        self
    }

    /// The sizing rule for the given axis.
    pub fn size_spec(&self, axis: Orientation) -> SizeSpec {
        match axis {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Content size plus margins, the size this child occupies for spacing.
    pub(crate) fn total_size(&self) -> Vec2 {
        self.rect.size() + self.margin.size()
    }

    pub(crate) fn set_resolved_size(&mut self, axis: Orientation, value: f32) {
        match axis {
            Orientation::Horizontal => self.rect.width = value,
            Orientation::Vertical => self.rect.height = value,
        }
    }

    pub(crate) fn resolved_size(&self, axis: Orientation) -> f32 {
        axis.component(self.rect.size())
    }

    pub(crate) fn set_resolved_position(&mut self, position: Vec2) {
        self.rect.x = position.x;
        self.rect.y = position.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_size_includes_margins() {
        let mut child = LayoutChild::new(SizeSpec::exact(10.0), SizeSpec::exact(20.0))
            .with_margin(Margin::new(1.0, 2.0, 3.0, 4.0));
        child.set_resolved_size(Orientation::Horizontal, 10.0);
        child.set_resolved_size(Orientation::Vertical, 20.0);
        assert_eq!(child.total_size(), Vec2::new(17.0, 23.0));
    }

    #[test]
    fn test_size_spec_per_axis() {
        let child = LayoutChild::new(SizeSpec::exact(10.0), SizeSpec::ratio_of_total(0.5));
        assert!(child.size_spec(Orientation::Horizontal).is_constant());
        assert!((child.size_spec(Orientation::Vertical).resolve(40.0) - 20.0).abs() < 0.001);
    }
}
