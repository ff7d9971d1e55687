//! Layout builder: configuration, child sequence, and compilation.

use std::cmp::Ordering;

use slat_core::{LayoutError, Rect};

use crate::align::{Alignment, Orientation, WrapMode};
use crate::child::LayoutChild;
use crate::compiled::CompiledLayout;

/// Arranges an ordered sequence of boxes along one axis of a container.
///
/// A builder is configured through fluent setters, filled with children, and
/// compiled on demand. Compilation runs two passes: size resolution (constant
/// specs against the container dimension, then variable specs against the
/// remainder) and position resolution (alignment offsets plus margin-aware
/// spacing). Each [`compile`](Self::compile) call produces an independent
/// [`CompiledLayout`] snapshot, unaffected by later mutation.
///
/// Every fallible mutation validates before touching the child sequence, so a
/// returned error leaves the builder exactly as it was.
#[derive(Debug, Clone)]
pub struct LayoutBuilder {
    orientation: Orientation,
    wrap: WrapMode,
    main_align: Alignment,
    cross_align: Alignment,
    children: Vec<LayoutChild>,
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutBuilder {
    /// Create a builder with defaults: horizontal, no wrapping, Start/Start
    /// alignment, no children.
    pub fn new() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            wrap: WrapMode::NoWrap,
            main_align: Alignment::Start,
            cross_align: Alignment::Start,
            children: Vec::new(),
        }
    }

    /// A builder that lays children out as a row.
    pub fn horizontal() -> Self {
        Self::new()
    }

    /// A builder that lays children out as a column.
    pub fn vertical() -> Self {
        let mut builder = Self::new();
        builder.orientation = Orientation::Vertical;
        builder
    }

    // Configuration

    /// Set the main axis.
    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.orientation = orientation;
        self
    }

    /// Set how children are placed along the main axis.
    pub fn set_main_align(&mut self, align: Alignment) -> &mut Self {
        self.main_align = align;
        self
    }

    /// Set the default cross-axis alignment, used by every child that does
    /// not carry its own override.
    pub fn set_cross_align(&mut self, align: Alignment) -> &mut Self {
        self.cross_align = align;
        self
    }

    /// Set the wrap mode. Only [`WrapMode::NoWrap`] is accepted; wrapping is
    /// a permanent capability gap, not a pending feature.
    pub fn set_wrap(&mut self, wrap: WrapMode) -> Result<&mut Self, LayoutError> {
        match wrap {
            WrapMode::NoWrap => {
                self.wrap = wrap;
                Ok(self)
            }
            WrapMode::Wrap => Err(LayoutError::UnsupportedFeature {
                feature: "wrapping children onto multiple lines",
            }),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    pub fn main_align(&self) -> Alignment {
        self.main_align
    }

    pub fn cross_align(&self) -> Alignment {
        self.cross_align
    }

    // Child sequence

    /// The children in visual order along the main axis.
    pub fn children(&self) -> &[LayoutChild] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a child.
    pub fn push(&mut self, child: LayoutChild) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Remove the last child.
    pub fn pop(&mut self) -> Result<&mut Self, LayoutError> {
        if self.children.is_empty() {
            return Err(LayoutError::IndexOutOfRange { index: 0, len: 0 });
        }
        self.children.pop();
        Ok(self)
    }

    /// Insert a child at `index` (which may equal the current length).
    pub fn insert(&mut self, index: usize, child: LayoutChild) -> Result<&mut Self, LayoutError> {
        if index > self.children.len() {
            return Err(self.out_of_range(index));
        }
        self.children.insert(index, child);
        Ok(self)
    }

    /// Remove the child at `index`.
    pub fn remove(&mut self, index: usize) -> Result<&mut Self, LayoutError> {
        self.check_index(index)?;
        self.children.remove(index);
        Ok(self)
    }

    /// Remove `count` children starting at `start`.
    pub fn remove_range(&mut self, start: usize, count: usize) -> Result<&mut Self, LayoutError> {
        self.check_range(start, count)?;
        self.children.drain(start..start + count);
        Ok(self)
    }

    /// Remove every child matching the predicate.
    pub fn remove_if<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&LayoutChild) -> bool,
    {
        self.children.retain(|child| !predicate(child));
        self
    }

    /// Sort the whole child sequence by a comparator.
    pub fn sort_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&LayoutChild, &LayoutChild) -> Ordering,
    {
        self.children.sort_by(compare);
        self
    }

    /// Sort `count` children starting at `start` by a comparator.
    pub fn sort_range_by<F>(
        &mut self,
        start: usize,
        count: usize,
        compare: F,
    ) -> Result<&mut Self, LayoutError>
    where
        F: FnMut(&LayoutChild, &LayoutChild) -> Ordering,
    {
        self.check_range(start, count)?;
        self.children[start..start + count].sort_by(compare);
        Ok(self)
    }

    /// Rotate the child at `index` forward through `count` neighboring slots.
    pub fn move_forward(&mut self, index: usize, count: usize) -> Result<&mut Self, LayoutError> {
        match index.checked_add(count) {
            Some(target) if target < self.children.len() => {
                self.children[index..=target].rotate_left(1);
                Ok(self)
            }
            _ => Err(self.out_of_range(index.saturating_add(count))),
        }
    }

    /// Rotate the child at `index` back through `count` neighboring slots.
    pub fn move_back(&mut self, index: usize, count: usize) -> Result<&mut Self, LayoutError> {
        self.check_index(index)?;
        if count > index {
            return Err(self.out_of_range(index));
        }
        self.children[index - count..=index].rotate_right(1);
        Ok(self)
    }

    /// Swap the children at two indices.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<&mut Self, LayoutError> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.children.swap(a, b);
        Ok(self)
    }

    /// Remove all children.
    pub fn clear(&mut self) -> &mut Self {
        self.children.clear();
        self
    }

    fn out_of_range(&self, index: usize) -> LayoutError {
        LayoutError::IndexOutOfRange {
            index,
            len: self.children.len(),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), LayoutError> {
        if index < self.children.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn check_range(&self, start: usize, count: usize) -> Result<(), LayoutError> {
        match start.checked_add(count) {
            Some(end) if end <= self.children.len() => Ok(()),
            _ => Err(self.out_of_range(start.saturating_add(count))),
        }
    }

    // Compilation

    /// Resolve a rectangle for every child within `container`.
    ///
    /// Never fails: a validly configured builder always compiles, and
    /// over-constrained inputs yield degenerate (possibly negative-remainder)
    /// sizes rather than errors. The returned snapshot owns its rectangles.
    pub fn compile(&mut self, container: Rect) -> CompiledLayout {
        self.resolve_sizes(container, Orientation::Horizontal);
        self.resolve_sizes(container, Orientation::Vertical);
        self.resolve_positions(container);
        CompiledLayout::new(self.children.iter().map(|child| child.rect).collect())
    }

    /// Size-resolution pass for one axis: constants against the container
    /// dimension, then variables against whatever they leave over. Children
    /// are visited in ascending index so floating-point summation is
    /// reproducible.
    fn resolve_sizes(&mut self, container: Rect, axis: Orientation) {
        let total = axis.component(container.size());

        for child in &mut self.children {
            let spec = child.size_spec(axis);
            let resolved = if spec.is_constant() {
                spec.resolve(total)
            } else {
                0.0
            };
            child.set_resolved_size(axis, resolved);
        }

        // Variables still hold zero, so this is the container dimension minus
        // the constant-resolved total. Not floored: a negative remainder
        // flows into the variable specs' own clamp bounds.
        let remainder = total
            - self
                .children
                .iter()
                .map(|child| child.resolved_size(axis))
                .sum::<f32>();

        for child in &mut self.children {
            let spec = child.size_spec(axis);
            if spec.is_variable() {
                child.set_resolved_size(axis, spec.resolve(remainder));
            }
        }
    }

    /// Position-resolution pass: main-axis coordinates from the alignment
    /// offset plus a running prefix sum of the preceding children's total
    /// sizes, cross-axis coordinates from each child's effective alignment.
    fn resolve_positions(&mut self, container: Rect) {
        if self.children.is_empty() {
            return;
        }

        let main = self.orientation;
        let cross = main.flip();
        let count = self.children.len();

        let origin_main = main.component(container.position());
        let origin_cross = cross.component(container.position());
        let container_cross = cross.component(container.size());

        let occupied: f32 = self
            .children
            .iter()
            .map(|child| main.component(child.total_size()))
            .sum();
        let leftover = main.component(container.size()) - occupied;
        // First of count + 1 equal gaps: before the first child, between
        // every pair, after the last.
        let justify_gap = leftover / (count as f32 + 1.0);

        let start = origin_main
            + match self.main_align {
                Alignment::Start => 0.0,
                Alignment::Center => leftover / 2.0,
                Alignment::End => leftover,
                Alignment::Justify => justify_gap,
            };

        let main_align = self.main_align;
        let parent_cross = self.cross_align;

        let mut advance = 0.0;
        for (index, child) in self.children.iter_mut().enumerate() {
            let mut main_pos = start + advance + child.margin.leading(main);
            if main_align == Alignment::Justify {
                main_pos += index as f32 * justify_gap;
            }

            let total_cross = cross.component(child.total_size());
            let cross_pos = origin_cross
                + match child.cross_align.resolve(parent_cross) {
                    Alignment::Start => child.margin.leading(cross),
                    // Justify has no distinct meaning on the cross axis and
                    // collapses to Center.
                    Alignment::Center | Alignment::Justify => {
                        (container_cross - total_cross) / 2.0
                    }
                    // The end adjustment uses the leading main-axis margin.
                    Alignment::End => {
                        container_cross - total_cross + child.margin.leading(main)
                    }
                };

            child.set_resolved_position(main.pack(main_pos, cross_pos));
            advance += main.component(child.total_size());
        }
    }
}
