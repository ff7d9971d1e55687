//! Compiled layout snapshots.

use slat_core::Rect;

/// An immutable snapshot of one compilation: the resolved rectangle for every
/// child, in child order, plus a restartable forward cursor.
///
/// The snapshot owns a copy of the rectangles, so it stays valid however the
/// originating builder is mutated or dropped afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledLayout {
    rects: Vec<Rect>,
    cursor: usize,
}

impl CompiledLayout {
    pub(crate) fn new(rects: Vec<Rect>) -> Self {
        Self { rects, cursor: 0 }
    }

    /// Rewind the cursor to the first rectangle. May be called any number of
    /// times to re-iterate.
    pub fn start(&mut self) {
        self.cursor = 0;
    }

    /// Return the rectangle at the cursor and advance.
    ///
    /// Once the cursor has passed the end, keeps returning the last rectangle
    /// without moving further. Returns `None` only for an empty layout.
    pub fn advance(&mut self) -> Option<Rect> {
        if self.cursor < self.rects.len() {
            let rect = self.rects[self.cursor];
            self.cursor += 1;
            Some(rect)
        } else {
            self.rects.last().copied()
        }
    }

    /// Whether the cursor has consumed every rectangle.
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.rects.len()
    }

    /// Number of rectangles in the snapshot.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether the snapshot holds no rectangles.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The rectangle at `index`, independent of the cursor.
    pub fn get(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied()
    }

    /// All rectangles in child order.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(n: usize) -> CompiledLayout {
        CompiledLayout::new(
            (0..n)
                .map(|i| Rect::new(i as f32 * 10.0, 0.0, 10.0, 10.0))
                .collect(),
        )
    }

    #[test]
    fn test_advance_yields_each_rect_once_in_order() {
        let mut layout = snapshot(3);
        for i in 0..3 {
            assert!(!layout.is_at_end());
            let rect = layout.advance().unwrap();
            assert!((rect.x - i as f32 * 10.0).abs() < 0.001);
        }
        assert!(layout.is_at_end());
    }

    #[test]
    fn test_advance_past_end_sticks_to_last() {
        let mut layout = snapshot(2);
        layout.advance();
        layout.advance();
        assert!(layout.is_at_end());
        for _ in 0..3 {
            let rect = layout.advance().unwrap();
            assert!((rect.x - 10.0).abs() < 0.001);
            assert!(layout.is_at_end());
        }
    }

    #[test]
    fn test_start_restarts_iteration() {
        let mut layout = snapshot(3);
        let first_pass: Vec<_> = (0..3).map(|_| layout.advance().unwrap()).collect();
        layout.start();
        assert!(!layout.is_at_end());
        let second_pass: Vec<_> = (0..3).map(|_| layout.advance().unwrap()).collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_empty_layout() {
        let mut layout = snapshot(0);
        assert!(layout.is_empty());
        assert!(layout.is_at_end());
        assert_eq!(layout.advance(), None);
    }

    #[test]
    fn test_get_ignores_cursor() {
        let mut layout = snapshot(2);
        layout.advance();
        assert!((layout.get(0).unwrap().x - 0.0).abs() < 0.001);
        assert_eq!(layout.get(2), None);
    }
}
