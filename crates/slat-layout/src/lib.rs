//! Constraint-based strip layout for the slat engine.
//!
//! Given a container rectangle and an ordered sequence of boxes annotated
//! with sizing rules, margins, and alignment, this crate computes a concrete
//! rectangle for every box. It is aimed at tool authors arranging a row or
//! column of controls inside an arbitrary rectangle, without hand-written
//! coordinate arithmetic.
//!
//! # Architecture
//!
//! 1. **Size resolution**: per axis, constant specs ([`SizeSpec::exact`],
//!    [`SizeSpec::ratio_of_total`]) resolve against the container dimension,
//!    then variable specs ([`SizeSpec::ratio_of_remainder`]) resolve against
//!    whatever space is left.
//! 2. **Position resolution**: main-axis coordinates from the alignment
//!    offset and a running prefix sum of preceding sizes, cross-axis
//!    coordinates from each child's effective alignment.
//! 3. **Snapshot**: the resolved rectangles are copied into a
//!    [`CompiledLayout`] with a restartable cursor, independent of later
//!    builder mutation.
//!
//! Nested layouts are composed externally by feeding one compilation's
//! rectangle to another builder; wrapping onto multiple lines is not
//! supported.
//!
//! # Example
//!
//! ```
//! use slat_layout::{LayoutBuilder, LayoutChild, Rect, SizeSpec};
//!
//! let mut builder = LayoutBuilder::horizontal();
//! builder
//!     .push(LayoutChild::new(
//!         SizeSpec::exact(50.0),
//!         SizeSpec::ratio_of_total(1.0),
//!     ))
//!     .push(LayoutChild::new(
//!         SizeSpec::ratio_of_total(0.25),
//!         SizeSpec::ratio_of_total(1.0),
//!     ))
//!     .push(LayoutChild::new(
//!         SizeSpec::ratio_of_remainder(0.5),
//!         SizeSpec::ratio_of_total(1.0),
//!     ));
//!
//! let mut layout = builder.compile(Rect::new(0.0, 0.0, 100.0, 50.0));
//! let widths: Vec<f32> = layout.rects().iter().map(|r| r.width).collect();
//! assert_eq!(widths, vec![50.0, 25.0, 12.5]);
//!
//! while !layout.is_at_end() {
//!     let rect = layout.advance().unwrap();
//!     assert!((rect.height - 50.0).abs() < 1e-3);
//! }
//! ```

mod align;
mod builder;
mod child;
mod compiled;
mod margin;
mod size;

pub use align::{Alignment, CrossAlign, Orientation, WrapMode};
pub use builder::LayoutBuilder;
pub use child::LayoutChild;
pub use compiled::CompiledLayout;
pub use margin::Margin;
pub use size::{SizeKind, SizeSpec};

pub use slat_core::{LayoutError, Rect};
