//! Core types for the slat layout engine.
//!
//! This crate provides the foundational types used by the layout crates:
//! - Geometry value types (rectangles, built on [`glam::Vec2`])
//! - Error types

pub mod errors;
pub mod geometry;

pub use errors::*;
pub use geometry::*;
