//! Sizing rules for a single axis.

/// How a [`SizeSpec`] is resolved to a concrete length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeKind {
    /// A fixed length, independent of the container
    Exact,
    /// A fraction of the container's full dimension
    RatioOfTotal,
    /// A fraction of the space left after constant siblings are sized
    RatioOfRemainder,
}

/// A single axis's sizing rule.
///
/// `Exact` and `RatioOfTotal` are *constant*: they resolve from the
/// container's dimension alone. `RatioOfRemainder` is *variable*: it resolves
/// against whatever space the constant siblings leave over. That
/// classification, not the numeric value, decides resolution order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeSpec {
    kind: SizeKind,
    value: f32,
    min: f32,
    max: f32,
}

impl SizeSpec {
    const fn new(kind: SizeKind, value: f32) -> Self {
        Self {
            kind,
            value,
            min: 0.0,
            max: f32::INFINITY,
        }
    }

    /// A fixed length. Ignores the container and any clamp bounds.
    pub const fn exact(size: f32) -> Self {
        Self::new(SizeKind::Exact, size)
    }

    /// A fraction of the container's full dimension on this axis.
    pub const fn ratio_of_total(ratio: f32) -> Self {
        Self::new(SizeKind::RatioOfTotal, ratio)
    }

    /// A fraction of the remainder left by constant siblings.
    pub const fn ratio_of_remainder(ratio: f32) -> Self {
        Self::new(SizeKind::RatioOfRemainder, ratio)
    }

    /// Set the clamp bounds applied to ratio resolution.
    ///
    /// `Exact` specs are unaffected. A negative `min` permits a
    /// `RatioOfRemainder` spec to resolve negative when the remainder is
    /// negative; the default bounds `[0, +inf]` floor it at zero.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn clamped(mut self, min: f32, max: f32) -> Self {
        assert!(min <= max, "SizeSpec bounds inverted: min {min} > max {max}");
        self.min = min;
        self.max = max;
        self
    }

    /// The rule kind.
    pub fn kind(&self) -> SizeKind {
        self.kind
    }

    /// Whether this spec resolves against the remainder rather than the
    /// container dimension.
    pub fn is_variable(&self) -> bool {
        self.kind == SizeKind::RatioOfRemainder
    }

    /// Whether this spec resolves from the container dimension alone.
    pub fn is_constant(&self) -> bool {
        !self.is_variable()
    }

    /// Resolve against a basis length: the container dimension for constant
    /// specs, the remainder for variable ones.
    pub fn resolve(&self, basis: f32) -> f32 {
        match self.kind {
            SizeKind::Exact => self.value,
            SizeKind::RatioOfTotal | SizeKind::RatioOfRemainder => {
                (self.value * basis).clamp(self.min, self.max)
            }
        }
    }
}
