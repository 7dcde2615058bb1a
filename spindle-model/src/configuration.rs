use crate::error::{ModelError, Result};

/// Static configuration for a carousel instance.
///
/// The values are immutable once handed to a controller. `default_index` is
/// deliberately signed: callers may pass anything, and the engine clamps it
/// into the valid item range when the item count is known.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfiguration {
    /// Magnification applied to the centered item. Must be greater than 1.0.
    pub scale_factor: f32,
    /// Cap on the unscaled item edge length.
    pub max_item_size: f32,
    /// Item centered on first layout.
    pub default_index: i64,
}

impl CarouselConfiguration {
    pub const DEFAULT_SCALE_FACTOR: f32 = 1.3;
    pub const DEFAULT_MAX_ITEM_SIZE: f32 = 250.0;

    pub const fn new(
        scale_factor: f32,
        max_item_size: f32,
        default_index: i64,
    ) -> Self {
        Self {
            scale_factor,
            max_item_size,
            default_index,
        }
    }

    pub const fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub const fn with_max_item_size(mut self, max_item_size: f32) -> Self {
        self.max_item_size = max_item_size;
        self
    }

    pub const fn with_default_index(mut self, default_index: i64) -> Self {
        self.default_index = default_index;
        self
    }

    /// Strict validation used by configuration loaders and `try_new`.
    pub fn validate(&self) -> Result<()> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 1.0 {
            return Err(ModelError::InvalidScaleFactor(self.scale_factor));
        }
        if !self.max_item_size.is_finite() || self.max_item_size <= 0.0 {
            return Err(ModelError::InvalidMaxItemSize(self.max_item_size));
        }
        Ok(())
    }

    /// Coerce out-of-contract values into something the layout math can
    /// consume without producing NaN or negative sizes.
    ///
    /// A scale factor below 1.0 (or non-finite) becomes 1.0, which disables
    /// magnification. A non-positive or non-finite max item size becomes 0.0,
    /// which yields a zero-size layout.
    pub fn sanitized(self) -> Self {
        let scale_factor = if self.scale_factor.is_finite() {
            self.scale_factor.max(1.0)
        } else {
            1.0
        };
        let max_item_size = if self.max_item_size.is_finite() {
            self.max_item_size.max(0.0)
        } else {
            0.0
        };
        Self {
            scale_factor,
            max_item_size,
            default_index: self.default_index,
        }
    }
}

impl Default for CarouselConfiguration {
    fn default() -> Self {
        Self {
            scale_factor: Self::DEFAULT_SCALE_FACTOR,
            max_item_size: Self::DEFAULT_MAX_ITEM_SIZE,
            default_index: 0,
        }
    }
}

/// Vertical space the carousel reserves around its item strip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutChrome {
    /// Height of the page indicator below the strip.
    pub indicator_height: f32,
    /// Fixed margin between strip, indicator and container edges.
    pub vertical_margin: f32,
}

impl LayoutChrome {
    pub const DEFAULT_INDICATOR_HEIGHT: f32 = 20.0;
    pub const DEFAULT_VERTICAL_MARGIN: f32 = 32.0;

    pub const fn new(indicator_height: f32, vertical_margin: f32) -> Self {
        Self {
            indicator_height,
            vertical_margin,
        }
    }

    /// Total height unavailable to items.
    pub fn reserved_height(&self) -> f32 {
        self.indicator_height.max(0.0) + self.vertical_margin.max(0.0)
    }
}

impl Default for LayoutChrome {
    fn default() -> Self {
        Self {
            indicator_height: Self::DEFAULT_INDICATOR_HEIGHT,
            vertical_margin: Self::DEFAULT_VERTICAL_MARGIN,
        }
    }
}
