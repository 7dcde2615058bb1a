//! Carousel tuning constants
//!
//! Shared constants for transform and snap behavior. Tuning should
//! happen here so every carousel instance updates consistently.

/// Per-item transform defaults.
pub mod transform {
    /// Base stacking value; an item's z-order is this minus its distance
    /// from the viewport center, so the centered item always draws on top.
    pub const Z_ORDER_BASE: f32 = 1000.0;
    /// Scale applied to items at or beyond half an item width from center.
    pub const IDENTITY_SCALE: f32 = 1.0;
}

/// Snap/tween animation defaults.
pub mod snap {
    use spindle_model::Easing;

    /// Default duration (ms) for an engine-driven item snap.
    pub const ITEM_DURATION_MS: u64 = 180;
    /// Easing for engine-driven snaps.
    pub const EASING: Easing = Easing::EaseOut;
}
