//! Capabilities the embedding UI provides to the engine.
//!
//! The engine never touches a view hierarchy. Everything it wants done is
//! expressed through these traits, which keeps the controller testable with
//! a recording host.

use spindle_model::{IndexChange, ItemTransform};

/// Applies per-item transforms and moves the scroll position.
pub trait RenderHost<I> {
    /// Apply (or animate towards) `transform` on `item`.
    fn apply_transform(&mut self, item: &I, transform: ItemTransform);

    /// Move the scroll position. `animated` requests a host-side animation.
    fn set_scroll_offset(&mut self, x: f32, animated: bool);

    /// Stop any scroll animation previously requested with `animated = true`.
    fn cancel_scroll_animation(&mut self) {}
}

/// Receives page indicator state.
pub trait PageIndicator {
    fn set_page_count(&mut self, count: usize);
    fn set_current_page(&mut self, index: usize);
}

/// Everything a controller needs from its host.
pub trait CarouselHost<I>: RenderHost<I> + PageIndicator {
    /// Called after every snap and explicit jump.
    fn index_changed(&mut self, _change: IndexChange) {}
}
