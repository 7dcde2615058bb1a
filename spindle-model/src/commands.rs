//! Values the engine hands to its host.

/// Scale and stacking order for a single item at the current scroll offset.
///
/// The host decides whether to apply it directly or animate towards it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTransform {
    pub index: usize,
    /// Uniform scale, applied to both axes.
    pub scale: f32,
    /// Higher values draw on top; the centered item wins.
    pub z_order: f32,
}

/// Notification emitted after a snap or an explicit jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexChange {
    pub previous: Option<usize>,
    pub current: usize,
}

impl IndexChange {
    pub const fn new(previous: Option<usize>, current: usize) -> Self {
        Self { previous, current }
    }

    /// False when a snap landed back on the item that was already current.
    pub fn is_change(&self) -> bool {
        self.previous != Some(self.current)
    }
}
