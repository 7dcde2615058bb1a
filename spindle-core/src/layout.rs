//! Pure carousel geometry.
//!
//! Every function here is stateless: inputs in, values out. The controller
//! owns the state and calls into this module whenever bounds or offsets
//! change. Degenerate inputs (non-positive heights, zero item widths, empty
//! item lists) produce zero sizes or `None` rather than NaN or negative
//! values.

use spindle_model::{CarouselConfiguration, LayoutChrome, Rect, Size};

use crate::constants::transform::IDENTITY_SCALE;

/// Horizontal extents of the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentGeometry {
    /// Width of the item strip (`item_count * item_width`).
    pub total_width: f32,
    /// Padding before the first item so it can reach the viewport center.
    pub inset_left: f32,
    /// Padding after the last item so it can reach the viewport center.
    pub inset_right: f32,
}

impl ContentGeometry {
    /// Scrollable width including both insets.
    pub fn content_width(&self) -> f32 {
        self.total_width + self.inset_left + self.inset_right
    }

    /// Offsets at which the first and last item are centered.
    pub fn scroll_range(&self, item_width: f32) -> (f32, f32) {
        let min = -self.inset_left;
        let max = (self.total_width - item_width).max(0.0) - self.inset_left;
        (min, max)
    }
}

/// Side of the square item for the given container.
///
/// `available = container.height - indicator_height - margin`, capped by
/// `max_item_size * scale_factor` and then scaled back down so the centered
/// item fits once magnified.
pub fn compute_item_size(
    container: Size,
    indicator_height: f32,
    max_item_size: f32,
    scale_factor: f32,
    margin: f32,
) -> Size {
    let available_height = container.height - indicator_height - margin;
    if !(available_height > 0.0) || !(max_item_size > 0.0) || !(scale_factor > 0.0)
    {
        return Size::ZERO;
    }

    let scaled_height = available_height.min(max_item_size * scale_factor);
    let side = scaled_height / scale_factor;
    if side.is_finite() && side > 0.0 {
        Size::square(side)
    } else {
        Size::ZERO
    }
}

/// Item strip width plus the symmetric insets that let either end reach the
/// viewport center.
pub fn compute_content_geometry(
    item_count: usize,
    item_size: Size,
    container_width: f32,
) -> ContentGeometry {
    let total_width = item_count as f32 * item_size.width;
    let inset = (container_width - item_size.width) / 2.0;
    ContentGeometry {
        total_width,
        inset_left: inset,
        inset_right: inset,
    }
}

/// Frame of item `index` in content coordinates, vertically centered.
pub fn compute_item_frame(
    index: usize,
    item_size: Size,
    container_height: f32,
) -> Rect {
    Rect::new(
        index as f32 * item_size.width,
        (container_height - item_size.height) / 2.0,
        item_size.width,
        item_size.height,
    )
}

/// Scroll offset that centers item `index`.
pub fn offset_for_index(index: usize, item_size: Size, inset_left: f32) -> f32 {
    index as f32 * item_size.width - inset_left
}

/// Linear falloff from `scale_factor` at the center to 1.0 at
/// `max_distance`, clamped to `[1.0, scale_factor]`.
pub fn scale_for_distance(
    distance: f32,
    max_distance: f32,
    scale_factor: f32,
) -> f32 {
    let upper = scale_factor.max(IDENTITY_SCALE);
    let distance = distance.abs();
    if !(max_distance > 0.0) {
        return if distance <= 0.0 { upper } else { IDENTITY_SCALE };
    }

    let raw = scale_factor
        - (distance / max_distance) * (scale_factor - IDENTITY_SCALE);
    if raw.is_nan() {
        return IDENTITY_SCALE;
    }
    raw.clamp(IDENTITY_SCALE, upper)
}

/// Index of the item closest to the viewport center at `scroll_offset`.
///
/// Returns `None` for an empty carousel and `Some(0)` when the item width is
/// degenerate (nothing can be told apart).
pub fn nearest_index(
    scroll_offset: f32,
    inset_left: f32,
    item_width: f32,
    item_count: usize,
) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    if !(item_width > 0.0) {
        return Some(0);
    }

    let position = ((scroll_offset + inset_left) / item_width).round();
    let last = (item_count - 1) as f32;
    if position.is_nan() {
        return Some(0);
    }
    Some(position.clamp(0.0, last) as usize)
}

/// Clamp a caller-supplied starting index into `[0, item_count - 1]`.
///
/// `item_count` itself is already out of range and maps to the last item.
pub fn clamp_default_index(default_index: i64, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    if default_index < 0 {
        return Some(0);
    }
    let last = item_count - 1;
    Some(usize::try_from(default_index).map_or(last, |index| index.min(last)))
}

/// Geometry for one container size, computed once per bounds change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutMetrics {
    pub container: Size,
    pub item_count: usize,
    pub item_size: Size,
    pub content: ContentGeometry,
    pub scale_factor: f32,
}

impl LayoutMetrics {
    pub fn compute(
        container: Size,
        item_count: usize,
        configuration: &CarouselConfiguration,
        chrome: &LayoutChrome,
    ) -> Self {
        let item_size = compute_item_size(
            container,
            chrome.indicator_height,
            configuration.max_item_size,
            configuration.scale_factor,
            chrome.vertical_margin,
        );
        let content =
            compute_content_geometry(item_count, item_size, container.width);
        Self {
            container,
            item_count,
            item_size,
            content,
            scale_factor: configuration.scale_factor,
        }
    }

    pub fn item_frame(&self, index: usize) -> Rect {
        compute_item_frame(index, self.item_size, self.container.height)
    }

    pub fn item_center_x(&self, index: usize) -> f32 {
        self.item_frame(index).center_x()
    }

    pub fn offset_for_index(&self, index: usize) -> f32 {
        offset_for_index(index, self.item_size, self.content.inset_left)
    }

    pub fn nearest_index(&self, scroll_offset: f32) -> Option<usize> {
        nearest_index(
            scroll_offset,
            self.content.inset_left,
            self.item_size.width,
            self.item_count,
        )
    }

    /// Distance from center at which an item returns to identity scale.
    pub fn max_distance(&self) -> f32 {
        self.item_size.width / 2.0
    }

    /// Viewport center in content coordinates at `scroll_offset`.
    pub fn center_x(&self, scroll_offset: f32) -> f32 {
        scroll_offset + self.container.width / 2.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.item_size.is_degenerate()
    }
}
