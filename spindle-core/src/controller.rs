//! InteractionController: owns carousel state and turns host events into
//! transforms, scroll commands and index notifications.

use std::time::{Duration, Instant};

use spindle_model::{
    CarouselConfiguration, IndexChange, ItemTransform, LayoutChrome,
    SettleStrategy, Size,
};
use tracing::{debug, trace, warn};

use crate::animator::SnapAnimator;
use crate::constants::transform::Z_ORDER_BASE;
use crate::error::Result;
use crate::host::CarouselHost;
use crate::layout::{self, LayoutMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionPhase {
    #[default]
    Idle,
    Dragging,
    /// Moving toward a snap target, either host-animated or engine-tweened.
    Settling { target_index: usize, target_offset: f32 },
}

/// Mutable carousel state, owned exclusively by the controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselState {
    pub item_count: usize,
    /// Square item size for the current bounds; zero before the first layout.
    pub item_size: Size,
    /// `None` only when the carousel has no items.
    pub current_index: Option<usize>,
    pub scroll_offset: f32,
}

#[derive(Debug)]
pub struct InteractionController<I> {
    items: Vec<I>,
    configuration: CarouselConfiguration,
    chrome: LayoutChrome,
    settle: SettleStrategy,
    state: CarouselState,
    metrics: Option<LayoutMetrics>,
    phase: InteractionPhase,
    animator: SnapAnimator,
}

impl<I> InteractionController<I> {
    /// Create a controller, coercing out-of-contract configuration values
    /// and clamping `default_index` into the item range.
    pub fn new(items: Vec<I>, configuration: CarouselConfiguration) -> Self {
        let configuration = configuration.sanitized();
        let current_index =
            layout::clamp_default_index(configuration.default_index, items.len());
        if let Some(index) = current_index
            && i64::try_from(index).ok() != Some(configuration.default_index)
        {
            debug!(
                requested = configuration.default_index,
                clamped = index,
                item_count = items.len(),
                "default index out of range; clamped"
            );
        }

        Self {
            state: CarouselState {
                item_count: items.len(),
                item_size: Size::ZERO,
                current_index,
                scroll_offset: 0.0,
            },
            items,
            configuration,
            chrome: LayoutChrome::default(),
            settle: SettleStrategy::default(),
            metrics: None,
            phase: InteractionPhase::Idle,
            animator: SnapAnimator::new(),
        }
    }

    /// Like [`InteractionController::new`], but rejects configurations that
    /// violate the scale factor / max item size contract.
    pub fn try_new(
        items: Vec<I>,
        configuration: CarouselConfiguration,
    ) -> Result<Self> {
        configuration.validate()?;
        Ok(Self::new(items, configuration))
    }

    pub fn with_chrome(mut self, chrome: LayoutChrome) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn with_settle_strategy(mut self, settle: SettleStrategy) -> Self {
        self.settle = settle;
        self
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn phase(&self) -> InteractionPhase {
        self.phase
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn configuration(&self) -> &CarouselConfiguration {
        &self.configuration
    }

    pub fn chrome(&self) -> &LayoutChrome {
        &self.chrome
    }

    pub fn settle_strategy(&self) -> SettleStrategy {
        self.settle
    }

    /// Geometry for the last reported bounds, if any.
    pub fn metrics(&self) -> Option<&LayoutMetrics> {
        self.metrics.as_ref()
    }

    /// An empty carousel ignores every event.
    pub fn is_inert(&self) -> bool {
        self.items.is_empty()
    }

    /// Container bounds changed: recompute geometry and re-center the
    /// current index.
    ///
    /// The offset is derived from the current index, never from the stale
    /// offset, so a rotation or resize does not jump to a neighbour.
    pub fn on_bounds_changed<H>(&mut self, width: f32, height: f32, host: &mut H)
    where
        H: CarouselHost<I>,
    {
        let container = Size::new(width, height);
        if let Some(previous) = &self.metrics
            && previous.container == container
        {
            trace!(width, height, "bounds unchanged; skipping relayout");
            return;
        }

        let metrics = LayoutMetrics::compute(
            container,
            self.items.len(),
            &self.configuration,
            &self.chrome,
        );
        if metrics.is_degenerate() && !self.is_inert() {
            warn!(width, height, "container too small for carousel items");
        }
        self.metrics = Some(metrics);
        self.state.item_size = metrics.item_size;

        host.set_page_count(self.items.len());

        let Some(current) = self.state.current_index else {
            return;
        };

        if matches!(self.phase, InteractionPhase::Settling { .. }) {
            // The snap target is already the current index.
            self.cancel_snap(host);
            self.phase = InteractionPhase::Idle;
        }

        let offset = metrics.offset_for_index(current);
        debug!(
            width,
            height,
            item_side = metrics.item_size.width,
            current,
            offset,
            "relayout"
        );
        host.set_scroll_offset(offset, false);
        host.set_current_page(current);
        self.apply_offset(offset, host);
    }

    pub fn on_drag_started<H>(&mut self, host: &mut H)
    where
        H: CarouselHost<I>,
    {
        if self.is_inert() {
            return;
        }
        if let InteractionPhase::Settling { target_index, .. } = self.phase {
            debug!(target_index, "drag started while settling; snap cancelled");
            self.cancel_snap(host);
        }
        self.phase = InteractionPhase::Dragging;
    }

    /// Scroll position moved (drag, momentum, or animation). Recomputes and
    /// emits every item's transform from the latest offset.
    pub fn on_scroll_offset_changed<H>(&mut self, x: f32, host: &mut H)
    where
        H: CarouselHost<I>,
    {
        if self.is_inert() {
            return;
        }
        if !x.is_finite() {
            warn!(x, "ignoring non-finite scroll offset");
            return;
        }
        self.apply_offset(x, host);
    }

    /// Transforms for every item at `offset`, without touching state.
    pub fn transforms_at(&self, offset: f32) -> Vec<ItemTransform> {
        match &self.metrics {
            Some(metrics) if !self.is_inert() => (0..self.items.len())
                .map(|index| self.transform_for(metrics, index, offset))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Drag is about to end: snap to the nearest item.
    ///
    /// Returns the offset the host should use instead of its proposed
    /// momentum target: the snap target for host-animated and immediate
    /// settles, or the release offset for an engine tween so the host's
    /// momentum stops and only `tick_at` moves the scroll view.
    pub fn on_drag_will_end<H>(
        &mut self,
        velocity: f32,
        proposed_target: f32,
        host: &mut H,
    ) -> f32
    where
        H: CarouselHost<I>,
    {
        self.on_drag_will_end_at(velocity, proposed_target, Instant::now(), host)
    }

    /// [`Self::on_drag_will_end`] with an explicit clock for engine tweens.
    pub fn on_drag_will_end_at<H>(
        &mut self,
        velocity: f32,
        proposed_target: f32,
        now: Instant,
        host: &mut H,
    ) -> f32
    where
        H: CarouselHost<I>,
    {
        let (Some(metrics), Some(previous)) =
            (self.metrics, self.state.current_index)
        else {
            return proposed_target;
        };

        // A zero-width layout cannot tell items apart; keep the index.
        let target_index = if metrics.is_degenerate() {
            previous
        } else {
            metrics
                .nearest_index(self.state.scroll_offset)
                .unwrap_or(previous)
        };
        let target_offset = metrics.offset_for_index(target_index);
        debug!(
            velocity,
            proposed_target,
            offset = self.state.scroll_offset,
            target_index,
            target_offset,
            "drag ended; snapping"
        );

        if matches!(self.phase, InteractionPhase::Settling { .. }) {
            self.cancel_snap(host);
        }
        let released = self.state.scroll_offset;
        self.begin_settle(self.settle, target_index, target_offset, now, host);
        self.commit_index(target_index, host);
        if self.settle.is_engine_driven() {
            released
        } else {
            target_offset
        }
    }

    /// Host finished the animation requested by a host-animated snap.
    pub fn on_scroll_animation_finished(&mut self) {
        if let InteractionPhase::Settling { target_index, .. } = self.phase
            && !self.settle.is_engine_driven()
        {
            trace!(target_index, "settled");
            self.phase = InteractionPhase::Idle;
        }
    }

    /// Advance an engine-driven snap. Returns true while the tween is still
    /// running.
    pub fn tick_at<H>(&mut self, now: Instant, host: &mut H) -> bool
    where
        H: CarouselHost<I>,
    {
        let Some(offset) = self.animator.sample_at(now) else {
            return false;
        };
        host.set_scroll_offset(offset, false);
        self.apply_offset(offset, host);

        if self.animator.is_active() {
            return true;
        }
        if let InteractionPhase::Settling { target_index, .. } = self.phase {
            trace!(target_index, "tween settled");
            self.phase = InteractionPhase::Idle;
        }
        false
    }

    /// Explicit external jump. Out-of-range indices clamp to the last item.
    ///
    /// Returns the committed index, or `None` for an empty carousel.
    pub fn jump_to_index<H>(
        &mut self,
        index: usize,
        animated: bool,
        host: &mut H,
    ) -> Option<usize>
    where
        H: CarouselHost<I>,
    {
        self.jump_to_index_at(index, animated, Instant::now(), host)
    }

    /// [`Self::jump_to_index`] with an explicit clock for engine tweens.
    pub fn jump_to_index_at<H>(
        &mut self,
        index: usize,
        animated: bool,
        now: Instant,
        host: &mut H,
    ) -> Option<usize>
    where
        H: CarouselHost<I>,
    {
        let last = self.items.len().checked_sub(1)?;
        let target_index = index.min(last);

        if matches!(self.phase, InteractionPhase::Settling { .. }) {
            self.cancel_snap(host);
        }

        if let Some(metrics) = self.metrics {
            let target_offset = metrics.offset_for_index(target_index);
            let strategy = if animated {
                self.settle
            } else {
                SettleStrategy::Immediate
            };
            debug!(index, target_index, animated, target_offset, "jump");
            self.begin_settle(strategy, target_index, target_offset, now, host);
        } else {
            // Positioned by the first layout.
            self.phase = InteractionPhase::Idle;
        }

        self.commit_index(target_index, host);
        Some(target_index)
    }

    fn begin_settle<H>(
        &mut self,
        strategy: SettleStrategy,
        target_index: usize,
        target_offset: f32,
        now: Instant,
        host: &mut H,
    ) where
        H: CarouselHost<I>,
    {
        match strategy {
            SettleStrategy::HostAnimated => {
                host.set_scroll_offset(target_offset, true);
                self.phase = InteractionPhase::Settling {
                    target_index,
                    target_offset,
                };
            }
            SettleStrategy::Immediate => {
                host.set_scroll_offset(target_offset, false);
                self.apply_offset(target_offset, host);
                self.phase = InteractionPhase::Idle;
            }
            SettleStrategy::Tweened {
                duration_ms,
                easing,
            } => {
                self.animator.start(
                    self.state.scroll_offset,
                    target_offset,
                    Duration::from_millis(duration_ms),
                    easing,
                    now,
                );
                self.phase = InteractionPhase::Settling {
                    target_index,
                    target_offset,
                };
            }
        }
    }

    fn cancel_snap<H>(&mut self, host: &mut H)
    where
        H: CarouselHost<I>,
    {
        if self.animator.is_active() {
            self.animator.cancel();
        } else {
            host.cancel_scroll_animation();
        }
    }

    fn commit_index<H>(&mut self, index: usize, host: &mut H)
    where
        H: CarouselHost<I>,
    {
        let previous = self.state.current_index.replace(index);
        host.set_current_page(index);
        host.index_changed(IndexChange::new(previous, index));
    }

    fn apply_offset<H>(&mut self, offset: f32, host: &mut H)
    where
        H: CarouselHost<I>,
    {
        self.state.scroll_offset = offset;
        let Some(metrics) = self.metrics else {
            return;
        };
        for (index, item) in self.items.iter().enumerate() {
            host.apply_transform(item, self.transform_for(&metrics, index, offset));
        }
        trace!(offset, count = self.items.len(), "transforms emitted");
    }

    fn transform_for(
        &self,
        metrics: &LayoutMetrics,
        index: usize,
        offset: f32,
    ) -> ItemTransform {
        let distance =
            (metrics.item_center_x(index) - metrics.center_x(offset)).abs();
        let scale = if self.items.len() == 1 {
            metrics.scale_factor
        } else {
            layout::scale_for_distance(
                distance,
                metrics.max_distance(),
                metrics.scale_factor,
            )
        };
        ItemTransform {
            index,
            scale,
            z_order: Z_ORDER_BASE - distance,
        }
    }
}
