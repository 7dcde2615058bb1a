//! Geometry and interaction engine for the Spindle scaling carousel.
//!
//! The crate is split along the same seam the widget has at runtime:
//!
//! - [`layout`] holds pure geometry: item sizing, content insets, per-item
//!   frames, the distance-to-scale falloff and nearest-item rounding.
//! - [`controller`] owns the mutable [`CarouselState`] and reacts to host
//!   events (bounds, scroll offset, drag start/end), emitting transforms,
//!   scroll commands and index notifications through the [`host`] traits.
//!
//! Nothing here renders. Hosts implement [`CarouselHost`] and forward their
//! scroll view's events.
#![allow(missing_docs)]

pub mod animator;
pub mod constants;
pub mod controller;
pub mod error;
pub mod host;
pub mod layout;

pub use animator::SnapAnimator;
pub use controller::{CarouselState, InteractionController, InteractionPhase};
pub use error::{CarouselError, Result};
pub use host::{CarouselHost, PageIndicator, RenderHost};
pub use layout::{ContentGeometry, LayoutMetrics};

pub use spindle_model as model;
