//! Core data model definitions shared across Spindle crates.
#![allow(missing_docs)]

pub mod commands;
pub mod configuration;
pub mod error;
pub mod geometry;
pub mod settle;

// Intentionally curated re-exports for downstream consumers.
pub use commands::{IndexChange, ItemTransform};
pub use configuration::{CarouselConfiguration, LayoutChrome};
pub use error::{ModelError, Result as ModelResult};
pub use geometry::{Rect, Size};
pub use settle::{Easing, SettleStrategy};
