//! Settings loading for Spindle carousels.
//!
//! Settings come from a TOML or JSON file, inline JSON in the environment, or
//! built-in defaults, with per-field environment overrides applied on top.
//! Every load runs the guard rails in [`validation`]: contract violations are
//! errors, questionable-but-usable values come back as warnings.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{
    EnvSettings, SettingsLoad, SettingsLoadError, SettingsLoader,
    SettingsLoaderOptions, SettingsSource, load_from_file,
};
pub use models::{CarouselSettings, SnapSettings, SnapStrategyKind};
pub use validation::{
    SettingsGuardRailError, SettingsWarning, SettingsWarnings, apply_guard_rails,
};
