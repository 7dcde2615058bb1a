use spindle_model::ModelError;
use thiserror::Error;

use crate::models::{CarouselSettings, SnapStrategyKind};

/// Chrome taller than this leaves little room for items on a phone-sized
/// container.
const TYPICAL_CHROME_LIMIT: f32 = 200.0;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsGuardRailError {
    #[error("carousel.scale_factor must be a finite number greater than 1.0 (got {0})")]
    InvalidScaleFactor(f32),
    #[error("carousel.max_item_size must be a finite number greater than 0 (got {0})")]
    InvalidMaxItemSize(f32),
}

impl From<ModelError> for SettingsGuardRailError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidScaleFactor(value) => Self::InvalidScaleFactor(value),
            ModelError::InvalidMaxItemSize(value) => Self::InvalidMaxItemSize(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SettingsWarnings {
    pub items: Vec<SettingsWarning>,
}

impl SettingsWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(SettingsWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(SettingsWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: SettingsWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &SettingsWarning> {
        self.items.iter()
    }
}

pub fn apply_guard_rails(
    settings: &CarouselSettings,
) -> Result<SettingsWarnings, SettingsGuardRailError> {
    let mut warnings = SettingsWarnings::default();

    settings.carousel.validate()?;

    if settings.carousel.default_index < 0 {
        warnings.push_with_hint(
            format!(
                "carousel.default_index is {}; the first item will be shown",
                settings.carousel.default_index
            ),
            "Use 0 to start on the first item",
        );
    }

    let chrome = &settings.chrome;
    if chrome.indicator_height < 0.0 || chrome.vertical_margin < 0.0 {
        warnings.push(
            "Negative chrome values are treated as 0 when reserving item space",
        );
    }
    if chrome.reserved_height() > TYPICAL_CHROME_LIMIT {
        warnings.push_with_hint(
            format!(
                "chrome reserves {}pt of vertical space",
                chrome.reserved_height()
            ),
            "Containers shorter than this lay out zero-size items",
        );
    }

    match settings.snap.strategy {
        SnapStrategyKind::Tween if settings.snap.duration_ms == 0 => {
            warnings.push_with_hint(
                "snap.strategy is \"tween\" with a zero duration; snaps land on the first tick",
                "Set snap.duration_ms or use strategy = \"immediate\"",
            );
        }
        SnapStrategyKind::Host | SnapStrategyKind::Immediate
            if settings.snap.duration_ms
                != crate::models::DEFAULT_SNAP_DURATION_MS =>
        {
            warnings.push(format!(
                "snap.duration_ms is ignored by the \"{}\" strategy",
                settings.snap.strategy
            ));
        }
        _ => {}
    }

    Ok(warnings)
}
