use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use spindle_model::{CarouselConfiguration, Easing, LayoutChrome, SettleStrategy};

/// Default engine tween length when `strategy = "tween"` omits `duration_ms`.
pub const DEFAULT_SNAP_DURATION_MS: u64 = 180;

/// Everything a settings file can carry.
///
/// Every section is optional; missing fields take their defaults.
///
/// ```toml
/// [carousel]
/// scale_factor = 1.3
/// max_item_size = 250.0
/// default_index = 0
///
/// [chrome]
/// indicator_height = 20.0
/// vertical_margin = 32.0
///
/// [snap]
/// strategy = "tween"
/// duration_ms = 180
/// easing = "ease-out"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub carousel: CarouselConfiguration,
    pub chrome: LayoutChrome,
    pub snap: SnapSettings,
}

impl CarouselSettings {
    pub fn to_configuration(&self) -> CarouselConfiguration {
        self.carousel
    }

    pub fn to_chrome(&self) -> LayoutChrome {
        self.chrome
    }

    pub fn to_settle_strategy(&self) -> SettleStrategy {
        self.snap.to_settle_strategy()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    pub strategy: SnapStrategyKind,
    /// Only used by `tween`.
    pub duration_ms: u64,
    /// Only used by `tween`.
    pub easing: Easing,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            strategy: SnapStrategyKind::default(),
            duration_ms: DEFAULT_SNAP_DURATION_MS,
            easing: Easing::default(),
        }
    }
}

impl SnapSettings {
    pub fn to_settle_strategy(&self) -> SettleStrategy {
        match self.strategy {
            SnapStrategyKind::Host => SettleStrategy::HostAnimated,
            SnapStrategyKind::Immediate => SettleStrategy::Immediate,
            SnapStrategyKind::Tween => SettleStrategy::Tweened {
                duration_ms: self.duration_ms,
                easing: self.easing,
            },
        }
    }
}

/// Settings-file spelling of [`SettleStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapStrategyKind {
    #[default]
    Host,
    Immediate,
    Tween,
}

impl fmt::Display for SnapStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Immediate => write!(f, "immediate"),
            Self::Tween => write!(f, "tween"),
        }
    }
}

impl FromStr for SnapStrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "host" | "host-animated" | "host_animated" => Ok(Self::Host),
            "immediate" | "instant" => Ok(Self::Immediate),
            "tween" | "tweened" | "engine" => Ok(Self::Tween),
            other => Err(format!("unknown snap strategy '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let settings: CarouselSettings = toml::from_str("").unwrap();
        assert_eq!(settings, CarouselSettings::default());
        assert_eq!(settings.to_settle_strategy(), SettleStrategy::HostAnimated);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let settings: CarouselSettings = toml::from_str(
            r#"
            [carousel]
            scale_factor = 1.5

            [snap]
            strategy = "tween"
            easing = "linear"
            "#,
        )
        .unwrap();

        assert_eq!(settings.carousel.scale_factor, 1.5);
        assert_eq!(
            settings.carousel.max_item_size,
            CarouselConfiguration::DEFAULT_MAX_ITEM_SIZE
        );
        assert_eq!(settings.chrome, LayoutChrome::default());
        assert_eq!(
            settings.to_settle_strategy(),
            SettleStrategy::Tweened {
                duration_ms: DEFAULT_SNAP_DURATION_MS,
                easing: Easing::Linear,
            }
        );
    }

    #[test]
    fn json_uses_the_same_shape() {
        let settings: CarouselSettings = serde_json::from_str(
            r#"{"carousel": {"default_index": 3}, "snap": {"strategy": "immediate"}}"#,
        )
        .unwrap();
        assert_eq!(settings.carousel.default_index, 3);
        assert_eq!(settings.to_settle_strategy(), SettleStrategy::Immediate);
    }

    #[test]
    fn strategy_names_parse_leniently() {
        assert_eq!("Host".parse::<SnapStrategyKind>(), Ok(SnapStrategyKind::Host));
        assert_eq!(" tweened ".parse::<SnapStrategyKind>(), Ok(SnapStrategyKind::Tween));
        assert_eq!("instant".parse::<SnapStrategyKind>(), Ok(SnapStrategyKind::Immediate));
        assert!("bounce".parse::<SnapStrategyKind>().is_err());
    }
}
