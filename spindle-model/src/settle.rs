/// Easing curve for engine-driven snap tweens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    Linear = 0,
    EaseIn = 1,
    #[default]
    EaseOut = 2,
    EaseInOut = 3,
}

impl Easing {
    pub const ALL: [Self; 4] =
        [Self::Linear, Self::EaseIn, Self::EaseOut, Self::EaseInOut];

    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Linear,
            1 => Self::EaseIn,
            2 => Self::EaseOut,
            3 => Self::EaseInOut,
            _ => Self::EaseOut,
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Map linear progress `t` in `[0, 1]` onto the curve (quadratic).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::EaseIn => write!(f, "ease-in"),
            Self::EaseOut => write!(f, "ease-out"),
            Self::EaseInOut => write!(f, "ease-in-out"),
        }
    }
}

impl std::str::FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "ease-in" | "ease_in" | "easein" => Ok(Self::EaseIn),
            "ease-out" | "ease_out" | "easeout" => Ok(Self::EaseOut),
            "ease-in-out" | "ease_in_out" | "easeinout" => Ok(Self::EaseInOut),
            other => Err(format!("unknown easing '{other}'")),
        }
    }
}

/// How a snap target is reached after the user releases a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SettleStrategy {
    /// The host animates `set_scroll_offset(target, true)` and reports
    /// completion through `on_scroll_animation_finished`.
    #[default]
    HostAnimated,
    /// The host applies the target offset synchronously; the controller
    /// settles immediately.
    Immediate,
    /// The engine tweens the offset itself; the host pumps `tick_at`.
    Tweened { duration_ms: u64, easing: Easing },
}

impl SettleStrategy {
    /// True when the controller owns the animation clock.
    pub fn is_engine_driven(&self) -> bool {
        matches!(self, Self::Tweened { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing} start");
            assert_eq!(easing.apply(1.0), 1.0, "{easing} end");
            assert_eq!(Easing::from_u8(easing.to_u8()), easing);
        }
    }

    #[test]
    fn easing_shapes() {
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn easing_parses_display_form() {
        for easing in Easing::ALL {
            assert_eq!(easing.to_string().parse::<Easing>(), Ok(easing));
        }
        assert!("bounce".parse::<Easing>().is_err());
    }
}
