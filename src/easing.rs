//! Easing curves for slide transitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::math::clamp01;

/// Progress remapping applied to a transition
///
/// Every curve is monotonic with `f(0) = 0` and `f(1) = 1`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// No easing
    Linear,
    /// Smoothstep with flat tangents at both ends
    #[default]
    EaseInOut,
    /// Cubic ease-in-out
    EaseInOutCubic,
    /// Cubic ease-in
    EaseInCubic,
    /// Cubic ease-out
    EaseOutCubic,
    /// Caller-supplied curve
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Evaluates the curve at `t`, clamping the input to `[0, 1]`
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = clamp01(t);
        match self {
            Easing::Linear => linear(t),
            Easing::EaseInOut => smoothstep(t),
            Easing::EaseInOutCubic => ease_in_out_cubic(t),
            Easing::EaseInCubic => ease_in_cubic(t),
            Easing::EaseOutCubic => ease_out_cubic(t),
            Easing::Custom(curve) => curve(t),
        }
    }

    /// Name accepted by [`Easing::from_str`]
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOut => "ease_in_out",
            Easing::EaseInOutCubic => "ease_in_out_cubic",
            Easing::EaseInCubic => "ease_in_cubic",
            Easing::EaseOutCubic => "ease_out_cubic",
            Easing::Custom(_) => "custom",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "linear" => Ok(Easing::Linear),
            "ease_in_out" | "smoothstep" => Ok(Easing::EaseInOut),
            "ease_in_out_cubic" => Ok(Easing::EaseInOutCubic),
            "ease_in_cubic" => Ok(Easing::EaseInCubic),
            "ease_out_cubic" => Ok(Easing::EaseOutCubic),
            other => Err(format!("unknown easing curve '{other}'")),
        }
    }
}

/// Linear interpolation (no easing)
#[inline]
pub fn linear(t: f64) -> f64 {
    t
}

/// Hermite smoothstep, `3t² - 2t³`
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Ease-in-out cubic function
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Ease-in cubic function
#[inline]
pub fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

/// Ease-out cubic function
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseInOut,
        Easing::EaseInOutCubic,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.evaluate(0.0).abs() < 0.001, "{easing} at 0");
            assert!((easing.evaluate(1.0) - 1.0).abs() < 0.001, "{easing} at 1");
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut previous = easing.evaluate(0.0);
            for step in 1..=100 {
                let value = easing.evaluate(step as f64 / 100.0);
                assert!(value >= previous, "{easing} decreases at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::EaseInOut.evaluate(-1.0), 0.0);
        assert_eq!(Easing::EaseInOut.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert!((Easing::EaseInOut.evaluate(0.5) - 0.5).abs() < 0.001);
        assert!((Easing::EaseInOutCubic.evaluate(0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_custom_curve() {
        fn square(t: f64) -> f64 {
            t * t
        }
        let easing = Easing::Custom(square);
        assert!((easing.evaluate(0.5) - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_parse_names() {
        for easing in ALL {
            let parsed: Easing = easing.name().parse().unwrap();
            assert_eq!(parsed.name(), easing.name());
        }
        assert_eq!("ease-out-cubic".parse::<Easing>().unwrap().name(), "ease_out_cubic");
        assert!("bounce".parse::<Easing>().is_err());
    }

    #[test]
    fn test_deserialize() {
        let easing: Easing = serde_json::from_str("\"ease_in_cubic\"").unwrap();
        assert_eq!(easing.name(), "ease_in_cubic");
    }
}
