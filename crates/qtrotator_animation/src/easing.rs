//! Easing functions for transitions
//!
//! Curves follow the CSS timing-function keywords. Every keyword except
//! `linear` is a cubic bezier, so they all share one solver.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Timing curve applied to transition progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

/// Failure to parse an easing name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseEasingError {
    #[error("unknown easing curve '{0}'")]
    UnknownCurve(String),

    #[error("malformed cubic-bezier '{0}': expected four numbers")]
    MalformedBezier(String),

    #[error("cubic-bezier x control points must lie in [0, 1]: '{0}'")]
    BezierOutOfRange(String),
}

impl Easing {
    /// Control points for the curve, `None` for linear
    pub fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match *self {
            Easing::Linear => None,
            Easing::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("linear"),
            Easing::Ease => f.write_str("ease"),
            Easing::EaseIn => f.write_str("ease-in"),
            Easing::EaseOut => f.write_str("ease-out"),
            Easing::EaseInOut => f.write_str("ease-in-out"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name.to_ascii_lowercase().as_str() {
            "linear" => Ok(Easing::Linear),
            "ease" => Ok(Easing::Ease),
            "ease-in" => Ok(Easing::EaseIn),
            "ease-out" => Ok(Easing::EaseOut),
            "ease-in-out" => Ok(Easing::EaseInOut),
            lower => match lower
                .strip_prefix("cubic-bezier(")
                .and_then(|rest| rest.strip_suffix(')'))
            {
                Some(args) => parse_bezier_args(name, args),
                None => Err(ParseEasingError::UnknownCurve(name.to_string())),
            },
        }
    }
}

fn parse_bezier_args(source: &str, args: &str) -> Result<Easing, ParseEasingError> {
    let values: Vec<f32> = args
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|_| ParseEasingError::MalformedBezier(source.to_string()))?;

    let &[x1, y1, x2, y2] = values.as_slice() else {
        return Err(ParseEasingError::MalformedBezier(source.to_string()));
    };

    if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
        return Err(ParseEasingError::BezierOutOfRange(source.to_string()));
    }

    Ok(Easing::CubicBezier(x1, y1, x2, y2))
}

/// Cubic bezier easing, solved the way browsers do it.
///
/// Newton-Raphson on the x polynomial, bisection when the slope goes flat.
/// Works in f64 to keep the solution stable near the endpoints.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let target = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = target;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - target;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2) as f32;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = target;
    for _ in 0..24 {
        let x = bezier_sample(p, x1, x2);
        if (x - target).abs() < 1e-7 {
            break;
        }
        if x < target {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

/// B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³, in Horner form
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}
