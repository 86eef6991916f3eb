//! Linear and logarithmic scaling between a value range and the unit interval.
//!
//! All functions are pure. For `feature` in `[0, 1]`, the decoders return a value in
//! `[low, high]` up to floating point rounding, and the encoders are their inverses.
//! The logarithmic functions require `0 < low`, which the options check when they are built.

/// Scaling mode of a numeric option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    /// `value = low + feature * (high - low)`.
    Linear,

    /// `value = exp(ln(low) + feature * (ln(high) - ln(low)))`.
    Log,
}
impl Scale {
    /// Returns `Scale::Log` if `log` is `true`, otherwise `Scale::Linear`.
    pub fn from_log_flag(log: bool) -> Self {
        if log {
            Scale::Log
        } else {
            Scale::Linear
        }
    }

    /// Returns `true` if this is `Scale::Log`.
    pub fn is_log(self) -> bool {
        self == Scale::Log
    }

    /// Maps `feature` to the value range `[low, high]`.
    pub fn decode(self, low: f64, high: f64, feature: f64) -> f64 {
        match self {
            Scale::Linear => linear_decode(low, high, feature),
            Scale::Log => log_decode(low, high, feature),
        }
    }

    /// Maps `value` in `[low, high]` to the unit interval.
    pub fn encode(self, low: f64, high: f64, value: f64) -> f64 {
        match self {
            Scale::Linear => linear_encode(low, high, value),
            Scale::Log => log_encode(low, high, value),
        }
    }
}
impl Default for Scale {
    fn default() -> Self {
        Scale::Linear
    }
}

/// Linear decode: `low + feature * (high - low)`.
pub fn linear_decode(low: f64, high: f64, feature: f64) -> f64 {
    low + feature * (high - low)
}

/// Linear encode: `(value - low) / (high - low)`.
pub fn linear_encode(low: f64, high: f64, value: f64) -> f64 {
    (value - low) / (high - low)
}

/// Logarithmic decode: `exp(ln(low) + feature * (ln(high) - ln(low)))`.
pub fn log_decode(low: f64, high: f64, feature: f64) -> f64 {
    let log_low = low.ln();
    let log_high = high.ln();
    (log_low + feature * (log_high - log_low)).exp()
}

/// Logarithmic encode: `(ln(value) - ln(low)) / (ln(high) - ln(low))`.
pub fn log_encode(low: f64, high: f64, value: f64) -> f64 {
    let log_low = low.ln();
    let log_high = high.ln();
    (value.ln() - log_low) / (log_high - log_low)
}

/// Clips `x` into `[min_x, max_x]`.
///
/// None of the arguments may be NaN.
pub fn clip(min_x: f64, x: f64, max_x: f64) -> f64 {
    debug_assert!(!(min_x.is_nan() || x.is_nan() || max_x.is_nan()));
    x.min(max_x).max(min_x)
}
