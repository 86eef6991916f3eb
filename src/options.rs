//! Numeric search-space options.
//!
//! An option converts a single parameter between its natural domain and one
//! component of the normalized feature space that optimizers work on.
use crate::parameter::{Parameter, ParameterKind};
use crate::scaling::{clip, Scale};
use crate::{ErrorKind, Result};
use ordered_float::NotNan;

/// This trait allows for converting a parameter between its value space and the feature space.
pub trait SearchOption {
    /// Returns the number of feature components occupied by this option.
    fn feature_space_dim(&self) -> usize;

    /// Converts the given feature components to the associated parameter.
    ///
    /// Only the first `feature_space_dim()` components are consumed.
    fn decode(&self, features: &[f64]) -> Result<Parameter>;

    /// Converts the given parameter to the associated feature components.
    fn encode(&self, param: &Parameter) -> Result<Vec<f64>>;

    /// Returns the feature components of the default value of this option.
    fn default_feature(&self) -> Vec<f64>;
}

/// Real number option that is uniformly distributed in `[low, high]`, possibly in log scale.
///
/// # Examples
///
/// ```
/// use kukan::{Parameter, SearchOption, UniformDoubleOption};
///
/// # fn main() -> kukan::Result<()> {
/// let option = UniformDoubleOption::log(1e-4, 1e-1)?;
/// let lr = option.decode(&[0.5])?.as_type::<f64>()?;
/// assert!((lr - 0.00316).abs() < 1e-5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniformDoubleOption {
    low: NotNan<f64>,
    high: NotNan<f64>,
    scale: Scale,
    clamp: bool,
    default: Option<NotNan<f64>>,
}
impl UniformDoubleOption {
    /// Makes a linear scale `UniformDoubleOption` over `[low, high]`.
    ///
    /// # Errors
    ///
    /// See [`UniformDoubleOption::with_scale`].
    pub fn new(low: f64, high: f64) -> Result<Self> {
        track!(Self::with_scale(low, high, Scale::Linear))
    }

    /// Makes a log scale `UniformDoubleOption` over `[low, high]`.
    ///
    /// # Errors
    ///
    /// See [`UniformDoubleOption::with_scale`].
    pub fn log(low: f64, high: f64) -> Result<Self> {
        track!(Self::with_scale(low, high, Scale::Log))
    }

    /// Makes a `UniformDoubleOption` over `[low, high]` with the given scale.
    ///
    /// # Errors
    ///
    /// If one of the following conditions is satisfied, this function returns an `ErrorKind::InvalidBounds` error:
    ///
    /// - `low` or `high` is not a finite number
    /// - `low >= high`
    /// - `high - low` is not a finite number
    ///
    /// If `scale` is `Scale::Log` and `low <= 0`, an `ErrorKind::InvalidLogDomain` error is returned.
    pub fn with_scale(low: f64, high: f64, scale: Scale) -> Result<Self> {
        track_assert!(low.is_finite(), ErrorKind::InvalidBounds; low, high);
        track_assert!(high.is_finite(), ErrorKind::InvalidBounds; low, high);
        track_assert!(low < high, ErrorKind::InvalidBounds; low, high);
        track_assert!((high - low).is_finite(), ErrorKind::InvalidBounds; low, high);
        if scale.is_log() {
            track_assert!(0.0 < low, ErrorKind::InvalidLogDomain; low, high);
        }
        trace_debug!(low, high, scale = ?scale, "uniform double option");

        Ok(Self {
            low: track_assert_some!(NotNan::new(low).ok(), ErrorKind::InvalidBounds),
            high: track_assert_some!(NotNan::new(high).ok(), ErrorKind::InvalidBounds),
            scale,
            clamp: false,
            default: None,
        })
    }

    /// Sets the default value of this option.
    ///
    /// # Errors
    ///
    /// If `value` is not in `[low, high]`, an `ErrorKind::InvalidInput` error is returned.
    pub fn with_default(mut self, value: f64) -> Result<Self> {
        track_assert!(self.low() <= value && value <= self.high(), ErrorKind::InvalidInput;
                      value, self.low(), self.high());
        self.default = Some(track_assert_some!(
            NotNan::new(value).ok(),
            ErrorKind::InvalidInput
        ));
        Ok(self)
    }

    /// Makes `decode` clip feature components into `[0, 1]` before conversion.
    ///
    /// Without this, out-of-range features are extrapolated beyond `[low, high]`.
    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    /// Returns the lower bound of this option.
    pub fn low(&self) -> f64 {
        self.low.into_inner()
    }

    /// Returns the upper bound of this option.
    pub fn high(&self) -> f64 {
        self.high.into_inner()
    }

    /// Returns the scale of this option.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Returns `true` if this option is log scale.
    pub fn is_log(&self) -> bool {
        self.scale.is_log()
    }

    /// Returns `true` if `decode` clips its input into `[0, 1]`.
    pub fn is_clamped(&self) -> bool {
        self.clamp
    }

    /// Returns the default value of this option, if any.
    pub fn default_value(&self) -> Option<Parameter> {
        self.default.map(|v| Parameter::Real(v.into_inner()))
    }

    fn decode_value(&self, features: &[f64]) -> Result<f64> {
        let x = track!(first_feature(features))?;
        let x = if self.clamp { clip(0.0, x, 1.0) } else { x };
        let value = self.scale.decode(self.low(), self.high(), x);
        track_assert!(value.is_finite(), ErrorKind::InvalidInput; x, value);
        Ok(value)
    }

    fn encode_value(&self, value: f64) -> Result<f64> {
        track_assert!(value.is_finite(), ErrorKind::InvalidInput; value);
        if self.is_log() {
            track_assert!(0.0 < value, ErrorKind::InvalidInput; value);
        }
        Ok(self.scale.encode(self.low(), self.high(), value))
    }
}
impl SearchOption for UniformDoubleOption {
    fn feature_space_dim(&self) -> usize {
        1
    }

    fn decode(&self, features: &[f64]) -> Result<Parameter> {
        let value = track!(self.decode_value(features))?;
        Ok(Parameter::Real(value))
    }

    fn encode(&self, param: &Parameter) -> Result<Vec<f64>> {
        let value = track!(param.as_type::<f64>())?;
        let x = track!(self.encode_value(value))?;
        Ok(vec![x])
    }

    fn default_feature(&self) -> Vec<f64> {
        match self.default {
            Some(v) => vec![self.scale.encode(self.low(), self.high(), v.into_inner())],
            None => vec![0.0],
        }
    }
}

/// Integer option that is uniformly distributed in `[low, high]`, possibly in log scale.
///
/// Decoding computes the real value in the same way as [`UniformDoubleOption`] and then
/// truncates it toward zero. Floating point error near an integer boundary can therefore
/// yield one less than the mathematically exact integer.
///
/// ```
/// use kukan::{SearchOption, UniformIntOption};
///
/// # fn main() -> kukan::Result<()> {
/// let option = UniformIntOption::log(1, 1024)?;
/// assert_eq!(option.decode(&[0.8])?.as_type::<i64>()?, 256);
/// assert_eq!(option.decode(&[0.9])?.as_type::<i64>()?, 511);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniformIntOption {
    low: i64,
    high: i64,
    real: UniformDoubleOption,
    default: Option<i64>,
}
impl UniformIntOption {
    /// Makes a linear scale `UniformIntOption` over `[low, high]`.
    ///
    /// # Errors
    ///
    /// See [`UniformIntOption::with_scale`].
    pub fn new(low: i64, high: i64) -> Result<Self> {
        track!(Self::with_scale(low, high, Scale::Linear))
    }

    /// Makes a log scale `UniformIntOption` over `[low, high]`.
    ///
    /// # Errors
    ///
    /// See [`UniformIntOption::with_scale`].
    pub fn log(low: i64, high: i64) -> Result<Self> {
        track!(Self::with_scale(low, high, Scale::Log))
    }

    /// Makes a `UniformIntOption` over `[low, high]` with the given scale.
    ///
    /// # Errors
    ///
    /// If `low >= high`, an `ErrorKind::InvalidBounds` error is returned.
    /// The same error is returned if `low` and `high` become equal when converted to `f64`
    /// (e.g., `1 << 60` and `(1 << 60) + 1`).
    ///
    /// If `scale` is `Scale::Log` and `low <= 0`, an `ErrorKind::InvalidLogDomain` error is returned.
    pub fn with_scale(low: i64, high: i64, scale: Scale) -> Result<Self> {
        track_assert!(low < high, ErrorKind::InvalidBounds; low, high);
        if scale.is_log() {
            track_assert!(0 < low, ErrorKind::InvalidLogDomain; low, high);
        }
        trace_debug!(low, high, scale = ?scale, "uniform int option");

        let real = track!(UniformDoubleOption::with_scale(
            low as f64,
            high as f64,
            scale
        ))?;
        Ok(Self {
            low,
            high,
            real,
            default: None,
        })
    }

    /// Sets the default value of this option.
    ///
    /// # Errors
    ///
    /// If `value` is not in `[low, high]`, an `ErrorKind::InvalidInput` error is returned.
    pub fn with_default(mut self, value: i64) -> Result<Self> {
        track_assert!(self.low <= value && value <= self.high, ErrorKind::InvalidInput;
                      value, self.low, self.high);
        self.default = Some(value);
        Ok(self)
    }

    /// Makes `decode` clip feature components into `[0, 1]` before conversion.
    ///
    /// Without this, out-of-range features are extrapolated beyond `[low, high]`.
    pub fn clamped(mut self) -> Self {
        self.real = self.real.clamped();
        self
    }

    /// Returns the lower bound of this option.
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Returns the upper bound of this option.
    pub fn high(&self) -> i64 {
        self.high
    }

    /// Returns the scale of this option.
    pub fn scale(&self) -> Scale {
        self.real.scale()
    }

    /// Returns `true` if this option is log scale.
    pub fn is_log(&self) -> bool {
        self.real.is_log()
    }

    /// Returns `true` if `decode` clips its input into `[0, 1]`.
    pub fn is_clamped(&self) -> bool {
        self.real.is_clamped()
    }

    /// Returns the default value of this option, if any.
    pub fn default_value(&self) -> Option<Parameter> {
        self.default.map(Parameter::Int)
    }
}
impl SearchOption for UniformIntOption {
    fn feature_space_dim(&self) -> usize {
        self.real.feature_space_dim()
    }

    fn decode(&self, features: &[f64]) -> Result<Parameter> {
        let value = track!(self.real.decode_value(features))?.trunc();

        // `i64::MAX as f64` rounds up to 2^63, which saturates to `i64::MAX`.
        track_assert!(i64::MIN as f64 <= value && value <= i64::MAX as f64,
                      ErrorKind::InvalidInput; value);
        Ok(Parameter::Int(value as i64))
    }

    fn encode(&self, param: &Parameter) -> Result<Vec<f64>> {
        let value = track!(param.as_type::<i64>())?;
        track!(self.real.encode(&Parameter::Real(value as f64)))
    }

    fn default_feature(&self) -> Vec<f64> {
        match self.default {
            Some(v) => vec![self.scale().encode(self.real.low(), self.real.high(), v as f64)],
            None => vec![0.0],
        }
    }
}

/// Numeric option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericOption {
    /// Integer option.
    Integer(UniformIntOption),

    /// Real number option.
    Real(UniformDoubleOption),
}
impl NumericOption {
    /// Returns the kind of the parameters handled by this option.
    pub fn kind(&self) -> ParameterKind {
        match self {
            NumericOption::Integer(_) => ParameterKind::Int,
            NumericOption::Real(_) => ParameterKind::Real,
        }
    }

    /// Returns the scale of this option.
    pub fn scale(&self) -> Scale {
        match self {
            NumericOption::Integer(o) => o.scale(),
            NumericOption::Real(o) => o.scale(),
        }
    }
}
impl SearchOption for NumericOption {
    fn feature_space_dim(&self) -> usize {
        match self {
            NumericOption::Integer(o) => o.feature_space_dim(),
            NumericOption::Real(o) => o.feature_space_dim(),
        }
    }

    fn decode(&self, features: &[f64]) -> Result<Parameter> {
        match self {
            NumericOption::Integer(o) => track!(o.decode(features)),
            NumericOption::Real(o) => track!(o.decode(features)),
        }
    }

    fn encode(&self, param: &Parameter) -> Result<Vec<f64>> {
        match self {
            NumericOption::Integer(o) => track!(o.encode(param)),
            NumericOption::Real(o) => track!(o.encode(param)),
        }
    }

    fn default_feature(&self) -> Vec<f64> {
        match self {
            NumericOption::Integer(o) => o.default_feature(),
            NumericOption::Real(o) => o.default_feature(),
        }
    }
}
impl From<UniformIntOption> for NumericOption {
    fn from(f: UniformIntOption) -> Self {
        NumericOption::Integer(f)
    }
}
impl From<UniformDoubleOption> for NumericOption {
    fn from(f: UniformDoubleOption) -> Self {
        NumericOption::Real(f)
    }
}

fn first_feature(features: &[f64]) -> Result<f64> {
    let x = track_assert_some!(features.first().copied(), ErrorKind::InvalidInput);
    track_assert!(x.is_finite(), ErrorKind::InvalidInput; x);
    Ok(x)
}
