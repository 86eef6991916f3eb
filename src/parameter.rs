//! Typed parameter values.
use crate::{ErrorKind, Result};
use std::convert::TryFrom;
use std::fmt;

/// The kind of the scalar held by a [`Parameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterKind {
    /// Integer number.
    Int,

    /// Real number.
    Real,
}
impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParameterKind::Int => write!(f, "int"),
            ParameterKind::Real => write!(f, "real"),
        }
    }
}

/// A value in the natural domain of an option.
///
/// A parameter holds exactly one scalar, either an integer or a real number.
/// Use [`Parameter::as_type`] to get the native value back.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parameter {
    /// Integer value.
    Int(i64),

    /// Real value.
    Real(f64),
}
impl Parameter {
    /// Returns the kind of the stored value.
    pub fn kind(&self) -> ParameterKind {
        match self {
            Parameter::Int(_) => ParameterKind::Int,
            Parameter::Real(_) => ParameterKind::Real,
        }
    }

    /// Extracts the stored value as `T`.
    ///
    /// No implicit conversion between integers and reals takes place.
    ///
    /// # Errors
    ///
    /// If the kind of `T` differs from the stored kind, an `ErrorKind::TypeMismatch` error will be returned.
    ///
    /// If the stored integer does not fit in `T`, an `ErrorKind::InvalidInput` error will be returned.
    pub fn as_type<T: ParameterValue>(&self) -> Result<T> {
        track!(T::from_parameter(self))
    }
}
impl From<i64> for Parameter {
    fn from(f: i64) -> Self {
        Parameter::Int(f)
    }
}
impl From<i32> for Parameter {
    fn from(f: i32) -> Self {
        Parameter::Int(i64::from(f))
    }
}
impl From<f64> for Parameter {
    fn from(f: f64) -> Self {
        Parameter::Real(f)
    }
}
impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Parameter::Int(v) => write!(f, "{}", v),
            Parameter::Real(v) => write!(f, "{}", v),
        }
    }
}

/// This trait allows for extracting a native value from a [`Parameter`].
pub trait ParameterValue: Sized {
    /// The parameter kind that this type is extracted from.
    const KIND: ParameterKind;

    /// Extracts the value from the given parameter.
    fn from_parameter(param: &Parameter) -> Result<Self>;
}
impl ParameterValue for i64 {
    const KIND: ParameterKind = ParameterKind::Int;

    fn from_parameter(param: &Parameter) -> Result<Self> {
        match *param {
            Parameter::Int(v) => Ok(v),
            Parameter::Real(_) => track_panic!(
                ErrorKind::TypeMismatch,
                "expected {}, found {}",
                Self::KIND,
                param.kind()
            ),
        }
    }
}
impl ParameterValue for i32 {
    const KIND: ParameterKind = ParameterKind::Int;

    fn from_parameter(param: &Parameter) -> Result<Self> {
        let v = track!(i64::from_parameter(param))?;
        let v = track_assert_some!(i32::try_from(v).ok(), ErrorKind::InvalidInput);
        Ok(v)
    }
}
impl ParameterValue for f64 {
    const KIND: ParameterKind = ParameterKind::Real;

    fn from_parameter(param: &Parameter) -> Result<Self> {
        match *param {
            Parameter::Real(v) => Ok(v),
            Parameter::Int(_) => track_panic!(
                ErrorKind::TypeMismatch,
                "expected {}, found {}",
                Self::KIND,
                param.kind()
            ),
        }
    }
}
