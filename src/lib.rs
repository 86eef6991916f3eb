//! Numeric search-space options.
//!
//! Optimizers work on a normalized feature space where every dimension lies in `[0, 1]`,
//! while users declare their parameters in natural domains such as integer counts or
//! learning rates spanning several orders of magnitude.
//! This crate provides the options that convert a single scalar parameter between
//! those two representations, with linear or logarithmic scaling.
//!
//! # Examples
//!
//! ```
//! use kukan::{Parameter, SearchOption, UniformIntOption};
//!
//! # fn main() -> kukan::Result<()> {
//! let option = UniformIntOption::log(1, 1024)?;
//!
//! let param = option.decode(&[0.5])?;
//! assert_eq!(param.as_type::<i64>()?, 32);
//!
//! let features = option.encode(&Parameter::from(32))?;
//! assert!((features[0] - 0.5).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`Parameter`] and [`ParameterKind`] | off |
//! | `tracing` | `debug` events via [`tracing`](https://docs.rs/tracing) when options are built | off |
#![warn(missing_docs)]
#[macro_use]
extern crate trackable;

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub use self::error::{Error, ErrorKind};
pub use self::options::{NumericOption, SearchOption, UniformDoubleOption, UniformIntOption};
pub use self::parameter::{Parameter, ParameterKind, ParameterValue};
pub use self::scaling::Scale;

pub mod options;
pub mod parameter;
pub mod scaling;

mod error;

/// This crate specific `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
