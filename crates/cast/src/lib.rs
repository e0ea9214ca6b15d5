// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Float to integer casts that never overflow.
//!
//! NaN maps to zero, values outside the destination range clamp to its
//! minimum or maximum, and all other values truncate toward zero. The clamp
//! bounds are exact powers of two derived at compile time for every
//! (float, integer) pair.
//!
//! ```
//! use clamp_cast::{ClampCast, clamp_cast};
//!
//! assert_eq!(clamp_cast::<u8, f32>(f32::NAN), 0);
//! assert_eq!(clamp_cast::<i8, f64>(-129.0), -128);
//!
//! let level: u16 = 70000.5f64.clamp_cast();
//! assert_eq!(level, 65535);
//! ```

mod bounds;
mod cast;
mod error;
mod float;
mod int;
mod slice;

mod sealed {
	/// Restricts the type description traits to the primitive types this
	/// crate implements them for.
	pub trait Sealed {}
}

pub use bounds::{
	Bounds, ClampBounds, bounds, lower_bound_inclusive_f32, lower_bound_inclusive_f64, upper_bound_exclusive_f32,
	upper_bound_exclusive_f64,
};
pub use cast::{Clamp, ClampCast, Saturation, clamp_cast};
pub use error::CastError;
pub use float::{BinaryFloat, exp2_f32, exp2_f64, is_nan, is_nan_f32, is_nan_f64};
pub use int::BinaryInt;
pub use slice::{Summary, clamp_cast_slice, clamp_cast_vec};

pub type Result<T> = std::result::Result<T, CastError>;
