// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
	CastError,
	bounds::ClampBounds,
	float::{BinaryFloat, is_nan, is_nan_f32, is_nan_f64},
	int::BinaryInt,
};

/// How a value was mapped by [`ClampCast::clamp_cast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Saturation {
	/// Truncated toward zero.
	InRange,
	/// NaN, mapped to zero.
	Nan,
	/// Below the lower bound, mapped to the minimum.
	Min,
	/// At or above the upper bound, mapped to the maximum.
	Max,
}

/// Float to integer conversion that never overflows.
///
/// NaN becomes zero, values below the destination's range become its
/// minimum, values above become its maximum, and everything else is
/// truncated toward zero.
pub trait ClampCast<To: BinaryInt>: ClampBounds<To> {
	fn clamp_cast(self) -> To;

	fn saturation(self) -> Saturation {
		if is_nan(self) {
			Saturation::Nan
		} else if self < <Self as ClampBounds<To>>::LOWER_BOUND_INCLUSIVE {
			Saturation::Min
		} else if self >= <Self as ClampBounds<To>>::UPPER_BOUND_EXCLUSIVE {
			Saturation::Max
		} else {
			Saturation::InRange
		}
	}

	/// Like [`ClampCast::strict_cast`], discarding the reason.
	fn checked_cast(self) -> Option<To> {
		self.strict_cast().ok()
	}

	/// Converts `self` if it lies inside the destination range, truncating
	/// toward zero. NaN and out of range values are reported instead of
	/// clamped.
	fn strict_cast(self) -> crate::Result<To> {
		match self.saturation() {
			Saturation::InRange => Ok(self.clamp_cast()),
			Saturation::Nan => Err(CastError::NotANumber),
			Saturation::Min => Err(CastError::Underflow {
				value: widen(self),
				bound: widen(<Self as ClampBounds<To>>::LOWER_BOUND_INCLUSIVE),
			}),
			Saturation::Max => Err(CastError::Overflow {
				value: widen(self),
				bound: widen(<Self as ClampBounds<To>>::UPPER_BOUND_EXCLUSIVE),
			}),
		}
	}
}

fn widen<F: BinaryFloat>(value: F) -> f64 {
	value.to_f64().unwrap_or(f64::NAN)
}

/// `clamp_cast::<u8, _>(300.0f32) == 255`
///
/// Only `f32`/`f64` to primitive integer pairs exist. An integer source
/// does not compile:
///
/// ```compile_fail
/// let _ = clamp_cast::clamp_cast::<u8, i32>(1);
/// ```
///
/// Nor does a destination that is not an integer:
///
/// ```compile_fail
/// let _ = clamp_cast::clamp_cast::<bool, f32>(1.0);
/// ```
///
/// ```compile_fail
/// let _ = clamp_cast::clamp_cast::<f32, f64>(1.0);
/// ```
#[inline]
pub fn clamp_cast<To, From>(value: From) -> To
where
	To: BinaryInt,
	From: ClampCast<To>,
{
	value.clamp_cast()
}

/// Const-evaluable clamping casts.
///
/// ```
/// use clamp_cast::Clamp;
///
/// const LEVEL: u8 = Clamp(300.0f32).to_u8();
/// assert_eq!(LEVEL, 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Clamp<F>(pub F);

macro_rules! impl_clamp_cast {
	($from:ty, $is_nan:ident => $($method:ident: $to:ty),*) => {
		impl Clamp<$from> {
			$(
				#[inline]
				pub const fn $method(self) -> $to {
					let value = self.0;
					if $is_nan(value) {
						0
					} else if value < <$from as ClampBounds<$to>>::LOWER_BOUND_INCLUSIVE {
						<$to>::MIN
					} else if value >= <$from as ClampBounds<$to>>::UPPER_BOUND_EXCLUSIVE {
						<$to>::MAX
					} else {
						// In range, so the truncating cast cannot saturate.
						value as $to
					}
				}
			)*
		}

		$(
			impl ClampCast<$to> for $from {
				#[inline]
				fn clamp_cast(self) -> $to {
					Clamp(self).$method()
				}
			}
		)*
	};
}

impl_clamp_cast!(f32, is_nan_f32 =>
	to_i8: i8, to_i16: i16, to_i32: i32, to_i64: i64, to_i128: i128, to_isize: isize,
	to_u8: u8, to_u16: u16, to_u32: u32, to_u64: u64, to_u128: u128, to_usize: usize
);
impl_clamp_cast!(f64, is_nan_f64 =>
	to_i8: i8, to_i16: i16, to_i32: i32, to_i64: i64, to_i128: i128, to_isize: isize,
	to_u8: u8, to_u16: u16, to_u32: u32, to_u64: u64, to_u128: u128, to_usize: usize
);
