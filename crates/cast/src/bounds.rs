// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Clamp bounds for each (float, integer) pair.
//!
//! Integer ranges are `[-2^d, 2^d - 1]` (signed) or `[0, 2^d - 1]`
//! (unsigned), with `d` the number of value bits. `2^d - 1` is usually not
//! representable in the float type but `2^d` is, so the upper bound is
//! exclusive and the lower bound inclusive. When `2^d` exceeds the float's
//! exponent range every finite float fits and the bound falls back to the
//! float's own extreme.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
	float::{BinaryFloat, exp2_f32, exp2_f64},
	int::BinaryInt,
	sealed::Sealed,
};

/// Compile-time bounds for casting `Self` into `To`.
///
/// Values in `[LOWER_BOUND_INCLUSIVE, UPPER_BOUND_EXCLUSIVE)` convert by
/// truncation without leaving the range of `To`. Implemented for every
/// `f32`/`f64` to primitive integer pair and sealed against others.
pub trait ClampBounds<To: BinaryInt>: BinaryFloat + Sealed {
	const LOWER_BOUND_INCLUSIVE: Self;
	const UPPER_BOUND_EXCLUSIVE: Self;
}

macro_rules! impl_bound_derivation {
	($t:ty, $exp2:ident, $lower:ident, $upper:ident) => {
		/// The smallest value that does not underflow an integer with
		/// `digits` value bits.
		pub const fn $lower(digits: u32, signed: bool) -> $t {
			if !signed {
				0.0
			} else if <$t>::MAX_EXP - 1 >= digits as i32 {
				-$exp2(digits)
			} else {
				<$t>::MIN
			}
		}

		/// The smallest value that overflows an integer with `digits`
		/// value bits.
		pub const fn $upper(digits: u32) -> $t {
			if <$t>::MAX_EXP - 1 >= digits as i32 {
				$exp2(digits)
			} else {
				<$t>::INFINITY
			}
		}
	};
}

impl_bound_derivation!(f32, exp2_f32, lower_bound_inclusive_f32, upper_bound_exclusive_f32);
impl_bound_derivation!(f64, exp2_f64, lower_bound_inclusive_f64, upper_bound_exclusive_f64);

macro_rules! impl_clamp_bounds {
	($from:ty, $lower:ident, $upper:ident => $($to:ty),*) => {
		$(
			impl ClampBounds<$to> for $from {
				const LOWER_BOUND_INCLUSIVE: $from =
					$lower(<$to as BinaryInt>::DIGITS, <$to as BinaryInt>::SIGNED);
				const UPPER_BOUND_EXCLUSIVE: $from = $upper(<$to as BinaryInt>::DIGITS);
			}
		)*
	};
}

impl_clamp_bounds!(f32, lower_bound_inclusive_f32, upper_bound_exclusive_f32 =>
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_clamp_bounds!(f64, lower_bound_inclusive_f64, upper_bound_exclusive_f64 =>
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Runtime view of a pair's [`ClampBounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds<F> {
	pub lower_inclusive: F,
	pub upper_exclusive: F,
}

pub fn bounds<To, From>() -> Bounds<From>
where
	To: BinaryInt,
	From: ClampBounds<To>,
{
	Bounds {
		lower_inclusive: <From as ClampBounds<To>>::LOWER_BOUND_INCLUSIVE,
		upper_exclusive: <From as ClampBounds<To>>::UPPER_BOUND_EXCLUSIVE,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod derivation {
		use super::*;

		#[test]
		fn test_unsigned_lower_is_zero() {
			assert_eq!(lower_bound_inclusive_f32(8, false), 0.0);
			assert_eq!(lower_bound_inclusive_f64(128, false), 0.0);
			assert!(lower_bound_inclusive_f32(8, false).is_sign_positive());
		}

		#[test]
		fn test_signed_lower_is_negative_power_of_two() {
			assert_eq!(lower_bound_inclusive_f32(7, true), -128.0);
			assert_eq!(lower_bound_inclusive_f32(63, true), -9223372036854775808.0);
			assert_eq!(lower_bound_inclusive_f64(31, true), -2147483648.0);
		}

		#[test]
		fn test_upper_is_power_of_two() {
			assert_eq!(upper_bound_exclusive_f32(8), 256.0);
			assert_eq!(upper_bound_exclusive_f32(7), 128.0);
			assert_eq!(upper_bound_exclusive_f64(64), 18446744073709551616.0);
		}

		#[test]
		fn test_largest_representable_exponent() {
			assert_eq!(upper_bound_exclusive_f32(127), exp2_f32(127));
			assert_eq!(lower_bound_inclusive_f32(127, true), -exp2_f32(127));
		}

		#[test]
		fn test_narrow_float_falls_back_to_extremes() {
			assert_eq!(upper_bound_exclusive_f32(128), f32::INFINITY);
			assert_eq!(lower_bound_inclusive_f32(128, true), f32::MIN);
			assert_eq!(upper_bound_exclusive_f64(1024), f64::INFINITY);
			assert_eq!(lower_bound_inclusive_f64(2000, true), f64::MIN);
		}
	}

	mod u8 {
		use super::*;

		#[test]
		fn test_bounds() {
			assert_eq!(<f32 as ClampBounds<u8>>::LOWER_BOUND_INCLUSIVE, 0.0);
			assert_eq!(<f32 as ClampBounds<u8>>::UPPER_BOUND_EXCLUSIVE, 256.0);
			assert_eq!(<f64 as ClampBounds<u8>>::UPPER_BOUND_EXCLUSIVE, 256.0);
		}
	}

	mod i8 {
		use super::*;

		#[test]
		fn test_bounds() {
			assert_eq!(<f32 as ClampBounds<i8>>::LOWER_BOUND_INCLUSIVE, -128.0);
			assert_eq!(<f32 as ClampBounds<i8>>::UPPER_BOUND_EXCLUSIVE, 128.0);
		}
	}

	mod i64 {
		use super::*;

		#[test]
		fn test_bounds() {
			assert_eq!(<f32 as ClampBounds<i64>>::LOWER_BOUND_INCLUSIVE, -exp2_f32(63));
			assert_eq!(<f32 as ClampBounds<i64>>::UPPER_BOUND_EXCLUSIVE, exp2_f32(63));
			assert_eq!(<f64 as ClampBounds<i64>>::UPPER_BOUND_EXCLUSIVE, exp2_f64(63));
		}
	}

	mod i128 {
		use super::*;

		#[test]
		fn test_bounds() {
			assert_eq!(<f32 as ClampBounds<i128>>::LOWER_BOUND_INCLUSIVE, -exp2_f32(127));
			assert_eq!(<f32 as ClampBounds<i128>>::UPPER_BOUND_EXCLUSIVE, exp2_f32(127));
		}
	}

	mod u128 {
		use super::*;

		#[test]
		fn test_f32_upper_is_infinity() {
			assert_eq!(<f32 as ClampBounds<u128>>::LOWER_BOUND_INCLUSIVE, 0.0);
			assert_eq!(<f32 as ClampBounds<u128>>::UPPER_BOUND_EXCLUSIVE, f32::INFINITY);
		}

		#[test]
		fn test_f64_upper_is_power_of_two() {
			assert_eq!(<f64 as ClampBounds<u128>>::UPPER_BOUND_EXCLUSIVE, exp2_f64(128));
		}
	}

	mod runtime {
		use super::*;

		#[test]
		fn test_bounds_fn() {
			let b = bounds::<i16, f64>();
			assert_eq!(
				b,
				Bounds {
					lower_inclusive: -32768.0,
					upper_exclusive: 32768.0,
				}
			);
		}
	}

	#[test]
	fn test_const() {
		const UPPER: f32 = <f32 as ClampBounds<u16>>::UPPER_BOUND_EXCLUSIVE;
		assert_eq!(UPPER, 65536.0);
	}
}
