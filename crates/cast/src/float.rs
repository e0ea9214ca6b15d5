// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use num_traits::Float;

use crate::sealed::Sealed;

/// A binary (radix 2) IEEE 754 floating point type usable as a cast source.
///
/// Sealed: implemented for `f32` and `f64` only, each checked at compile
/// time to have radix 2.
///
/// ```compile_fail
/// use clamp_cast::BinaryFloat;
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Decimal(f64);
///
/// impl BinaryFloat for Decimal {
/// 	const MAX_EXP: i32 = 308;
/// 	const LOWEST: Self = Decimal(f64::MIN);
/// 	const MAX: Self = Decimal(f64::MAX);
/// 	const INFINITY: Self = Decimal(f64::INFINITY);
/// 	const ZERO: Self = Decimal(0.0);
///
/// 	fn power_of_two(exp: u32) -> Self {
/// 		Decimal(2f64.powi(exp as i32))
/// 	}
/// }
/// ```
pub trait BinaryFloat: Float + Debug + Sealed + 'static {
	const MAX_EXP: i32;
	const LOWEST: Self;
	const MAX: Self;
	const INFINITY: Self;
	const ZERO: Self;

	/// `2^exp`, exact as long as `exp <= exponent_bits()`.
	fn power_of_two(exp: u32) -> Self;

	/// The largest exponent `e` for which `2^e` is finite.
	fn exponent_bits() -> u32 {
		(Self::MAX_EXP - 1) as u32
	}
}

/// Returns true iff `value` is NaN.
#[inline]
#[allow(clippy::eq_op)]
pub fn is_nan<F: BinaryFloat>(value: F) -> bool {
	value != value
}

macro_rules! impl_binary_float {
	($t:ty, $is_nan:ident, $exp2:ident) => {
		/// Returns true iff `value` is NaN. NaN is the only value not equal to itself.
		#[inline]
		#[allow(clippy::eq_op)]
		pub const fn $is_nan(value: $t) -> bool {
			value != value
		}

		#[doc = concat!("`2^exp` as `", stringify!($t), "`, built by repeated doubling.")]
		///
		/// Doubling is exact until the exponent range runs out, after which
		/// the result is infinity.
		pub const fn $exp2(exp: u32) -> $t {
			let mut result: $t = 1.0;
			let mut i = 0;
			while i < exp {
				result *= 2.0;
				i += 1;
			}
			result
		}

		const _: () = assert!(<$t>::RADIX == 2);
		const _: () = assert!(<$t>::MAX_EXP > 1);

		impl Sealed for $t {}

		impl BinaryFloat for $t {
			const MAX_EXP: i32 = <$t>::MAX_EXP;
			const LOWEST: Self = <$t>::MIN;
			const MAX: Self = <$t>::MAX;
			const INFINITY: Self = <$t>::INFINITY;
			const ZERO: Self = 0.0;

			#[inline]
			fn power_of_two(exp: u32) -> Self {
				$exp2(exp)
			}
		}
	};
}

impl_binary_float!(f32, is_nan_f32, exp2_f32);
impl_binary_float!(f64, is_nan_f64, exp2_f64);
