// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Display};

use num_traits::PrimInt;

use crate::sealed::Sealed;

/// A binary integer type usable as a cast destination.
///
/// Sealed: implemented for the primitive integers only.
///
/// ```compile_fail
/// use clamp_cast::{BinaryInt, clamp_cast};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Digit(u8);
///
/// impl BinaryInt for Digit {
/// 	const SIGNED: bool = false;
/// 	const DIGITS: u32 = 4;
/// 	const MIN: Self = Digit(0);
/// 	const MAX: Self = Digit(9);
/// 	const ZERO: Self = Digit(0);
/// }
///
/// let _ = clamp_cast::<Digit, f32>(3.5);
/// ```
pub trait BinaryInt: PrimInt + Debug + Display + Sealed + 'static {
	const SIGNED: bool;
	/// Number of value bits, not counting the sign bit.
	const DIGITS: u32;
	const MIN: Self;
	const MAX: Self;
	const ZERO: Self;
}

macro_rules! impl_binary_int {
	(signed: $($t:ty),*) => {
		$(impl_binary_int!(@impl $t, true, <$t>::BITS - 1);)*
	};
	(unsigned: $($t:ty),*) => {
		$(impl_binary_int!(@impl $t, false, <$t>::BITS);)*
	};
	(@impl $t:ty, $signed:expr, $digits:expr) => {
		impl Sealed for $t {}

		impl BinaryInt for $t {
			const SIGNED: bool = $signed;
			const DIGITS: u32 = $digits;
			const MIN: Self = <$t>::MIN;
			const MAX: Self = <$t>::MAX;
			const ZERO: Self = 0;
		}
	};
}

impl_binary_int!(signed: i8, i16, i32, i64, i128, isize);
impl_binary_int!(unsigned: u8, u16, u32, u64, u128, usize);
