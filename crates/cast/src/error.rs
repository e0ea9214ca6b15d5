// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CastError {
	#[error("cannot cast NaN to an integer")]
	NotANumber,

	#[error("{value} is below the lower bound {bound}")]
	Underflow {
		value: f64,
		bound: f64,
	},

	#[error("{value} is at or above the upper bound {bound}")]
	Overflow {
		value: f64,
		bound: f64,
	},

	#[error("source has {src_len} elements but destination has {dst_len}")]
	LengthMismatch {
		src_len: usize,
		dst_len: usize,
	},
}
