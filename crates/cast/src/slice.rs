// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
	CastError,
	cast::{ClampCast, Saturation},
	int::BinaryInt,
};

/// Per-outcome counts of a batch conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
	pub in_range: usize,
	pub nan: usize,
	pub min: usize,
	pub max: usize,
}

impl Summary {
	pub fn record(&mut self, saturation: Saturation) {
		match saturation {
			Saturation::InRange => self.in_range += 1,
			Saturation::Nan => self.nan += 1,
			Saturation::Min => self.min += 1,
			Saturation::Max => self.max += 1,
		}
	}

	/// Number of values that were not plainly truncated.
	pub fn saturated(&self) -> usize {
		self.nan + self.min + self.max
	}

	pub fn total(&self) -> usize {
		self.in_range + self.saturated()
	}
}

/// Clamp casts `src` element-wise into `dst`.
#[instrument(name = "clamp_cast::slice", level = "trace", skip_all, fields(len = src.len()))]
pub fn clamp_cast_slice<F, I>(src: &[F], dst: &mut [I]) -> crate::Result<Summary>
where
	F: ClampCast<I>,
	I: BinaryInt,
{
	if src.len() != dst.len() {
		return Err(CastError::LengthMismatch {
			src_len: src.len(),
			dst_len: dst.len(),
		});
	}

	let mut summary = Summary::default();
	for (out, &value) in dst.iter_mut().zip(src) {
		summary.record(value.saturation());
		*out = value.clamp_cast();
	}

	log_summary(&summary);
	Ok(summary)
}

/// Clamp casts `src` into a new vector.
#[instrument(name = "clamp_cast::vec", level = "trace", skip_all, fields(len = src.len()))]
pub fn clamp_cast_vec<F, I>(src: &[F]) -> (Vec<I>, Summary)
where
	F: ClampCast<I>,
	I: BinaryInt,
{
	let mut summary = Summary::default();
	let out = src
		.iter()
		.map(|&value| {
			summary.record(value.saturation());
			value.clamp_cast()
		})
		.collect();

	log_summary(&summary);
	(out, summary)
}

fn log_summary(summary: &Summary) {
	if summary.saturated() > 0 {
		debug!(
			total = summary.total(),
			nan = summary.nan,
			min = summary.min,
			max = summary.max,
			"clamped values during cast"
		);
	}
}
