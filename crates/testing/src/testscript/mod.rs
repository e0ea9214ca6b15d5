// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Golden testscripts.
//!
//! A script is a sequence of blocks. Each block holds one or more commands,
//! a `---` separator and the output the commands produced:
//!
//! ```text
//! # comments and blank lines are kept verbatim
//! cast f32 u8 256.0
//! ---
//! 256.0 -> 255
//! ```
//!
//! Running a script regenerates every output section and compares the result
//! with the file on disk. A command prefixed with `!` is expected to fail, and
//! its error message becomes the output.

mod parser;
mod runner;

pub use parser::{ParseError, parse};
pub use runner::{Runner, generate, run_path};

/// A single command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
	pub name: String,
	pub args: Vec<String>,
	/// The command is expected to fail.
	pub fail: bool,
	pub line_number: u32,
}

/// Commands followed by a `---` separator and their recorded output.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
	/// Input text of the block up to the separator, including comments.
	pub literal: String,
	pub commands: Vec<Command>,
	pub line_number: u32,
}
