// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{error::Error, io, io::Write as _, path::Path};

use goldenfile::Mint;

use crate::testscript::{Command, parser::parse};

/// Runs testscript commands, returning their output.
pub trait Runner {
	/// Runs a command, returning its output, or an error if it fails.
	///
	/// Commands prefixed with `!` are expected to fail; their error message
	/// is recorded as output.
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>>;
}

/// Runs the testscript at `path` and compares the regenerated script with the
/// file on disk.
///
/// The comparison happens through a goldenfile, which panics on mismatch.
/// Setting `UPDATE_GOLDENFILES=1` overwrites the script with the new output.
pub fn run_path<R: Runner, P: AsRef<Path>>(runner: &mut R, path: P) -> io::Result<()> {
	let path = path.as_ref();
	let (Some(dir), Some(filename)) = (path.parent(), path.file_name()) else {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("invalid path '{path:?}'")));
	};

	let input = std::fs::read_to_string(path)?;
	let output = generate(runner, &input)?;

	let mut mint = Mint::new(dir);
	mint.new_goldenfile(filename)?.write_all(output.as_bytes())
}

/// Generates output for a testscript input, without comparing it.
pub fn generate<R: Runner>(runner: &mut R, input: &str) -> io::Result<String> {
	let mut output = String::with_capacity(input.len());

	let blocks = parse(input).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

	for (i, block) in blocks.iter().enumerate() {
		// Bare comments at the end of a script form a block without commands.
		if block.commands.is_empty() {
			output.push_str(&block.literal);
			continue;
		}

		let mut block_output = String::new();

		for command in &block.commands {
			let command_output = match runner.run(command) {
				Ok(output) if command.fail => {
					return Err(io::Error::other(format!(
						"expected command '{}' to fail at line {}, succeeded with: {output}",
						command.name, command.line_number
					)));
				}
				Ok(output) => output,
				Err(e) if command.fail => e.to_string(),
				Err(e) => {
					return Err(io::Error::other(format!(
						"command '{}' failed at line {}: {e}",
						command.name, command.line_number
					)));
				}
			};
			block_output.push_str(&ensure_eol(command_output));
		}

		if block_output.is_empty() {
			block_output.push_str("ok\n");
		}

		if block_output.starts_with('\n') || block_output.contains("\n\n") {
			block_output = format!("> {}", block_output.replace('\n', "\n> "));
			block_output.truncate(block_output.len() - 2);
			block_output = block_output.replace("> \n", ">\n");
		}

		output.push_str(&block.literal);
		output.push_str("---\n");
		output.push_str(&block_output);
		if i < blocks.len() - 1 {
			output.push('\n');
		}
	}

	Ok(output)
}

fn ensure_eol(mut s: String) -> String {
	if !s.is_empty() && !s.ends_with('\n') {
		s.push('\n');
	}
	s
}
