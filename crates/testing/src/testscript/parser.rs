// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::testscript::{Block, Command};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
	#[error("line {line}: expected '---' after commands")]
	MissingSeparator {
		line: u32,
	},

	#[error("line {line}: '---' without preceding commands")]
	EmptyBlock {
		line: u32,
	},

	#[error("line {line}: expected a blank line after quoted output")]
	UnterminatedOutput {
		line: u32,
	},

	#[error("line {line}: '!' must be followed by a command name")]
	MissingCommandName {
		line: u32,
	},
}

enum State {
	Commands,
	Output {
		quoted: Option<bool>,
	},
}

pub fn parse(input: &str) -> Result<Vec<Block>, ParseError> {
	let mut blocks = Vec::new();
	let mut state = State::Commands;
	let mut literal = String::new();
	let mut commands = Vec::new();
	let mut block_line = 1;
	let mut last_line = 0;

	for (idx, raw) in input.split_inclusive('\n').enumerate() {
		let line_number = idx as u32 + 1;
		let line = raw.trim_end_matches(['\n', '\r']);
		last_line = line_number;

		match state {
			State::Commands => {
				if line == "---" {
					if commands.is_empty() {
						return Err(ParseError::EmptyBlock {
							line: line_number,
						});
					}
					blocks.push(Block {
						literal: std::mem::take(&mut literal),
						commands: std::mem::take(&mut commands),
						line_number: block_line,
					});
					state = State::Output {
						quoted: None,
					};
					continue;
				}

				if literal.is_empty() {
					block_line = line_number;
				}
				literal.push_str(raw);

				let trimmed = line.trim();
				if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
					continue;
				}
				commands.push(parse_command(trimmed, line_number)?);
			}

			State::Output {
				quoted,
			} => {
				// Output containing blank lines is written with a "> " prefix on every line.
				let quoted = quoted.unwrap_or(line.starts_with('>'));
				let ends = if quoted {
					!line.starts_with('>')
				} else {
					line.is_empty()
				};

				if ends {
					state = State::Commands;
					if quoted && !line.is_empty() {
						return Err(ParseError::UnterminatedOutput {
							line: line_number,
						});
					}
				} else {
					state = State::Output {
						quoted: Some(quoted),
					};
				}
			}
		}
	}

	if let State::Commands = state {
		if !commands.is_empty() {
			return Err(ParseError::MissingSeparator {
				line: last_line,
			});
		}
		if !literal.is_empty() {
			blocks.push(Block {
				literal,
				commands: Vec::new(),
				line_number: block_line,
			});
		}
	}

	Ok(blocks)
}

fn parse_command(line: &str, line_number: u32) -> Result<Command, ParseError> {
	let (fail, rest) = match line.strip_prefix('!') {
		Some(rest) => (true, rest.trim_start()),
		None => (false, line),
	};

	let mut words = rest.split_whitespace();
	let Some(name) = words.next() else {
		return Err(ParseError::MissingCommandName {
			line: line_number,
		});
	};

	Ok(Command {
		name: name.to_string(),
		args: words.map(str::to_string).collect(),
		fail,
		line_number,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_single_block() {
		let blocks = parse("cast f32 u8 1.0\n---\n1.0 -> 1\n").unwrap();
		assert_eq!(blocks.len(), 1);
		assert_eq!(blocks[0].literal, "cast f32 u8 1.0\n");
		assert_eq!(
			blocks[0].commands,
			vec![Command {
				name: "cast".to_string(),
				args: vec!["f32".to_string(), "u8".to_string(), "1.0".to_string()],
				fail: false,
				line_number: 1,
			}]
		);
	}

	#[test]
	fn test_comments_are_kept_in_literal() {
		let blocks = parse("# header\n\nbounds f32 i8\n---\nout\n\n# trailing\n").unwrap();
		assert_eq!(blocks.len(), 2);
		assert_eq!(blocks[0].literal, "# header\n\nbounds f32 i8\n");
		assert_eq!(blocks[0].commands.len(), 1);
		assert_eq!(blocks[0].commands[0].line_number, 3);
		assert_eq!(blocks[1].literal, "# trailing\n");
		assert!(blocks[1].commands.is_empty());
	}

	#[test]
	fn test_expected_failure() {
		let blocks = parse("! strict f32 u8 nan\n---\nerror\n").unwrap();
		let command = &blocks[0].commands[0];
		assert!(command.fail);
		assert_eq!(command.name, "strict");
		assert_eq!(command.args, vec!["f32", "u8", "nan"]);
	}

	#[test]
	fn test_quoted_output() {
		let blocks = parse("a\n---\n> x\n>\n> y\n\nb\n---\nok\n").unwrap();
		assert_eq!(blocks.len(), 2);
		assert_eq!(blocks[1].literal, "b\n");
	}

	#[test]
	fn test_missing_separator() {
		assert_eq!(
			parse("cast f32 u8 1.0\n"),
			Err(ParseError::MissingSeparator {
				line: 1
			})
		);
	}

	#[test]
	fn test_empty_block() {
		assert_eq!(
			parse("# nothing\n---\n"),
			Err(ParseError::EmptyBlock {
				line: 2
			})
		);
	}

	#[test]
	fn test_unterminated_quoted_output() {
		assert_eq!(
			parse("a\n---\n> x\nb\n---\nok\n"),
			Err(ParseError::UnterminatedOutput {
				line: 4
			})
		);
	}

	#[test]
	fn test_bare_bang() {
		assert_eq!(
			parse("!\n---\n"),
			Err(ParseError::MissingCommandName {
				line: 1
			})
		);
	}
}
