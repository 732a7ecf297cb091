use std::{fs, path::Path};

use crate::{Error, Key};

/// Read whitespace separated integers from a file.
/// Reading stops at the first token that is not an integer (everything after it is ignored),
/// so a file with no leading integers gives an empty vector rather than an error.
/// Fails if `path` is not an existing regular file or cannot be read.
pub fn read_values(path: impl AsRef<Path>) -> Result<Vec<Key>, Error> {
	let path = path.as_ref();
	if !path.is_file() {
		return Err(Error::NotAFile(path.to_path_buf()))
	}
	let text = fs::read_to_string(path).map_err(|e|Error::IoWithFilename(e, path.to_path_buf()))?;
	let values = parse_values(&text);
	debug!("read {} values from {:?}", values.len(), path);
	Ok(values)
}

/// Parse the leading run of integers out of `text`
pub fn parse_values(text: &str) -> Vec<Key> {
	let mut res = Vec::new();
	for tok in text.split_whitespace() {
		match tok.parse() {
			Ok(v) => res.push(v),
			Err(_) => {
				debug!("stopped reading values at {:?}", tok);
				break
			}
		}
	}
	res
}

/// Parse a single integer, ignoring surrounding whitespace
pub fn parse_value(text: &str) -> Result<Key, Error> {
	let text = text.trim();
	text.parse().map_err(|_|Error::InvalidNumber(text.to_owned()))
}
