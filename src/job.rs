//! Helpers to build ZeroVM job descriptions.
//!
//! The job description itself is opaque to this crate; any `serde::Serialize` value is accepted by `Client::execute`.

/// Escape a command line argument for a job description.
///
/// Every backslash, double quote, space and newline becomes `\xHH` (lowercase hex code point),
/// so escaped arguments can be joined with spaces. Not idempotent: escaping twice escapes the backslashes again.
pub fn escape_arg(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'\\' | '"' | ' ' | '\n' => escaped.push_str(&format!("\\x{:02x}", c as u32)),
			_ => escaped.push(c),
		}
	}
	escaped
}

/// Escape each argument with [`escape_arg`] and join them with single spaces.
pub fn join_args<S: AsRef<str>>(args: &[S]) -> String {
	args.iter().map(|arg| escape_arg(arg.as_ref())).collect::<Vec<_>>().join(" ")
}

// region:    --- Tests


// endregion: --- Tests
