use super::{is_space, strip_comment};

/// Dialect marker. The first line of a program must be this (ignoring
/// case, surrounding whitespace and a trailing comment). It's also the
/// `language` attribute of the XML root.
pub const LANGUAGE: &str = "IPPcode19";

/// Check whether a line is a valid program header.
pub fn is_header(line: &str) -> bool {
    strip_comment(line).trim_matches(is_space).eq_ignore_ascii_case(LANGUAGE)
}
