pub use header::{is_header, LANGUAGE};
pub use line::{normalize, strip_comment, Token};

mod header;
mod line;

/// Whitespace as the line format understands it (ASCII only).
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
