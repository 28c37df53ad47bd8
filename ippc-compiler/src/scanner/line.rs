use std::fmt;

use ippc_util::source::Location;

use super::is_space;

/// A whitespace-delimited word from a source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub loc: Location,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, loc: Location) -> Self {
        Self { text: text.into(), loc }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Location just past the end of the token.
    pub fn end(&self) -> Location {
        Location::new(self.loc.line, self.loc.col + self.text.chars().count())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.text, self.loc)
    }
}

/// Remove everything from the first # on.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Split a line into tokens after removing its comment. Blank and
/// comment-only lines produce no tokens. Columns are 1-based and count
/// chars, not bytes.
pub fn normalize(line: &str, line_no: usize) -> Vec<Token> {
    let code = strip_comment(line);
    let mut tokens = vec![];
    // Byte offset and column of the token being collected
    let mut start: Option<(usize, usize)> = None;

    for (col, (pos, c)) in code.char_indices().enumerate() {
        if is_space(c) {
            if let Some((begin, begin_col)) = start.take() {
                let loc = Location::new(line_no, begin_col + 1);
                tokens.push(Token::new(&code[begin..pos], loc));
            }
        } else if start.is_none() {
            start = Some((pos, col));
        }
    }

    if let Some((begin, begin_col)) = start {
        let loc = Location::new(line_no, begin_col + 1);
        tokens.push(Token::new(&code[begin..], loc));
    }

    tokens
}
