pub use parser::{build_instruction, parse_text, Parser, ParserState};
pub use result::{InstructionResult, ParseErr, ParseErrKind, ParseResult};

#[allow(clippy::module_inception)]
mod parser;
mod result;
