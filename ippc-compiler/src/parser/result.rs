use std::fmt;

use ippc_util::source::Location;

use crate::ast;
use crate::operand::OperandKind;
use crate::scanner::LANGUAGE;

pub type ParseResult = Result<ast::Program, ParseErr>;
pub type InstructionResult = Result<ast::Instruction, ParseErr>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErr {
    pub kind: ParseErrKind,
}

impl ParseErr {
    pub fn new(kind: ParseErrKind) -> Self {
        Self { kind }
    }

    pub fn missing_header() -> Self {
        Self::new(ParseErrKind::MissingHeader)
    }

    pub fn invalid_header<S: Into<String>>(line: S, loc: Location) -> Self {
        Self::new(ParseErrKind::InvalidHeader(line.into(), loc))
    }

    pub fn unknown_opcode<S: Into<String>>(opcode: S, loc: Location) -> Self {
        Self::new(ParseErrKind::UnknownOpcode(opcode.into(), loc))
    }

    pub fn too_many_operands(
        opcode: &'static str,
        expected: usize,
        got: usize,
        loc: Location,
    ) -> Self {
        Self::new(ParseErrKind::TooManyOperands(opcode, expected, got, loc))
    }

    pub fn missing_operand(
        opcode: &'static str,
        position: usize,
        kind: OperandKind,
        loc: Location,
    ) -> Self {
        Self::new(ParseErrKind::MissingOperand(opcode, position, kind, loc))
    }

    pub fn invalid_operand<S: Into<String>>(
        token: S,
        kind: OperandKind,
        loc: Location,
    ) -> Self {
        Self::new(ParseErrKind::InvalidOperand(token.into(), kind, loc))
    }

    pub fn could_not_read_source<S: Into<String>>(reason: S) -> Self {
        Self::new(ParseErrKind::CouldNotReadSource(reason.into()))
    }

    /// Where the error occurred, if it's tied to a source location.
    pub fn loc(&self) -> Option<Location> {
        use ParseErrKind::*;
        match &self.kind {
            MissingHeader | CouldNotReadSource(_) => None,
            InvalidHeader(_, loc) => Some(*loc),
            UnknownOpcode(_, loc) => Some(*loc),
            TooManyOperands(.., loc) => Some(*loc),
            MissingOperand(.., loc) => Some(*loc),
            InvalidOperand(.., loc) => Some(*loc),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrKind {
    // Header errors
    MissingHeader,
    InvalidHeader(String, Location),
    // Opcode errors
    UnknownOpcode(String, Location),
    // Other syntax errors
    TooManyOperands(&'static str, usize, usize, Location), // opcode, expected, got
    MissingOperand(&'static str, usize, OperandKind, Location), // opcode, 1-based position
    InvalidOperand(String, OperandKind, Location),
    // Input couldn't be read (I/O error or invalid UTF-8)
    CouldNotReadSource(String),
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for ParseErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseErrKind::*;
        let msg = match self {
            MissingHeader => format!("Missing header: expected {LANGUAGE}"),
            InvalidHeader(line, loc) => {
                format!("Incorrect header at {loc}: expected {LANGUAGE}, got '{line}'")
            }
            UnknownOpcode(opcode, loc) => {
                format!("Unknown opcode at {loc}: {opcode}")
            }
            TooManyOperands(opcode, expected, got, loc) => format!(
                "Too many operands at {loc}: {opcode} takes {expected}, got {got}"
            ),
            MissingOperand(opcode, position, kind, loc) => format!(
                "Missing operand at {loc}: {opcode} is missing argument {position} ({kind})"
            ),
            InvalidOperand(token, kind, loc) => {
                format!("Incorrect operand at {loc}: expected {kind}, got '{token}'")
            }
            CouldNotReadSource(reason) => {
                format!("Could not read source: {reason}")
            }
        };
        write!(f, "{msg}")
    }
}
