use core::fmt;
use std::fmt::Formatter;

use ippc_compiler::ParseErrKind;

pub const EXIT_OK: u8 = 0;
pub const EXIT_INPUT: u8 = 11;
pub const EXIT_OUTPUT: u8 = 12;
pub const EXIT_HEADER: u8 = 21;
pub const EXIT_OPCODE: u8 = 22;
pub const EXIT_SYNTAX: u8 = 23;

/// Result type used by top level program driver. On success, this is
/// the exit code (always 0).
pub type DriverResult = Result<u8, DriverErr>;

#[derive(Debug)]
pub struct DriverErr {
    pub kind: DriverErrKind,
}

impl DriverErr {
    pub fn new(kind: DriverErrKind) -> Self {
        Self { kind }
    }

    /// Return the exit code reserved for this kind of error.
    pub fn exit_code(&self) -> u8 {
        use ParseErrKind::*;
        match &self.kind {
            DriverErrKind::ParseErr(kind) => match kind {
                MissingHeader | InvalidHeader(..) => EXIT_HEADER,
                UnknownOpcode(..) => EXIT_OPCODE,
                TooManyOperands(..) | MissingOperand(..) | InvalidOperand(..) => EXIT_SYNTAX,
                CouldNotReadSource(_) => EXIT_INPUT,
            },
            DriverErrKind::CouldNotWriteOutput(_) => EXIT_OUTPUT,
        }
    }
}

#[derive(Debug)]
pub enum DriverErrKind {
    ParseErr(ParseErrKind),
    CouldNotWriteOutput(String),
}

impl fmt::Display for DriverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for DriverErrKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use DriverErrKind::*;
        let msg = match self {
            ParseErr(kind) => format!("ERROR: {kind}"),
            CouldNotWriteOutput(reason) => {
                format!("ERROR: Could not write output: {reason}")
            }
        };
        write!(f, "{msg}")
    }
}
