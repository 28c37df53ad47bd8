pub use ast::{Instruction, Operand, Program};
pub use opcodes::{lookup, OPCODES};
pub use operand::{OperandKind, OperandType};
pub use parser::{ParseErr, ParseErrKind, Parser};
pub use scanner::{Token, LANGUAGE};
pub use xml::{to_xml, EmitFlags};

pub mod ast;
pub mod opcodes;
pub mod operand;
pub mod parser;
pub mod scanner;
pub mod xml;
