//! The IPPcode19 instruction set: each opcode with the operand kinds
//! it expects, in order.
use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::operand::OperandKind::{self, *};

static INSTRUCTION_SET: [(&str, &[OperandKind]); 35] = [
    // Frames and function calls
    ("MOVE", &[Var, Symb]),
    ("CREATEFRAME", &[]),
    ("PUSHFRAME", &[]),
    ("POPFRAME", &[]),
    ("DEFVAR", &[Var]),
    ("CALL", &[Label]),
    ("RETURN", &[]),
    // Data stack
    ("PUSHS", &[Symb]),
    ("POPS", &[Var]),
    // Arithmetic, relational, boolean and conversion
    ("ADD", &[Var, Symb, Symb]),
    ("SUB", &[Var, Symb, Symb]),
    ("MUL", &[Var, Symb, Symb]),
    ("IDIV", &[Var, Symb, Symb]),
    ("LT", &[Var, Symb, Symb]),
    ("GT", &[Var, Symb, Symb]),
    ("EQ", &[Var, Symb, Symb]),
    ("AND", &[Var, Symb, Symb]),
    ("OR", &[Var, Symb, Symb]),
    ("NOT", &[Var, Symb]),
    ("INT2CHAR", &[Var, Symb]),
    ("STRI2INT", &[Var, Symb, Symb]),
    // I/O
    ("READ", &[Var, Type]),
    ("WRITE", &[Symb]),
    // Strings
    ("CONCAT", &[Var, Symb, Symb]),
    ("STRLEN", &[Var, Symb]),
    ("GETCHAR", &[Var, Symb, Symb]),
    ("SETCHAR", &[Var, Symb, Symb]),
    // Types
    ("TYPE", &[Var, Symb]),
    // Control flow
    ("LABEL", &[Label]),
    ("JUMP", &[Label]),
    ("JUMPIFEQ", &[Label, Symb, Symb]),
    ("JUMPIFNEQ", &[Label, Symb, Symb]),
    ("EXIT", &[Symb]),
    // Debugging
    ("DPRINT", &[Symb]),
    ("BREAK", &[]),
];

/// Map of opcodes to their operand kinds. Keys are uppercase and
/// iteration follows declaration order.
pub static OPCODES: Lazy<IndexMap<&'static str, &'static [OperandKind]>> =
    Lazy::new(|| INSTRUCTION_SET.iter().cloned().collect());

/// Look up an opcode that has already been canonicalized to uppercase.
/// The returned name is the table's own key.
pub fn lookup(opcode: &str) -> Option<(&'static str, &'static [OperandKind])> {
    OPCODES.get_key_value(opcode).map(|(name, kinds)| (*name, *kinds))
}
