use std::fmt;
use std::slice::Iter;

use crate::operand::OperandType;
use crate::scanner::LANGUAGE;

/// Program - a list of instructions in source order.
#[derive(Debug, PartialEq, Eq)]
pub struct Program {
    pub language: &'static str,
    instructions: Vec<Instruction>,
}

impl Default for Program {
    fn default() -> Self {
        Self { language: LANGUAGE, instructions: vec![] }
    }
}

impl Program {
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A validated instruction. `order` is 1-based and follows source
/// order; blank lines don't use up numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub order: usize,
    pub opcode: &'static str,
    pub args: Vec<Operand>,
}

impl Instruction {
    pub fn new(order: usize, opcode: &'static str, args: Vec<Operand>) -> Self {
        Self { order, opcode, args }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>4} {}", self.order, self.opcode)?;
        for arg in self.args.iter() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// An operand with its resolved type. For literals, `value` has the
/// type prefix (e.g. `int@`) removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operand {
    pub kind: OperandType,
    pub value: String,
}

impl Operand {
    pub fn new<S: Into<String>>(kind: OperandType, value: S) -> Self {
        Self { kind, value: value.into() }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}
