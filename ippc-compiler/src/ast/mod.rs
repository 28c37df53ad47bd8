pub use ast::{Instruction, Operand, Program};

#[allow(clippy::module_inception)]
mod ast;
