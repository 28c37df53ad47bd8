pub use grammar::resolve;
pub use kind::{OperandKind, OperandType};

use crate::ast::Operand;

pub mod grammar;
mod kind;

/// Literal prefixes removed from the stored value. Variables carry
/// their frame prefix, which is kept.
const LITERAL_PREFIXES: [&str; 4] = ["int@", "bool@", "string@", "nil@"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperandErr {
    Missing(OperandKind),
    Invalid(String, OperandKind),
}

/// Validate a token against the kind expected at its position. The
/// token is `None` when the instruction is too short.
pub fn validate(kind: OperandKind, token: Option<&str>) -> Result<Operand, OperandErr> {
    let token = token.ok_or(OperandErr::Missing(kind))?;
    let operand_type =
        resolve(kind, token).ok_or_else(|| OperandErr::Invalid(token.to_owned(), kind))?;
    Ok(Operand::new(operand_type, strip_literal_prefix(token)))
}

/// Remove the `int@`, `bool@`, `string@` or `nil@` prefix, if present.
pub fn strip_literal_prefix(token: &str) -> &str {
    LITERAL_PREFIXES
        .iter()
        .find_map(|prefix| token.strip_prefix(prefix))
        .unwrap_or(token)
}
