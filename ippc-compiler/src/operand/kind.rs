use std::fmt;

/// What an operand position accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    Var,   // variable reference, e.g. GF@x
    Symb,  // variable reference or literal
    Label, // jump target
    Type,  // int, bool or string
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = match self {
            Self::Var => "var",
            Self::Symb => "symb",
            Self::Label => "label",
            Self::Type => "type",
        };
        write!(f, "{string}")
    }
}

/// What an operand turned out to be after matching it against the
/// grammars for its position. This is the `type` attribute in the XML
/// output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandType {
    Var,
    Int,
    Bool,
    String,
    Nil,
    Label,
    Type,
}

impl OperandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Nil => "nil",
            Self::Label => "label",
            Self::Type => "type",
        }
    }
}

impl fmt::Display for OperandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
