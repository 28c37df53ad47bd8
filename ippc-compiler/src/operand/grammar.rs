//! Operand grammars. Each predicate checks a whole token against one
//! form an operand can take. Character classes are ASCII only, so `\w`
//! is spelled out as `A-Za-z0-9_`.
use once_cell::sync::Lazy;
use regex::Regex;

use super::kind::{OperandKind, OperandType};

/// A grammar predicate paired with the type a matching token resolves
/// to.
pub type Grammar = (fn(&str) -> bool, OperandType);

static VAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:LF|GF|TF)@[A-Za-z\-_$&%*!?][A-Za-z0-9\-_$&%*!?]*$").unwrap()
});

static INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^int@[+\-]?[0-9]+$").unwrap());

static BOOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^bool@(?:true|false)$").unwrap());

// Escapes are a backslash followed by exactly three digits. Bare
// backslashes, # and whitespace are not allowed, nor are chars XML 1.0
// can't represent (C0 controls, U+FFFE, U+FFFF).
static STRING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^string@(?:[^\\#\x00-\x20\x{FFFE}\x{FFFF}]|\\[0-9]{3})*$").unwrap()
});

static LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-_$&%*!?]+$").unwrap());

/// Frame prefix, @, then an identifier that doesn't start with a digit.
pub fn is_var(token: &str) -> bool {
    VAR_RE.is_match(token)
}

pub fn is_int(token: &str) -> bool {
    INT_RE.is_match(token)
}

pub fn is_bool(token: &str) -> bool {
    BOOL_RE.is_match(token)
}

pub fn is_string(token: &str) -> bool {
    STRING_RE.is_match(token)
}

pub fn is_nil(token: &str) -> bool {
    token == "nil@nil"
}

pub fn is_label(token: &str) -> bool {
    LABEL_RE.is_match(token)
}

pub fn is_type(token: &str) -> bool {
    matches!(token, "int" | "bool" | "string")
}

static VAR_GRAMMARS: [Grammar; 1] = [(is_var, OperandType::Var)];

// Order matters: first match wins.
static SYMB_GRAMMARS: [Grammar; 5] = [
    (is_var, OperandType::Var),
    (is_int, OperandType::Int),
    (is_bool, OperandType::Bool),
    (is_string, OperandType::String),
    (is_nil, OperandType::Nil),
];

static LABEL_GRAMMARS: [Grammar; 1] = [(is_label, OperandType::Label)];

static TYPE_GRAMMARS: [Grammar; 1] = [(is_type, OperandType::Type)];

/// Get the grammars tried, in order, for an operand position of the
/// specified kind.
pub fn grammars_for(kind: OperandKind) -> &'static [Grammar] {
    match kind {
        OperandKind::Var => &VAR_GRAMMARS,
        OperandKind::Symb => &SYMB_GRAMMARS,
        OperandKind::Label => &LABEL_GRAMMARS,
        OperandKind::Type => &TYPE_GRAMMARS,
    }
}

/// Resolve a token against the grammars for `kind`. Returns `None` when
/// no grammar matches.
pub fn resolve(kind: OperandKind, token: &str) -> Option<OperandType> {
    grammars_for(kind)
        .iter()
        .find(|(matches, _)| matches(token))
        .map(|(_, operand_type)| *operand_type)
}
