use std::io::{self, Write};

use ippc_compiler::{EmitFlags, ParseErrKind};
use ippc_util::source::source_from_text;

use crate::driver::Driver;
use crate::result::*;

/// Run the driver on `source` and return the exit code along with
/// whatever was written to the output.
fn execute(source: &str) -> (u8, String) {
    let driver = Driver::default();
    let mut out: Vec<u8> = vec![];
    let code = match driver.execute_text(source, &mut out) {
        Ok(code) => code,
        Err(err) => err.exit_code(),
    };
    (code, String::from_utf8(out).unwrap())
}

fn execute_err(source: &str) -> DriverErr {
    let driver = Driver::default();
    let mut out: Vec<u8> = vec![];
    let result = driver.execute_text(source, &mut out);
    assert!(out.is_empty(), "Nothing should be written on error");
    result.unwrap_err()
}

/// A writer that always fails.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_push_int() {
    let (code, xml) = execute("IPPcode19\nPUSHS int@42\n");
    assert_eq!(code, EXIT_OK);
    assert_eq!(
        xml,
        concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<program language=\"IPPcode19\">",
            "<instruction order=\"1\" opcode=\"PUSHS\"><arg1 type=\"int\">42</arg1></instruction>",
            "</program>\n",
        )
    );
}

#[test]
fn test_defvar() {
    let (code, xml) = execute("IPPcode19\nDEFVAR GF@x\n");
    assert_eq!(code, EXIT_OK);
    assert!(xml.contains("<arg1 type=\"var\">GF@x</arg1>"));
}

#[test]
fn test_add() {
    let (code, xml) = execute("IPPcode19\nADD GF@x GF@y int@5\n");
    assert_eq!(code, EXIT_OK);
    assert!(xml.contains(concat!(
        "<instruction order=\"1\" opcode=\"ADD\">",
        "<arg1 type=\"var\">GF@x</arg1>",
        "<arg2 type=\"var\">GF@y</arg2>",
        "<arg3 type=\"int\">5</arg3>",
        "</instruction>",
    )));
}

#[test]
fn test_unknown_opcode() {
    let err = execute_err("IPPcode19\nFOO\n");
    assert_eq!(err.exit_code(), EXIT_OPCODE);
    assert!(matches!(err.kind, DriverErrKind::ParseErr(ParseErrKind::UnknownOpcode(..))));
}

#[test]
fn test_missing_operand() {
    let err = execute_err("IPPcode19\nPUSHS\n");
    assert_eq!(err.exit_code(), EXIT_SYNTAX);
}

#[test]
fn test_too_many_operands() {
    let err = execute_err("IPPcode19\nCREATEFRAME extra\n");
    assert_eq!(err.exit_code(), EXIT_SYNTAX);
}

#[test]
fn test_invalid_operand() {
    let err = execute_err("IPPcode19\nPUSHS bool@maybe\n");
    assert_eq!(err.exit_code(), EXIT_SYNTAX);
    assert_eq!(
        err.to_string(),
        "ERROR: Incorrect operand at 2:7: expected symb, got 'bool@maybe'"
    );
}

#[test]
fn test_header_errors() {
    assert_eq!(execute_err("").exit_code(), EXIT_HEADER);
    assert_eq!(execute_err("IPPcode20\nBREAK\n").exit_code(), EXIT_HEADER);
    assert_eq!(execute_err("BREAK\n").exit_code(), EXIT_HEADER);
}

#[test]
fn test_valid_header_is_never_a_header_error() {
    for header in ["IPPcode19", "ippCODE19", "  IPPcode19  # comment"] {
        let source = format!("{header}\nFOO\n");
        assert_ne!(execute_err(&source).exit_code(), EXIT_HEADER);
    }
}

#[test]
fn test_late_error_discards_output() {
    let source = "IPPcode19\nDEFVAR GF@a\nMOVE GF@a int@1\nWRITE GF@a\nJUMP\n";
    let err = execute_err(source);
    assert_eq!(err.exit_code(), EXIT_SYNTAX);
}

#[test]
fn test_invalid_utf8_input() {
    let driver = Driver::default();
    let source = ippc_util::source::source_from_bytes(b"IPPcode19\nWRITE string@\xc3\x28\n");
    let err = driver.execute(source, &mut Vec::<u8>::new()).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_INPUT);
}

#[test]
fn test_output_error() {
    let driver = Driver::default();
    let source = source_from_text("IPPcode19\nBREAK\n");
    let err = driver.execute(source, &mut BrokenPipe).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_OUTPUT);
    assert!(matches!(err.kind, DriverErrKind::CouldNotWriteOutput(_)));
}

#[test]
fn test_flags() {
    let driver = Driver::new(EmitFlags::PRETTY, false);
    let xml = driver.translate(source_from_text("IPPcode19\nBREAK\n")).unwrap();
    assert_eq!(
        xml,
        "<program language=\"IPPcode19\">\n    <instruction order=\"1\" opcode=\"BREAK\"/>\n</program>\n"
    );
}

#[test]
fn test_debug_mode_still_translates() {
    let driver = Driver::new(EmitFlags::DECLARATION, true);
    let xml = driver.translate(source_from_text("IPPcode19\nBREAK\n")).unwrap();
    assert!(xml.ends_with("<instruction order=\"1\" opcode=\"BREAK\"/></program>\n"));
    let result = driver.translate(source_from_text("IPPcode19\nBREAK now\n"));
    assert_eq!(result.unwrap_err().exit_code(), EXIT_SYNTAX);
}

#[test]
fn test_orders_are_sequential() {
    let source = "IPPcode19\n\nLABEL a\n# x\nJUMP a\n\n\nBREAK\n";
    let (code, xml) = execute(source);
    assert_eq!(code, EXIT_OK);
    for (order, opcode) in [(1, "LABEL"), (2, "JUMP"), (3, "BREAK")] {
        assert!(xml.contains(&format!("order=\"{order}\" opcode=\"{opcode}\"")));
    }
    assert!(!xml.contains("order=\"4\""));
}

#[test]
fn test_error_messages() {
    let cases = [
        ("", "ERROR: Missing header: expected IPPcode19"),
        (
            "IPPcode20\nBREAK\n",
            "ERROR: Incorrect header at 1:1: expected IPPcode19, got 'IPPcode20'",
        ),
        ("IPPcode19\nBREAK\nfoo\n", "ERROR: Unknown opcode at 3:1: FOO"),
        (
            "IPPcode19\nCREATEFRAME extra\n",
            "ERROR: Too many operands at 2:13: CREATEFRAME takes 0, got 1",
        ),
        (
            "IPPcode19\nPUSHS\n",
            "ERROR: Missing operand at 2:6: PUSHS is missing argument 1 (symb)",
        ),
        (
            "IPPcode19\nPUSHS bool@maybe\n",
            "ERROR: Incorrect operand at 2:7: expected symb, got 'bool@maybe'",
        ),
    ];
    for (source, expected) in cases {
        assert_eq!(execute_err(source).to_string(), expected, "source: {source:?}");
    }
}

#[test]
fn test_io_error_messages() {
    let driver = Driver::default();
    let source = ippc_util::source::source_from_bytes(b"IPPcode19\n\xff\n");
    let err = driver.execute(source, &mut Vec::<u8>::new()).unwrap_err();
    assert!(err.to_string().starts_with("ERROR: Could not read source: "));

    let err = driver.execute(source_from_text("IPPcode19\n"), &mut BrokenPipe).unwrap_err();
    assert_eq!(err.to_string(), "ERROR: Could not write output: broken pipe");
}

#[test]
fn test_control_chars_in_string_are_rejected() {
    let err = execute_err("IPPcode19\nWRITE string@a\u{1}b\u{0}c\n");
    assert_eq!(err.exit_code(), EXIT_SYNTAX);
    assert!(matches!(err.kind, DriverErrKind::ParseErr(ParseErrKind::InvalidOperand(..))));
}
