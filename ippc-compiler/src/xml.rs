//! XML output. The default (compact) layout matches the reference
//! output byte for byte:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <program language="IPPcode19"><instruction order="1" opcode="PUSHS"><arg1 type="int">42</arg1></instruction></program>
//! ```
//!
//! Elements without content are written in self-closing form.
use std::borrow::Cow;

use bitflags::bitflags;

use crate::ast::{Instruction, Operand, Program};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

const INDENT: &str = "    ";

bitflags! {
    #[derive(Default)]
    pub struct EmitFlags: u32 {
        const DECLARATION = 0b00000001; // write the <?xml ...?> line
        const PRETTY      = 0b00000010; // one element per line, indented
    }
}

/// Render a program as an XML document. The document always ends with
/// a newline.
pub fn to_xml(program: &Program, flags: EmitFlags) -> String {
    let mut writer = XmlWriter::new(flags.contains(EmitFlags::PRETTY));
    if flags.contains(EmitFlags::DECLARATION) {
        writer.out.push_str(XML_DECLARATION);
        writer.out.push('\n');
    }
    writer.write_program(program);
    writer.out.push('\n');
    writer.out
}

/// Escape text content.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, false)
}

/// Escape an attribute value (which is always double quoted).
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

fn escape(string: &str, is_attr: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (is_attr && c == '"');
    if !string.contains(needs_escape) {
        return Cow::Borrowed(string);
    }
    let mut escaped = String::with_capacity(string.len() + 8);
    for c in string.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if is_attr => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

struct XmlWriter {
    out: String,
    pretty: bool,
}

impl XmlWriter {
    fn new(pretty: bool) -> Self {
        Self { out: String::with_capacity(1024), pretty }
    }

    fn write_program(&mut self, program: &Program) {
        let attrs = [("language", program.language.to_owned())];
        if program.is_empty() {
            self.empty_element(0, "program", &attrs);
        } else {
            self.start_element(0, "program", &attrs);
            for instruction in program {
                self.write_instruction(instruction);
            }
            self.end_element(0, "program", true);
        }
    }

    fn write_instruction(&mut self, instruction: &Instruction) {
        let attrs = [
            ("order", instruction.order.to_string()),
            ("opcode", instruction.opcode.to_owned()),
        ];
        if instruction.args.is_empty() {
            self.empty_element(1, "instruction", &attrs);
        } else {
            self.start_element(1, "instruction", &attrs);
            for (index, arg) in instruction.args.iter().enumerate() {
                self.write_operand(index + 1, arg);
            }
            self.end_element(1, "instruction", true);
        }
    }

    fn write_operand(&mut self, position: usize, operand: &Operand) {
        let name = format!("arg{position}");
        let attrs = [("type", operand.kind.as_str().to_owned())];
        if operand.value.is_empty() {
            self.empty_element(2, &name, &attrs);
        } else {
            self.start_element(2, &name, &attrs);
            self.out.push_str(&escape_text(&operand.value));
            self.end_element(2, &name, false);
        }
    }

    fn start_element(&mut self, depth: usize, name: &str, attrs: &[(&str, String)]) {
        self.indent(depth);
        self.open_tag(name, attrs);
        self.out.push('>');
    }

    fn empty_element(&mut self, depth: usize, name: &str, attrs: &[(&str, String)]) {
        self.indent(depth);
        self.open_tag(name, attrs);
        self.out.push_str("/>");
    }

    /// `has_children` is false for elements that contain only text;
    /// their end tag stays on the same line as the text.
    fn end_element(&mut self, depth: usize, name: &str, has_children: bool) {
        if has_children {
            self.indent(depth);
        }
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    fn open_tag(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.out.push('<');
        self.out.push_str(name);
        for (attr_name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(attr_name);
            self.out.push_str("=\"");
            self.out.push_str(&escape_attr(value));
            self.out.push('"');
        }
    }

    /// In pretty mode, start a new line unless already at the start of
    /// one.
    fn indent(&mut self, depth: usize) {
        if self.pretty && !(self.out.is_empty() || self.out.ends_with('\n')) {
            self.out.push('\n');
            self.out.push_str(&INDENT.repeat(depth));
        }
    }
}
