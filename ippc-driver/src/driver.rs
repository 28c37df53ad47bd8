//! Front end for translating IPPcode19 source to XML.
use std::io::{self, BufRead, Write};

use ippc_compiler::{to_xml, EmitFlags, ParseErr, Parser, Program};
use ippc_util::source::{source_from_stdin, source_from_text, Source};

use super::result::{DriverErr, DriverErrKind, DriverResult, EXIT_OK};

pub struct Driver {
    flags: EmitFlags,
    debug: bool,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(EmitFlags::DECLARATION, false)
    }
}

impl Driver {
    pub fn new(flags: EmitFlags, debug: bool) -> Self {
        Self { flags, debug }
    }

    // Execute ---------------------------------------------------------

    /// Translate stdin and write the XML to stdout.
    pub fn execute_stdin(&self) -> DriverResult {
        let mut stdout = io::stdout().lock();
        self.execute(source_from_stdin(), &mut stdout)
    }

    /// Translate text and write the XML to `out`.
    pub fn execute_text<W: Write>(&self, text: &str, out: &mut W) -> DriverResult {
        self.execute(source_from_text(text), out)
    }

    /// Translate source and write the XML to `out`. Nothing is written
    /// unless the whole source is valid.
    pub fn execute<T: BufRead, W: Write>(&self, source: Source<T>, out: &mut W) -> DriverResult {
        let xml = self.translate(source)?;
        out.write_all(xml.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|err| {
                DriverErr::new(DriverErrKind::CouldNotWriteOutput(err.to_string()))
            })?;
        Ok(EXIT_OK)
    }

    /// Parse source into a program and render it as XML.
    pub fn translate<T: BufRead>(&self, source: Source<T>) -> Result<String, DriverErr> {
        let mut parser = Parser::new(source);
        let program = parser.parse().map_err(|err| {
            if self.debug {
                self.handle_parse_err(&err, parser.current_line());
            }
            DriverErr::new(DriverErrKind::ParseErr(err.kind))
        })?;
        if self.debug {
            self.display_program(&program);
        }
        log::debug!("Writing XML for {} instructions", program.len());
        Ok(to_xml(&program, self.flags))
    }

    // Error Handling --------------------------------------------------

    /// Show the offending line with a marker under the error location.
    fn handle_parse_err(&self, err: &ParseErr, line: Option<&str>) {
        if let (Some(loc), Some(line)) = (err.loc(), line) {
            let line = line.trim_end();
            let start_pos = if loc.col == 0 { 0 } else { loc.col - 1 };
            let marker = format!("{:>start_pos$}^", "");
            eprintln!("\n  Error on line {}:\n\n    |{line}\n    |{marker}\n", loc.line);
        }
    }

    // Miscellaneous ---------------------------------------------------

    fn display_program(&self, program: &Program) {
        eprintln!("{:=<79}", "PROGRAM ");
        for instruction in program {
            eprintln!("{instruction}");
        }
    }
}
