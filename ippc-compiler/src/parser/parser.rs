use std::io::{BufRead, Cursor};

use ippc_util::source::{source_from_text, Source};

use crate::ast::{Instruction, Program};
use crate::opcodes::lookup;
use crate::operand::{self, OperandErr};
use crate::scanner::{is_header, normalize, Token};

use super::result::{InstructionResult, ParseErr, ParseResult};

/// Create a parser for the specified text, parse the text, and return
/// the resulting program or error.
pub fn parse_text(text: &str) -> ParseResult {
    let mut parser: Parser<Cursor<&str>> = Parser::new(source_from_text(text));
    parser.parse()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserState {
    AwaitHeader,
    Ok,
    Done,
    Failed,
}

pub struct Parser<T: BufRead> {
    source: Source<T>,
    state: ParserState,
    /// Order of the last instruction added to the program.
    order: usize,
}

impl<T: BufRead> Parser<T> {
    pub fn new(source: Source<T>) -> Self {
        Self { source, state: ParserState::AwaitHeader, order: 0 }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// The line most recently read from the source. After a failed
    /// parse, this is the line the error is on.
    pub fn current_line(&self) -> Option<&str> {
        self.source.get_current_line()
    }

    /// Check the header, then build an instruction for each non-blank
    /// line. The first error aborts the parse.
    pub fn parse(&mut self) -> ParseResult {
        let result = self.parse_program();
        self.state = match result {
            Ok(_) => ParserState::Done,
            Err(_) => ParserState::Failed,
        };
        result
    }

    fn parse_program(&mut self) -> ParseResult {
        log::trace!("BEGIN: parse");
        self.check_header()?;
        self.state = ParserState::Ok;

        let mut program = Program::default();

        while let Some(line) = self.next_line()? {
            let tokens = normalize(line.as_str(), self.source.line_no);
            if let Some((opcode, operands)) = tokens.split_first() {
                let instruction = build_instruction(opcode, operands, self.order + 1)?;
                log::trace!("INSTRUCTION: {instruction}");
                self.order = instruction.order;
                program.push(instruction);
            }
        }

        log::trace!("END: parse ({} instructions)", program.len());
        Ok(program)
    }

    fn check_header(&mut self) -> Result<(), ParseErr> {
        match self.next_line()? {
            Some(line) if is_header(line.as_str()) => {
                log::debug!("Header OK: {}", line.trim());
                Ok(())
            }
            Some(line) => Err(ParseErr::invalid_header(line.trim(), self.source.loc())),
            None => Err(ParseErr::missing_header()),
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, ParseErr> {
        self.source
            .next_line()
            .map(|line| line.map(str::to_owned))
            .map_err(|err| ParseErr::could_not_read_source(err.to_string()))
    }
}

/// Build the instruction for a line's tokens and give it the specified
/// order.
///
/// Extra operands are rejected before any operand is checked. Missing
/// operands are caught when their position is reached, so an earlier
/// invalid operand is reported first.
pub fn build_instruction(
    opcode: &Token,
    operands: &[Token],
    order: usize,
) -> InstructionResult {
    let name = opcode.as_str().to_ascii_uppercase();
    let (name, kinds) =
        lookup(name.as_str()).ok_or_else(|| ParseErr::unknown_opcode(name.as_str(), opcode.loc))?;

    if operands.len() > kinds.len() {
        let loc = operands[kinds.len()].loc;
        return Err(ParseErr::too_many_operands(name, kinds.len(), operands.len(), loc));
    }

    let end = operands.last().unwrap_or(opcode).end();
    let mut args = Vec::with_capacity(kinds.len());

    for (index, kind) in kinds.iter().enumerate() {
        let token = operands.get(index);
        let arg = operand::validate(*kind, token.map(Token::as_str)).map_err(|err| match err {
            OperandErr::Missing(kind) => ParseErr::missing_operand(name, index + 1, kind, end),
            OperandErr::Invalid(text, kind) => {
                ParseErr::invalid_operand(text, kind, token.map_or(end, |t| t.loc))
            }
        })?;
        args.push(arg);
    }

    Ok(Instruction::new(order, name, args))
}
