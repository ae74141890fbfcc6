//! A filter which checks IPPcode19 source for lexical and syntactic
//! correctness and translates it into an XML representation.
//!
//! ```
//! # use ippcode_translator::{translate, emit};
//! let translation = translate(".IPPcode19\nMOVE GF@x int@5\n").unwrap();
//! assert_eq!(translation.stats.loc, 1);
//! assert!(emit(&translation.program).unwrap().contains("<arg2 type=\"int\">5</arg2>"));
//! ```

pub mod error;
pub mod grammar;
pub mod lexer;
pub mod header;
pub mod operand;
pub mod parser;
pub mod program;
pub mod stats;
pub mod emit;

use log::debug;

pub use crate::emit::emit;
pub use crate::error::{Error, ErrorKind};
pub use crate::program::Program;
pub use crate::stats::{Stat, StatCounters, StatsRequest};

use crate::header::check_header;
use crate::lexer::Lexer;
use crate::parser::{parse_instruction, Context};

/// The result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation<'input> {
    pub program: Program<'input>,
    pub stats: StatCounters,
}

/// Checks and translates a whole program, stopping at the first error.
pub fn translate(source: &str) -> Result<Translation<'_>, Error> {
    if source.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut context = Context::new();
    let mut header_seen = false;
    for line in Lexer::new(source) {
        if line.comment {
            context.stats.record_comment();
        }
        if line.is_blank() {
            continue;
        }
        if header_seen {
            parse_instruction(&line, &mut context)?;
        } else {
            check_header(&line)?;
            header_seen = true;
        }
    }

    if !header_seen {
        return Err(Error::MissingHeader);
    }

    debug!("translated {} instruction(s)", context.program.instructions.len());
    let Context { program, stats } = context;
    Ok(Translation { program, stats })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::program::{Frame, Operand, Type};
    use pretty_assertions::assert_eq;

    fn kind(source: &str) -> ErrorKind {
        translate(source).unwrap_err().kind()
    }

    #[test]
    fn move_constant() {
        let translation = translate(".IPPcode19\nMOVE GF@x int@5").unwrap();
        let instructions = &translation.program.instructions;
        assert_eq!(1, instructions.len());
        assert_eq!(1, instructions[0].order);
        assert_eq!("MOVE", instructions[0].opcode);
        assert_eq!(
            vec![
                Operand::Variable { frame: Frame::Global, name: "x" },
                Operand::Constant { ty: Type::Int, literal: "5" },
            ],
            instructions[0].operands);
        assert_eq!(1, translation.stats.loc);
    }

    #[test]
    fn label_and_jump() {
        let stats = translate(".IPPcode19\nLABEL loop\nJUMP loop").unwrap().stats;
        assert_eq!(StatCounters { loc: 2, comments: 0, labels: 1, jumps: 1 }, stats);
    }

    #[test]
    fn missing_header() {
        assert_eq!(ErrorKind::Header, kind("ADD GF@x GF@y GF@z"));
        assert_eq!(ErrorKind::Header, kind("\n# just a comment\n   \n"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(Error::EmptyInput, translate("").unwrap_err());
        assert_eq!(21, kind("").exit_code());
    }

    #[test]
    fn unknown_opcode() {
        assert_eq!(ErrorKind::UnknownOpcode, kind(".IPPcode19\nFOO GF@x"));
    }

    #[test]
    fn wrong_arity() {
        assert_eq!(ErrorKind::Arity, kind(".IPPcode19\nADD GF@x GF@y"));
    }

    #[test]
    fn string_starting_with_digit() {
        assert_eq!(ErrorKind::OperandFormat, kind(".IPPcode19\nMOVE GF@x string@5abc"));
    }

    #[test]
    fn second_header_is_an_unknown_opcode() {
        assert_eq!(ErrorKind::UnknownOpcode, kind(".IPPcode19\n.IPPcode19"));
    }

    #[test]
    fn comments_are_counted_everywhere() {
        let source = "# leading\n.IPPcode19 # header\n\nWRITE string@hi # out\n#\n";
        let translation = translate(source).unwrap();
        assert_eq!(4, translation.stats.comments);
        assert_eq!(1, translation.stats.loc);
    }

    #[test]
    fn header_only_is_an_empty_program() {
        let translation = translate(".IPPcode19\n# nothing else\n").unwrap();
        assert!(translation.program.is_empty());
        assert_eq!(None, emit(&translation.program));
    }

    #[test]
    fn first_error_wins() {
        let source = ".IPPcode19\nMOVE GF@x int@x\nFOO\n";
        assert_eq!(ErrorKind::OperandFormat, kind(source));
    }

    #[test]
    fn no_break_space_is_not_a_separator() {
        assert_eq!(ErrorKind::UnknownOpcode, kind(".IPPcode19\nWRITE\u{a0}string@a"));
        assert_eq!(ErrorKind::LabelFormat, kind(".IPPcode19\nLABEL a\u{a0}b"));
    }
}
