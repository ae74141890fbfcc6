use log::debug;

use crate::error::{Error, Location};
use crate::grammar;
use crate::lexer::Line;
use crate::operand::classify;
use crate::program::{Instruction, Program};
use crate::stats::StatCounters;

/// Everything one translation run accumulates.
#[derive(Debug, Default)]
pub struct Context<'input> {
    pub program: Program<'input>,
    pub stats: StatCounters,
}

impl<'input> Context<'input> {
    pub fn new() -> Self {
        Default::default()
    }

    fn next_order(&self) -> usize {
        self.program.instructions.len() + 1
    }
}

/// Validates one non-blank line as an instruction and appends it to the program.
///
/// Nothing is recorded unless the whole instruction is valid.
pub fn parse_instruction<'input>(line: &Line<'input>, context: &mut Context<'input>) -> Result<(), Error> {
    let (opcode, operand_words) = match line.words.split_first() {
        Some(split) => split,
        None => return Ok(()),
    };

    let entry = grammar::lookup(opcode.src)
        .ok_or_else(|| Error::UnknownOpcode {
            location: Location::new(line.number, opcode.span.clone()),
            opcode: opcode.src.to_string(),
        })?;

    if operand_words.len() != entry.arity() {
        return Err(Error::Arity {
            location: Location::new(line.number, line.content_span()),
            opcode: opcode.src.to_uppercase(),
            expected: entry.arity(),
            actual: operand_words.len(),
        });
    }

    let operands = operand_words.iter()
        .zip(entry.operands)
        .map(|(word, kind)| classify(word, *kind, line.number))
        .collect::<Result<Vec<_>, _>>()?;

    let instruction = Instruction {
        order: context.next_order(),
        opcode: entry.opcode.to_uppercase(),
        operands,
    };
    debug!("line {}: accepted {} as instruction {}", line.number, instruction.opcode, instruction.order);
    context.stats.record_instruction(entry.effect);
    context.program.instructions.push(instruction);
    Ok(())
}
