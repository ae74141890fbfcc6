use std::borrow::Cow;
use std::fmt::{Display, Formatter, Result};

use crate::header::LANGUAGE;
use crate::program::{Instruction, Program};

const INDENT: &str = "    ";

fn escape(text: &str, quote: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| c == '&' || c == '<' || c == '>' || (quote && c == '"');
    if !text.contains(needs_escape) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if quote => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

pub(crate) fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, false)
}

pub(crate) fn escape_attribute(text: &str) -> Cow<'_, str> {
    escape(text, true)
}

/// The XML representation of a program.
pub struct XmlDocument<'a, 'input>(pub &'a Program<'input>);

impl<'a, 'input> XmlDocument<'a, 'input> {
    fn fmt_instruction(f: &mut Formatter<'_>, instruction: &Instruction) -> Result {
        let Instruction { order, opcode, operands } = instruction;
        write!(f, "{}<instruction order=\"{}\" opcode=\"{}\"", INDENT, order, escape_attribute(opcode))?;
        if operands.is_empty() {
            return writeln!(f, "/>");
        }
        writeln!(f, ">")?;
        for (index, operand) in operands.iter().enumerate() {
            writeln!(f, "{0}{0}<arg{1} type=\"{2}\">{3}</arg{1}>",
                     INDENT, index + 1, operand.type_name(), escape_text(&operand.text()))?;
        }
        writeln!(f, "{}</instruction>", INDENT)
    }
}

impl<'a, 'input> Display for XmlDocument<'a, 'input> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(f, "<program language=\"{}\">", LANGUAGE)?;
        for instruction in &self.0.instructions {
            Self::fmt_instruction(f, instruction)?;
        }
        writeln!(f, "</program>")
    }
}

/// Serializes the program, or nothing if it holds no instructions.
pub fn emit(program: &Program) -> Option<String> {
    if program.is_empty() {
        None
    } else {
        Some(XmlDocument(program).to_string())
    }
}
