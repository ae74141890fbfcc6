//! Deciding what an operand word is and whether it is well formed.
//!
//! The grammar table says which [`OperandKind`] is expected in each position;
//! [`classify`] checks the word against that kind and resolves it into an
//! [`Operand`]:
//!
//! | expected      | accepted words                                   |
//! |---------------|--------------------------------------------------|
//! | `Variable`    | `GF@name`, `LF@name`, `TF@name`                  |
//! | `Symbol`      | any variable, `int@-12`, `string@a\032b`, `bool@true`, `nil@nil` |
//! | `Label`       | a name without `@`                               |
//! | `TypeKeyword` | `int`, `string`, `bool`, `nil`                   |
//!
//! Variable names, labels and string literals share one grammar, see
//! [`check_string`].

use crate::error::{Error, InvalidOperandReason, Location};
use crate::grammar::OperandKind;
use crate::lexer::Word;
use crate::program::{Frame, Operand, Type};

use InvalidOperandReason::*;

const SEPARATOR: char = '@';
const ESCAPE: char = '\\';
const ESCAPE_DIGITS: usize = 3;

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || "$&%*!?@:_-".contains(c)
}

/// Checks text against the grammar shared by variable names, labels and
/// string literals.
///
/// The text may not start with a digit. A `\` must start an escape sequence
/// of exactly three decimal digits; any three digits are accepted, mapping
/// them to characters is up to the interpreter. Everything outside escape
/// sequences must come from `[A-Za-z0-9$&%*!?@:_-]`, which rules out `#` and
/// whitespace. The empty string passes.
pub fn check_string(text: &str) -> Result<(), InvalidOperandReason> {
    if let Some(first) = text.chars().next() {
        if first.is_ascii_digit() {
            return Err(FirstChar { actual: first });
        }
    }

    let mut bad_chars = String::new();
    let mut chars = text.char_indices();
    while let Some((position, c)) = chars.next() {
        if c == ESCAPE {
            let digits = chars.clone()
                .take(ESCAPE_DIGITS)
                .take_while(|(_, d)| d.is_ascii_digit())
                .count();
            if digits < ESCAPE_DIGITS {
                return Err(Escape { position });
            }
            chars.nth(ESCAPE_DIGITS - 1);
        } else if !is_allowed(c) && !bad_chars.contains(c) {
            bad_chars.push(c);
        }
    }

    if bad_chars.is_empty() {
        Ok(())
    } else {
        Err(OtherChars { actual: bad_chars })
    }
}

fn variable(word: &str) -> Result<Operand<'_>, InvalidOperandReason> {
    let (tag, name) = word.split_once(SEPARATOR).ok_or(MissingSeparator)?;
    let frame = Frame::from_tag(tag).ok_or_else(|| UnknownFrame { actual: tag.to_string() })?;
    if name.is_empty() {
        return Err(EmptyName);
    }
    check_string(name)?;
    Ok(Operand::Variable { frame, name })
}

fn int_literal(literal: &str) -> Result<(), InvalidOperandReason> {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    if digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Int)
    }
}

fn constant(ty: Type, literal: &str) -> Result<Operand<'_>, InvalidOperandReason> {
    match ty {
        Type::Nil if literal != "nil" => return Err(Nil),
        Type::Int => int_literal(literal)?,
        Type::Bool if literal != "true" && literal != "false" => return Err(Bool),
        Type::String => check_string(literal)?,
        _ => {}
    }
    Ok(Operand::Constant { ty, literal })
}

fn symbol(word: &str) -> Result<Operand<'_>, InvalidOperandReason> {
    let (prefix, literal) = word.split_once(SEPARATOR).ok_or(MissingSeparator)?;
    // A two-letter prefix can only be a frame; no type name is that short.
    if prefix.len() == 2 {
        return variable(word);
    }
    let ty = Type::from_name(prefix).ok_or_else(|| UnknownType { actual: prefix.to_string() })?;
    constant(ty, literal)
}

fn label(word: &str) -> Result<Operand<'_>, InvalidOperandReason> {
    if word.contains(SEPARATOR) {
        return Err(UnexpectedSeparator);
    }
    check_string(word)?;
    Ok(Operand::Label(word))
}

fn type_keyword(word: &str) -> Result<Operand<'_>, InvalidOperandReason> {
    Type::from_name(word)
        .map(Operand::Type)
        .ok_or(InvalidOperandReason::TypeKeyword)
}

/// Resolves one operand word against the kind the grammar expects there.
///
/// `line` is the physical line the word was found on, for error reporting.
pub fn classify<'input>(word: &Word<'input>, expected: OperandKind, line: usize) -> Result<Operand<'input>, Error> {
    let src = word.src;
    let result = match expected {
        OperandKind::Variable => variable(src),
        OperandKind::Symbol => symbol(src),
        OperandKind::Label => label(src),
        OperandKind::TypeKeyword => type_keyword(src),
    };
    result.map_err(|reason| {
        let location = Location::new(line, word.span.clone());
        let word = src.to_string();
        match expected {
            OperandKind::Label => Error::LabelFormat { location, word, reason },
            OperandKind::TypeKeyword => Error::TypeKeyword { location, word },
            OperandKind::Variable | OperandKind::Symbol => Error::OperandFormat { location, word, reason },
        }
    })
}
