/// The kind of operand an instruction expects in a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// A frame-qualified variable, e.g. `GF@counter`.
    Variable,
    /// A variable or a typed constant, e.g. `LF@x` or `int@42`.
    Symbol,
    Label,
    /// One of `int`, `string`, `bool`, `nil`.
    TypeKeyword,
}

/// Which statistics counter, besides lines of code, an instruction bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    None,
    Label,
    Jump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarEntry {
    /// Lower-case.
    pub opcode: &'static str,
    pub operands: &'static [OperandKind],
    pub effect: Effect,
}

impl GrammarEntry {
    pub fn arity(&self) -> usize {
        self.operands.len()
    }
}

use OperandKind::*;

const fn entry(opcode: &'static str, operands: &'static [OperandKind]) -> GrammarEntry {
    GrammarEntry { opcode, operands, effect: Effect::None }
}

const fn with_effect(opcode: &'static str, operands: &'static [OperandKind], effect: Effect) -> GrammarEntry {
    GrammarEntry { opcode, operands, effect }
}

pub const GRAMMAR: [GrammarEntry; 35] = [
    // Frames, function calls
    entry("move",        &[Variable, Symbol]),
    entry("createframe", &[]),
    entry("pushframe",   &[]),
    entry("popframe",    &[]),
    entry("defvar",      &[Variable]),
    entry("call",        &[Label]),
    entry("return",      &[]),

    // Data stack
    entry("pushs", &[Symbol]),
    entry("pops",  &[Variable]),

    // Arithmetic, relational, boolean and conversion
    entry("add",      &[Variable, Symbol, Symbol]),
    entry("sub",      &[Variable, Symbol, Symbol]),
    entry("mul",      &[Variable, Symbol, Symbol]),
    entry("idiv",     &[Variable, Symbol, Symbol]),
    entry("lt",       &[Variable, Symbol, Symbol]),
    entry("gt",       &[Variable, Symbol, Symbol]),
    entry("eq",       &[Variable, Symbol, Symbol]),
    entry("and",      &[Variable, Symbol, Symbol]),
    entry("or",       &[Variable, Symbol, Symbol]),
    entry("not",      &[Variable, Symbol]),
    entry("int2char", &[Variable, Symbol]),
    entry("stri2int", &[Variable, Symbol, Symbol]),

    // Input/output
    entry("read",  &[Variable, TypeKeyword]),
    entry("write", &[Symbol]),

    // Strings
    entry("concat",  &[Variable, Symbol, Symbol]),
    entry("strlen",  &[Variable, Symbol]),
    entry("getchar", &[Variable, Symbol, Symbol]),
    entry("setchar", &[Variable, Symbol, Symbol]),

    // Types
    entry("type", &[Variable, Symbol]),

    // Control flow
    with_effect("label",     &[Label],                 Effect::Label),
    with_effect("jump",      &[Label],                 Effect::Jump),
    with_effect("jumpifeq",  &[Label, Symbol, Symbol], Effect::Jump),
    with_effect("jumpifneq", &[Label, Symbol, Symbol], Effect::Jump),
    entry("exit", &[Symbol]),

    // Debugging
    entry("dprint", &[Symbol]),
    entry("break",  &[]),
];

/// Finds the grammar entry for an opcode, ignoring case.
pub fn lookup(opcode: &str) -> Option<&'static GrammarEntry> {
    let opcode = opcode.to_lowercase();
    GRAMMAR.iter().find(|entry| entry.opcode == opcode)
}
