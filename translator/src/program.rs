use std::borrow::Cow;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    Global,
    Local,
    Temporary,
}

impl Frame {
    pub fn from_tag(tag: &str) -> Option<Frame> {
        match tag {
            "GF" => Some(Frame::Global),
            "LF" => Some(Frame::Local),
            "TF" => Some(Frame::Temporary),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Frame::Global => "GF",
            Frame::Local => "LF",
            Frame::Temporary => "TF",
        }
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.tag())
    }
}

/// The type of a constant, also used as the operand of `READ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    String,
    Bool,
    Nil,
}

impl Type {
    pub fn from_name(name: &str) -> Option<Type> {
        match name {
            "int" => Some(Type::Int),
            "string" => Some(Type::String),
            "bool" => Some(Type::Bool),
            "nil" => Some(Type::Nil),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::String => "string",
            Type::Bool => "bool",
            Type::Nil => "nil",
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

/// A checked operand, borrowing its text from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand<'input> {
    Variable { frame: Frame, name: &'input str },
    Constant { ty: Type, literal: &'input str },
    Label(&'input str),
    Type(Type),
}

impl<'input> Operand<'input> {
    /// The `type` attribute this operand is written with.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Variable { .. } => "var",
            Operand::Constant { ty, .. } => ty.name(),
            Operand::Label(_) => "label",
            Operand::Type(_) => "type",
        }
    }

    /// The operand's text as written in the output: `frame@name` for
    /// variables, the bare value for everything else.
    pub fn text(&self) -> Cow<'input, str> {
        match self {
            Operand::Variable { frame, name } => Cow::Owned(format!("{}@{}", frame, name)),
            Operand::Constant { literal, .. } => Cow::Borrowed(*literal),
            Operand::Label(name) => Cow::Borrowed(*name),
            Operand::Type(ty) => Cow::Borrowed(ty.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction<'input> {
    /// 1-based, contiguous over the program.
    pub order: usize,
    /// Upper-case.
    pub opcode: String,
    pub operands: Vec<Operand<'input>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program<'input> {
    pub instructions: Vec<Instruction<'input>>,
}

impl<'input> Program<'input> {
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
