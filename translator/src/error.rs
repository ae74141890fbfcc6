use std::fmt::{Display, Formatter, Result};
use std::ops::Range;

use annotate_snippets::display_list::FormatOptions;
use annotate_snippets::snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation};
use thiserror::Error;

use Error::*;

pub type Span = Range<usize>;

/// Where in the source an error was found.
///
/// `line` is the 1-based physical line, `span` the byte range inside that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub span: Span,
}

impl Location {
    pub fn new(line: usize, span: Span) -> Self {
        Location { line, span }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "line {}", self.line)
    }
}

/// The class of a failed run, independent of where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    Header,
    UnknownOpcode,
    Arity,
    OperandFormat,
    LabelFormat,
    TypeKeyword,
}

impl ErrorKind {
    /// Process status reported for this kind of failure.
    pub fn exit_code(&self) -> i32 {
        use ErrorKind::*;
        match self {
            EmptyInput | Header => 21,
            UnknownOpcode => 22,
            Arity | OperandFormat | LabelFormat | TypeKeyword => 23,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("input is empty")]
    EmptyInput,
    #[error("missing header, expected `.IPPcode19`")]
    MissingHeader,
    #[error("{location}: expected header `.IPPcode19`, found `{found}`")]
    Header { location: Location, found: String },
    #[error("{location}: unknown instruction `{opcode}`")]
    UnknownOpcode { location: Location, opcode: String },
    #[error("{location}: `{opcode}` takes {expected} operand(s), found {actual}")]
    Arity { location: Location, opcode: String, expected: usize, actual: usize },
    #[error("{location}: invalid operand `{word}`, {reason}")]
    OperandFormat { location: Location, word: String, reason: InvalidOperandReason },
    #[error("{location}: invalid label `{word}`, {reason}")]
    LabelFormat { location: Location, word: String, reason: InvalidOperandReason },
    #[error("{location}: invalid type `{word}`, expected one of int, string, bool, nil")]
    TypeKeyword { location: Location, word: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidOperandReason {
    MissingSeparator,
    UnexpectedSeparator,
    UnknownFrame { actual: String },
    UnknownType { actual: String },
    EmptyName,
    FirstChar { actual: char },
    Escape { position: usize },
    OtherChars { actual: String },
    Nil,
    Int,
    Bool,
    TypeKeyword,
}

impl Display for InvalidOperandReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        use InvalidOperandReason::*;
        match self {
            MissingSeparator => { write!(f, "missing `@` after frame or type") }
            UnexpectedSeparator => { write!(f, "labels may not contain `@`") }
            UnknownFrame { actual } => { write!(f, "frame not one of GF, LF, TF (was: {})", actual) }
            UnknownType { actual } => { write!(f, "type not one of int, string, bool, nil (was: {})", actual) }
            EmptyName => { write!(f, "variable name is empty") }
            FirstChar { actual } => { write!(f, "first char is a digit (was: {:?})", actual) }
            Escape { position } => { write!(f, "`\\` at {} not followed by three digits", position) }
            OtherChars { actual } => { write!(f, "chars outside the allowed set (bad chars: {})", actual) }
            Nil => { write!(f, "nil literal must be `nil`") }
            Int => { write!(f, "int literal must be an optional `-` followed by digits") }
            Bool => { write!(f, "bool literal must be `true` or `false`") }
            TypeKeyword => { write!(f, "expected one of int, string, bool, nil") }
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EmptyInput => ErrorKind::EmptyInput,
            MissingHeader | Header { .. } => ErrorKind::Header,
            UnknownOpcode { .. } => ErrorKind::UnknownOpcode,
            Arity { .. } => ErrorKind::Arity,
            OperandFormat { .. } => ErrorKind::OperandFormat,
            LabelFormat { .. } => ErrorKind::LabelFormat,
            TypeKeyword { .. } => ErrorKind::TypeKeyword,
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            EmptyInput | MissingHeader => None,
            Header { location, .. }
            | UnknownOpcode { location, .. }
            | Arity { location, .. }
            | OperandFormat { location, .. }
            | LabelFormat { location, .. }
            | TypeKeyword { location, .. } => Some(location),
        }
    }

    fn annotation_label(&self) -> &'static str {
        match self {
            EmptyInput | MissingHeader => "",
            Header { .. } => "expected `.IPPcode19` here",
            UnknownOpcode { .. } => "unknown instruction here",
            Arity { .. } => "wrong number of operands here",
            OperandFormat { .. } => "invalid operand here",
            LabelFormat { .. } => "invalid label here",
            TypeKeyword { .. } => "invalid type here",
        }
    }

    fn slices<'a>(&self, source: &'a str, origin: Option<&'a str>) -> Vec<Slice<'a>> {
        let mut slices = Vec::new();
        if let Some(Location { line, span }) = self.location() {
            if let Some(text) = source.lines().nth(line - 1) {
                // Annotation ranges count chars, spans count bytes.
                let start = text[..span.start].chars().count();
                let end = start + text[span.clone()].chars().count();
                slices.push(
                    Slice {
                        source: text,
                        line_start: *line,
                        origin,
                        fold: false,
                        annotations: vec![
                            SourceAnnotation {
                                range: (start, end),
                                label: self.annotation_label(),
                                annotation_type: AnnotationType::Error,
                            }
                        ],
                    }
                );
            }
        }
        slices
    }

    /// Builds a source-annotated report of this error.
    ///
    /// `message` is usually `self.to_string()`; it is passed in because the
    /// snippet borrows it.
    pub fn create_snippet<'a>(&self, message: &'a str, source: &'a str, origin: Option<&'a str>, color: bool) -> Snippet<'a> {
        Snippet {
            title: Some(Annotation {
                id: None,
                label: Some(message),
                annotation_type: AnnotationType::Error,
            }),
            footer: vec![],
            slices: self.slices(source, origin),
            opt: FormatOptions {
                color,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use annotate_snippets::display_list::DisplayList;
    use pretty_assertions::assert_eq;

    #[test]
    fn exit_codes() {
        assert_eq!(21, EmptyInput.kind().exit_code());
        assert_eq!(21, MissingHeader.kind().exit_code());
        let location = Location::new(2, 0..3);
        let unknown = UnknownOpcode { location: location.clone(), opcode: "FOO".to_string() };
        assert_eq!(22, unknown.kind().exit_code());
        let arity = Arity { location, opcode: "ADD".to_string(), expected: 3, actual: 2 };
        assert_eq!(23, arity.kind().exit_code());
    }

    #[test]
    fn message_names_line_and_word() {
        let error = OperandFormat {
            location: Location::new(2, 10..17),
            word: "xx@abc".to_string(),
            reason: InvalidOperandReason::UnknownFrame { actual: "xx".to_string() },
        };
        assert_eq!(
            "line 2: invalid operand `xx@abc`, frame not one of GF, LF, TF (was: xx)",
            error.to_string());
    }

    #[test]
    fn snippet_points_at_word() {
        let source = ".IPPcode19\nMOVE GF@x xx@abc\n";
        let error = OperandFormat {
            location: Location::new(2, 10..16),
            word: "xx@abc".to_string(),
            reason: InvalidOperandReason::UnknownFrame { actual: "xx".to_string() },
        };
        let message = error.to_string();
        let snippet = error.create_snippet(&message, source, Some("stdin"), false);
        assert_eq!(1, snippet.slices.len());
        assert_eq!("MOVE GF@x xx@abc", snippet.slices[0].source);
        assert_eq!((10, 16), snippet.slices[0].annotations[0].range);
        let rendered = DisplayList::from(snippet).to_string();
        assert!(rendered.contains("invalid operand here"));
    }

    #[test]
    fn snippet_without_location_has_no_slices() {
        let message = EmptyInput.to_string();
        let snippet = EmptyInput.create_snippet(&message, "", None, false);
        assert!(snippet.slices.is_empty());
    }
}
