//! Splitting IPPcode19 source into lines of words.
//!
//! IPPcode19 is strictly line oriented: every instruction sits on its own
//! physical line, its opcode and operands separated by whitespace. A `#`
//! starts a comment which runs to the end of the line. Lexing therefore only
//! has to cut the source into lines, drop the comments, and split what is left
//! on whitespace. Here's an example:
//!
//! ```
//! # use ippcode_translator::lexer::Lexer;
//! let source = ".IPPcode19\nMOVE   GF@x int@5 # set x\n\n";
//! let lines = Lexer::new(source).collect::<Vec<_>>();
//!
//! assert_eq!(lines.len(), 3);
//! assert_eq!(lines[1].number, 2);
//! assert!(lines[1].comment);
//! assert_eq!(
//!     lines[1].words.iter().map(|w| w.src).collect::<Vec<_>>(),
//!     vec!["MOVE", "GF@x", "int@5"]);
//! assert_eq!(lines[1].words[1].span, 7..11);
//! assert!(lines[2].is_blank());
//! ```
//!
//! Blank lines are still produced, so that the caller can count comments on
//! lines which hold nothing else. Whether a run of whitespace is one space or
//! ten never matters: `add GF@x 1 2 #comment` and `add   GF@x 1 2#comment`
//! yield the same words.
//!
//! Each [`Word`] keeps its byte range inside the physical line. The words
//! themselves carry no meaning yet; deciding what an operand is happens in
//! [`operand`](crate::operand).

use regex::Regex;

use crate::error::Span;

pub const COMMENT_MARKER: char = '#';

/// A run of non-whitespace text on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'input> {
    pub src: &'input str,
    pub span: Span,
}

/// One physical line after comment removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'input> {
    /// 1-based.
    pub number: usize,
    /// The whole physical line, comment included.
    pub src: &'input str,
    pub words: Vec<Word<'input>>,
    /// Whether the line contained a comment marker.
    pub comment: bool,
}

impl<'input> Line<'input> {
    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }

    /// Span from the first word to the last one.
    pub fn content_span(&self) -> Span {
        match (self.words.first(), self.words.last()) {
            (Some(first), Some(last)) => first.span.start..last.span.end,
            _ => 0..0,
        }
    }
}

pub struct Lexer<'input> {
    lines: std::iter::Enumerate<std::str::Lines<'input>>,
    word: Regex,
}

impl<'input> Lexer<'input> {
    pub fn new(src: &'input str) -> Lexer<'input> {
        Lexer {
            lines: src.lines().enumerate(),
            word: Regex::new(r"[^ \t\n\x0B\x0C\r]+").expect("Invalid regex"),
        }
    }

    fn tokenize(&self, number: usize, src: &'input str) -> Line<'input> {
        let (code, comment) = match src.find(COMMENT_MARKER) {
            Some(pos) => (&src[..pos], true),
            None => (src, false),
        };
        let words = self.word.find_iter(code)
            .map(|found| Word { src: found.as_str(), span: found.start()..found.end() })
            .collect();
        Line { number, src, words, comment }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Line<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, src) = self.lines.next()?;
        let line = self.tokenize(index + 1, src);
        log::trace!("line {}: {:?}", line.number, line.words.iter().map(|w| w.src).collect::<Vec<_>>());
        Some(line)
    }
}
