use itertools::Itertools;

use crate::error::{Error, Location};
use crate::lexer::Line;

pub const LANGUAGE: &str = "IPPcode19";
pub const HEADER: &str = ".IPPcode19";

/// Checks that the first non-blank line is the language header and nothing else.
pub fn check_header(line: &Line) -> Result<(), Error> {
    match line.words.as_slice() {
        [marker] if marker.src.eq_ignore_ascii_case(HEADER) => Ok(()),
        words => Err(Error::Header {
            location: Location::new(line.number, line.content_span()),
            found: words.iter().map(|w| w.src).join(" "),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorKind;
    use crate::lexer::Lexer;
    use pretty_assertions::assert_eq;

    fn check(src: &str) -> Result<(), Error> {
        check_header(&Lexer::new(src).next().unwrap())
    }

    #[test]
    fn header_ignores_case_and_comments() {
        assert_eq!(Ok(()), check(".IPPcode19"));
        assert_eq!(Ok(()), check("  .ippCODE19   # header"));
    }

    #[test]
    fn header_must_stand_alone() {
        let error = check(".IPPcode19 MOVE").unwrap_err();
        assert_eq!(ErrorKind::Header, error.kind());
        assert_eq!(
            Error::Header { location: Location::new(1, 0..15), found: ".IPPcode19 MOVE".to_string() },
            error);
    }

    #[test]
    fn wrong_header() {
        for src in &["ADD GF@x GF@y GF@z", ".IPPcode20", "IPPcode19", ".IPPcode"] {
            assert_eq!(ErrorKind::Header, check(src).unwrap_err().kind(), "{}", src);
        }
    }
}
