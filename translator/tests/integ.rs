extern crate ippcode_translator;

use ippcode_translator::{emit, translate, ErrorKind, Stat, StatCounters};
use pretty_assertions::assert_eq;

#[test]
fn countdown() {
    test(
        include_str!("inputs/countdown.ippcode"),
        include_str!("inputs/countdown.xml"),
        StatCounters { loc: 11, comments: 2, labels: 2, jumps: 2 },
    );
}

#[test]
fn frames_and_types() {
    test(
        include_str!("inputs/frames.ippcode"),
        include_str!("inputs/frames.xml"),
        StatCounters { loc: 14, comments: 0, labels: 1, jumps: 0 },
    );
}

#[test]
fn countdown_report() {
    let translation = translate(include_str!("inputs/countdown.ippcode")).unwrap();
    let selection = [Stat::Comments, Stat::Loc, Stat::Jumps, Stat::Loc];
    assert_eq!("2\n11\n2\n11\n", translation.stats.report(&selection));
}

#[test]
fn order_numbers_are_contiguous() {
    let translation = translate(include_str!("inputs/frames.ippcode")).unwrap();
    let orders = translation.program.instructions.iter().map(|i| i.order).collect::<Vec<_>>();
    assert_eq!((1..=14).collect::<Vec<_>>(), orders);
}

#[test]
fn errors() {
    error_tests(&[
        ("", ErrorKind::EmptyInput),
        ("ADD GF@x GF@y GF@z", ErrorKind::Header),
        (".IPPcode19 extra", ErrorKind::Header),
        (".IPPcode19\nFOO GF@x", ErrorKind::UnknownOpcode),
        (".IPPcode19\nADD GF@x GF@y", ErrorKind::Arity),
        (".IPPcode19\nBREAK now", ErrorKind::Arity),
        (".IPPcode19\nMOVE GF@x string@5abc", ErrorKind::OperandFormat),
        (".IPPcode19\nMOVE int@1 int@1", ErrorKind::OperandFormat),
        (".IPPcode19\nWRITE string@a\\1", ErrorKind::OperandFormat),
        (".IPPcode19\nLABEL 9lives", ErrorKind::LabelFormat),
        (".IPPcode19\nREAD GF@x integer", ErrorKind::TypeKeyword),
    ]);
}

#[test]
fn exit_codes() {
    let code = |source: &str| translate(source).unwrap_err().kind().exit_code();
    assert_eq!(21, code(""));
    assert_eq!(21, code("MOVE GF@x int@5"));
    assert_eq!(22, code(".IPPcode19\nFOO GF@x"));
    assert_eq!(23, code(".IPPcode19\nADD GF@x GF@y"));
    assert_eq!(23, code(".IPPcode19\nJUMP GF@x"));
}

fn test(input: &str, expected_xml: &str, expected_stats: StatCounters) {
    let translation = translate(input).unwrap();
    assert_eq!(Some(expected_xml.to_string()), emit(&translation.program));
    assert_eq!(expected_stats, translation.stats);
}

fn error_tests(tests: &[(&str, ErrorKind)]) {
    for (input, expected) in tests {
        let actual = translate(input).map(|_| ()).map_err(|e| e.kind());
        assert_eq!(Err(*expected), actual, "input: {:?}", input);
    }
}
