use crate::parse::{LineOutcome, LineParser};

fn parser() -> LineParser {
    LineParser::new().expect("grammar compiles")
}

#[test]
fn parses_address_size_kind_and_name() {
    let LineOutcome::Symbol(symbol) = parser().parse_line(1, "  4a1f20       1184 T fmt.Fprintf")
    else {
        panic!("expected symbol");
    };
    assert_eq!(symbol.address, Some(0x4a1f20));
    assert_eq!(symbol.size, 1184);
    assert_eq!(symbol.kind, 'T');
    assert_eq!(symbol.qualified_name, "fmt.Fprintf");
    assert_eq!(symbol.path_segments, vec!["fmt".to_string()]);
    assert_eq!(symbol.leaf_name, "Fprintf");
}

#[test]
fn address_is_optional() {
    let LineOutcome::Symbol(symbol) = parser().parse_line(3, "             24 U _cgo_panic")
    else {
        panic!("expected symbol");
    };
    assert_eq!(symbol.address, None);
    assert_eq!(symbol.size, 24);
    assert_eq!(symbol.kind, 'U');
    assert!(symbol.path_segments.is_empty());
}

#[test]
fn accepts_dash_and_question_mark_kinds() {
    for (line, kind) in [("10 8 - os.x", '-'), ("10 8 ? os.y", '?')] {
        let LineOutcome::Symbol(symbol) = parser().parse_line(1, line) else {
            panic!("expected symbol for {line}");
        };
        assert_eq!(symbol.kind, kind);
    }
}

#[test]
fn synthetic_prefixes_are_filtered() {
    let parser = parser();
    assert_eq!(
        parser.parse_line(1, "  51a000        40 R go:buildinfo"),
        LineOutcome::Synthetic
    );
    assert_eq!(
        parser.parse_line(2, "  4e2b60        96 R type:*os.File"),
        LineOutcome::Synthetic
    );
}

#[test]
fn custom_synthetic_prefixes_replace_defaults() {
    let parser = LineParser::with_synthetic_prefixes(["runtime."]).expect("grammar compiles");
    assert_eq!(
        parser.parse_line(1, "10 8 T runtime.main"),
        LineOutcome::Synthetic
    );
    assert!(matches!(
        parser.parse_line(2, "10 8 R go:buildinfo"),
        LineOutcome::Symbol(_)
    ));
}

#[test]
fn malformed_lines_report_line_number() {
    let LineOutcome::Malformed(diagnostic) = parser().parse_line(7, "not a symbol") else {
        panic!("expected diagnostic");
    };
    assert_eq!(diagnostic.line_number, 7);
    assert_eq!(
        diagnostic.to_string(),
        "failed to find type symbol in line 7: not a symbol"
    );
}

#[test]
fn oversized_size_is_malformed() {
    assert!(matches!(
        parser().parse_line(1, "10 99999999999999999999999 T main.main"),
        LineOutcome::Malformed(_)
    ));
}

#[test]
fn whitespace_line_yields_one_diagnostic_and_run_continues() {
    let parsed = parser().parse_dump("  4a1000 24 T main.main\n   \t \n");
    assert_eq!(parsed.symbols.len(), 1);
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].line_number, 2);
    assert_eq!(parsed.synthetic_count, 0);
}

#[test]
fn large_dumps_keep_line_order() {
    let text = (0..5000)
        .map(|index| format!("{index:x} {index} T pkg{}.f{index}", index % 7))
        .collect::<Vec<_>>()
        .join("\n");
    let parsed = parser().parse_dump(&text);
    assert_eq!(parsed.symbols.len(), 5000);
    let sizes = parsed
        .symbols
        .iter()
        .map(|symbol| symbol.size)
        .collect::<Vec<_>>();
    assert_eq!(sizes, (0..5000u64).collect::<Vec<_>>());
}

#[test]
fn symbol_display_matches_dump_columns() {
    let LineOutcome::Symbol(symbol) =
        parser().parse_line(1, "4a1000 96 T github.com/acme/greet.(*Greeter).Say")
    else {
        panic!("expected symbol");
    };
    assert_eq!(symbol.display_name(), "github.com/acme/greet.(*Greeter).Say");
    assert_eq!(
        symbol.to_string(),
        "4a1000\t96\tT\tgithub.com/acme/greet\t(*Greeter).Say"
    );

    let LineOutcome::Symbol(bare) = parser().parse_line(2, "8 U _cgo_init") else {
        panic!("expected symbol");
    };
    assert_eq!(bare.display_name(), "_cgo_init");
    assert_eq!(bare.to_string(), "-\t8\tU\t\t_cgo_init");
}
