//! Paragraph-level parsing: signatures, predicates, commands, tests and
//! property assertions.

#![allow(clippy::unwrap_used)]

use forge_syntax::parser::{
    Bound, CommandKind, ConsistencyDecl, PropertyKind, SatisfiabilityDecl, SigDecl, TestResult,
};
use forge_syntax::{AstNode, ErrorCode, Expr, Paragraph, SourceFile, SyntaxKind, parse_module};
use rstest::rstest;

fn parses_successfully(input: &str) -> bool {
    let parse = parse_module(input);
    if !parse.ok() {
        eprintln!("errors for {input:?}: {:?}", parse.errors);
    }
    parse.ok()
}

fn paragraphs(input: &str) -> Vec<Paragraph> {
    let parse = parse_module(input);
    assert!(parse.ok(), "Failed to parse {input:?}: {:?}", parse.errors);
    SourceFile::cast(parse.syntax())
        .unwrap()
        .paragraphs()
        .collect()
}

fn single(input: &str) -> Paragraph {
    let mut all = paragraphs(input);
    assert_eq!(all.len(), 1, "expected one paragraph in {input:?}");
    all.remove(0)
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_empty_sig() {
    let Paragraph::Sig(sig) = single("sig A {}") else {
        panic!("expected Sig");
    };
    assert_eq!(sig.names(), vec!["A"]);
    assert!(sig.extension().is_none());
    assert!(sig.field_list().is_some());
    assert!(sig.fields().is_empty());
    assert!(sig.block().is_none());
}

#[test]
fn test_sig_missing_name_recovers() {
    let parse = parse_module("sig { }");
    assert!(!parse.ok());
    let error = &parse.errors[0];
    assert_eq!(error.code, ErrorCode::E0301);
    assert_eq!(u32::from(error.range.start()), 4);
    assert!(!error.fatal);

    let sig = parse
        .syntax()
        .children()
        .find_map(SigDecl::cast)
        .expect("signature node despite the missing name");
    assert!(sig.name_list().is_some());
    assert!(sig.names().is_empty());
    assert_eq!(parse.syntax().text().to_string(), "sig { }");
}

#[test]
fn test_sufficient_property() {
    let Paragraph::Property(prop) = single("assert foo is sufficient for Bar") else {
        panic!("expected Property");
    };
    assert_eq!(prop.kind(), Some(PropertyKind::Sufficient));
    assert!(matches!(prop.expr(), Some(Expr::NameRef(n)) if n.text().as_deref() == Some("foo")));
    assert_eq!(prop.pred().unwrap().text().as_deref(), Some("Bar"));
}

// =============================================================================
// SIGNATURES
// =============================================================================

#[rstest]
#[case("sig A {}")]
#[case("sig A, B, C {}")]
#[case("abstract sig A {}")]
#[case("one sig A extends B {}")]
#[case("lone sig A in B + C {}")]
#[case("var sig A {}")]
#[case("sig A { f: set B }")]
#[case("sig A { f: B -> C, g: lone A }")]
#[case("sig A { f, g: one A, var h: set A -> lone B }")]
#[case("sig A { f: B } { some f }")]
#[case("sig Node { edges: set Node -> Int }")]
#[case("sig A { f: func B, g: pfunc B }")]
fn test_sig_declarations(#[case] input: &str) {
    assert!(parses_successfully(input), "Failed to parse: {}", input);
}

#[rstest]
#[case("sig A { , f: B }", ErrorCode::E0303)]
#[case("sig A { f: B g: C }", ErrorCode::E0205)]
#[case("abstract A {}", ErrorCode::E0302)]
fn test_sig_errors(#[case] input: &str, #[case] code: ErrorCode) {
    let parse = parse_module(input);
    assert!(
        parse.errors.iter().any(|e| e.code == code),
        "expected {code:?} for {input:?}, got {:?}",
        parse.errors
    );
    assert_eq!(parse.syntax().text().to_string(), input);
}

// =============================================================================
// PREDICATES, FUNCTIONS, FACTS, ASSERTIONS
// =============================================================================

#[rstest]
#[case("pred p {}")]
#[case("pred p[a: A] { some a }")]
#[case("pred p(a, b: A, c: set B) { a in b }")]
#[case("pred A.p { some this }")]
#[case("pred wheat secret { }")]
#[case("fun f: A { A }")]
#[case("fun f[a: A]: set B { a.g }")]
#[case("fun f(x: Int): Int { add[x, 1] }")]
#[case("fact { all n: Node | n !in n.^edges }")]
#[case("fact acyclic { no iden & ^edges }")]
#[case("assert a { some A }")]
#[case("assert { some A }")]
fn test_pred_fun_fact(#[case] input: &str) {
    assert!(parses_successfully(input), "Failed to parse: {}", input);
}

#[test]
fn test_pred_missing_body() {
    let parse = parse_module("pred p[a: A]");
    assert!(parse.errors.iter().any(|e| e.code == ErrorCode::E0306));
}

// =============================================================================
// COMMANDS
// =============================================================================

#[rstest]
#[case("run p", CommandKind::Run)]
#[case("run {}", CommandKind::Run)]
#[case("run { some A } for 3", CommandKind::Run)]
#[case("check safety for 5 but 3 A, exactly 2 B", CommandKind::Check)]
#[case("c1: check safety for exactly 4 State", CommandKind::Check)]
#[case("run p for 3 Node for { Node = `N0 + `N1 }", CommandKind::Run)]
#[case("run p for myInst", CommandKind::Run)]
fn test_commands(#[case] input: &str, #[case] kind: CommandKind) {
    let Paragraph::Cmd(cmd) = single(input) else {
        panic!("expected Cmd for {input:?}");
    };
    assert_eq!(cmd.kind(), Some(kind));
}

#[test]
fn test_command_bad_scope() {
    let parse = parse_module("run p for 3 but Node");
    assert!(parse.errors.iter().any(|e| e.code == ErrorCode::E0602));
}

// =============================================================================
// TESTS AND PROPERTIES
// =============================================================================

#[rstest]
#[case("test expect { t: { some A } is sat }")]
#[case("expect named { p is unsat  q for 3 is theorem }")]
#[case("test expect { { no A } for { A = none } is forge_error }")]
#[case(r#"test expect { bad: { some A } is forge_error "oops" }"#)]
#[case("test suite for p { example e is p for { A = `A0 } }")]
#[case("test suite for p { test expect { p is sat } assert q is necessary for p }")]
#[case("example e is { some A } for { A = `A0 + `A1  f = `A0 -> `A1 }")]
#[case("inst i { A = `A0  #Int = 4  f in `A0 -> (`A0 + `A1) }")]
#[case("assert q is necessary for p for 4")]
#[case("assert all x: A | some x.f is sufficient for p[x]")]
fn test_test_constructs(#[case] input: &str) {
    assert!(parses_successfully(input), "Failed to parse: {}", input);
}

#[rstest]
#[case("inst opt { next is linear }")]
#[case("run {} for 3 for { next is plinear }")]
#[case("inst opt { Node = `N0 + `N1  next is linear }")]
fn test_is_bound(#[case] input: &str) {
    assert!(parses_successfully(input), "Failed to parse: {}", input);
    let parse = parse_module(input);
    let bound = parse
        .syntax()
        .descendants()
        .filter_map(Bound::cast)
        .last()
        .unwrap();
    assert_eq!(bound.op(), Some(SyntaxKind::IS_KW));
    assert!(!bound.is_reference());
}

#[rstest]
#[case("assert p is sat", TestResult::Sat)]
#[case("assert { some A } is unsat for 3", TestResult::Unsat)]
#[case("assert p is theorem", TestResult::Theorem)]
fn test_satisfiability(#[case] input: &str, #[case] expected: TestResult) {
    let para = single(input);
    let decl = SatisfiabilityDecl::cast(para.syntax().clone()).unwrap();
    assert_eq!(decl.expected(), Some(expected));
}

#[rstest]
#[case("assert p is consistent with q", false)]
#[case("assert { some A } is inconsistent with q for 3", true)]
fn test_consistency(#[case] input: &str, #[case] inconsistent: bool) {
    let para = single(input);
    let decl = ConsistencyDecl::cast(para.syntax().clone()).unwrap();
    assert_eq!(decl.is_inconsistent(), inconsistent);
    assert_eq!(decl.pred().unwrap().text().as_deref(), Some("q"));
}

#[rstest]
#[case("test expect { t: p is maybe }", ErrorCode::E0701)]
#[case("assert p is", ErrorCode::E0702)]
#[case("test suite for p { assert a { some A } }", ErrorCode::E0703)]
#[case("test suite for p { some A }", ErrorCode::E0703)]
fn test_test_construct_errors(#[case] input: &str, #[case] code: ErrorCode) {
    let parse = parse_module(input);
    assert!(
        parse.errors.iter().any(|e| e.code == code),
        "expected {code:?} for {input:?}, got {:?}",
        parse.errors
    );
}

// =============================================================================
// MODULE STRUCTURE
// =============================================================================

#[test]
fn test_full_module() {
    let input = "#lang forge\n\
                 module graphs/basic[Node]\n\
                 open util/ordering[State]\n\
                 open \"helpers.frg\" as h\n\
                 option run_sterling off\n\
                 sig State {}\n\
                 pred init[s: State] { no s.visited }\n\
                 run { some State } for 3\n";
    let parse = parse_module(input);
    assert!(parse.ok(), "{:?}", parse.errors);
    let file = SourceFile::cast(parse.syntax()).unwrap();
    let module = file.module_decl().unwrap();
    assert_eq!(module.params(), vec!["Node"]);
    assert_eq!(file.imports().count(), 2);
    let kinds: Vec<SyntaxKind> = file.paragraphs().map(|p| p.syntax().kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::OPTION_DECL,
            SyntaxKind::SIG_DECL,
            SyntaxKind::PRED_DECL,
            SyntaxKind::CMD_DECL
        ]
    );
}

#[rstest]
#[case("sig A {}\nopen util/integer", ErrorCode::E0802)]
#[case("eval some A\nsig A {}", ErrorCode::E0803)]
#[case("sig A {}\nmodule m", ErrorCode::E0304)]
#[case("open", ErrorCode::E0501)]
#[case("module", ErrorCode::E0502)]
fn test_module_structure_errors(#[case] input: &str, #[case] code: ErrorCode) {
    let parse = parse_module(input);
    assert!(
        parse.errors.iter().any(|e| e.code == code),
        "expected {code:?} for {input:?}, got {:?}",
        parse.errors
    );
}

#[test]
fn test_eval_only_file() {
    let all = paragraphs("eval some A\neval #Node");
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|p| matches!(p, Paragraph::Eval(_))));
}
