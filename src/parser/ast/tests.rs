use super::*;
use crate::parser::{parse_expression, parse_module};

fn paragraphs(input: &str) -> Vec<Paragraph> {
    let parsed = parse_module(input);
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
    let root = SourceFile::cast(parsed.syntax()).unwrap();
    root.paragraphs().collect()
}

fn expr(input: &str) -> Expr {
    let parsed = parse_expression(input);
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
    ExprRoot::cast(parsed.syntax()).unwrap().expr().unwrap()
}

#[test]
fn test_ast_sig() {
    let members = paragraphs("abstract sig Node extends Base { edges: set Node, var w: lone Int }");
    let Paragraph::Sig(sig) = &members[0] else {
        panic!("expected Sig");
    };
    assert!(sig.is_abstract());
    assert!(!sig.is_var());
    assert_eq!(sig.names(), vec!["Node"]);

    let ext = sig.extension().unwrap();
    assert_eq!(ext.kind(), Some(SigExtKind::Extends));
    assert_eq!(ext.parents().next().unwrap().segments(), vec!["Base"]);

    let fields = sig.fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].names(), vec!["edges"]);
    assert_eq!(fields[0].mult(), Some(Multiplicity::Set));
    assert!(fields[1].is_var());
    assert_eq!(fields[1].mult(), Some(Multiplicity::Lone));
}

#[test]
fn test_ast_sig_multiplicity_and_subset() {
    let members = paragraphs("one sig A, B in C + D {}");
    let Paragraph::Sig(sig) = &members[0] else {
        panic!("expected Sig");
    };
    assert_eq!(sig.mult(), Some(Multiplicity::One));
    assert_eq!(sig.names(), vec!["A", "B"]);
    let ext = sig.extension().unwrap();
    assert_eq!(ext.kind(), Some(SigExtKind::In));
    assert_eq!(ext.parents().count(), 2);
}

#[test]
fn test_ast_pred() {
    let members = paragraphs("pred wheat Node.reach[disj a, b: Node] { b in a.^edges }");
    let Paragraph::Pred(pred) = &members[0] else {
        panic!("expected Pred");
    };
    assert!(pred.is_wheat());
    assert_eq!(pred.receiver().unwrap().segments(), vec!["Node"]);
    assert_eq!(pred.name().unwrap().text().as_deref(), Some("reach"));
    let params = pred.params().unwrap();
    assert!(!params.is_parenthesized());
    let decl = params.decls().next().unwrap();
    assert!(decl.is_disj());
    assert_eq!(decl.names(), vec!["a", "b"]);
    assert_eq!(pred.body().unwrap().exprs().count(), 1);
}

#[test]
fn test_ast_fun() {
    let members = paragraphs("fun next(s: State): lone State { s.succ }");
    let Paragraph::Fun(fun) = &members[0] else {
        panic!("expected Fun");
    };
    assert_eq!(fun.result_mult(), Some(Multiplicity::Lone));
    assert!(matches!(fun.result(), Some(Expr::NameRef(_))));
    assert!(fun.params().unwrap().is_parenthesized());
    assert!(fun.body().is_some());
}

#[test]
fn test_ast_command() {
    let members = paragraphs("small: run reach for 5 but exactly 3 Node, 4 Int");
    let Paragraph::Cmd(cmd) = &members[0] else {
        panic!("expected Cmd");
    };
    assert_eq!(cmd.kind(), Some(CommandKind::Run));
    assert_eq!(cmd.name().unwrap().text().as_deref(), Some("small"));
    assert_eq!(cmd.target().unwrap().text(), "reach");
    let scope = cmd.scope().unwrap();
    assert_eq!(scope.default_scope(), Some(5));
    let typescopes: Vec<_> = scope.typescopes().collect();
    assert_eq!(typescopes.len(), 2);
    assert!(typescopes[0].is_exact());
    assert_eq!(typescopes[0].count(), Some(3));
    assert_eq!(typescopes[1].sig().unwrap().segments(), vec!["Int"]);
}

#[test]
fn test_ast_property() {
    let members = paragraphs("assert foo is sufficient for Bar");
    let Paragraph::Property(prop) = &members[0] else {
        panic!("expected Property");
    };
    assert_eq!(prop.kind(), Some(PropertyKind::Sufficient));
    assert_eq!(prop.pred().unwrap().text().as_deref(), Some("Bar"));
    let Some(Expr::NameRef(name)) = prop.expr() else {
        panic!("expected name reference");
    };
    assert_eq!(name.text().as_deref(), Some("foo"));
}

#[test]
fn test_ast_quantified_property() {
    let members = paragraphs("assert all disj x, y: Node | x != y is necessary for distinct[x, y]");
    let Paragraph::QuantifiedProperty(prop) = &members[0] else {
        panic!("expected QuantifiedProperty");
    };
    assert!(prop.is_disj());
    assert_eq!(prop.kind(), Some(PropertyKind::Necessary));
    assert_eq!(prop.args().len(), 2);
    assert!(matches!(prop.body(), Some(Expr::Binary(_))));
}

#[test]
fn test_ast_test_expect() {
    let members = paragraphs("test expect { t1: { some Node } for 3 Node is sat  reach is unsat }");
    let Paragraph::TestExpect(block) = &members[0] else {
        panic!("expected TestExpect");
    };
    let tests = block.tests();
    assert_eq!(tests.len(), 2);
    assert_eq!(tests[0].name().unwrap().text().as_deref(), Some("t1"));
    assert!(tests[0].block().is_some());
    assert!(tests[0].scope().is_some());
    assert_eq!(tests[0].expected(), Some(TestResult::Sat));
    assert_eq!(tests[1].expected(), Some(TestResult::Unsat));
}

#[test]
fn test_ast_inst_bounds() {
    let members = paragraphs("inst line { Node = `N0 + `N1  edges = `N0 -> `N1  #Int = 3  no weight }");
    let Paragraph::Inst(inst) = &members[0] else {
        panic!("expected Inst");
    };
    let bounds: Vec<_> = inst.bounds().unwrap().bounds().collect();
    assert_eq!(bounds.len(), 4);
    assert_eq!(bounds[0].op(), Some(SyntaxKind::EQ));
    assert_eq!(bounds[0].rhs().unwrap().products().count(), 2);
    let product = bounds[1].rhs().unwrap().products().next().unwrap();
    assert_eq!(
        product.atoms().filter_map(|a| a.value()).collect::<Vec<_>>(),
        vec![BoundValue::Atom("N0".into()), BoundValue::Atom("N1".into())]
    );
    assert!(bounds[2].lhs().unwrap().is_cardinality());
    assert!(bounds[3].is_no());
}

#[test]
fn test_ast_option_and_imports() {
    let parsed = parse_module("#lang forge\nopen util/ordering[State] as ord\noption verbose 5");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
    let root = SourceFile::cast(parsed.syntax()).unwrap();
    assert_eq!(root.language().as_deref(), Some("forge"));
    let import = root.imports().next().unwrap();
    assert_eq!(import.target().unwrap().segments(), vec!["util", "ordering"]);
    assert_eq!(import.args().len(), 1);
    assert_eq!(import.alias().unwrap().text().as_deref(), Some("ord"));
    let Some(Paragraph::Option(option)) = root.paragraphs().next() else {
        panic!("expected Option");
    };
    assert_eq!(option.key().unwrap().text(), "verbose");
    assert_eq!(option.value().as_deref(), Some("5"));
}

#[test]
fn test_ast_quantifier() {
    let Expr::Quant(quant) = expr("all a: A | some b: B | a->b") else {
        panic!("expected Quant");
    };
    assert_eq!(quant.quantifier(), Some(Quantifier::All));
    assert_eq!(quant.decls().count(), 1);
    let Some(Expr::Quant(inner)) = quant.body() else {
        panic!("expected nested Quant");
    };
    assert_eq!(inner.quantifier(), Some(Quantifier::Some));
}

#[test]
fn test_ast_binary_ops() {
    let Expr::Binary(compare) = expr("a !in b") else {
        panic!("expected Binary");
    };
    assert_eq!(compare.kind(), SyntaxKind::COMPARE_EXPR);
    assert_eq!(compare.op(), Some(SyntaxKind::IN_KW));
    assert!(compare.is_negated());

    let Expr::Binary(arrow) = expr("A set -> lone B") else {
        panic!("expected Binary");
    };
    assert_eq!(arrow.op(), Some(SyntaxKind::ARROW));
    assert_eq!(
        arrow.arrow_op().unwrap().multiplicities(),
        (Some(Multiplicity::Set), Some(Multiplicity::Lone))
    );

    let Expr::Binary(implies) = expr("a => b else c") else {
        panic!("expected Binary");
    };
    assert!(implies.else_branch().is_some());
}

#[test]
fn test_ast_atoms() {
    assert!(matches!(
        expr("-3"),
        Expr::Const(c) if c.value() == Some(Constant::Number(-3))
    ));
    assert!(matches!(expr("`Node0"), Expr::Atom(a) if a.name().as_deref() == Some("Node0")));
    assert!(matches!(expr("this"), Expr::This(_)));
    assert!(matches!(expr("@edges"), Expr::AtName(_)));
    let Expr::BoxJoin(join) = expr("f[x, y]") else {
        panic!("expected BoxJoin");
    };
    assert_eq!(join.args().len(), 2);
    assert!(matches!(join.target(), Some(Expr::NameRef(n)) if n.text().as_deref() == Some("f")));
    let inner = expr("((a))").unparenthesized().unwrap();
    assert!(matches!(inner, Expr::NameRef(_)));
}

#[test]
fn test_ast_test_suite() {
    let members = paragraphs("test suite for reach { example e is reach for { Node = `N0 } }");
    let Paragraph::TestSuite(suite) = &members[0] else {
        panic!("expected TestSuite");
    };
    assert_eq!(suite.pred().unwrap().text().as_deref(), Some("reach"));
    let constructs = suite.constructs();
    assert_eq!(constructs.len(), 1);
    assert!(matches!(constructs[0], Paragraph::Example(_)));
}

#[test]
fn test_doc_comment() {
    let parsed = parse_module("-- the nodes\n-- of the graph\nsig Node {}\n\n/* not attached */\n\nsig Edge {}");
    let root = SourceFile::cast(parsed.syntax()).unwrap();
    let members: Vec<_> = root.paragraphs().collect();
    assert_eq!(
        members[0].doc_comment().as_deref(),
        Some("the nodes\nof the graph")
    );
    assert_eq!(members[1].doc_comment(), None);
}
