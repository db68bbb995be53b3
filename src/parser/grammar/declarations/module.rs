//! Module header, imports and the small single-line paragraphs

use super::super::{BaseParser, at_qual_name, found, name, name_list, qual_name, qual_name_list};
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::grammar::expr;
use crate::parser::syntax_kind::SyntaxKind;

/// ModuleDecl = 'module' QualName ('[' NameList ']')?
pub fn module_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::MODULE_DECL);
    p.bump();
    if at_qual_name(p) {
        qual_name(p);
    } else {
        let message = format!("expected module name, found {}", found(p));
        p.error(ErrorCode::E0502, message);
    }
    if p.at(SyntaxKind::L_BRACKET) {
        let opened_at = p.current_range();
        p.bump();
        name_list(p);
        p.expect_closing(SyntaxKind::R_BRACKET, opened_at);
    }
    p.finish_node();
}

/// ImportDecl = 'open' (QualName ('[' QualNameList ']')? | FILE_PATH) ('as' Name)?
pub fn import_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::IMPORT_DECL);
    p.push_context(ParseContext::Import);
    p.bump();
    if at_qual_name(p) {
        qual_name(p);
        if p.at(SyntaxKind::L_BRACKET) {
            let opened_at = p.current_range();
            p.bump();
            qual_name_list(p);
            p.expect_closing(SyntaxKind::R_BRACKET, opened_at);
        }
    } else if p.at(SyntaxKind::FILE_PATH) {
        p.bump();
    } else {
        let message = format!("expected module name or file path, found {}", found(p));
        p.error(ErrorCode::E0501, message);
    }
    if p.eat(SyntaxKind::AS_KW) {
        name(p);
    }
    p.pop_context();
    p.finish_node();
}

/// OptionDecl = 'option' QualName (QualName | FILE_PATH | '-'? NUMBER)
///
/// `option problem_type temporal` switches temporal mode on when the
/// configuration defers to the source.
pub fn option_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::OPTION_DECL);
    p.bump();
    let key = p.current_text().to_string();
    qual_name(p);
    let value = p.current_text().to_string();
    match p.current_kind() {
        SyntaxKind::FILE_PATH | SyntaxKind::NUMBER => p.bump(),
        SyntaxKind::MINUS if p.nth(1) == SyntaxKind::NUMBER => {
            p.bump();
            p.bump();
        }
        _ if at_qual_name(p) => {
            qual_name(p);
        }
        _ => {
            let message = format!("expected option value, found {}", found(p));
            p.error(ErrorCode::E0503, message);
        }
    }
    if key == "problem_type" && value == "temporal" {
        p.enable_temporal();
    }
    p.finish_node();
}

/// EvalDecl = 'eval' Expr
pub fn eval_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::EVAL_DECL);
    p.bump();
    expr(p);
    p.finish_node();
}

/// SExprDecl = SEXPR
pub fn sexpr_decl<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::SEXPR_DECL);
    p.bump();
    p.finish_node();
}
