//! Declaration parsing: the source file and its paragraphs
//!
//! ```text
//! SourceFile = LangDecl? ( ModuleDecl? ImportDecl* Paragraph* | EvalDecl* )
//! ```

mod bounds;
mod checks;
mod commands;
mod module;
mod predicates;
mod signatures;

use super::{BaseParser, SIG_MULT, found};
use crate::parser::errors::ErrorCode;
use crate::parser::syntax_kind::SyntaxKind;

pub use bounds::{bounds, inst_decl};
pub use checks::{assertion, example_decl, test_expect_decl, test_suite_decl};
pub use commands::{cmd_decl, scope, scope_and_bounds};
pub use module::{eval_decl, import_decl, module_decl, option_decl, sexpr_decl};
pub use predicates::{fact_decl, fun_decl, para_decls, pred_decl};
pub use signatures::sig_decl;

/// SourceFile, the root of a module parse
pub fn source_file<P: BaseParser>(p: &mut P) {
    p.start_node(SyntaxKind::SOURCE_FILE);

    if p.at(SyntaxKind::MODULE_KW) {
        module_decl(p);
    }

    let mut seen_paragraph = false;
    let mut seen_eval = false;
    let mut reported_mix = false;

    while !p.at_eof() {
        let before = p.get_pos();
        match p.current_kind() {
            SyntaxKind::MODULE_KW => {
                p.error(
                    ErrorCode::E0304,
                    "module declaration must be the first declaration".to_string(),
                );
                module_decl(p);
            }
            SyntaxKind::OPEN_KW => {
                if seen_paragraph {
                    p.error(
                        ErrorCode::E0802,
                        "'open' must come before the first paragraph".to_string(),
                    );
                }
                import_decl(p);
            }
            SyntaxKind::EVAL_KW => {
                if seen_paragraph && !reported_mix {
                    reported_mix = true;
                    p.error(
                        ErrorCode::E0803,
                        "'eval' cannot be mixed with other paragraphs".to_string(),
                    );
                }
                seen_eval = true;
                eval_decl(p);
            }
            _ => {
                if seen_eval && !reported_mix && at_paragraph(p) {
                    reported_mix = true;
                    p.error(
                        ErrorCode::E0803,
                        "paragraphs cannot follow 'eval' declarations".to_string(),
                    );
                }
                if paragraph(p) {
                    seen_paragraph = true;
                }
            }
        }

        if p.get_pos() == before && !p.at_eof() {
            let message = format!("expected a paragraph, found {}", found(p));
            p.error_recover(ErrorCode::E0304, message, &[]);
        }
    }

    p.finish_node();
}

/// Whether the current token starts a paragraph
pub fn at_paragraph<P: BaseParser>(p: &P) -> bool {
    match p.current_kind() {
        SyntaxKind::SIG_KW
        | SyntaxKind::ABSTRACT_KW
        | SyntaxKind::VAR_KW
        | SyntaxKind::PRED_KW
        | SyntaxKind::FUN_KW
        | SyntaxKind::FACT_KW
        | SyntaxKind::ASSERT_KW
        | SyntaxKind::RUN_KW
        | SyntaxKind::CHECK_KW
        | SyntaxKind::EXPECT_KW
        | SyntaxKind::EXAMPLE_KW
        | SyntaxKind::INST_KW
        | SyntaxKind::OPTION_KW
        | SyntaxKind::SEXPR => true,
        SyntaxKind::TEST_KW => matches!(p.nth(1), SyntaxKind::SUITE_KW | SyntaxKind::EXPECT_KW),
        SyntaxKind::IDENT => {
            p.nth(1) == SyntaxKind::COLON
                && matches!(p.nth(2), SyntaxKind::RUN_KW | SyntaxKind::CHECK_KW)
        }
        kind => SIG_MULT.contains(&kind),
    }
}

/// Parse one paragraph; false when the current token starts none
pub fn paragraph<P: BaseParser>(p: &mut P) -> bool {
    if !at_paragraph(p) {
        return false;
    }
    match p.current_kind() {
        SyntaxKind::PRED_KW => pred_decl(p),
        SyntaxKind::FUN_KW => fun_decl(p),
        SyntaxKind::FACT_KW => fact_decl(p),
        SyntaxKind::ASSERT_KW => {
            assertion(p);
        }
        SyntaxKind::RUN_KW | SyntaxKind::CHECK_KW | SyntaxKind::IDENT => cmd_decl(p),
        SyntaxKind::TEST_KW if p.nth(1) == SyntaxKind::SUITE_KW => test_suite_decl(p),
        SyntaxKind::TEST_KW | SyntaxKind::EXPECT_KW => test_expect_decl(p),
        SyntaxKind::EXAMPLE_KW => example_decl(p),
        SyntaxKind::INST_KW => inst_decl(p),
        SyntaxKind::OPTION_KW => option_decl(p),
        SyntaxKind::SEXPR => sexpr_decl(p),
        _ => sig_decl(p),
    }
    true
}
