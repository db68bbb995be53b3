use smol_str::SmolStr;

use super::*;
use crate::parser::grammar::is_name_segment;

// ============================================================================
// Names
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    pub fn text(&self) -> Option<SmolStr> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::IDENT)
            .map(|t| SmolStr::new(t.text()))
    }
}

ast_node!(NameList, NAME_LIST);

impl NameList {
    children_method!(names, Name);

    /// Texts of all names, in order
    pub fn texts(&self) -> Vec<SmolStr> {
        self.names().filter_map(|n| n.text()).collect()
    }
}

ast_node!(QualName, QUAL_NAME);

impl QualName {
    has_token_method!(is_this, THIS_KW, "this/A");

    /// Path segments without the `this/` prefix: `util/ordering` → `["util", "ordering"]`
    pub fn segments(&self) -> Vec<SmolStr> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| is_name_segment(t.kind()))
            .map(|t| SmolStr::new(t.text()))
            .collect()
    }

    /// The name as written, without trivia
    pub fn text(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }

    /// Last segment, the unqualified name
    pub fn last(&self) -> Option<SmolStr> {
        self.segments().pop()
    }
}

ast_node!(QualNameList, QUAL_NAME_LIST);

impl QualNameList {
    children_method!(names, QualName);
}

// ============================================================================
// Multiplicities
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    Lone,
    Some,
    One,
    Two,
    Set,
    Func,
    Pfunc,
}

ast_node!(Mult, MULT);

impl Mult {
    token_to_enum_method!(kind, Multiplicity, [
        LONE_KW => Lone,
        SOME_KW => Some,
        ONE_KW => One,
        TWO_KW => Two,
        SET_KW => Set,
        FUNC_KW => Func,
        PFUNC_KW => Pfunc,
    ]);
}
