use smol_str::SmolStr;

use super::*;

ast_node!(Bounds, BOUNDS);

impl Bounds {
    has_token_method!(is_exact, EXACTLY_KW, "for exactly { ... }");
    children_method!(bounds, Bound);

    /// `for instName` refers to a named instance instead of listing bounds
    pub fn reference(&self) -> Option<QualName> {
        self.0.children().find_map(QualName::cast)
    }
}

ast_node!(Bound, BOUND);

impl Bound {
    /// `no Node.edges`
    pub fn is_no(&self) -> bool {
        has_token(&self.0, SyntaxKind::NO_KW)
    }

    first_child_method!(lhs, BoundLhs);
    first_child_method!(rhs, BindRhsUnion);

    /// Relation between both sides: `in`, `=`, `ni` ...
    pub fn op(&self) -> Option<SyntaxKind> {
        self.0
            .children()
            .find_map(CompareOp::cast)
            .and_then(|op| op.op())
    }

    /// A bare name naming another instance (`inst i { base }`)
    pub fn is_reference(&self) -> bool {
        !self.is_no() && self.op().is_none()
    }
}

ast_node!(BoundLhs, BOUND_LHS);

impl BoundLhs {
    has_token_method!(is_cardinality, HASH, "#Node = 3");
    children_method!(path, QualName);
}

ast_node!(BindRhsUnion, BIND_RHS_UNION);

impl BindRhsUnion {
    children_method!(products, BindRhsProduct);
}

ast_node!(BindRhsProduct, BIND_RHS_PRODUCT);

impl BindRhsProduct {
    children_method!(atoms, BindRhsAtom);
}

/// One value on the right of a bound
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoundValue {
    Atom(SmolStr),
    Number(i64),
    None,
    Name(QualName),
    Union(BindRhsUnion),
}

ast_node!(BindRhsAtom, BIND_RHS_ATOM);

impl BindRhsAtom {
    pub fn value(&self) -> Option<BoundValue> {
        if let Some(atom) = find_token(&self.0, SyntaxKind::ATOM_NAME) {
            return Some(BoundValue::Atom(SmolStr::new(
                atom.text().trim_start_matches('`'),
            )));
        }
        if has_token(&self.0, SyntaxKind::NONE_KW) {
            return Some(BoundValue::None);
        }
        if let Some(name) = self.0.children().find_map(QualName::cast) {
            return Some(BoundValue::Name(name));
        }
        if let Some(union) = self.0.children().find_map(BindRhsUnion::cast) {
            return Some(BoundValue::Union(union));
        }
        number_value(&self.0).map(BoundValue::Number)
    }
}
