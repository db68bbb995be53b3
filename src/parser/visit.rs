//! Read-only traversal of a parsed tree
//!
//! Two styles are offered:
//!
//! - [`Listener`]: callbacks on entering and leaving every node, driven in
//!   preorder by [`walk`]. The listener observes; it cannot steer.
//! - [`Visitor`]: each node produces a value. The default for a node is to
//!   visit its children and return the last result; the typed hooks
//!   [`Visitor::visit_paragraph`] and [`Visitor::visit_expr`] receive the
//!   [`Paragraph`] and [`Expr`] sum types to `match` on.

use rowan::{NodeOrToken, WalkEvent};

use super::ast::{AstNode, Expr, Paragraph};
use super::syntax_kind::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Callbacks for a preorder walk
pub trait Listener {
    fn enter(&mut self, _node: &SyntaxNode) {}

    fn exit(&mut self, _node: &SyntaxNode) {}

    /// Significant tokens only; trivia is skipped
    fn token(&mut self, _token: &SyntaxToken) {}

    /// Called instead of `enter` for ERROR nodes
    fn enter_error(&mut self, _node: &SyntaxNode) {}
}

/// Drive `listener` over `root` and all its descendants in source order
pub fn walk<L: Listener>(root: &SyntaxNode, listener: &mut L) {
    for event in root.preorder_with_tokens() {
        match event {
            WalkEvent::Enter(NodeOrToken::Node(node)) => {
                if node.kind() == SyntaxKind::ERROR {
                    listener.enter_error(&node);
                } else {
                    listener.enter(&node);
                }
            }
            WalkEvent::Enter(NodeOrToken::Token(token)) => {
                if !token.kind().is_trivia() {
                    listener.token(&token);
                }
            }
            WalkEvent::Leave(NodeOrToken::Node(node)) => listener.exit(&node),
            WalkEvent::Leave(NodeOrToken::Token(_)) => {}
        }
    }
}

/// A value-producing traversal
pub trait Visitor: Sized {
    type Output: Default;

    fn visit(&mut self, node: &SyntaxNode) -> Self::Output {
        if node.kind() == SyntaxKind::ERROR {
            return self.visit_error(node);
        }
        if let Some(paragraph) = Paragraph::cast(node.clone()) {
            return self.visit_paragraph(&paragraph);
        }
        if let Some(expr) = Expr::cast(node.clone()) {
            return self.visit_expr(&expr);
        }
        self.visit_children(node)
    }

    fn visit_children(&mut self, node: &SyntaxNode) -> Self::Output {
        walk_children(self, node)
    }

    fn visit_paragraph(&mut self, paragraph: &Paragraph) -> Self::Output {
        self.visit_children(paragraph.syntax())
    }

    fn visit_expr(&mut self, expr: &Expr) -> Self::Output {
        self.visit_children(expr.syntax())
    }

    fn visit_error(&mut self, _node: &SyntaxNode) -> Self::Output {
        Self::Output::default()
    }
}

/// Visit every child node, returning the result of the last one
pub fn walk_children<V: Visitor>(visitor: &mut V, node: &SyntaxNode) -> V::Output {
    let mut result = V::Output::default();
    for child in node.children() {
        result = visitor.visit(&child);
    }
    result
}

/// Entry point for a [`Visitor`]
pub fn accept<V: Visitor>(node: &SyntaxNode, visitor: &mut V) -> V::Output {
    visitor.visit(node)
}
