//! Static operator table
//!
//! Levels are numbered loosest first. Level 0 (binders) and level 20 (atoms)
//! have no operator tokens and are handled directly by the parser.

use crate::parser::syntax_kind::SyntaxKind;
use SyntaxKind::*;

/// How an operator combines with its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    BinaryLeft,
    BinaryRight,
    BinaryNonAssoc,
    /// Operand parsed one level tighter than the operator
    Prefix,
    /// Operand parsed at the operator's own level (`!!a`, `##r`, `~^r`)
    PrefixSelf,
    Postfix,
}

impl Fixity {
    pub fn is_binary(self) -> bool {
        matches!(self, Self::BinaryLeft | Self::BinaryRight | Self::BinaryNonAssoc)
    }

    pub fn is_prefix(self) -> bool {
        matches!(self, Self::Prefix | Self::PrefixSelf)
    }
}

/// One row of the precedence table
#[derive(Debug, Clone, Copy)]
pub struct OperatorLevel {
    pub level: u8,
    pub ops: &'static [SyntaxKind],
    pub fixity: Fixity,
    pub node: SyntaxKind,
    /// Only valid in temporal mode
    pub temporal: bool,
}

impl OperatorLevel {
    const fn new(level: u8, ops: &'static [SyntaxKind], fixity: Fixity, node: SyntaxKind) -> Self {
        Self {
            level,
            ops,
            fixity,
            node,
            temporal: false,
        }
    }

    const fn temporal(mut self) -> Self {
        self.temporal = true;
        self
    }

    /// Minimum level for the operand that follows the operator
    pub fn operand_level(&self) -> u8 {
        match self.fixity {
            Fixity::BinaryRight | Fixity::PrefixSelf => self.level,
            _ => self.level + 1,
        }
    }
}

pub const OR_LEVEL: u8 = 1;
pub const IMPLIES_LEVEL: u8 = 4;
pub const UNARY_LEVEL: u8 = 7;
pub const COMPARE_LEVEL: u8 = 8;
pub const MULT_LEVEL: u8 = 9;
pub const ARROW_LEVEL: u8 = 14;
pub const BOX_JOIN_LEVEL: u8 = 16;
pub const DOT_LEVEL: u8 = 17;
pub const PRIME_LEVEL: u8 = 18;
pub const ATOM_LEVEL: u8 = 20;

pub static OPERATOR_TABLE: &[OperatorLevel] = &[
    OperatorLevel::new(OR_LEVEL, &[OR_KW, PIPE_PIPE], Fixity::BinaryLeft, OR_EXPR),
    OperatorLevel::new(2, &[XOR_KW], Fixity::BinaryLeft, XOR_EXPR),
    OperatorLevel::new(3, &[IFF_KW, IFF_ARROW], Fixity::BinaryLeft, IFF_EXPR),
    // `else` is an optional tail of this level, not an operator of its own
    OperatorLevel::new(IMPLIES_LEVEL, &[IMPLIES_KW, FAT_ARROW], Fixity::BinaryRight, IMPLIES_EXPR),
    OperatorLevel::new(5, &[AND_KW, AMP_AMP], Fixity::BinaryLeft, AND_EXPR),
    OperatorLevel::new(
        6,
        &[UNTIL_KW, RELEASE_KW, SINCE_KW, TRIGGERED_KW],
        Fixity::BinaryLeft,
        TEMPORAL_BINARY_EXPR,
    )
    .temporal(),
    OperatorLevel::new(UNARY_LEVEL, &[BANG, NOT_KW], Fixity::PrefixSelf, UNARY_EXPR),
    OperatorLevel::new(
        UNARY_LEVEL,
        &[ALWAYS_KW, EVENTUALLY_KW, AFTER_KW, BEFORE_KW, ONCE_KW, HISTORICALLY_KW],
        Fixity::PrefixSelf,
        UNARY_EXPR,
    )
    .temporal(),
    OperatorLevel::new(
        COMPARE_LEVEL,
        &[IN_KW, EQ, LT, GT, LT_EQ, GT_EQ, IS_KW, NI_KW],
        Fixity::BinaryLeft,
        COMPARE_EXPR,
    ),
    OperatorLevel::new(
        MULT_LEVEL,
        &[NO_KW, SOME_KW, LONE_KW, ONE_KW, TWO_KW, SET_KW],
        Fixity::Prefix,
        MULT_EXPR,
    ),
    OperatorLevel::new(10, &[PLUS, MINUS], Fixity::BinaryLeft, UNION_EXPR),
    OperatorLevel::new(11, &[HASH], Fixity::PrefixSelf, CARD_EXPR),
    OperatorLevel::new(12, &[PLUS_PLUS], Fixity::BinaryLeft, OVERRIDE_EXPR),
    OperatorLevel::new(13, &[AMP], Fixity::BinaryLeft, INTERSECT_EXPR),
    OperatorLevel::new(ARROW_LEVEL, &[ARROW], Fixity::BinaryRight, ARROW_EXPR),
    OperatorLevel::new(15, &[SUBT, SUPT], Fixity::BinaryLeft, RESTRICT_EXPR),
    OperatorLevel::new(BOX_JOIN_LEVEL, &[L_BRACKET], Fixity::Postfix, BOX_JOIN_EXPR),
    OperatorLevel::new(DOT_LEVEL, &[DOT], Fixity::BinaryLeft, DOT_JOIN_EXPR),
    OperatorLevel::new(PRIME_LEVEL, &[PRIME], Fixity::Postfix, PRIME_EXPR).temporal(),
    OperatorLevel::new(19, &[TILDE, CARET, STAR], Fixity::PrefixSelf, CLOSURE_EXPR),
];

/// Quantifier keywords (level 0); `no some lone one two` double as level-9
/// multiplicities
pub const QUANTIFIERS: &[SyntaxKind] = &[ALL_KW, NO_KW, SUM_KW, LONE_KW, SOME_KW, ONE_KW, TWO_KW];

/// Multiplicities allowed on either side of `->`
pub const ARROW_OP_MULT: &[SyntaxKind] = &[LONE_KW, SOME_KW, ONE_KW, TWO_KW, SET_KW];

/// Keywords after `is` that end an expression instead of continuing a comparison
pub const TEST_RESULTS: &[SyntaxKind] = &[
    SAT_KW,
    UNSAT_KW,
    THEOREM_KW,
    FORGE_ERROR_KW,
    SUFFICIENT_KW,
    NECESSARY_KW,
    CONSISTENT_KW,
    INCONSISTENT_KW,
];

/// Level of a token in infix or postfix position
pub fn infix_op(kind: SyntaxKind) -> Option<&'static OperatorLevel> {
    OPERATOR_TABLE
        .iter()
        .find(|row| !row.fixity.is_prefix() && row.ops.contains(&kind))
}

/// Level of a token in prefix position
pub fn prefix_op(kind: SyntaxKind) -> Option<&'static OperatorLevel> {
    OPERATOR_TABLE
        .iter()
        .find(|row| row.fixity.is_prefix() && row.ops.contains(&kind))
}

pub fn level(level: u8) -> impl Iterator<Item = &'static OperatorLevel> {
    OPERATOR_TABLE.iter().filter(move |row| row.level == level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_no_token_in_two_levels_of_same_fixity() {
        let mut seen: HashMap<(SyntaxKind, bool), u8> = HashMap::new();
        for row in OPERATOR_TABLE {
            for &op in row.ops {
                let key = (op, row.fixity.is_prefix());
                if let Some(previous) = seen.insert(key, row.level) {
                    panic!("{op:?} appears at levels {previous} and {}", row.level);
                }
            }
        }
    }

    #[test]
    fn test_levels_are_sorted_and_in_range() {
        let levels: Vec<u8> = OPERATOR_TABLE.iter().map(|row| row.level).collect();
        let mut sorted = levels.clone();
        sorted.sort();
        assert_eq!(levels, sorted);
        assert!(levels.iter().all(|&l| l > 0 && l < ATOM_LEVEL));
    }

    #[test]
    fn test_every_level_has_a_row() {
        for l in 1..ATOM_LEVEL {
            assert!(level(l).next().is_some(), "level {l} has no operators");
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(infix_op(AMP).map(|r| r.level), Some(13));
        assert_eq!(infix_op(PLUS).map(|r| r.level), Some(10));
        assert_eq!(prefix_op(HASH).map(|r| r.node), Some(CARD_EXPR));
        assert_eq!(prefix_op(MINUS).map(|r| r.level), None);
        assert!(infix_op(PRIME).is_some_and(|r| r.temporal));
        assert!(prefix_op(ALWAYS_KW).is_some_and(|r| r.temporal));
        assert!(!prefix_op(BANG).is_some_and(|r| r.temporal));
    }

    #[test]
    fn test_operand_levels() {
        assert_eq!(infix_op(ARROW).map(|r| r.operand_level()), Some(ARROW_LEVEL));
        assert_eq!(infix_op(AMP).map(|r| r.operand_level()), Some(14));
        assert_eq!(prefix_op(NO_KW).map(|r| r.operand_level()), Some(10));
        assert_eq!(prefix_op(TILDE).map(|r| r.operand_level()), Some(19));
    }
}
