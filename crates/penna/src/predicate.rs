//! Boolean-valued predicate trees.

use crate::expr::{ColumnRef, CompareOp, Term};
use crate::stmt::Select;
use crate::value::Value;

/// A boolean-valued expression tree.
///
/// Nodes are immutable after construction and own their children; rendering
/// walks the tree without touching it.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// `left <op> right`
    Compare {
        op: CompareOp,
        left: Term,
        right: Term,
    },
    /// `column IN @pN` / `column NOT IN @pN`; the whole collection is one
    /// bound parameter, never per-element placeholders.
    In {
        column: ColumnRef,
        values: Value,
        negated: bool,
    },
    /// `left AND right`
    And(Box<Predicate>, Box<Predicate>),
    /// `EXISTS (…)` / `NOT EXISTS (…)` over a complete sub-select.
    Exists { query: Box<Select>, negated: bool },
}

impl Predicate {
    /// Conjoin with `other`. Longer chains are built by nesting; no
    /// precedence parentheses are inserted.
    pub fn and(self, other: Predicate) -> Predicate {
        Predicate::And(Box::new(self), Box::new(other))
    }

    /// `EXISTS (query)`
    pub fn exists(query: Select) -> Predicate {
        Predicate::Exists {
            query: Box::new(query),
            negated: false,
        }
    }

    /// `NOT EXISTS (query)`
    pub fn not_exists(query: Select) -> Predicate {
        Predicate::Exists {
            query: Box::new(query),
            negated: true,
        }
    }
}
