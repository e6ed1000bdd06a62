//! Table references and join clauses.

use std::sync::Arc;

use crate::predicate::Predicate;

/// A resolved table identity: name plus optional alias.
///
/// Labels are shared immutable strings; every column handle of a table
/// clones the same allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    pub name: Arc<str>,
    pub alias: Option<Arc<str>>,
}

impl TableRef {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased(name: impl Into<Arc<str>>, alias: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    /// The label column handles bind to: alias if present, else name.
    pub fn label(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Renders a table reference for one of the two alias contexts.
///
/// SELECT's table list uses `name AS alias`; JOIN uses `name alias`. The
/// context is an explicit flag carried by the statement renderer, never
/// inferred.
#[derive(Debug, Clone)]
pub struct TableAlias {
    pub table: TableRef,
    pub with_as: bool,
}

/// Type of JOIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
        }
    }
}

/// A JOIN clause: kind, joined table, ON condition.
#[derive(Debug, Clone)]
pub struct Join {
    pub kind: JoinKind,
    pub table: TableRef,
    pub on: Predicate,
}
