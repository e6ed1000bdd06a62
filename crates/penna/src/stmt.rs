//! SQL statements.

use std::sync::Arc;

use crate::clause::{Join, JoinKind, TableRef};
use crate::expr::{Column, ColumnRef};
use crate::predicate::Predicate;
use crate::table::TableSource;
use crate::value::Value;

/// A SELECT statement.
///
/// An empty column list renders as `*`.
#[derive(Debug, Clone, Default)]
pub struct Select {
    pub columns: Vec<ColumnRef>,
    pub from: Option<TableRef>,
    pub joins: Vec<Join>,
    pub where_: Option<Predicate>,
    pub order_by: Vec<OrderBy>,
    pub limit: Option<Value>,
    pub offset: Option<Value>,
}

/// ORDER BY entry.
#[derive(Debug, Clone)]
pub struct OrderBy {
    pub column: ColumnRef,
    pub desc: bool,
}

impl OrderBy {
    pub fn asc<T>(column: &Column<T>) -> Self {
        Self {
            column: column.reference().clone(),
            desc: false,
        }
    }

    pub fn desc<T>(column: &Column<T>) -> Self {
        Self {
            column: column.reference().clone(),
            desc: true,
        }
    }
}

/// An INSERT statement: ordered (column, value) pairs.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: Arc<str>,
    pub columns: Vec<Arc<str>>,
    pub values: Vec<Value>,
}

/// An ordered batch of SELECT statements rendered as one command.
///
/// Statements are joined by `"; "`; the shared writer keeps parameter
/// numbering continuous across the batch.
#[derive(Debug, Clone, Default)]
pub struct Multiple {
    pub queries: Vec<Select>,
}

// ============================================================================
// Builder-style constructors
// ============================================================================

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column to the select list.
    pub fn column<T>(mut self, column: &Column<T>) -> Self {
        self.columns.push(column.reference().clone());
        self
    }

    pub fn from(mut self, source: &impl TableSource) -> Self {
        self.from = Some(source.table_ref());
        self
    }

    pub fn join(mut self, kind: JoinKind, source: &impl TableSource, on: Predicate) -> Self {
        self.joins.push(Join {
            kind,
            table: source.table_ref(),
            on,
        });
        self
    }

    /// Attach a WHERE condition. Repeated calls conjoin:
    /// `where_(a).where_(b)` renders `WHERE a AND b`.
    pub fn where_(mut self, predicate: Predicate) -> Self {
        self.where_ = Some(match self.where_ {
            Some(existing) => existing.and(predicate),
            None => predicate,
        });
        self
    }

    /// Attach `WHERE EXISTS (sub)`; conjoins like [`Select::where_`].
    pub fn where_exists(self, sub: Select) -> Self {
        self.where_(Predicate::exists(sub))
    }

    /// Attach `WHERE NOT EXISTS (sub)`; conjoins like [`Select::where_`].
    pub fn where_not_exists(self, sub: Select) -> Self {
        self.where_(Predicate::not_exists(sub))
    }

    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order_by.push(order);
        self
    }

    /// Bound as a parameter, like every other value.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(Value::I64(n));
        self
    }

    /// Bound as a parameter, like every other value.
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = Some(Value::I64(n));
        self
    }
}

impl Insert {
    /// Start an INSERT into `source`'s table. Uses the table name, never the
    /// alias.
    pub fn into(source: &impl TableSource) -> Self {
        Self {
            table: source.table_ref().name,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Append one (column, value) pair. Column *i* corresponds to the
    /// placeholder at position *i* in the VALUES clause.
    pub fn values<T, V>(mut self, column: &Column<T>, value: V) -> Self
    where
        T: Into<Value>,
        V: Into<T>,
    {
        self.columns.push(column.reference().name.clone());
        let value: T = value.into();
        self.values.push(value.into());
        self
    }
}

impl Multiple {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, query: Select) -> Self {
        self.queries.push(query);
        self
    }
}
