//! Render statements to SQL text plus bound parameters.

use crate::RenderedSql;
use crate::clause::{Join, TableAlias};
use crate::expr::{ColumnRef, Term};
use crate::predicate::Predicate;
use crate::stmt::{Insert, Multiple, OrderBy, Select};
use crate::value::Value;

/// Generates sequential placeholder names: `@p1`, `@p2`, …
///
/// One namer lives inside each writer; numbering restarts per render.
#[derive(Debug, Default)]
pub struct ParamNamer {
    next_index: usize,
}

impl ParamNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next placeholder name. Strictly sequential, never reused.
    pub fn next(&mut self) -> String {
        self.next_index += 1;
        format!("@p{}", self.next_index)
    }
}

/// The single rendering sink: accumulates text and bound parameter values.
///
/// One writer serves exactly one top-level render so text and parameter
/// order stay in lockstep; it must not be shared across renders.
#[derive(Debug, Default)]
pub struct SqlWriter {
    sql: String,
    params: Vec<Value>,
    namer: ParamNamer,
}

impl SqlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw text.
    pub fn push(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    /// Bind `value` to the next placeholder and return the placeholder name
    /// for the caller to append as text.
    pub fn add_param(&mut self, value: Value) -> String {
        let name = self.namer.next();
        self.params.push(value);
        name
    }

    /// Render each item against self, joined by `sep`. An empty list
    /// renders nothing.
    pub fn join<R: Render>(&mut self, sep: &str, items: &[R]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push(sep);
            }
            item.render(self);
        }
    }

    /// Finish rendering and return the `(sql, params)` pair.
    pub fn finish(self) -> RenderedSql {
        RenderedSql {
            sql: self.sql,
            params: self.params,
        }
    }
}

// ============================================================================
// Render implementations
// ============================================================================

/// Trait for types that render themselves into a writer.
///
/// Rendering has no side effect on the tree, only on the writer.
pub trait Render {
    fn render(&self, sql: &mut SqlWriter);
}

impl Render for ColumnRef {
    fn render(&self, sql: &mut SqlWriter) {
        sql.push(&self.owner);
        sql.push(".");
        sql.push(&self.name);
    }
}

impl Render for Term {
    fn render(&self, sql: &mut SqlWriter) {
        match self {
            Term::Value(value) => {
                let name = sql.add_param(value.clone());
                sql.push(&name);
            }
            Term::Column(column) => column.render(sql),
        }
    }
}

impl Render for Predicate {
    fn render(&self, sql: &mut SqlWriter) {
        match self {
            Predicate::Compare { op, left, right } => {
                left.render(sql);
                sql.push(" ");
                sql.push(op.as_str());
                sql.push(" ");
                right.render(sql);
            }
            Predicate::In {
                column,
                values,
                negated,
            } => {
                column.render(sql);
                sql.push(if *negated { " NOT IN " } else { " IN " });
                let name = sql.add_param(values.clone());
                sql.push(&name);
            }
            Predicate::And(left, right) => {
                left.render(sql);
                sql.push(" AND ");
                right.render(sql);
            }
            Predicate::Exists { query, negated } => {
                sql.push(if *negated { "NOT EXISTS (" } else { "EXISTS (" });
                query.render(sql);
                sql.push(")");
            }
        }
    }
}

impl Render for TableAlias {
    fn render(&self, sql: &mut SqlWriter) {
        sql.push(&self.table.name);
        if let Some(alias) = &self.table.alias {
            sql.push(if self.with_as { " AS " } else { " " });
            sql.push(alias);
        }
    }
}

impl Render for Join {
    fn render(&self, sql: &mut SqlWriter) {
        sql.push(self.kind.as_str());
        sql.push(" ");
        TableAlias {
            table: self.table.clone(),
            with_as: false,
        }
        .render(sql);
        sql.push(" ON ");
        self.on.render(sql);
    }
}

impl Render for OrderBy {
    fn render(&self, sql: &mut SqlWriter) {
        self.column.render(sql);
        sql.push(if self.desc { " DESC" } else { " ASC" });
    }
}

impl Render for Select {
    fn render(&self, sql: &mut SqlWriter) {
        sql.push("SELECT ");
        if self.columns.is_empty() {
            sql.push("*");
        } else {
            sql.join(", ", &self.columns);
        }

        if let Some(from) = &self.from {
            sql.push(" FROM ");
            TableAlias {
                table: from.clone(),
                with_as: true,
            }
            .render(sql);
        }

        for join in &self.joins {
            sql.push(" ");
            join.render(sql);
        }

        if let Some(where_) = &self.where_ {
            sql.push(" WHERE ");
            where_.render(sql);
        }

        if !self.order_by.is_empty() {
            sql.push(" ORDER BY ");
            sql.join(", ", &self.order_by);
        }

        if let Some(limit) = &self.limit {
            sql.push(" LIMIT ");
            let name = sql.add_param(limit.clone());
            sql.push(&name);
        }

        if let Some(offset) = &self.offset {
            sql.push(" OFFSET ");
            let name = sql.add_param(offset.clone());
            sql.push(&name);
        }
    }
}

impl Render for Insert {
    fn render(&self, sql: &mut SqlWriter) {
        sql.push("INSERT INTO ");
        sql.push(&self.table);
        sql.push(" (");
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                sql.push(", ");
            }
            sql.push(column);
        }
        sql.push(") VALUES (");
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                sql.push(", ");
            }
            let name = sql.add_param(value.clone());
            sql.push(&name);
        }
        sql.push(")");
    }
}

impl Render for Multiple {
    fn render(&self, sql: &mut SqlWriter) {
        sql.join("; ", &self.queries);
    }
}

// ============================================================================
// Convenience
// ============================================================================

/// Render a statement against a fresh writer.
pub fn render(stmt: &impl Render) -> RenderedSql {
    let mut sql = SqlWriter::new();
    stmt.render(&mut sql);
    sql.finish()
}

// ============================================================================
// Tests
// ============================================================================
