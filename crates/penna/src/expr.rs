//! Typed column handles and expression operands.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::predicate::Predicate;
use crate::value::Value;

/// An untyped column reference: owner label plus column name.
///
/// The owner label is the table's alias if one was bound, else its name.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub owner: Arc<str>,
    pub name: Arc<str>,
}

impl ColumnRef {
    pub fn new(owner: Arc<str>, name: impl Into<Arc<str>>) -> Self {
        Self {
            owner,
            name: name.into(),
        }
    }
}

/// A typed handle to one table column.
///
/// Handles are manufactured when a table value is synthesized and never
/// mutated afterwards. `T` is the column's value domain: it constrains which
/// operands a comparison accepts and which items a membership test takes.
pub struct Column<T> {
    reference: ColumnRef,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Column<T> {
    pub fn new(owner: Arc<str>, name: impl Into<Arc<str>>) -> Self {
        Self {
            reference: ColumnRef::new(owner, name),
            _marker: PhantomData,
        }
    }

    /// The label of the table this handle is bound to.
    pub fn owner(&self) -> &str {
        &self.reference.owner
    }

    /// The column name.
    pub fn name(&self) -> &str {
        &self.reference.name
    }

    pub fn reference(&self) -> &ColumnRef {
        &self.reference
    }
}

// Manual impls: a handle is always cloneable and printable, whatever T is.
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            reference: self.reference.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("owner", &self.reference.owner)
            .field("name", &self.reference.name)
            .finish()
    }
}

impl<T: Into<Value>> Column<T> {
    /// `self = other`
    pub fn eq(&self, other: impl Into<Expr<T>>) -> Predicate {
        self.compare(CompareOp::Eq, other)
    }

    /// `self <> other`
    pub fn ne(&self, other: impl Into<Expr<T>>) -> Predicate {
        self.compare(CompareOp::Ne, other)
    }

    /// `self < other`
    pub fn lt(&self, other: impl Into<Expr<T>>) -> Predicate {
        self.compare(CompareOp::Lt, other)
    }

    /// `self <= other`
    pub fn le(&self, other: impl Into<Expr<T>>) -> Predicate {
        self.compare(CompareOp::Le, other)
    }

    /// `self > other`
    pub fn gt(&self, other: impl Into<Expr<T>>) -> Predicate {
        self.compare(CompareOp::Gt, other)
    }

    /// `self >= other`
    pub fn ge(&self, other: impl Into<Expr<T>>) -> Predicate {
        self.compare(CompareOp::Ge, other)
    }

    fn compare(&self, op: CompareOp, other: impl Into<Expr<T>>) -> Predicate {
        Predicate::Compare {
            op,
            left: Term::Column(self.reference.clone()),
            right: other.into().into_term(),
        }
    }

    /// `self IN @pN`; the whole collection is bound as one parameter.
    pub fn is_in(&self, values: impl IntoIterator<Item = T>) -> Predicate {
        self.membership(values, false)
    }

    /// `self NOT IN @pN`; the whole collection is bound as one parameter.
    pub fn not_in(&self, values: impl IntoIterator<Item = T>) -> Predicate {
        self.membership(values, true)
    }

    fn membership(&self, values: impl IntoIterator<Item = T>, negated: bool) -> Predicate {
        Predicate::In {
            column: self.reference.clone(),
            values: Value::List(values.into_iter().map(Into::into).collect()),
            negated,
        }
    }
}

/// A typed expression operand: a literal value or a column reference.
#[derive(Debug, Clone)]
pub enum Expr<T> {
    Value(T),
    Column(Column<T>),
}

impl<T: Into<Value>> Expr<T> {
    pub(crate) fn into_term(self) -> Term {
        match self {
            Expr::Value(v) => Term::Value(v.into()),
            Expr::Column(c) => Term::Column(c.reference),
        }
    }
}

impl<T> From<T> for Expr<T> {
    fn from(v: T) -> Self {
        Expr::Value(v)
    }
}

impl<T> From<Column<T>> for Expr<T> {
    fn from(c: Column<T>) -> Self {
        Expr::Column(c)
    }
}

impl<T> From<&Column<T>> for Expr<T> {
    fn from(c: &Column<T>) -> Self {
        Expr::Column(c.clone())
    }
}

impl From<&str> for Expr<String> {
    fn from(v: &str) -> Self {
        Expr::Value(v.to_owned())
    }
}

/// Comparison operators; one shared renderer covers all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

/// A lowered operand in the render tree. Type checking happened at
/// construction; rendering only needs text or a bindable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Value(Value),
    Column(ColumnRef),
}
