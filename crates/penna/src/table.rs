//! Table identity and shape synthesis support.

use std::ops::Deref;
use std::sync::Arc;

use crate::clause::TableRef;

/// A synthesized table shape: one [`Column`](crate::Column) handle per
/// declared column, each bound to the table's resolved label.
///
/// Implemented via `#[derive(Table)]` on a public, column-only struct:
///
/// ```
/// use penna::{Column, Table};
///
/// #[derive(Table)]
/// #[table(name = "books")]
/// pub struct Books {
///     pub id: Column<i64>,
///     #[column("author_id")]
///     pub author: Column<i64>,
/// }
///
/// let b = Books::shared();
/// assert_eq!(b.author.owner(), "books");
/// assert_eq!(b.author.name(), "author_id");
/// ```
pub trait Table: Sized {
    /// The table name resolved from the shape's `#[table(name = "…")]` tag.
    const NAME: &'static str;

    /// Manufacture handles bound to `label`: the table's alias, or its name
    /// when unaliased. The label is fixed for the lifetime of the value.
    fn bind(label: Arc<str>) -> Self;

    /// The shared, unaliased instance. Synthesized at most once per shape
    /// and cached process-wide; concurrent callers observe the same value.
    fn shared() -> &'static Self;

    /// A fresh instance whose column handles are bound to `alias`.
    fn aliased(alias: &str) -> Aliased<Self> {
        Aliased::new(alias)
    }
}

/// A table instance carrying an alias.
///
/// Derefs to the shape, so columns read the same as on the shared instance;
/// the alias is retained for FROM and JOIN rendering.
pub struct Aliased<T> {
    columns: T,
    alias: Arc<str>,
}

impl<T: Table> Aliased<T> {
    pub fn new(alias: &str) -> Self {
        let alias: Arc<str> = Arc::from(alias);
        Self {
            columns: T::bind(Arc::clone(&alias)),
            alias,
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }
}

impl<T> Deref for Aliased<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.columns
    }
}

/// Anything that can stand in a FROM or JOIN position.
///
/// Implemented by the derive for every shape and generically for
/// [`Aliased`].
pub trait TableSource {
    /// The table identity consumed by FROM and JOIN clauses.
    fn table_ref(&self) -> TableRef;
}

impl<T: Table> TableSource for Aliased<T> {
    fn table_ref(&self) -> TableRef {
        TableRef::aliased(T::NAME, Arc::clone(&self.alias))
    }
}
