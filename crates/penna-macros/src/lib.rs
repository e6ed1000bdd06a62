//! Proc macros for penna.

use proc_macro::TokenStream;

mod table;

/// Synthesize a table value from a column-only shape struct.
///
/// The shape must be `pub`, declare only named `Column<T>` fields, and carry
/// a `#[table(name = "…")]` attribute. A field's column name defaults to the
/// field identifier and can be overridden with `#[column("…")]`. Violations
/// are compile errors naming the offending shape and member; the shape is
/// either fully synthesized or not produced at all.
///
/// # Example
///
/// ```ignore
/// #[derive(Table)]
/// #[table(name = "books")]
/// pub struct Books {
///     #[column("author_id")]
///     pub author: Column<i64>,
///     pub rating: Column<f64>,
/// }
///
/// let b = Books::shared();          // cached, bound to "books"
/// let b2 = Books::aliased("b");     // fresh, bound to "b"
/// ```
#[proc_macro_derive(Table, attributes(table, column))]
pub fn derive_table(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    table::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
