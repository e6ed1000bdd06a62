//! Implementation of `#[derive(Table)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Fields, Ident, LitStr, Result, Visibility};

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream> {
    let ident = &input.ident;

    if !matches!(input.vis, Visibility::Public(_)) {
        return Err(Error::new_spanned(
            ident,
            format!("table shape `{ident}` must be `pub`"),
        ));
    }

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            format!("table shape `{ident}` must not be generic"),
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new_spanned(
                    ident,
                    format!("table shape `{ident}` must be a struct with named fields"),
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                ident,
                format!("table shape `{ident}` must be a struct with named fields"),
            ));
        }
    };

    let table_name = table_name(input)?;

    let mut bindings = Vec::new();
    for field in fields {
        check_column_field(ident, field)?;
        let field_ident = field.ident.as_ref().unwrap();
        let column_name = column_name(field)?;
        bindings.push(quote! {
            #field_ident: ::penna::Column::new(::std::sync::Arc::clone(&label), #column_name)
        });
    }

    Ok(quote! {
        #[automatically_derived]
        impl ::penna::Table for #ident {
            const NAME: &'static str = #table_name;

            fn bind(label: ::std::sync::Arc<str>) -> Self {
                Self {
                    #(#bindings,)*
                }
            }

            fn shared() -> &'static Self {
                static SHAPE: ::std::sync::OnceLock<#ident> = ::std::sync::OnceLock::new();
                SHAPE.get_or_init(|| {
                    <#ident as ::penna::Table>::bind(::std::sync::Arc::from(
                        <#ident as ::penna::Table>::NAME,
                    ))
                })
            }
        }

        #[automatically_derived]
        impl ::penna::TableSource for #ident {
            fn table_ref(&self) -> ::penna::TableRef {
                ::penna::TableRef::new(<#ident as ::penna::Table>::NAME)
            }
        }
    })
}

/// Resolve the table name from the shape's `#[table(name = "…")]` tag.
fn table_name(input: &DeriveInput) -> Result<String> {
    for attr in &input.attrs {
        if attr.path().is_ident("table") {
            let mut name = None;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    name = Some(value.value());
                    Ok(())
                } else {
                    Err(meta.error("unknown `table` attribute; expected `name = \"…\"`"))
                }
            })?;
            return name.ok_or_else(|| {
                Error::new_spanned(
                    attr,
                    format!(
                        "`#[table]` on `{}` is missing `name = \"…\"`",
                        input.ident
                    ),
                )
            });
        }
    }

    Err(Error::new_spanned(
        &input.ident,
        format!(
            "table shape `{}` is missing the `#[table(name = \"…\")]` attribute",
            input.ident
        ),
    ))
}

/// Resolve a field's column name: `#[column("…")]` if present, else the
/// field identifier verbatim.
fn column_name(field: &Field) -> Result<String> {
    for attr in &field.attrs {
        if attr.path().is_ident("column") {
            let name: LitStr = attr.parse_args()?;
            return Ok(name.value());
        }
    }
    Ok(field.ident.as_ref().unwrap().to_string())
}

/// A declared member must be a `pub` field of the recognized column-handle
/// shape `Column<T>`.
fn check_column_field(shape: &Ident, field: &Field) -> Result<()> {
    let field_ident = field.ident.as_ref().unwrap();

    if !matches!(field.vis, Visibility::Public(_)) {
        return Err(Error::new_spanned(
            field_ident,
            format!("column `{shape}.{field_ident}` must be `pub`"),
        ));
    }

    let column_error = || {
        Error::new_spanned(
            &field.ty,
            format!("column `{shape}.{field_ident}` must be of type `Column<T>`"),
        )
    };

    let syn::Type::Path(type_path) = &field.ty else {
        return Err(column_error());
    };
    let Some(segment) = type_path.path.segments.last() else {
        return Err(column_error());
    };
    if segment.ident != "Column" {
        return Err(column_error());
    }
    match &segment.arguments {
        syn::PathArguments::AngleBracketed(args) if args.args.len() == 1 => Ok(()),
        _ => Err(column_error()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn expands_valid_shape() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "users")]
            pub struct Users {
                pub id: Column<i64>,
                #[column("user_name")]
                pub name: Column<String>,
            }
        };
        assert!(expand(&input).is_ok());
    }

    #[test]
    fn rejects_private_shape() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "users")]
            struct Users {
                pub id: Column<i64>,
            }
        };
        let err = expand(&input).unwrap_err().to_string();
        assert_eq!(err, "table shape `Users` must be `pub`");
    }

    #[test]
    fn rejects_missing_table_attribute() {
        let input: DeriveInput = parse_quote! {
            pub struct Users {
                pub id: Column<i64>,
            }
        };
        let err = expand(&input).unwrap_err().to_string();
        assert_eq!(
            err,
            "table shape `Users` is missing the `#[table(name = \"…\")]` attribute"
        );
    }

    #[test]
    fn rejects_table_attribute_without_name() {
        let input: DeriveInput = parse_quote! {
            #[table()]
            pub struct Users {
                pub id: Column<i64>,
            }
        };
        let err = expand(&input).unwrap_err().to_string();
        assert_eq!(err, "`#[table]` on `Users` is missing `name = \"…\"`");
    }

    #[test]
    fn rejects_unknown_table_attribute_key() {
        let input: DeriveInput = parse_quote! {
            #[table(schema = "public")]
            pub struct Users {
                pub id: Column<i64>,
            }
        };
        let err = expand(&input).unwrap_err().to_string();
        assert_eq!(err, "unknown `table` attribute; expected `name = \"…\"`");
    }

    #[test]
    fn rejects_generic_shape() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "users")]
            pub struct Users<T> {
                pub id: Column<T>,
            }
        };
        let err = expand(&input).unwrap_err().to_string();
        assert_eq!(err, "table shape `Users` must not be generic");
    }

    #[test]
    fn rejects_tuple_shape() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "users")]
            pub struct Users(pub Column<i64>);
        };
        let err = expand(&input).unwrap_err().to_string();
        assert_eq!(err, "table shape `Users` must be a struct with named fields");
    }

    #[test]
    fn rejects_enum_shape() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "users")]
            pub enum Users {
                Id,
            }
        };
        let err = expand(&input).unwrap_err().to_string();
        assert_eq!(err, "table shape `Users` must be a struct with named fields");
    }

    #[test]
    fn rejects_non_column_field_naming_the_member() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "users")]
            pub struct Users {
                pub id: Column<i64>,
                pub age: i32,
            }
        };
        let err = expand(&input).unwrap_err().to_string();
        assert_eq!(err, "column `Users.age` must be of type `Column<T>`");
    }

    #[test]
    fn rejects_column_without_type_argument() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "users")]
            pub struct Users {
                pub id: Column,
            }
        };
        let err = expand(&input).unwrap_err().to_string();
        assert_eq!(err, "column `Users.id` must be of type `Column<T>`");
    }

    #[test]
    fn rejects_private_field() {
        let input: DeriveInput = parse_quote! {
            #[table(name = "users")]
            pub struct Users {
                id: Column<i64>,
            }
        };
        let err = expand(&input).unwrap_err().to_string();
        assert_eq!(err, "column `Users.id` must be `pub`");
    }
}
