use darling::{FromDeriveInput, FromVariant, ast};
use heck::ToSnakeCase;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(supports(enum_unit))]
struct BinaryDeriveInput {
    ident: syn::Ident,
    data: ast::Data<BinaryVariant, ()>,
}

#[derive(Debug, FromVariant)]
struct BinaryVariant {
    ident: syn::Ident,
}

pub fn operator_methods_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_info = match BinaryDeriveInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    let enum_name = &enum_info.ident;
    let variants = enum_info.data.take_enum().unwrap_or_default();

    let methods = variants.iter().map(|var| {
        let var_name = &var.ident;
        let snake = var_name.to_string().to_snake_case();
        let where_fn = format_ident!("where_{}", snake);
        let or_where_fn = format_ident!("or_where_{}", snake);
        let where_doc = format!(" Appends a `{}` comparison of `column` with `value`, joined with `AND`.", var_name);
        let or_where_doc = format!(" Appends a `{}` comparison of `column` with `value`, joined with `OR`.", var_name);

        quote! {
            #[doc = #where_doc]
            pub fn #where_fn<C, V>(&mut self, column: C, value: V) -> &mut Self
            where
                C: AsRef<str>,
                V: crate::IntoValue,
            {
                self.where_binary(
                    crate::Conjunction::And,
                    column.as_ref(),
                    #enum_name::#var_name,
                    value,
                )
            }

            #[doc = #or_where_doc]
            pub fn #or_where_fn<C, V>(&mut self, column: C, value: V) -> &mut Self
            where
                C: AsRef<str>,
                V: crate::IntoValue,
            {
                self.where_binary(
                    crate::Conjunction::Or,
                    column.as_ref(),
                    #enum_name::#var_name,
                    value,
                )
            }
        }
    });

    quote! {
        impl crate::Builder {
            #(#methods)*
        }
    }
    .into()
}
