use darling::{FromDeriveInput, FromVariant, ast};
use heck::ToSnakeCase;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(supports(enum_unit))]
struct JoinInput {
    ident: syn::Ident,
    data: ast::Data<JoinVariant, ()>,
}

#[derive(Debug, FromVariant)]
struct JoinVariant {
    ident: syn::Ident,
}

pub fn join_methods_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let join = match JoinInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    let enum_name = &join.ident;
    let methods = join
        .data
        .map_enum_variants(|v| {
            let var = &v.ident;
            let snake = var.to_string().to_snake_case();
            let join_fn = format_ident!("{}_join", snake);
            let doc = format!(
                " Appends `{} JOIN <table> ON <condition>` to the table clause.",
                snake.to_uppercase()
            );

            quote! {
                #[doc = #doc]
                pub fn #join_fn<T, C>(&mut self, table: T, condition: C) -> &mut Self
                where
                    T: AsRef<str>,
                    C: AsRef<str>,
                {
                    self.join(table, condition, #enum_name::#var)
                }
            }
        })
        .take_enum()
        .unwrap_or_default();

    quote! {
        impl crate::Builder {
            #(#methods)*
        }
    }
    .into()
}
