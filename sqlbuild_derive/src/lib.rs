use proc_macro::TokenStream;

mod binary;
mod join;
mod variant;

#[proc_macro_derive(BinaryOperator)]
pub fn operator_methods(input: TokenStream) -> TokenStream {
    binary::operator_methods_impl(input)
}

#[proc_macro_derive(JoinMethods)]
pub fn join_methods(input: TokenStream) -> TokenStream {
    join::join_methods_impl(input)
}

/// Emits the annotated method twice: as written, and as `or_<name>` with every
/// `Conjunction::And` in its body swapped for `Conjunction::Or`.
#[proc_macro_attribute]
pub fn or_variant(attr: TokenStream, item: TokenStream) -> TokenStream {
    variant::or_variant_impl(attr, item)
}
