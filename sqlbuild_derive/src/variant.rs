use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{
    ExprPath, ImplItemFn, parse_macro_input,
    visit_mut::{self, VisitMut},
};

struct SwapConjunction;

impl VisitMut for SwapConjunction {
    fn visit_expr_path_mut(&mut self, node: &mut ExprPath) {
        let segments = &mut node.path.segments;
        let len = segments.len();
        if len >= 2 && segments[len - 2].ident == "Conjunction" && segments[len - 1].ident == "And"
        {
            segments[len - 1].ident = format_ident!("Or");
        }
        visit_mut::visit_expr_path_mut(self, node);
    }
}

pub fn or_variant_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(Span::call_site(), "or_variant takes no arguments")
            .to_compile_error()
            .into();
    }

    let method = parse_macro_input!(item as ImplItemFn);
    let name = &method.sig.ident;

    let mut or_method = method.clone();
    or_method.sig.ident = format_ident!("or_{}", name);
    or_method.attrs.retain(|attr| !attr.path().is_ident("doc"));
    SwapConjunction.visit_block_mut(&mut or_method.block);
    let doc = format!(" Same as [`Self::{}`], but joined with `OR`.", name);

    quote! {
        #method

        #[doc = #doc]
        #or_method
    }
    .into()
}
