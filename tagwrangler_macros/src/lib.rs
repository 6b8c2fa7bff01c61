//! `#[derive(Tagged)]` makes `#[tag = "..."]` a legal field attribute.
//!
//! The derive expands to nothing. It only registers the attribute and checks
//! that every `#[tag]` carries a string literal, so a malformed annotation is
//! reported by rustc instead of being found later by `tagwrangler-gen`.
//!
//! ```
//! use tagwrangler_macros::Tagged;
//!
//! #[derive(Tagged)]
//! pub struct User {
//!     #[tag = r#"bind:"header,required""#]
//!     pub name: String,
//!     #[tag = r#"validate:"min=18,max=120""#]
//!     pub age: u32,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Expr, Lit, LitStr, Meta};

#[proc_macro_derive(Tagged, attributes(tag))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match check_tags(&input) {
        Ok(()) => TokenStream::new(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn check_tags(input: &DeriveInput) -> syn::Result<()> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Tagged can only be derived for structs",
        ));
    };
    data.fields
        .iter()
        .flat_map(|field| field.attrs.iter())
        .filter(|attr| attr.path().is_ident("tag"))
        .try_for_each(check_tag)
}

fn check_tag(attr: &Attribute) -> syn::Result<()> {
    match &attr.meta {
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(expr) if matches!(expr.lit, Lit::Str(_)) => Ok(()),
            other => Err(syn::Error::new_spanned(
                other,
                "expected string literal in #[tag = \"...\"]",
            )),
        },
        Meta::List(list) => list.parse_args::<LitStr>().map(|_| ()),
        Meta::Path(path) => Err(syn::Error::new_spanned(path, "expected #[tag = \"...\"]")),
    }
}
