use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Lit, parse_macro_input, spanned::Spanned};

/// Variant attribute: #[weight(<integer expr>)]
#[proc_macro_derive(WeightedEnum, attributes(weight))]
pub fn derive_weighted_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(
            input.ident.span(),
            "WeightedEnum can only be derived for enums",
        )
        .to_compile_error()
        .into();
    };

    let mut variants = Vec::new();
    let mut weights = Vec::new();

    for variant in &data_enum.variants {
        // Outcomes are plain tags; payloads have no weight of their own.
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(variant.span(), "WeightedEnum only supports fieldless variants")
                .to_compile_error()
                .into();
        }

        let mut weight_expr: Option<Expr> = None;
        for Attribute { meta, .. } in &variant.attrs {
            if !meta.path().is_ident("weight") {
                continue;
            }
            let syn::Meta::List(list) = meta else {
                return syn::Error::new(meta.span(), "use #[weight(<integer expr>)]")
                    .to_compile_error()
                    .into();
            };
            if weight_expr.is_some() {
                return syn::Error::new(meta.span(), "duplicate #[weight(...)] on variant")
                    .to_compile_error()
                    .into();
            }
            let expr = syn::parse2::<Expr>(list.tokens.clone())
                .map_err(|e| syn::Error::new(list.span(), format!("invalid weight expr: {e}")))
                .and_then(|e| reject_float_literals(&e).map(|()| e));
            match expr {
                Ok(e) => weight_expr = Some(e),
                Err(err) => return err.to_compile_error().into(),
            }
        }
        let Some(expr) = weight_expr else {
            return syn::Error::new(variant.span(), "missing #[weight(...)] on variant")
                .to_compile_error()
                .into();
        };

        let ident = &variant.ident;
        variants.push(quote! { Self::#ident });
        weights.push(expr);
    }

    let count = variants.len();

    let expanded = quote! {
        impl ::game_dice::WeightedEnum for #enum_ident {
            const ENTRIES: &'static [(Self, i32)] = &[
                #((#variants, (#weights)),)*
            ];
        }

        impl #enum_ident {
            /// Variants in declaration order; index `i` is outcome `i`.
            pub const VARIANTS: &'static [Self] = &[#(#variants),*];

            /// Weight of each variant, aligned with `VARIANTS`.
            pub const WEIGHTS: [i32; #count] = [#((#weights)),*];

            /// Stack-resident table over the variants, evaluable in `const` context.
            pub const fn fixed_table() -> ::core::result::Result<
                ::game_dice::StaticOutcomeTable<::game_dice::StaticProbabilityTable<#count>, Self>,
                ::game_dice::TableError,
            > {
                match ::game_dice::StaticProbabilityTable::<#count>::make(Self::WEIGHTS) {
                    ::core::result::Result::Ok(table) => ::core::result::Result::Ok(
                        ::game_dice::StaticOutcomeTable::new(table, Self::VARIANTS),
                    ),
                    ::core::result::Result::Err(err) => ::core::result::Result::Err(err),
                }
            }
        }
    };

    expanded.into()
}

/// Weights are exact integers; a float literal anywhere in the expression
/// is almost certainly a leftover from a probability-style annotation.
fn reject_float_literals(e: &Expr) -> syn::Result<()> {
    match e {
        Expr::Lit(el) => match &el.lit {
            Lit::Float(f) => Err(syn::Error::new(
                f.span(),
                "weights are integers; use e.g. #[weight(3)] instead of a float",
            )),
            _ => Ok(()),
        },
        Expr::Binary(b) => {
            reject_float_literals(&b.left)?;
            reject_float_literals(&b.right)
        }
        Expr::Paren(p) => reject_float_literals(&p.expr),
        Expr::Unary(u) => reject_float_literals(&u.expr),
        Expr::Group(g) => reject_float_literals(&g.expr),
        _ => Ok(()),
    }
}
