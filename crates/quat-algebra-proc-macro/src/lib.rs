extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{Ident, Token, parse_macro_input, punctuated::Punctuated};

/// Generates `impl Promote<Rhs> for Lhs` for every ordered pair of the listed
/// primitive types. `Promote` must be in scope at the call site.
///
/// ```ignore
/// promotion_table!(i8, i16, i32, u8, u16, u32, f32, f64);
/// ```
///
/// The common type follows the C usual arithmetic conversions without the
/// integral promotion to `int`:
///
/// - a float beats any integer, and `f64` beats `f32`;
/// - two integers of the same signedness give the wider one;
/// - mixed signedness gives the unsigned type when it is at least as wide as
///   the signed one, and the signed type otherwise.
///
/// Types without a fixed width (`isize`, `usize`) only get the identity impl.
#[proc_macro]
pub fn promotion_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as PromotionTableInput);

    let types = match input
        .types
        .iter()
        .map(NumType::classify)
        .collect::<syn::Result<Vec<_>>>()
    {
        Ok(types) => types,
        Err(err) => return err.to_compile_error().into(),
    };

    let impls = types.iter().flat_map(|lhs| {
        types.iter().filter_map(move |rhs| {
            let output = common_type(lhs, rhs)?;
            let (l, r, o) = (&lhs.ident, &rhs.ident, &output.ident);
            Some(quote! {
                impl Promote<#r> for #l {
                    type Output = #o;

                    #[inline]
                    fn promote(self) -> #o {
                        self as #o
                    }

                    #[inline]
                    fn promote_rhs(rhs: #r) -> #o {
                        rhs as #o
                    }
                }
            })
        })
    });

    let expanded = quote! {
        #(#impls)*
    };

    TokenStream::from(expanded)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Signed,
    Unsigned,
    Float,
}

#[derive(Debug, Clone)]
struct NumType {
    ident: Ident,
    kind: Kind,
    // `None` for pointer-sized integers
    bits: Option<u32>,
}

impl NumType {
    fn classify(ident: &Ident) -> syn::Result<Self> {
        let name = ident.to_string();
        let (kind, width) = match name.split_at_checked(1) {
            Some(("i", width)) => (Kind::Signed, width),
            Some(("u", width)) => (Kind::Unsigned, width),
            Some(("f", width)) => (Kind::Float, width),
            _ => {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("`{}` is not a primitive numeric type", name),
                ));
            }
        };
        let bits = match (kind, width) {
            (Kind::Signed | Kind::Unsigned, "size") => None,
            (_, width) => Some(width.parse::<u32>().map_err(|_| {
                syn::Error::new(
                    ident.span(),
                    format!("`{}` is not a primitive numeric type", name),
                )
            })?),
        };
        Ok(NumType {
            ident: ident.clone(),
            kind,
            bits,
        })
    }
}

fn common_type<'a>(lhs: &'a NumType, rhs: &'a NumType) -> Option<&'a NumType> {
    use Kind::*;
    if lhs.ident == rhs.ident {
        return Some(lhs);
    }
    let (lhs_bits, rhs_bits) = (lhs.bits?, rhs.bits?);
    let wider = if lhs_bits >= rhs_bits { lhs } else { rhs };
    match (lhs.kind, rhs.kind) {
        (Float, Float) => Some(wider),
        (Float, _) => Some(lhs),
        (_, Float) => Some(rhs),
        (l, r) if l == r => Some(wider),
        (Signed, Unsigned) => Some(if rhs_bits >= lhs_bits { rhs } else { lhs }),
        (Unsigned, Signed) => Some(if lhs_bits >= rhs_bits { lhs } else { rhs }),
        _ => None,
    }
}

struct PromotionTableInput {
    types: Punctuated<Ident, Token![,]>,
}

impl syn::parse::Parse for PromotionTableInput {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let types = Punctuated::parse_terminated(input)?;
        Ok(PromotionTableInput { types })
    }
}
