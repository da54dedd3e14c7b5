//! Expansion of `relaxed!` invocations.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{BinOp, Expr, Token};

/// Comma-separated arguments of a `relaxed!` invocation.
struct Args(Punctuated<Expr, Token![,]>);

impl Parse for Args {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        Punctuated::parse_terminated(input).map(Self)
    }
}

/// Tolerance argument extracted from the invocation.
enum ToleranceArg {
    Default,
    Absolute(Expr),
    Relative(Expr),
}

pub(crate) fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let Args(args) = syn::parse2(input)?;

    let count = args.len();
    let mut args = args.into_iter();
    match (args.next(), args.next(), args.next(), args.next()) {
        // relaxed!(a == b)
        (Some(expr), None, _, _) => match expr {
            Expr::Binary(bin) => {
                let method = comparison_method(&bin.op).ok_or_else(|| {
                    syn::Error::new(
                        bin.op.span(),
                        "expected a comparison operator: `==`, `!=`, `<`, `<=`, `>` or `>=`",
                    )
                })?;
                Ok(build(&bin.left, &bin.right, method, ToleranceArg::Default))
            }
            other => Err(syn::Error::new(
                other.span(),
                "expected a comparison expression such as `a == b`",
            )),
        },

        // relaxed!(a == b, tol) or relaxed!(a, b)
        (Some(first), Some(second), None, _) => {
            if let Expr::Binary(bin) = &first {
                if let Some(method) = comparison_method(&bin.op) {
                    return Ok(build(&bin.left, &bin.right, method, tolerance_arg(second)?));
                }
            }
            Ok(build(&first, &second, quote!(eq), ToleranceArg::Default))
        }

        // relaxed!(a, b, tol)
        (Some(lhs), Some(rhs), Some(tol), None) => {
            Ok(build(&lhs, &rhs, quote!(eq), tolerance_arg(tol)?))
        }

        _ => Err(syn::Error::new(
            Span::call_site(),
            format!("expected 2 or 3 arguments, found {count}"),
        )),
    }
}

/// Classifies the tolerance argument. A bare expression is an absolute
/// tolerance; `abs = expr` and `rel = expr` select the mode explicitly.
fn tolerance_arg(expr: Expr) -> syn::Result<ToleranceArg> {
    if let Expr::Assign(assign) = &expr {
        if let Expr::Path(path) = &*assign.left {
            if let Some(label) = path.path.get_ident() {
                let value = (*assign.right).clone();
                return match label.to_string().as_str() {
                    "abs" => Ok(ToleranceArg::Absolute(value)),
                    "rel" => Ok(ToleranceArg::Relative(value)),
                    _ => Err(syn::Error::new(
                        label.span(),
                        format!("unexpected label `{label}`; expected `abs` or `rel`"),
                    )),
                };
            }
        }
    }
    Ok(ToleranceArg::Absolute(expr))
}

/// Maps a comparison operator to the matching `Tolerance` method.
fn comparison_method(op: &BinOp) -> Option<TokenStream> {
    match op {
        BinOp::Eq(_) => Some(quote!(eq)),
        BinOp::Ne(_) => Some(quote!(ne)),
        BinOp::Lt(_) => Some(quote!(lt)),
        BinOp::Le(_) => Some(quote!(lt_eq)),
        BinOp::Gt(_) => Some(quote!(gt)),
        BinOp::Ge(_) => Some(quote!(gt_eq)),
        _ => None,
    }
}

fn build(lhs: &Expr, rhs: &Expr, method: TokenStream, tol: ToleranceArg) -> TokenStream {
    let tol = match tol {
        ToleranceArg::Default => quote!(::relaxed::Tolerance::default()),
        ToleranceArg::Absolute(e) => quote!(::relaxed::Tolerance::absolute(#e)),
        ToleranceArg::Relative(e) => quote!(::relaxed::Tolerance::relative(#e)),
    };
    quote! { #tol.#method(#lhs, #rhs) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn expands_to(input: TokenStream, expected: TokenStream) {
        let output = expand(input).unwrap();
        assert_eq!(output.to_string(), expected.to_string());
    }

    #[track_caller]
    fn fails_with(input: TokenStream, message: &str) {
        let err = expand(input).unwrap_err();
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn test_two_args_insert_default_tolerance() {
        expands_to(
            quote!(a, b),
            quote!(::relaxed::Tolerance::default().eq(a, b)),
        );
    }

    #[test]
    fn test_positional_tolerance_is_absolute() {
        expands_to(
            quote!(a, b, 0.001),
            quote!(::relaxed::Tolerance::absolute(0.001).eq(a, b)),
        );
    }

    #[test]
    fn test_labeled_tolerances() {
        expands_to(
            quote!(a, b, abs = t),
            quote!(::relaxed::Tolerance::absolute(t).eq(a, b)),
        );
        expands_to(
            quote!(a, b, rel = 1e-9),
            quote!(::relaxed::Tolerance::relative(1e-9).eq(a, b)),
        );
    }

    #[test]
    fn test_comparison_operators() {
        expands_to(
            quote!(a == b),
            quote!(::relaxed::Tolerance::default().eq(a, b)),
        );
        expands_to(
            quote!(a != b),
            quote!(::relaxed::Tolerance::default().ne(a, b)),
        );
        expands_to(
            quote!(a < b),
            quote!(::relaxed::Tolerance::default().lt(a, b)),
        );
        expands_to(
            quote!(a <= b),
            quote!(::relaxed::Tolerance::default().lt_eq(a, b)),
        );
        expands_to(
            quote!(a > b),
            quote!(::relaxed::Tolerance::default().gt(a, b)),
        );
        expands_to(
            quote!(a >= b),
            quote!(::relaxed::Tolerance::default().gt_eq(a, b)),
        );
    }

    #[test]
    fn test_comparison_with_tolerance() {
        expands_to(
            quote!(a < b, rel = t),
            quote!(::relaxed::Tolerance::relative(t).lt(a, b)),
        );
        expands_to(
            quote!(a == b, 0.5),
            quote!(::relaxed::Tolerance::absolute(0.5).eq(a, b)),
        );
    }

    #[test]
    fn test_operands_pass_through_verbatim() {
        expands_to(
            quote!(x + 1.0, f(y) * 2.0),
            quote!(::relaxed::Tolerance::default().eq(x + 1.0, f(y) * 2.0)),
        );
        expands_to(
            quote!(x.norm() == y.norm(), rel = eps),
            quote!(::relaxed::Tolerance::relative(eps).eq(x.norm(), y.norm())),
        );
    }

    #[test]
    fn test_expansion_is_deterministic() {
        let a = expand(quote!(a, b, rel = t)).unwrap();
        let b = expand(quote!(a, b, rel = t)).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_wrong_arity() {
        fails_with(quote!(), "expected 2 or 3 arguments, found 0");
        fails_with(quote!(a, b, c, d), "expected 2 or 3 arguments, found 4");
    }

    #[test]
    fn test_single_argument_must_be_a_comparison() {
        fails_with(quote!(a), "expected a comparison expression such as `a == b`");
        fails_with(
            quote!(a + b),
            "expected a comparison operator: `==`, `!=`, `<`, `<=`, `>` or `>=`",
        );
    }

    #[test]
    fn test_unexpected_label() {
        fails_with(
            quote!(a, b, tolerance = 0.1),
            "unexpected label `tolerance`; expected `abs` or `rel`",
        );
        fails_with(
            quote!(a == b, within = 0.1),
            "unexpected label `within`; expected `abs` or `rel`",
        );
    }
}
