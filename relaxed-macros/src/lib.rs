//! Procedural macro implementation for the `relaxed` crate.
//!
//! This crate only defines the [`relaxed!`] macro; the types its expansion
//! refers to live in the `relaxed` crate, which re-exports the macro. Depend
//! on `relaxed` rather than on this crate directly.

use proc_macro::TokenStream;

mod expand;

/// Rewrites a relaxed comparison into an explicit tolerance comparison.
///
/// Accepted forms:
///
/// - `relaxed!(a, b)`: approximate equality with the default tolerance.
/// - `relaxed!(a, b, tol)`: `tol` is an absolute tolerance.
/// - `relaxed!(a, b, abs = tol)` / `relaxed!(a, b, rel = tol)`: explicitly
///   absolute or relative tolerance.
/// - `relaxed!(a OP b)` where `OP` is one of `==`, `!=`, `<`, `<=`, `>`,
///   `>=`, optionally followed by a tolerance argument. The ordering
///   operators treat approximately-equal values as equal.
///
/// The expansion is a plain method call on `relaxed::Tolerance`; operand
/// expressions are passed through verbatim, so type errors point at the
/// original operands.
///
/// ```ignore
/// assert!(relaxed!(0.1 + 0.2 == 0.3));
/// // expands to:
/// assert!(::relaxed::Tolerance::default().eq(0.1 + 0.2, 0.3));
/// ```
#[proc_macro]
pub fn relaxed(input: TokenStream) -> TokenStream {
    expand::expand(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
