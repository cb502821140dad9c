//! Derive macro module for `argot`.
//! See [documentation root](https://docs.rs/argot/latest/argot/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

use crate::model::DeriveParser;

/// Generate a `fn parse() -> Self` on the annotated struct which builds the
/// specification table from the struct's fields and runs it against the
/// process arguments.
///
/// Field shapes map to specifications by type: `bool` becomes a switch,
/// `Option<T>` an optional-valued option, `Vec<T>`/`HashSet<T>` a sequence,
/// and anything else a scalar positional.  `#[argot(..)]` field attributes
/// adjust the mapping: `option`, `positional`, `remaining`, `short = 'c'`,
/// `cardinality = ..`, `help = ".."`.  Struct-level `#[argot(program = "..",
/// about = "..")]` configures the parser itself.
#[proc_macro_derive(ArgotOptions, attributes(argot))]
pub fn argot_options(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(ast) {
        Ok(derive_parser) => TokenStream2::from(derive_parser).into(),
        Err(error) => error.to_compile_error().into(),
    }
}

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
