use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveParser;

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            program_name,
            about,
            parameters,
        } = value;
        let program_name = program_name.tokens;
        let target = syn::Ident::new("target", proc_macro2::Span::call_site());

        let clp = if parameters.is_empty() && about.is_none() {
            quote! {
                let clp = CommandParser::new(#program_name);
            }
        } else {
            let about_clause = about.map_or_else(
                || quote! {},
                |about| {
                    let tokens = about.tokens;
                    quote! { clp = clp.about(#tokens); }
                },
            );
            let fields = parameters
                .into_iter()
                .map(|parameter| parameter.generate(&target))
                .collect::<Vec<_>>();

            quote! {
                let mut clp = CommandParser::new(#program_name);
                #about_clause
                #( #fields )*
            }
        };

        quote! {
            impl #struct_name {
                fn parse() -> #struct_name {
                    let mut target = #struct_name::default();
                    #clp
                    let parser = clp.build().expect("invalid CommandParser configuration");
                    match parser.parse() {
                        outcome @ ParseOutcome::Help(_) => {
                            let _ = outcome.deliver(&DefaultFormat::terminal(), &ConsoleInterface::default());
                            ::std::process::exit(0);
                        }
                        outcome => {
                            if let Err(code) = outcome.deliver(&DefaultFormat::terminal(), &ConsoleInterface::default()) {
                                ::std::process::exit(code);
                            }
                        }
                    }
                    target
                }
            }
        }
    }
}
