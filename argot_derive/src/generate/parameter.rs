use crate::model::{DeriveParameter, DeriveValue, ParameterType};
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

impl DeriveParameter {
    pub(crate) fn generate(self, parent: &syn::Ident) -> TokenStream2 {
        let DeriveParameter {
            field_name,
            parameter_type,
            help,
        } = self;
        let field_name_str = format!("{field_name}");

        match parameter_type {
            ParameterType::ScalarPositional => {
                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        clp = clp.add(Specification::positional(Scalar::new(&mut #parent.#field_name), #field_name_str)
                            .help(#help));
                    }
                } else {
                    quote! {
                        clp = clp.add(Specification::positional(Scalar::new(&mut #parent.#field_name), #field_name_str));
                    }
                }
            }
            ParameterType::SequencePositional { cardinality } => {
                let cardinality = cardinality.tokens;
                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        clp = clp.add(Specification::positional(Sequence::new(&mut #parent.#field_name, #cardinality), #field_name_str)
                            .help(#help));
                    }
                } else {
                    quote! {
                        clp = clp.add(Specification::positional(Sequence::new(&mut #parent.#field_name, #cardinality), #field_name_str));
                    }
                }
            }
            ParameterType::Remaining { cardinality } => {
                let cardinality = cardinality.tokens;
                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        clp = clp.add(Specification::remaining(Sequence::new(&mut #parent.#field_name, #cardinality), #field_name_str)
                            .help(#help));
                    }
                } else {
                    quote! {
                        clp = clp.add(Specification::remaining(Sequence::new(&mut #parent.#field_name, #cardinality), #field_name_str));
                    }
                }
            }

            ParameterType::ScalarOption { short } => {
                let names = names(short, &field_name_str);
                let field_default = format_ident!("{field_name}_default");

                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        let #field_default = #parent.#field_name.to_string();
                        clp = clp.add(Specification::option(Scalar::new(&mut #parent.#field_name), #names)
                            .help(format!("{} (default {})", #help, #field_default)));
                    }
                } else {
                    quote! {
                        let #field_default = #parent.#field_name.to_string();
                        clp = clp.add(Specification::option(Scalar::new(&mut #parent.#field_name), #names)
                            .help(format!("(default {})", #field_default)));
                    }
                }
            }
            ParameterType::OptionalOption { short } => {
                let names = names(short, &field_name_str);
                let field_default = format_ident!("{field_name}_default");

                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        if let Some(inner) = #parent.#field_name.as_ref() {
                            let #field_default = format!("{inner}");
                            clp = clp.add(Specification::option(Optional::new(&mut #parent.#field_name), #names)
                                .help(format!("{} (default {})", #help, #field_default)));
                        } else {
                            clp = clp.add(Specification::option(Optional::new(&mut #parent.#field_name), #names)
                                .help(#help));
                        }
                    }
                } else {
                    quote! {
                        if let Some(inner) = #parent.#field_name.as_ref() {
                            let #field_default = format!("{inner}");
                            clp = clp.add(Specification::option(Optional::new(&mut #parent.#field_name), #names)
                                .help(format!("(default {})", #field_default)));
                        } else {
                            clp = clp.add(Specification::option(Optional::new(&mut #parent.#field_name), #names));
                        }
                    }
                }
            }
            ParameterType::SequenceOption { cardinality, short } => {
                let cardinality = cardinality.tokens;
                let names = names(short, &field_name_str);
                let field_default = format_ident!("{field_name}_default");

                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        let #field_default = format!("{:?}", #parent.#field_name);
                        clp = clp.add(Specification::option(Sequence::new(&mut #parent.#field_name, #cardinality), #names)
                            .help(format!("{} (default {})", #help, #field_default)));
                    }
                } else {
                    quote! {
                        let #field_default = format!("{:?}", #parent.#field_name);
                        clp = clp.add(Specification::option(Sequence::new(&mut #parent.#field_name, #cardinality), #names)
                            .help(format!("(default {})", #field_default)));
                    }
                }
            }
            ParameterType::Switch { short } => {
                let names = names(short, &field_name_str);
                let field_name_target = format_ident!("{field_name}_target");

                if let Some(help) = help {
                    let help = help.tokens;
                    quote! {
                        let #field_name_target = #parent.#field_name.clone();
                        clp = clp.add(Specification::option(Switch::new(&mut #parent.#field_name, !#field_name_target), #names)
                            .help(#help));
                    }
                } else {
                    quote! {
                        let #field_name_target = #parent.#field_name.clone();
                        clp = clp.add(Specification::option(Switch::new(&mut #parent.#field_name, !#field_name_target), #names));
                    }
                }
            }
        }
    }
}

fn names(short: Option<DeriveValue>, field_name_str: &str) -> TokenStream2 {
    match short {
        Some(short) => {
            let tokens = short.tokens;
            quote! { Names::both(#tokens, #field_name_str) }
        }
        None => quote! { Names::long(#field_name_str) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Literal;
    use proc_macro2::Span;
    use quote::ToTokens;

    #[test]
    fn render_scalar_positional() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("my_field"),
            parameter_type: ParameterType::ScalarPositional,
            help: None,
        };

        // Execute
        let token_stream = parameter.generate(&ident("target"));

        // Verify
        assert_eq!(
            token_stream.to_string(),
            "clp = clp . add (Specification :: positional (Scalar :: new (& mut target . my_field) , \"my_field\")) ;"
        );
    }

    #[test]
    fn render_scalar_positional_help() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("my_field"),
            parameter_type: ParameterType::ScalarPositional,
            help: Some(DeriveValue {
                tokens: Literal::string("abc 123").to_token_stream(),
            }),
        };

        // Execute
        let token_stream = parameter.generate(&ident("target"));

        // Verify
        assert_eq!(
            token_stream.to_string(),
            "clp = clp . add (Specification :: positional (Scalar :: new (& mut target . my_field) , \"my_field\") . help (\"abc 123\")) ;"
        );
    }

    #[test]
    fn render_sequence_positional() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("my_field"),
            parameter_type: ParameterType::SequencePositional {
                cardinality: DeriveValue {
                    tokens: quote! { Cardinality::AtLeast(1) },
                },
            },
            help: None,
        };

        // Execute
        let token_stream = parameter.generate(&ident("target"));

        // Verify
        assert_eq!(
            token_stream.to_string(),
            "clp = clp . add (Specification :: positional (Sequence :: new (& mut target . my_field , Cardinality :: AtLeast (1)) , \"my_field\")) ;"
        );
    }

    #[test]
    fn render_remaining() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("my_field"),
            parameter_type: ParameterType::Remaining {
                cardinality: DeriveValue {
                    tokens: quote! { Cardinality::AtLeast(0) },
                },
            },
            help: None,
        };

        // Execute
        let token_stream = parameter.generate(&ident("target"));

        // Verify
        assert_eq!(
            token_stream.to_string(),
            "clp = clp . add (Specification :: remaining (Sequence :: new (& mut target . my_field , Cardinality :: AtLeast (0)) , \"my_field\")) ;"
        );
    }

    #[test]
    fn render_scalar_option() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("my_field"),
            parameter_type: ParameterType::ScalarOption { short: None },
            help: None,
        };

        // Execute
        let token_stream = parameter.generate(&ident("target"));

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"let my_field_default = target . my_field . to_string () ;
 clp = clp . add (Specification :: option (Scalar :: new (& mut target . my_field) , Names :: long ("my_field")) . help (format ! ("(default {
}
)" , my_field_default))) ;
"#
        );
    }

    #[test]
    fn render_scalar_option_short_help() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("my_field"),
            parameter_type: ParameterType::ScalarOption {
                short: Some(DeriveValue {
                    tokens: Literal::character('m').into_token_stream(),
                }),
            },
            help: Some(DeriveValue {
                tokens: Literal::string("abc 123").to_token_stream(),
            }),
        };

        // Execute
        let token_stream = parameter.generate(&ident("target"));

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"let my_field_default = target . my_field . to_string () ;
 clp = clp . add (Specification :: option (Scalar :: new (& mut target . my_field) , Names :: both ('m' , "my_field")) . help (format ! ("{
}
 (default {
}
)" , "abc 123" , my_field_default))) ;
"#
        );
    }

    #[test]
    fn render_optional_option() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("my_field"),
            parameter_type: ParameterType::OptionalOption { short: None },
            help: None,
        };

        // Execute
        let token_stream = parameter.generate(&ident("target"));

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"if let Some (inner) = target . my_field . as_ref () {
 let my_field_default = format ! ("{
inner}
") ;
 clp = clp . add (Specification :: option (Optional :: new (& mut target . my_field) , Names :: long ("my_field")) . help (format ! ("(default {
}
)" , my_field_default))) ;
 }
 else {
 clp = clp . add (Specification :: option (Optional :: new (& mut target . my_field) , Names :: long ("my_field"))) ;
 }
"#
        );
    }

    #[test]
    fn render_sequence_option() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("my_field"),
            parameter_type: ParameterType::SequenceOption {
                cardinality: DeriveValue {
                    tokens: quote! { Cardinality::AtLeast(1) },
                },
                short: None,
            },
            help: None,
        };

        // Execute
        let token_stream = parameter.generate(&ident("target"));

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"let my_field_default = format ! ("{
:?}
" , target . my_field) ;
 clp = clp . add (Specification :: option (Sequence :: new (& mut target . my_field , Cardinality :: AtLeast (1)) , Names :: long ("my_field")) . help (format ! ("(default {
}
)" , my_field_default))) ;
"#
        );
    }

    #[test]
    fn render_switch() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("my_field"),
            parameter_type: ParameterType::Switch { short: None },
            help: None,
        };

        // Execute
        let token_stream = parameter.generate(&ident("target"));

        // Verify
        assert_eq!(
            token_stream.to_string(),
            "let my_field_target = target . my_field . clone () ; clp = clp . add (Specification :: option (Switch :: new (& mut target . my_field , ! my_field_target) , Names :: long (\"my_field\"))) ;"
        );
    }

    #[test]
    fn render_switch_short() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("my_field"),
            parameter_type: ParameterType::Switch {
                short: Some(DeriveValue {
                    tokens: Literal::character('m').into_token_stream(),
                }),
            },
            help: None,
        };

        // Execute
        let token_stream = parameter.generate(&ident("target"));

        // Verify
        assert_eq!(
            token_stream.to_string(),
            "let my_field_target = target . my_field . clone () ; clp = clp . add (Specification :: option (Switch :: new (& mut target . my_field , ! my_field_target) , Names :: both ('m' , \"my_field\"))) ;"
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn simple_format(rust_str: String) -> String {
        rust_str
            .replace("{", "{\n")
            .replace("}", "}\n")
            .replace(";", ";\n")
    }
}
